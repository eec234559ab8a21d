//! User search engine: HTTP search client, debouncer and effect execution.
mod debounce;
mod engine;
mod search;
mod types;

pub use debounce::{Debouncer, DEFAULT_QUIET_PERIOD};
pub use engine::{EngineHandle, EngineSettings};
pub use search::{
    GithubUserSearch, SearchSettings, UserSearch, DEFAULT_PER_PAGE, GITHUB_API_BASE_URL,
    GITHUB_V3_ACCEPT,
};
pub use types::{EngineError, EngineEvent, RequestId, SearchError, User, RATE_LIMIT_MESSAGE};
