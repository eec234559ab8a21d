//! User search core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, Profile, RequestId, ResponsePolicy, SearchStatus};
pub use update::update;
pub use view_model::{
    no_results_message, AppViewModel, ContentView, ProfileCardView, FOOTER_TEXT, LOADING_TEXT,
    NO_RESULTS_HINT, PROMPT_TEXT, SUBTITLE, TITLE, UNKNOWN_ERROR_MESSAGE, VIEW_PROFILE_BADGE,
};
