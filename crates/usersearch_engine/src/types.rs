use serde::Deserialize;
use thiserror::Error;

pub type RequestId = u64;

/// Message shown for HTTP 403 responses.
pub const RATE_LIMIT_MESSAGE: &str = "API rate limit exceeded. Please wait a moment and try again.";

/// One item of the `items` array in a search response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchResponse {
    pub items: Vec<User>,
}

/// Error body returned by the API for non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Search failures. `Display` is the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("{}", RATE_LIMIT_MESSAGE)]
    RateLimited,
    /// Non-2xx response whose body carried a `message`.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// Non-2xx response without a usable error body.
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("{0}")]
    Network(String),
    #[error("{0}")]
    InvalidResponse(String),
    #[error("invalid search endpoint: {0}")]
    InvalidEndpoint(String),
}

impl SearchError {
    pub(crate) fn http(status: u16, reason: Option<&str>) -> Self {
        let message = match reason {
            Some(reason) if !reason.is_empty() => format!("Error: {status} {reason}"),
            _ => format!("Error: {status}"),
        };
        SearchError::Http { status, message }
    }

    /// HTTP status of the response that caused the failure, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            SearchError::RateLimited => Some(403),
            SearchError::Api { status, .. } | SearchError::Http { status, .. } => Some(*status),
            SearchError::Network(_)
            | SearchError::InvalidResponse(_)
            | SearchError::InvalidEndpoint(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The debouncer emitted a value after the quiet period.
    QuerySettled(String),
    SearchCompleted {
        request_id: RequestId,
        result: Result<Vec<User>, SearchError>,
    },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error(transparent)]
    Search(#[from] SearchError),
}
