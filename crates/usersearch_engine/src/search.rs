use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::StatusCode;
use usersearch_logging::{search_debug, search_error, search_info, search_warn};

use crate::types::{ApiErrorBody, SearchResponse};
use crate::{SearchError, User};

pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";
pub const GITHUB_V3_ACCEPT: &str = "application/vnd.github.v3+json";
pub const DEFAULT_PER_PAGE: u32 = 20;

#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub api_base_url: String,
    pub per_page: u32,
    /// GitHub rejects requests that carry no user agent.
    pub user_agent: String,
    /// `None` leaves the HTTP client's default in place.
    pub request_timeout: Option<Duration>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            api_base_url: GITHUB_API_BASE_URL.to_string(),
            per_page: DEFAULT_PER_PAGE,
            user_agent: concat!("usersearch/", env!("CARGO_PKG_VERSION")).to_string(),
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait UserSearch: Send + Sync {
    /// Runs one search. Blank queries return an empty list without any request.
    async fn search_users(&self, query: &str) -> Result<Vec<User>, SearchError>;
}

/// [`UserSearch`] against the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GithubUserSearch {
    settings: SearchSettings,
    client: reqwest::Client,
}

impl GithubUserSearch {
    pub fn new(settings: SearchSettings) -> Result<Self, SearchError> {
        let client = build_client(&settings)?;
        Ok(Self { settings, client })
    }

    fn search_url(&self, query: &str) -> Result<reqwest::Url, SearchError> {
        let base = self.settings.api_base_url.trim_end_matches('/');
        let mut url = reqwest::Url::parse(&format!("{base}/search/users"))
            .map_err(|err| SearchError::InvalidEndpoint(err.to_string()))?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("per_page", &self.settings.per_page.to_string());
        Ok(url)
    }
}

fn build_client(settings: &SearchSettings) -> Result<reqwest::Client, SearchError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_V3_ACCEPT));
    let agent = HeaderValue::from_str(&settings.user_agent)
        .map_err(|err| SearchError::InvalidEndpoint(format!("user agent: {err}")))?;
    headers.insert(USER_AGENT, agent);

    let mut builder = reqwest::Client::builder().default_headers(headers);
    if let Some(timeout) = settings.request_timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|err| SearchError::Network(err.to_string()))
}

#[async_trait::async_trait]
impl UserSearch for GithubUserSearch {
    async fn search_users(&self, query: &str) -> Result<Vec<User>, SearchError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let url = self.search_url(query)?;
        search_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let err = failure_from_response(response).await;
            search_warn!("Search for {:?} failed with status {}: {}", query, status, err);
            return Err(err);
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let parsed: SearchResponse = serde_json::from_slice(&body).map_err(|err| {
            search_error!("Search for {:?} returned an unreadable body: {}", query, err);
            SearchError::InvalidResponse(err.to_string())
        })?;
        search_info!("Search for {:?} returned {} users", query, parsed.items.len());
        Ok(parsed.items)
    }
}

async fn failure_from_response(response: reqwest::Response) -> SearchError {
    let status = response.status();
    if status == StatusCode::FORBIDDEN {
        return SearchError::RateLimited;
    }

    let api_message = response
        .bytes()
        .await
        .ok()
        .and_then(|body| serde_json::from_slice::<ApiErrorBody>(&body).ok())
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty());

    match api_message {
        Some(message) => SearchError::Api {
            status: status.as_u16(),
            message,
        },
        None => SearchError::http(status.as_u16(), status.canonical_reason()),
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SearchError {
    search_error!("Search request failed: {}", err);
    if err.is_timeout() {
        return SearchError::Network(format!("request timed out: {err}"));
    }
    SearchError::Network(err.to_string())
}
