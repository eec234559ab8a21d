use crate::view_model::{no_results_message, AppViewModel, ContentView, ProfileCardView};

pub type RequestId = u64;

/// A user profile as returned by a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
}

/// How completions of overlapping searches are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponsePolicy {
    /// Every completion is applied; the last one to arrive determines the state.
    #[default]
    LastSettledWins,
    /// Only the completion of the most recently issued search is applied.
    LatestIssuedOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchStatus {
    /// No search has been run for the current settled query.
    #[default]
    Idle,
    Loading,
    Failed(String),
    Loaded(Vec<Profile>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    query: String,
    settled_query: String,
    status: SearchStatus,
    policy: ResponsePolicy,
    next_request_id: RequestId,
    latest_request: Option<RequestId>,
    selected: Option<usize>,
    quitting: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ResponsePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn settled_query(&self) -> &str {
        &self.settled_query
    }

    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    pub fn policy(&self) -> ResponsePolicy {
        self.policy
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    /// Returns whether anything visible changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let content = match &self.status {
            SearchStatus::Loading => ContentView::Loading,
            SearchStatus::Failed(message) => ContentView::Error {
                message: message.clone(),
            },
            SearchStatus::Idle => ContentView::Prompt,
            SearchStatus::Loaded(profiles) if profiles.is_empty() => ContentView::NoResults {
                message: no_results_message(&self.settled_query),
            },
            SearchStatus::Loaded(profiles) => ContentView::Results {
                cards: profiles.iter().map(ProfileCardView::from).collect(),
            },
        };

        AppViewModel {
            query: self.query.clone(),
            content,
            selected: self.selected,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_query(&mut self, query: String) {
        self.query = query;
        self.mark_dirty();
    }

    /// Records a newly settled query. Returns false when it equals the previous one.
    pub(crate) fn settle(&mut self, query: &str) -> bool {
        if self.settled_query == query {
            return false;
        }
        self.settled_query = query.to_owned();
        true
    }

    pub(crate) fn go_idle(&mut self) {
        self.status = SearchStatus::Idle;
        self.latest_request = None;
        self.selected = None;
        self.mark_dirty();
    }

    pub(crate) fn begin_search(&mut self) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.latest_request = Some(request_id);
        self.status = SearchStatus::Loading;
        self.selected = None;
        self.mark_dirty();
        request_id
    }

    pub(crate) fn accepts_response(&self, request_id: RequestId) -> bool {
        match self.policy {
            ResponsePolicy::LastSettledWins => request_id <= self.next_request_id,
            ResponsePolicy::LatestIssuedOnly => self.latest_request == Some(request_id),
        }
    }

    pub(crate) fn apply_results(&mut self, profiles: Vec<Profile>) {
        self.status = SearchStatus::Loaded(profiles);
        self.selected = None;
        self.mark_dirty();
    }

    pub(crate) fn apply_failure(&mut self, message: String) {
        self.status = SearchStatus::Failed(message);
        self.selected = None;
        self.mark_dirty();
    }

    fn loaded_len(&self) -> usize {
        match &self.status {
            SearchStatus::Loaded(profiles) => profiles.len(),
            _ => 0,
        }
    }

    pub(crate) fn select_next(&mut self) {
        let len = self.loaded_len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(index) => (index + 1) % len,
            None => 0,
        });
        self.mark_dirty();
    }

    pub(crate) fn select_previous(&mut self) {
        let len = self.loaded_len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => len - 1,
            Some(index) => index - 1,
        });
        self.mark_dirty();
    }

    pub(crate) fn selected_profile(&self) -> Option<&Profile> {
        match (&self.status, self.selected) {
            (SearchStatus::Loaded(profiles), Some(index)) => profiles.get(index),
            _ => None,
        }
    }

    pub(crate) fn request_quit(&mut self) {
        self.quitting = true;
        self.mark_dirty();
    }
}
