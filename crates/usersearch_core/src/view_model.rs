use crate::Profile;

pub const TITLE: &str = "GitHub User Search";
pub const SUBTITLE: &str = "Find developers and contributors from all over the world.";
pub const PROMPT_TEXT: &str = "Start by typing a username in the search bar above.";
pub const LOADING_TEXT: &str = "Searching...";
pub const NO_RESULTS_HINT: &str = "Try a different search term.";
pub const VIEW_PROFILE_BADGE: &str = "View Profile";
pub const FOOTER_TEXT: &str = "Powered by the GitHub API";
/// Shown when a failure carries no message of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

pub fn no_results_message(query: &str) -> String {
    format!("No users found for \"{query}\".")
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub query: String,
    pub content: ContentView,
    pub selected: Option<usize>,
}

/// The single panel shown below the search box.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContentView {
    #[default]
    Prompt,
    Loading,
    Error { message: String },
    NoResults { message: String },
    Results { cards: Vec<ProfileCardView> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCardView {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
    pub profile_url: String,
}

impl From<&Profile> for ProfileCardView {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id,
            login: profile.login.clone(),
            avatar_url: profile.avatar_url.clone(),
            profile_url: profile.html_url.clone(),
        }
    }
}
