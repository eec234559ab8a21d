use crate::{AppState, Effect, Msg, UNKNOWN_ERROR_MESSAGE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    if state.is_quitting() {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::QueryChanged(text) => {
            if text == state.query() {
                return (state, Vec::new());
            }
            state.set_query(text.clone());
            vec![Effect::RestartDebounce { query: text }]
        }
        Msg::QuerySettled(query) => {
            // A settled value only starts a cycle when it differs from the previous one.
            if !state.settle(&query) {
                return (state, Vec::new());
            }
            if query.trim().is_empty() {
                state.go_idle();
                Vec::new()
            } else {
                let request_id = state.begin_search();
                vec![Effect::Search { request_id, query }]
            }
        }
        Msg::SearchSucceeded {
            request_id,
            profiles,
        } => {
            if state.accepts_response(request_id) {
                state.apply_results(profiles);
            }
            Vec::new()
        }
        Msg::SearchFailed {
            request_id,
            message,
        } => {
            if state.accepts_response(request_id) {
                state.apply_failure(display_message(message));
            }
            Vec::new()
        }
        Msg::SelectNext => {
            state.select_next();
            Vec::new()
        }
        Msg::SelectPrevious => {
            state.select_previous();
            Vec::new()
        }
        Msg::OpenSelected => state
            .selected_profile()
            .and_then(|profile| profile_link(&profile.html_url))
            .map(|url| vec![Effect::OpenProfile { url }])
            .unwrap_or_default(),
        Msg::QuitRequested => {
            state.request_quit();
            vec![Effect::CancelDebounce, Effect::Quit]
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn display_message(message: String) -> String {
    if message.trim().is_empty() {
        UNKNOWN_ERROR_MESSAGE.to_owned()
    } else {
        message
    }
}

/// Only web links are handed to the system browser.
fn profile_link(raw: &str) -> Option<String> {
    let parsed = url::Url::parse(raw).ok()?;
    matches!(parsed.scheme(), "http" | "https").then(|| raw.to_owned())
}
