use std::ops::ControlFlow;

use usersearch_core::{Effect, Msg, Profile};
use usersearch_engine::{EngineError, EngineEvent, EngineHandle, EngineSettings, User};
use usersearch_logging::{search_debug, search_info, search_warn};

/// Executes core effects against the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: EngineSettings) -> Result<Self, EngineError> {
        Ok(Self {
            engine: EngineHandle::new(settings)?,
        })
    }

    /// Runs `effects` in order. Breaks on [`Effect::Quit`].
    pub fn run(&self, effects: Vec<Effect>) -> ControlFlow<()> {
        for effect in effects {
            match effect {
                Effect::RestartDebounce { query } => {
                    search_debug!("RestartDebounce query_len={}", query.len());
                    self.engine.debounce(query);
                }
                Effect::CancelDebounce => self.engine.cancel_debounce(),
                Effect::Search { request_id, query } => {
                    search_info!("Search request_id={} query={:?}", request_id, query);
                    self.engine.search(request_id, query);
                }
                Effect::OpenProfile { url } => {
                    search_info!("Opening profile {}", url);
                    if let Err(err) = open::that(&url) {
                        search_warn!("Failed to open {}: {}", url, err);
                    }
                }
                Effect::Quit => return ControlFlow::Break(()),
            }
        }
        ControlFlow::Continue(())
    }

    /// Drains pending engine events without blocking.
    pub fn poll(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(map_event)
            .collect()
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::QuerySettled(query) => Msg::QuerySettled(query),
        EngineEvent::SearchCompleted {
            request_id,
            result: Ok(users),
        } => Msg::SearchSucceeded {
            request_id,
            profiles: users.into_iter().map(map_user).collect(),
        },
        EngineEvent::SearchCompleted {
            request_id,
            result: Err(err),
        } => {
            search_warn!("Search request_id={} failed: {:?}", request_id, err);
            Msg::SearchFailed {
                request_id,
                message: err.to_string(),
            }
        }
    }
}

fn map_user(user: User) -> Profile {
    Profile {
        id: user.id,
        login: user.login,
        avatar_url: user.avatar_url,
        html_url: user.html_url,
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use serde_json::json;
    use usersearch_core::{update, AppState, ContentView};
    use usersearch_engine::SearchSettings;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const QUIET: Duration = Duration::from_millis(60);

    fn runner_for(base_url: String) -> EffectRunner {
        EffectRunner::new(EngineSettings {
            search: SearchSettings {
                api_base_url: base_url,
                ..SearchSettings::default()
            },
            quiet_period: QUIET,
        })
        .expect("runner")
    }

    fn apply(runner: &EffectRunner, state: AppState, msg: Msg) -> AppState {
        let (state, effects) = update(state, msg);
        let _ = runner.run(effects);
        state
    }

    /// Feeds engine events into the state until `done` holds or five seconds pass.
    async fn pump_until(
        runner: &EffectRunner,
        mut state: AppState,
        done: impl Fn(&AppState) -> bool,
    ) -> AppState {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !done(&state) && Instant::now() < deadline {
            for msg in runner.poll() {
                state = apply(runner, state, msg);
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        state
    }

    fn settled(state: &AppState) -> bool {
        !matches!(
            state.view().content,
            ContentView::Loading | ContentView::Prompt
        )
    }

    async fn search_once(runner: &EffectRunner, query: &str) -> AppState {
        let state = apply(runner, AppState::new(), Msg::QueryChanged(query.to_string()));
        pump_until(runner, state, settled).await
    }

    fn user(id: u64, login: &str) -> serde_json::Value {
        json!({
            "id": id,
            "login": login,
            "avatar_url": format!("https://avatars.githubusercontent.com/u/{id}"),
            "html_url": format!("https://github.com/{login}")
        })
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn results_become_one_card_per_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/users"))
            .and(query_param("q", "octo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [user(1, "octocat"), user(2, "octodog")]
            })))
            .mount(&server)
            .await;
        let runner = runner_for(server.uri());

        let state = search_once(&runner, "octo").await;

        match state.view().content {
            ContentView::Results { cards } => {
                let urls: Vec<_> = cards.iter().map(|card| card.profile_url.as_str()).collect();
                assert_eq!(
                    urls,
                    vec!["https://github.com/octocat", "https://github.com/octodog"]
                );
            }
            other => panic!("expected results, got {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn empty_result_names_the_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
            .mount(&server)
            .await;
        let runner = runner_for(server.uri());

        let state = search_once(&runner, "nobody-here").await;

        assert_eq!(
            state.view().content,
            ContentView::NoResults {
                message: "No users found for \"nobody-here\".".to_string()
            }
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn rate_limit_shows_fixed_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/users"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;
        let runner = runner_for(server.uri());

        let state = search_once(&runner, "octo").await;

        assert_eq!(
            state.view().content,
            ContentView::Error {
                message: "API rate limit exceeded. Please wait a moment and try again."
                    .to_string()
            }
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn api_message_is_shown_as_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/users"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" })),
            )
            .mount(&server)
            .await;
        let runner = runner_for(server.uri());

        let state = search_once(&runner, "octo").await;

        assert_eq!(
            state.view().content,
            ContentView::Error {
                message: "Not Found".to_string()
            }
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn network_failure_shows_generic_error_and_no_cards() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        let runner = runner_for(format!("http://127.0.0.1:{port}"));

        let state = search_once(&runner, "octo").await;

        match state.view().content {
            ContentView::Error { message } => assert!(!message.trim().is_empty()),
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn rapid_typing_issues_a_single_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/users"))
            .and(query_param("q", "octo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [user(1, "octocat")]
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
            .expect(0)
            .mount(&server)
            .await;
        let runner = runner_for(server.uri());

        let mut state = AppState::new();
        for query in ["o", "oc", "oct", "octo"] {
            state = apply(&runner, state, Msg::QueryChanged(query.to_string()));
        }
        let state = pump_until(&runner, state, settled).await;

        assert!(matches!(state.view().content, ContentView::Results { .. }));
        // Give any stray settle a chance to reach the server before verification.
        tokio::time::sleep(QUIET * 3).await;
        let _ = runner.poll();
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn clearing_the_query_returns_to_prompt_without_a_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [user(1, "octocat")]
            })))
            .expect(1)
            .mount(&server)
            .await;
        let runner = runner_for(server.uri());

        let state = search_once(&runner, "octo").await;
        let state = apply(&runner, state, Msg::QueryChanged(String::new()));
        let state = pump_until(&runner, state, |state| {
            state.view().content == ContentView::Prompt
        })
        .await;

        assert_eq!(state.view().content, ContentView::Prompt);
    }

    #[test]
    fn quit_stops_before_later_effects() {
        let runner = runner_for("http://127.0.0.1:9".to_string());

        let flow = runner.run(vec![Effect::CancelDebounce, Effect::Quit]);

        assert_eq!(flow, ControlFlow::Break(()));
    }
}
