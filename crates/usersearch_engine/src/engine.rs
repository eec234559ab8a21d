use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use usersearch_logging::{search_debug, search_info, search_trace};

use crate::debounce::{Debouncer, DEFAULT_QUIET_PERIOD};
use crate::search::{GithubUserSearch, SearchSettings, UserSearch};
use crate::{EngineError, EngineEvent, RequestId};

#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub search: SearchSettings,
    pub quiet_period: Duration,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            search: SearchSettings::default(),
            quiet_period: DEFAULT_QUIET_PERIOD,
        }
    }
}

enum EngineCommand {
    Debounce(String),
    CancelDebounce,
    Search { request_id: RequestId, query: String },
}

/// Owns the IO runtime. Commands go in, [`EngineEvent`]s come out.
///
/// Dropping the handle stops the command loop and cancels the pending
/// debounce timer.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: EngineSettings) -> Result<Self, EngineError> {
        let searcher = GithubUserSearch::new(settings.search)?;
        Self::with_searcher(Arc::new(searcher), settings.quiet_period)
    }

    pub fn with_searcher(
        searcher: Arc<dyn UserSearch>,
        quiet_period: Duration,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("usersearch-engine".to_string())
            .spawn(move || {
                let settled_tx = event_tx.clone();
                let mut debouncer = Debouncer::new(
                    quiet_period,
                    runtime.handle().clone(),
                    move |query: String| {
                        let _ = settled_tx.send(EngineEvent::QuerySettled(query));
                    },
                );

                while let Ok(command) = cmd_rx.recv() {
                    match command {
                        EngineCommand::Debounce(query) => {
                            search_trace!("Debounce restart query={:?}", query);
                            debouncer.push(query);
                        }
                        EngineCommand::CancelDebounce => debouncer.cancel(),
                        EngineCommand::Search { request_id, query } => {
                            let searcher = searcher.clone();
                            let event_tx = event_tx.clone();
                            runtime.spawn(async move {
                                run_search(searcher.as_ref(), request_id, query, event_tx).await;
                            });
                        }
                    }
                }

                drop(debouncer);
                search_debug!("Engine command loop stopped");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn debounce(&self, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Debounce(query.into()));
    }

    pub fn cancel_debounce(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CancelDebounce);
    }

    pub fn search(&self, request_id: RequestId, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Search {
            request_id,
            query: query.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn run_search(
    searcher: &dyn UserSearch,
    request_id: RequestId,
    query: String,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    search_info!("Search request_id={} query={:?}", request_id, query);
    let result = searcher.search_users(&query).await;
    let _ = event_tx.send(EngineEvent::SearchCompleted { request_id, result });
}
