use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

/// Quiet period used when nothing else is configured.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Emits the last pushed value once no new value has arrived for `delay`.
///
/// Each [`push`](Debouncer::push) cancels the pending timer and schedules a new
/// one, so intermediate values are never emitted. Dropping the debouncer
/// cancels the pending timer.
pub struct Debouncer<T> {
    delay: Duration,
    runtime: Handle,
    root: CancellationToken,
    pending: Option<CancellationToken>,
    sink: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration, runtime: Handle, sink: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            delay,
            runtime,
            root: CancellationToken::new(),
            pending: None,
            sink: Arc::new(sink),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn push(&mut self, value: T) {
        self.cancel();

        let token = self.root.child_token();
        self.pending = Some(token.clone());
        let sink = Arc::clone(&self.sink);
        let delay = self.delay;
        self.runtime.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    // Cancellation may race the timer.
                    if !token.is_cancelled() {
                        sink(value);
                    }
                }
            }
        });
    }

    /// Drops the pending value, if any, without emitting it.
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.root.cancel();
    }
}
