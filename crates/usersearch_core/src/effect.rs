/// Side effects requested by [`crate::update`], executed by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Cancel any pending quiet-period timer and start a new one for `query`.
    RestartDebounce { query: String },
    /// Drop the pending quiet-period timer without emitting.
    CancelDebounce,
    /// Issue exactly one search request.
    Search {
        request_id: crate::RequestId,
        query: String,
    },
    /// Open a profile page in the system browser.
    OpenProfile { url: String },
    /// Tear down the UI.
    Quit,
}
