#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search box (raw text, every keystroke).
    QueryChanged(String),
    /// The debouncer emitted a value after the quiet period.
    QuerySettled(String),
    /// Search request finished with a result list.
    SearchSucceeded {
        request_id: crate::RequestId,
        profiles: Vec<crate::Profile>,
    },
    /// Search request failed; `message` is the user-facing text.
    SearchFailed {
        request_id: crate::RequestId,
        message: String,
    },
    /// Move the card selection forward.
    SelectNext,
    /// Move the card selection backward.
    SelectPrevious,
    /// Open the selected card's profile.
    OpenSelected,
    /// User asked to leave the application.
    QuitRequested,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
