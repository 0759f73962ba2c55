/// Boundary through which the UI asks the user to name a new event.
///
/// The slot-select flow is modal: the prompt must resolve before the
/// handler returns, so implementations block until the user answers.
/// This is deliberately synchronous; there is no pending-creation state
/// to reconcile afterwards.
pub trait TitlePrompt {
    /// Returns the entered title, or `None` when the user cancelled.
    fn request_title(&self) -> Option<String>;
}
