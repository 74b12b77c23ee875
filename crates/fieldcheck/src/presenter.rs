// File: src/presenter.rs
// Purpose: Outbound interface to the presentation layer

use crate::field::ValueSource;

/// Presentation collaborator notified of validation outcomes.
///
/// The engine never touches markup or styling itself; it reports outcomes
/// through this trait and the binding layer renders error lists, toggles
/// container styling, moves focus and cancels submissions.
pub trait Presenter<S: ValueSource> {
    /// Called after every validation pass on a field. `errors_changed` is
    /// true when the message list differs from the previous pass, so the
    /// binding layer can skip re-rendering an unchanged error list.
    fn render(&mut self, field: &S, is_valid: bool, messages: &[String], errors_changed: bool);

    /// Move user attention to `field`. Requested for the first invalid field
    /// when a whole-form validity check fails.
    fn focus(&mut self, field: &S);

    /// Cancel the submission attempt that triggered the current pass.
    fn suppress_default_action(&mut self);
}

/// Presenter that ignores every notification, for headless validation.
#[derive(Debug, Default)]
pub struct NoopPresenter;

impl<S: ValueSource> Presenter<S> for NoopPresenter {
    fn render(&mut self, _field: &S, _is_valid: bool, _messages: &[String], _errors_changed: bool) {}

    fn focus(&mut self, _field: &S) {}

    fn suppress_default_action(&mut self) {}
}
