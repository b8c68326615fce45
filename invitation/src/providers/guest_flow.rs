//! Guest-side collaborator traits.
//!
//! The wizard never owns the guest's answers. It reads and writes them through
//! [`GuestResponseFlow`], which also validates, submits, and tracks the
//! submitted/editing flags. Base event data arrives through [`EventSource`].

use crate::error::SubmitError;
use crate::event::BaseEvent;
use crate::wizard::WizardForm;

/// Result of the host's validation gate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Validation {
    /// Whether the current form may advance.
    pub ok: bool,
    /// Message to show at the current step when `ok` is false.
    pub message: Option<String>,
}

impl Validation {
    /// A passing check.
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            ok: true,
            message: None,
        }
    }

    /// A failing check with a message for the guest.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: Some(message.into()),
        }
    }
}

/// Host-owned guest response state and submission backend.
///
/// # Implementation Notes
///
/// - `form`/`set_form` are synchronous; the wizard reads then writes within one
///   reducer call
/// - A successful `submit` must leave `has_submitted() == true` and
///   `is_editing() == false`
/// - Persistence of the submitted response is the implementor's concern
pub trait GuestResponseFlow: Send + Sync {
    /// Current form contents.
    fn form(&self) -> WizardForm;

    /// Replace the form contents.
    fn set_form(&self, form: WizardForm);

    /// Read-modify-write the form.
    fn update_form<F>(&self, f: F)
    where
        F: FnOnce(&mut WizardForm),
    {
        let mut form = self.form();
        f(&mut form);
        self.set_form(form);
    }

    /// Validation gate for the current form.
    fn validate(&self) -> Validation;

    /// Send the response.
    ///
    /// # Errors
    ///
    /// Returns error if the backend refused or could not be reached. The wizard
    /// stays on its current step so the guest can retry.
    fn submit(&self) -> impl std::future::Future<Output = Result<(), SubmitError>> + Send;

    /// Whether a response has been submitted.
    fn has_submitted(&self) -> bool;

    /// Whether the guest reopened a submitted response for editing.
    fn is_editing(&self) -> bool;

    /// Reopen a submitted response.
    fn start_edit(&self);

    /// Abandon an edit session.
    fn cancel_edit(&self);
}

/// Externally-owned base event data.
pub trait EventSource: Send + Sync {
    /// The base event, or `None` while the source is still loading.
    fn current(&self) -> Option<BaseEvent>;
}
