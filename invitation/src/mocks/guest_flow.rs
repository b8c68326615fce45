//! Mock guest response flow.

use crate::error::SubmitError;
use crate::providers::{GuestResponseFlow, Validation};
use crate::wizard::WizardForm;
use std::sync::{Arc, Mutex};

#[derive(Debug)]
struct Inner {
    form: WizardForm,
    submitted: bool,
    editing: bool,
    validation: Validation,
    submit_outcome: Result<(), SubmitError>,
    submitted_forms: Vec<WizardForm>,
}

/// Mock guest flow.
///
/// Holds the form in memory, passes validation unless told otherwise, and
/// records every submitted form.
///
/// **WARNING**: Do NOT use in production. This is for testing only!
#[derive(Debug, Clone)]
pub struct MockGuestFlow {
    inner: Arc<Mutex<Inner>>,
}

impl MockGuestFlow {
    /// Create a flow with an empty form that accepts submissions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                form: WizardForm::default(),
                submitted: false,
                editing: false,
                validation: Validation::ok(),
                submit_outcome: Ok(()),
                submitted_forms: Vec::new(),
            })),
        }
    }

    /// Result of subsequent `validate` calls.
    #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
    pub fn set_validation(&self, validation: Validation) {
        self.inner.lock().unwrap().validation = validation;
    }

    /// Result of subsequent `submit` calls.
    #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
    pub fn set_submit_outcome(&self, outcome: Result<(), SubmitError>) {
        self.inner.lock().unwrap().submit_outcome = outcome;
    }

    /// Pretend a response was submitted earlier.
    #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
    pub fn mark_submitted(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.submitted = true;
        inner.editing = false;
    }

    /// Forms received by successful submissions, oldest first.
    #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
    #[must_use]
    pub fn submitted_forms(&self) -> Vec<WizardForm> {
        self.inner.lock().unwrap().submitted_forms.clone()
    }
}

impl Default for MockGuestFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl GuestResponseFlow for MockGuestFlow {
    #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
    fn form(&self) -> WizardForm {
        self.inner.lock().unwrap().form.clone()
    }

    #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
    fn set_form(&self, form: WizardForm) {
        self.inner.lock().unwrap().form = form;
    }

    #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
    fn validate(&self) -> Validation {
        self.inner.lock().unwrap().validation.clone()
    }

    #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
    async fn submit(&self) -> Result<(), SubmitError> {
        let mut inner = self.inner.lock().unwrap();
        inner.submit_outcome.clone()?;
        let form = inner.form.clone();
        inner.submitted_forms.push(form);
        inner.submitted = true;
        inner.editing = false;
        Ok(())
    }

    #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
    fn has_submitted(&self) -> bool {
        self.inner.lock().unwrap().submitted
    }

    #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
    fn is_editing(&self) -> bool {
        self.inner.lock().unwrap().editing
    }

    #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
    fn start_edit(&self) {
        self.inner.lock().unwrap().editing = true;
    }

    #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
    fn cancel_edit(&self) {
        self.inner.lock().unwrap().editing = false;
    }
}
