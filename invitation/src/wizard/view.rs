//! What the guest surface shows for the response section.
//!
//! Precedence: an expired deadline beats everything, then a submitted
//! response that is not being edited, then the stepper.

use super::environment::WizardEnvironment;
use super::state::{WizardState, WizardStep};
use crate::config::Content;
use crate::providers::GuestResponseFlow;

/// Response section view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardView {
    /// RSVP is closed; no stepper and no edit control.
    DeadlinePassed,
    /// Confirmation after a submitted response.
    ThankYou {
        /// The guest declined
        declined: bool,
        /// Offer "change response"
        offer_edit: bool,
    },
    /// The stepper.
    Stepper {
        /// Current step
        step: WizardStep,
        /// Active progress dot, `None` on the decline step
        progress: Option<u8>,
        /// Message for the current step
        error: Option<String>,
        /// Offer the header "Edit" control
        offer_edit: bool,
        /// Offer the header "Cancel" control
        offer_cancel: bool,
        /// Primary button disabled while a submission is in flight
        submitting: bool,
    },
}

impl WizardView {
    /// Derive the view from wizard state and host flags.
    #[must_use]
    pub fn resolve<F: GuestResponseFlow>(state: &WizardState, env: &WizardEnvironment<F>) -> Self {
        if env.deadline_passed() {
            return Self::DeadlinePassed;
        }

        let submitted = env.flow.has_submitted();
        let editing = env.flow.is_editing();
        let can_edit = env.can_edit();
        let form = env.flow.form();

        if submitted && !editing {
            return Self::ThankYou {
                declined: form.attending == Some(false),
                offer_edit: can_edit,
            };
        }

        Self::Stepper {
            step: state.step,
            progress: state.step.progress_index(),
            error: state.error.clone(),
            offer_edit: !submitted && !editing && can_edit && form.has_recorded_data(),
            offer_cancel: editing,
            submitting: state.submitting,
        }
    }

    /// Headline for the non-stepper views.
    #[must_use]
    pub fn title<'a>(&self, content: &'a Content) -> Option<&'a str> {
        match self {
            Self::DeadlinePassed => Some(content.thank_you.deadline_passed.as_str()),
            Self::ThankYou { declined: true, .. } => Some(content.rsvp.not_attending_title.as_str()),
            Self::ThankYou { declined: false, .. } => Some(content.thank_you.title.as_str()),
            Self::Stepper { .. } => None,
        }
    }

    /// Label of the primary button, for the stepper.
    #[must_use]
    pub fn primary_label<'a>(&self, content: &'a Content) -> Option<&'a str> {
        match self {
            Self::Stepper { step: WizardStep::DeclineConfirm, .. } => {
                Some(content.rsvp.not_attending_submit.as_str())
            },
            Self::Stepper { step, .. } if step.is_final() => Some(content.rsvp.submit.as_str()),
            Self::Stepper { .. } => Some(content.rsvp.step_next.as_str()),
            _ => None,
        }
    }
}
