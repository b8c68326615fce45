//! Wizard reducer.
//!
//! Navigation goes through [`route`], an explicit transition table. Guarded
//! routes consult the host's validation gate first; a failing gate keeps the
//! step and shows the gate's message.

use super::actions::WizardAction;
use super::environment::WizardEnvironment;
use super::state::{WizardForm, WizardState, WizardStep};
use crate::providers::GuestResponseFlow;
use premium_invite_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Message shown when the gate fails without one.
pub const DEFAULT_VALIDATION_MESSAGE: &str = "Please complete required fields.";

/// Message shown when Next is pressed before answering attendance.
pub const ATTENDANCE_REQUIRED_MESSAGE: &str = "Please let us know if you are attending.";

/// Navigation trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Primary button
    Next,
    /// Secondary button
    Back,
    /// Explicit submit
    Submit,
}

/// Where a route leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A fixed step
    Step(WizardStep),
    /// `GuestDetails` when attending, `DeclineConfirm` when declining
    ByAttendance,
    /// Invoke the submission backend
    Submit,
}

/// One row of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Whether the validation gate must pass first
    pub guarded: bool,
    /// Destination
    pub target: Target,
}

impl Route {
    const fn guarded(target: Target) -> Self {
        Self { guarded: true, target }
    }

    const fn free(step: WizardStep) -> Self {
        Self {
            guarded: false,
            target: Target::Step(step),
        }
    }
}

/// Transition table. `None` means the trigger does nothing at that step.
#[must_use]
pub const fn route(step: WizardStep, trigger: Trigger) -> Option<Route> {
    use WizardStep::{Attendance, DeclineConfirm, FinalDetails, GuestDetails};

    match (step, trigger) {
        (Attendance, Trigger::Next) => Some(Route::guarded(Target::ByAttendance)),
        (GuestDetails, Trigger::Next) => Some(Route::guarded(Target::Step(FinalDetails))),
        (GuestDetails | DeclineConfirm, Trigger::Back) => Some(Route::free(Attendance)),
        (FinalDetails, Trigger::Back) => Some(Route::free(GuestDetails)),
        (FinalDetails | DeclineConfirm, Trigger::Next | Trigger::Submit) => {
            Some(Route::guarded(Target::Submit))
        },
        (Attendance, Trigger::Back) | (Attendance | GuestDetails, Trigger::Submit) => None,
    }
}

/// Reducer for the guest response wizard.
///
/// Generic over the host's [`GuestResponseFlow`].
pub struct WizardReducer<F> {
    _flow: PhantomData<fn() -> F>,
}

impl<F> WizardReducer<F> {
    /// Create a new wizard reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self { _flow: PhantomData }
    }
}

impl<F> Default for WizardReducer<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Clone for WizardReducer<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for WizardReducer<F> {}

impl<F> fmt::Debug for WizardReducer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WizardReducer")
    }
}

impl<F: GuestResponseFlow + 'static> WizardReducer<F> {
    fn navigate(
        state: &mut WizardState,
        trigger: Trigger,
        env: &WizardEnvironment<F>,
    ) -> SmallVec<[Effect<WizardAction>; 4]> {
        let Some(route) = route(state.step, trigger) else {
            return smallvec![Effect::None];
        };

        if route.guarded {
            let validation = env.flow.validate();
            if !validation.ok {
                tracing::debug!(step = ?state.step, "Validation failed");
                state.error = Some(
                    validation
                        .message
                        .unwrap_or_else(|| DEFAULT_VALIDATION_MESSAGE.to_string()),
                );
                return smallvec![Effect::None];
            }
        }
        state.error = None;

        match route.target {
            Target::Step(step) => {
                state.step = step;
                smallvec![Effect::None]
            },
            Target::ByAttendance => {
                match env.flow.form().attending {
                    Some(true) => state.step = WizardStep::GuestDetails,
                    Some(false) => state.step = WizardStep::DeclineConfirm,
                    None => state.error = Some(ATTENDANCE_REQUIRED_MESSAGE.to_string()),
                }
                smallvec![Effect::None]
            },
            Target::Submit => {
                state.submitting = true;
                tracing::info!(step = ?state.step, "Submitting response");
                let flow = Arc::clone(&env.flow);
                smallvec![Effect::Future(Box::pin(async move {
                    match flow.submit().await {
                        Ok(()) => Some(WizardAction::SubmitSucceeded),
                        Err(e) => Some(WizardAction::SubmitFailed(e.to_string())),
                    }
                }))]
            },
        }
    }
}

impl<F> Reducer for WizardReducer<F>
where
    F: GuestResponseFlow + 'static,
{
    type State = WizardState;
    type Action = WizardAction;
    type Environment = WizardEnvironment<F>;

    fn reduce(
        &self,
        state: &mut WizardState,
        action: WizardAction,
        env: &WizardEnvironment<F>,
    ) -> SmallVec<[Effect<WizardAction>; 4]> {
        if action.is_guest_input() {
            if env.deadline_passed() {
                tracing::debug!(?action, "Ignoring input after RSVP deadline");
                return smallvec![Effect::None];
            }
            if state.submitting {
                tracing::debug!(?action, "Ignoring input while submitting");
                return smallvec![Effect::None];
            }
        }

        match action {
            WizardAction::SetAttending(attending) => {
                env.flow.update_form(|form| form.attending = Some(attending));
            },
            WizardAction::IncrementGuests => env.flow.update_form(WizardForm::increment_guests),
            WizardAction::DecrementGuests => env.flow.update_form(WizardForm::decrement_guests),
            WizardAction::SetHasChildren(has_children) => {
                env.flow.update_form(|form| form.has_children = has_children);
            },
            WizardAction::IncrementChildren => env.flow.update_form(WizardForm::increment_children),
            WizardAction::DecrementChildren => env.flow.update_form(WizardForm::decrement_children),
            WizardAction::SetDietary(text) => env.flow.update_form(|form| form.dietary = text),
            WizardAction::SetNotes(text) => env.flow.update_form(|form| form.notes = text),

            WizardAction::Next => return Self::navigate(state, Trigger::Next, env),
            WizardAction::Back => return Self::navigate(state, Trigger::Back, env),
            WizardAction::Submit => return Self::navigate(state, Trigger::Submit, env),

            WizardAction::StartEdit => {
                env.flow.start_edit();
                *state = WizardState::default();
            },
            WizardAction::CancelEdit => {
                env.flow.cancel_edit();
                *state = WizardState::default();
            },

            WizardAction::SubmitSucceeded => {
                tracing::info!("Response submitted");
                *state = WizardState::default();
            },
            WizardAction::SubmitFailed(reason) => {
                tracing::warn!(step = ?state.step, reason = %reason, "Submission failed");
                state.submitting = false;
                state.error = Some(reason);
            },
        }

        smallvec![Effect::None]
    }
}
