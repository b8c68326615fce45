//! Wizard actions.

/// Inputs to [`WizardReducer`](super::WizardReducer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    // Guest input
    /// Record the attendance answer. Does not advance.
    SetAttending(bool),
    /// Party size +1
    IncrementGuests,
    /// Party size -1
    DecrementGuests,
    /// Toggle the children checkbox
    SetHasChildren(bool),
    /// Children +1
    IncrementChildren,
    /// Children -1
    DecrementChildren,
    /// Dietary text changed
    SetDietary(String),
    /// Notes text changed
    SetNotes(String),
    /// Primary button. Submits on the final and decline steps.
    Next,
    /// Secondary button
    Back,
    /// Explicit submit
    Submit,
    /// Reopen a submitted response
    StartEdit,
    /// Abandon the edit session
    CancelEdit,

    // Effect results
    /// The backend accepted the response
    SubmitSucceeded,
    /// The backend refused or could not be reached
    SubmitFailed(String),
}

impl WizardAction {
    /// Whether this action originates from the guest rather than an effect.
    #[must_use]
    pub const fn is_guest_input(&self) -> bool {
        !matches!(self, Self::SubmitSucceeded | Self::SubmitFailed(_))
    }
}
