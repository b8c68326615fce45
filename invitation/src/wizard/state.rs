//! Wizard state and the host-owned form it edits.

use serde::{Deserialize, Serialize};

/// Smallest party size.
pub const MIN_GUESTS: u8 = 1;

/// Largest party size.
pub const MAX_GUESTS: u8 = 10;

/// Wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum WizardStep {
    /// "Will you attend?"
    #[default]
    Attendance = 0,
    /// Party size and children
    GuestDetails = 1,
    /// Dietary needs and notes
    FinalDetails = 2,
    /// Decline confirmation
    DeclineConfirm = 3,
}

impl WizardStep {
    /// Position in the progress indicator, or `None` for the decline step.
    #[must_use]
    pub const fn progress_index(self) -> Option<u8> {
        match self {
            Self::Attendance => Some(0),
            Self::GuestDetails => Some(1),
            Self::FinalDetails => Some(2),
            Self::DeclineConfirm => None,
        }
    }

    /// Whether the primary button submits instead of advancing.
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::FinalDetails | Self::DeclineConfirm)
    }
}

/// Wizard-local state. The guest's answers live in [`WizardForm`], owned by
/// the host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WizardState {
    /// Current step
    pub step: WizardStep,
    /// Validation or submission message for the current step
    pub error: Option<String>,
    /// A submission is in flight
    pub submitting: bool,
}

impl WizardState {
    /// State at a given step with no message.
    #[must_use]
    pub const fn at(step: WizardStep) -> Self {
        Self {
            step,
            error: None,
            submitting: false,
        }
    }
}

/// Guest answers.
///
/// Counter methods keep `MIN_GUESTS <= guests_count <= MAX_GUESTS` and
/// `children_count <= guests_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardForm {
    /// `None` until the guest answers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attending: Option<bool>,
    /// Party size including the guest
    pub guests_count: u8,
    /// Whether the party includes children
    #[serde(default)]
    pub has_children: bool,
    /// Children in the party; kept when `has_children` is switched off
    #[serde(default)]
    pub children_count: u8,
    /// Dietary requirements
    #[serde(default)]
    pub dietary: String,
    /// Free-text notes
    #[serde(default)]
    pub notes: String,
}

impl Default for WizardForm {
    fn default() -> Self {
        Self {
            attending: None,
            guests_count: MIN_GUESTS,
            has_children: false,
            children_count: 0,
            dietary: String::new(),
            notes: String::new(),
        }
    }
}

impl WizardForm {
    /// One more guest, up to [`MAX_GUESTS`].
    pub fn increment_guests(&mut self) {
        self.guests_count = self.guests_count.saturating_add(1).clamp(MIN_GUESTS, MAX_GUESTS);
    }

    /// One fewer guest, down to [`MIN_GUESTS`]. Children shrink with the party.
    pub fn decrement_guests(&mut self) {
        self.guests_count = self.guests_count.saturating_sub(1).clamp(MIN_GUESTS, MAX_GUESTS);
        self.children_count = self.children_count.min(self.guests_count);
    }

    /// One more child, up to the party size.
    pub fn increment_children(&mut self) {
        self.children_count = self.children_count.saturating_add(1).min(self.guests_count);
    }

    /// One fewer child, down to zero.
    pub fn decrement_children(&mut self) {
        self.children_count = self.children_count.saturating_sub(1);
    }

    /// Whether the guest has answered anything yet.
    #[must_use]
    pub fn has_recorded_data(&self) -> bool {
        self.attending.is_some()
            || self.guests_count > MIN_GUESTS
            || !self.dietary.is_empty()
            || !self.notes.is_empty()
    }

    /// The same form with counters forced into range.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.guests_count = self.guests_count.clamp(MIN_GUESTS, MAX_GUESTS);
        self.children_count = self.children_count.min(self.guests_count);
        self
    }
}
