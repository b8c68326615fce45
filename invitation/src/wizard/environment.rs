//! Wizard environment.

use crate::providers::GuestResponseFlow;
use chrono::{DateTime, Utc};
use premium_invite_core::environment::Clock;
use std::sync::Arc;

/// Whether `deadline` is strictly before the clock's current time.
///
/// A missing deadline never passes; a deadline equal to now is still open.
#[must_use]
pub fn deadline_passed(deadline: Option<DateTime<Utc>>, clock: &dyn Clock) -> bool {
    deadline.is_some_and(|deadline| clock.now() > deadline)
}

/// Dependencies injected into [`WizardReducer`](super::WizardReducer).
pub struct WizardEnvironment<F> {
    /// Host-owned form, validation and submission
    pub flow: Arc<F>,
    /// Time source for deadline checks
    pub clock: Arc<dyn Clock>,
    /// Effective RSVP deadline; `None` never locks
    pub rsvp_deadline: Option<DateTime<Utc>>,
}

impl<F> Clone for WizardEnvironment<F> {
    fn clone(&self) -> Self {
        Self {
            flow: Arc::clone(&self.flow),
            clock: Arc::clone(&self.clock),
            rsvp_deadline: self.rsvp_deadline,
        }
    }
}

impl<F: GuestResponseFlow> WizardEnvironment<F> {
    /// Environment with no deadline.
    #[must_use]
    pub fn new(flow: Arc<F>, clock: Arc<dyn Clock>) -> Self {
        Self {
            flow,
            clock,
            rsvp_deadline: None,
        }
    }

    /// Set the RSVP deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Option<DateTime<Utc>>) -> Self {
        self.rsvp_deadline = deadline;
        self
    }

    /// Whether the deadline is strictly in the past.
    #[must_use]
    pub fn deadline_passed(&self) -> bool {
        deadline_passed(self.rsvp_deadline, self.clock.as_ref())
    }

    /// Whether the guest may still change a response.
    #[must_use]
    pub fn can_edit(&self) -> bool {
        !self.deadline_passed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use premium_invite_testing::FixedClock;

    #[test]
    fn test_deadline_passed_is_strict() {
        let clock = FixedClock::at("2026-01-15T12:00:00Z");
        let now = clock.now();
        assert!(!deadline_passed(None, &clock));
        assert!(!deadline_passed(Some(now), &clock));
        assert!(deadline_passed(Some(now - chrono::Duration::seconds(1)), &clock));
        assert!(!deadline_passed(Some(now + chrono::Duration::seconds(1)), &clock));
    }
}
