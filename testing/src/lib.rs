//! # Premium Invite Testing
//!
//! Testing utilities and helpers for the invitation studio.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A Given-When-Then harness for reducers
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use premium_invite_testing::{ReducerTest, assertions, test_clock};
//!
//! ReducerTest::new(WizardReducer::new())
//!     .with_env(WizardEnvironment::new(flow, Arc::new(test_clock())))
//!     .given_state(WizardState::default())
//!     .when_action(WizardAction::Next)
//!     .then_state(|state| assert_eq!(state.step, WizardStep::GuestDetails))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use premium_invite_core::environment::Clock;

pub mod reducer_test;

/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use premium_invite_testing::mocks::FixedClock;
    /// use premium_invite_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }

        /// Create a fixed clock from an RFC 3339 timestamp
        ///
        /// # Panics
        ///
        /// Panics if `timestamp` is not valid RFC 3339. Only meant for test literals.
        #[must_use]
        #[allow(clippy::expect_used)]
        pub fn at(timestamp: &str) -> Self {
            Self::new(
                DateTime::parse_from_rfc3339(timestamp)
                    .expect("test timestamp should be valid RFC 3339")
                    .with_timezone(&Utc),
            )
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2026-01-15 12:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    pub fn test_clock() -> FixedClock {
        FixedClock::at("2026-01-15T12:00:00Z")
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock};
pub use reducer_test::{ReducerTest, assertions};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        let time1 = clock.now();
        let time2 = clock.now();
        assert_eq!(time1, time2);
    }

    #[test]
    fn test_fixed_clock_at_parses_offsets() {
        let clock = FixedClock::at("2026-02-01T23:00:00+02:00");
        assert_eq!(clock.now().to_rfc3339(), "2026-02-01T21:00:00+00:00");
    }
}
