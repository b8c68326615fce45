//! Guest response wizard.
//!
//! ```text
//!              Next (attending)          Next
//! Attendance ───────────────▶ GuestDetails ───────▶ FinalDetails ──Submit──▶ (submit)
//!     │      ◀─────────────── Back          ◀─────── Back
//!     │ Next (declining)
//!     ▼
//! DeclineConfirm ──Submit──▶ (submit)
//!     Back ──▶ Attendance
//! ```
//!
//! A successful submit returns to `Attendance`; the host's `submitted` flag
//! then selects the thank-you view. While the RSVP deadline has passed the
//! reducer ignores all guest input.

pub mod actions;
pub mod environment;
pub mod reducer;
pub mod state;
pub mod view;

pub use actions::WizardAction;
pub use environment::WizardEnvironment;
pub use reducer::{Route, Target, Trigger, WizardReducer, route};
pub use state::{MAX_GUESTS, MIN_GUESTS, WizardForm, WizardState, WizardStep};
pub use view::WizardView;
