//! Mock provider implementations for testing.
//!
//! In-memory implementations with failure injection, for unit and
//! integration tests.

pub mod guest_flow;
pub mod storage;

pub use guest_flow::MockGuestFlow;
pub use storage::FailingStorage;
