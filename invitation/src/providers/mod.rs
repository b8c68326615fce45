//! Provider traits for external dependencies.
//!
//! These traits abstract the collaborators the studio drives but does not own:
//! the key-value persistence under the config store, the base event source,
//! and the guest submission flow.

pub mod guest_flow;
pub mod storage;

pub use guest_flow::{EventSource, GuestResponseFlow, Validation};
pub use storage::KeyValueStorage;
