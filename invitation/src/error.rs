//! Error types for the invitation studio.
//!
//! Only persistence and submission failures are represented as errors. Corrupt
//! snapshots fall back to defaults inside the store, wizard validation failures
//! are messages on [`WizardState`](crate::wizard::WizardState), and rejected
//! preview messages are an [`ApplyOutcome`](crate::preview::ApplyOutcome).

use crate::stores::RecordKind;
use thiserror::Error;

/// Failure of a key-value storage backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Reading a slot failed.
    #[error("Failed to read '{key}': {reason}")]
    ReadFailed {
        /// Slot key
        key: String,
        /// Backend message
        reason: String,
    },

    /// Writing or removing a slot failed (e.g. quota exceeded).
    #[error("Failed to write '{key}': {reason}")]
    WriteFailed {
        /// Slot key
        key: String,
        /// Backend message
        reason: String,
    },

    /// The backend could not be reached or opened.
    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}

/// A config store operation did not complete; prior state is intact.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The storage backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A record could not be encoded for storage.
    #[error("Failed to serialize {kind} record: {reason}")]
    Serialization {
        /// Record kind being written
        kind: RecordKind,
        /// Serializer message
        reason: String,
    },
}

/// Failure reported by the guest submission backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The backend refused the response.
    #[error("{0}")]
    Rejected(String),

    /// The backend could not be reached.
    #[error("Could not send your response, please try again ({0})")]
    Unavailable(String),
}
