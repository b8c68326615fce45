//! Key-value storage trait.
//!
//! This module defines the trait the config store persists its four slots
//! through. Values are JSON snapshots stored as strings.

use crate::error::StorageError;

/// Key-value storage backend.
///
/// # Implementation Notes
///
/// - `set` must replace the value atomically: after a failed `set` the previous
///   value (or absence) must still be readable
/// - `remove` of a missing key succeeds
/// - Calls from one editing session arrive sequentially; backends do not need to
///   arbitrate concurrent writers
pub trait KeyValueStorage: Send + Sync {
    /// Read a slot.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))`: the slot holds a value
    /// - `Ok(None)`: the slot is empty
    ///
    /// # Errors
    ///
    /// Returns error if the backend cannot be read.
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Replace a slot's value.
    ///
    /// # Errors
    ///
    /// Returns error if the write did not complete (e.g. quota exceeded).
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;

    /// Clear a slot.
    ///
    /// # Errors
    ///
    /// Returns error if the removal did not complete.
    fn remove(&self, key: &str)
    -> impl std::future::Future<Output = Result<(), StorageError>> + Send;
}
