//! Storage wrapper with failure injection.

use crate::error::StorageError;
use crate::providers::KeyValueStorage;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct Faults {
    write_keys: HashSet<String>,
    all_writes: bool,
    reads: bool,
}

/// Wraps a backend and fails selected operations.
///
/// A failed write never reaches the inner backend, so its previous value stays
/// readable.
///
/// **WARNING**: Do NOT use in production. This is for testing only!
#[derive(Debug, Clone)]
pub struct FailingStorage<S> {
    inner: S,
    faults: Arc<Mutex<Faults>>,
}

impl<S: KeyValueStorage> FailingStorage<S> {
    /// Wrap `inner` with no faults.
    #[must_use]
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            faults: Arc::new(Mutex::new(Faults::default())),
        }
    }

    /// The wrapped backend.
    #[must_use]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Fail every `set`/`remove` on `key` (e.g. simulate quota exceeded).
    #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
    pub fn fail_writes_for(&self, key: &str) {
        self.faults.lock().unwrap().write_keys.insert(key.to_string());
    }

    /// Fail every `set`/`remove`.
    #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
    pub fn fail_all_writes(&self, fail: bool) {
        self.faults.lock().unwrap().all_writes = fail;
    }

    /// Fail every `get`.
    #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
    pub fn fail_reads(&self, fail: bool) {
        self.faults.lock().unwrap().reads = fail;
    }

    /// Remove all injected faults.
    #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
    pub fn heal(&self) {
        *self.faults.lock().unwrap() = Faults::default();
    }

    #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
    fn write_fails(&self, key: &str) -> bool {
        let faults = self.faults.lock().unwrap();
        faults.all_writes || faults.write_keys.contains(key)
    }

    #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
    fn read_fails(&self) -> bool {
        self.faults.lock().unwrap().reads
    }
}

impl<S: KeyValueStorage> KeyValueStorage for FailingStorage<S> {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.read_fails() {
            return Err(StorageError::ReadFailed {
                key: key.to_string(),
                reason: "injected read failure".to_string(),
            });
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.write_fails(key) {
            return Err(StorageError::WriteFailed {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.write_fails(key) {
            return Err(StorageError::WriteFailed {
                key: key.to_string(),
                reason: "injected remove failure".to_string(),
            });
        }
        self.inner.remove(key).await
    }
}
