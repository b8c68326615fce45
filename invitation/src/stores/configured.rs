//! Storage backend selected from settings.

use super::{FileStorage, MemoryStorage, RedisStorage};
use crate::error::StorageError;
use crate::providers::KeyValueStorage;
use crate::settings::StorageBackend;

/// A backend chosen at startup.
#[derive(Clone)]
pub enum ConfiguredStorage {
    /// Process-local map
    Memory(MemoryStorage),
    /// JSON files in a directory
    File(FileStorage),
    /// Redis strings
    Redis(RedisStorage),
}

impl ConfiguredStorage {
    /// Construct the backend described by `backend`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the directory or Redis server
    /// cannot be reached.
    pub async fn connect(backend: &StorageBackend) -> Result<Self, StorageError> {
        match backend {
            StorageBackend::Memory => Ok(Self::Memory(MemoryStorage::new())),
            StorageBackend::File { dir } => Ok(Self::File(FileStorage::open(dir.clone()).await?)),
            StorageBackend::Redis { url } => Ok(Self::Redis(RedisStorage::new(url).await?)),
        }
    }

    /// Backend name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::File(_) => "file",
            Self::Redis(_) => "redis",
        }
    }
}

impl KeyValueStorage for ConfiguredStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            Self::Memory(s) => s.get(key).await,
            Self::File(s) => s.get(key).await,
            Self::Redis(s) => s.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            Self::Memory(s) => s.set(key, value).await,
            Self::File(s) => s.set(key, value).await,
            Self::Redis(s) => s.set(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        match self {
            Self::Memory(s) => s.remove(key).await,
            Self::File(s) => s.remove(key).await,
            Self::Redis(s) => s.remove(key).await,
        }
    }
}
