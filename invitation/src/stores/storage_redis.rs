//! Redis-backed key-value storage.
//!
//! Each slot is a plain Redis string under its full key. No TTL is set; slots
//! live until reset.
//!
//! # Example
//!
//! ```no_run
//! use premium_invite::stores::RedisStorage;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = RedisStorage::new("redis://127.0.0.1:6379").await?;
//! # Ok(())
//! # }
//! ```

use crate::error::StorageError;
use crate::providers::KeyValueStorage;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

/// Redis storage backend using a pooled `ConnectionManager`.
#[derive(Clone)]
pub struct RedisStorage {
    conn_manager: ConnectionManager,
}

impl RedisStorage {
    /// Connect to Redis.
    ///
    /// # Arguments
    ///
    /// * `redis_url` - Redis connection URL (e.g., "redis://127.0.0.1:6379")
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the connection fails.
    pub async fn new(redis_url: &str) -> Result<Self, StorageError> {
        let client = Client::open(redis_url).map_err(|e| {
            StorageError::Unavailable(format!("Failed to create Redis client: {e}"))
        })?;

        let conn_manager = ConnectionManager::new(client).await.map_err(|e| {
            StorageError::Unavailable(format!("Failed to create Redis connection manager: {e}"))
        })?;

        tracing::info!("Connected to Redis storage");
        Ok(Self { conn_manager })
    }
}

impl KeyValueStorage for RedisStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.conn_manager.clone();
        conn.get::<_, Option<String>>(key)
            .await
            .map_err(|e| StorageError::ReadFailed {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut conn = self.conn_manager.clone();
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut conn = self.conn_manager.clone();
        conn.del::<_, ()>(key)
            .await
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }
}
