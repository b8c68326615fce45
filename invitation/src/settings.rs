//! Studio settings.
//!
//! Loaded from environment variables with defaults for local use.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `INVITE_STORAGE` | `memory`, `file` or `redis` | `memory` |
//! | `INVITE_STORAGE_DIR` | directory for `file` | `./invite-data` |
//! | `INVITE_REDIS_URL` | URL for `redis` | `redis://127.0.0.1:6379` |
//! | `INVITE_KEY_PREFIX` | slot key namespace | `premiumInvite` |
//!
//! # Example
//!
//! ```no_run
//! use premium_invite::settings::StudioSettings;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = StudioSettings::from_env()?;
//! println!("Storage: {}", settings.backend);
//! # Ok(())
//! # }
//! ```

use crate::stores::DEFAULT_KEY_PREFIX;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Default directory for the `file` backend.
pub const DEFAULT_STORAGE_DIR: &str = "./invite-data";

/// Default URL for the `redis` backend.
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

/// Settings error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Unknown storage backend name
    #[error("Invalid storage backend: {0} (expected memory, file or redis)")]
    InvalidBackend(String),

    /// Settings validation failed
    #[error("Settings validation failed: {0}")]
    ValidationError(String),
}

/// Where the config store keeps its slots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// In-process map; lost on exit
    #[default]
    Memory,
    /// One JSON file per slot
    File {
        /// Directory holding the slot files
        dir: PathBuf,
    },
    /// Redis strings
    Redis {
        /// Connection URL
        url: String,
    },
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::File { dir } => write!(f, "file ({})", dir.display()),
            Self::Redis { url } => write!(f, "redis ({url})"),
        }
    }
}

/// Top-level studio settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioSettings {
    /// Storage backend
    pub backend: StorageBackend,
    /// Slot key namespace
    pub key_prefix: String,
}

impl Default for StudioSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }
}

impl StudioSettings {
    /// Load settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns error if `INVITE_STORAGE` names an unknown backend or a value
    /// fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = match lookup("INVITE_STORAGE")
            .map(|v| v.trim().to_lowercase())
            .as_deref()
        {
            None | Some("" | "memory") => StorageBackend::Memory,
            Some("file") => StorageBackend::File {
                dir: lookup("INVITE_STORAGE_DIR")
                    .map_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR), PathBuf::from),
            },
            Some("redis") => StorageBackend::Redis {
                url: lookup("INVITE_REDIS_URL").unwrap_or_else(|| DEFAULT_REDIS_URL.to_string()),
            },
            Some(other) => return Err(ConfigError::InvalidBackend(other.to_string())),
        };

        let settings = Self {
            backend,
            key_prefix: lookup("INVITE_KEY_PREFIX").unwrap_or_else(|| DEFAULT_KEY_PREFIX.to_string()),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings
    ///
    /// # Errors
    ///
    /// Returns error if the key prefix is blank or contains `:`, or the Redis
    /// URL does not use a `redis://`/`rediss://` scheme.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.key_prefix.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "key_prefix cannot be empty".to_string(),
            ));
        }
        if self.key_prefix.contains(':') {
            return Err(ConfigError::ValidationError(
                "key_prefix cannot contain ':'".to_string(),
            ));
        }
        if let StorageBackend::Redis { url } = &self.backend {
            if !(url.starts_with("redis://") || url.starts_with("rediss://")) {
                return Err(ConfigError::ValidationError(format!(
                    "invalid redis url: {url}"
                )));
            }
        }
        Ok(())
    }

    /// Use a different storage backend.
    #[must_use]
    pub fn with_backend(mut self, backend: StorageBackend) -> Self {
        self.backend = backend;
        self
    }

    /// Use a different key prefix.
    #[must_use]
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }
}
