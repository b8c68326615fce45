//! Draft/published configuration store.
//!
//! Two record kinds live side by side, each in a draft slot and a published
//! slot:
//!
//! | Kind | Draft slot | Published slot |
//! |---|---|---|
//! | [`PresentationConfig`] | `{prefix}:draftCfg` | `{prefix}:publishedCfg` |
//! | [`EventOverride`] | `{prefix}:draftEvent` | `{prefix}:publishedEvent` |
//!
//! Loads never fail: an absent, corrupt or unreadable slot yields the kind's
//! fallback record. Writes report [`PersistenceError`] and leave the previous
//! value in place. Publishing copies one kind at a time; a failure in one kind
//! never touches the other.

mod configured;
mod file;
mod memory;
mod storage_redis;

pub use self::configured::ConfiguredStorage;
pub use self::file::FileStorage;
pub use self::memory::MemoryStorage;
pub use self::storage_redis::RedisStorage;

use crate::config::PresentationConfig;
use crate::error::PersistenceError;
use crate::event::EventOverride;
use crate::providers::KeyValueStorage;
use chrono::{DateTime, Utc};
use premium_invite_core::environment::Clock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

/// Key namespace used when none is configured.
pub const DEFAULT_KEY_PREFIX: &str = "premiumInvite";

/// One of the four persisted slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Draft presentation config
    DraftConfig,
    /// Published presentation config
    PublishedConfig,
    /// Draft event override
    DraftEvent,
    /// Published event override
    PublishedEvent,
}

impl Slot {
    /// Every slot, drafts first.
    pub const ALL: [Self; 4] = [
        Self::DraftConfig,
        Self::DraftEvent,
        Self::PublishedConfig,
        Self::PublishedEvent,
    ];

    /// Key suffix appended to the store's prefix.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::DraftConfig => "draftCfg",
            Self::PublishedConfig => "publishedCfg",
            Self::DraftEvent => "draftEvent",
            Self::PublishedEvent => "publishedEvent",
        }
    }
}

/// The two staged record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// [`PresentationConfig`]
    Config,
    /// [`EventOverride`]
    EventOverride,
}

impl RecordKind {
    /// Slot holding this kind's draft.
    #[must_use]
    pub const fn draft_slot(self) -> Slot {
        match self {
            Self::Config => Slot::DraftConfig,
            Self::EventOverride => Slot::DraftEvent,
        }
    }

    /// Slot holding this kind's published copy.
    #[must_use]
    pub const fn published_slot(self) -> Slot {
        match self {
            Self::Config => Slot::PublishedConfig,
            Self::EventOverride => Slot::PublishedEvent,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config => write!(f, "config"),
            Self::EventOverride => write!(f, "eventOverride"),
        }
    }
}

/// A record kind with draft and published lifecycles.
pub trait StagedRecord: Serialize + DeserializeOwned + Send + Sync {
    /// Which kind this is.
    const KIND: RecordKind;

    /// Record returned when a slot is empty or unreadable.
    fn fallback() -> Self;

    /// Record the time of a draft save. No-op for kinds without timestamps.
    fn stamp_draft(&mut self, _now: DateTime<Utc>) {}
}

impl StagedRecord for PresentationConfig {
    const KIND: RecordKind = RecordKind::Config;

    fn fallback() -> Self {
        Self::default()
    }

    fn stamp_draft(&mut self, now: DateTime<Utc>) {
        self.publish_state.draft_updated_at = now;
    }
}

impl StagedRecord for EventOverride {
    const KIND: RecordKind = RecordKind::EventOverride;

    fn fallback() -> Self {
        Self::default()
    }
}

/// Outcome of publishing both kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    /// Presentation config copy result
    pub config: Result<(), PersistenceError>,
    /// Event override copy result
    pub event_override: Result<(), PersistenceError>,
}

impl PublishReport {
    /// Returns `true` if both kinds were published.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.config.is_ok() && self.event_override.is_ok()
    }

    /// First failure, config before override.
    ///
    /// # Errors
    ///
    /// Returns the first kind's error if either copy failed.
    pub fn into_result(self) -> Result<(), PersistenceError> {
        self.config.and(self.event_override)
    }
}

/// Staged store for presentation config and event override.
///
/// Cheap to clone; clones share the same backend.
pub struct ConfigStore<S> {
    storage: Arc<S>,
    key_prefix: String,
    clock: Arc<dyn Clock>,
}

impl<S> Clone for ConfigStore<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            key_prefix: self.key_prefix.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S: KeyValueStorage> ConfigStore<S> {
    /// Create a store over `storage` using [`DEFAULT_KEY_PREFIX`].
    #[must_use]
    pub fn new(storage: S, clock: Arc<dyn Clock>) -> Self {
        Self {
            storage: Arc::new(storage),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            clock,
        }
    }

    /// Use a different key namespace.
    #[must_use]
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// The underlying backend.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Full storage key of a slot.
    #[must_use]
    pub fn key(&self, slot: Slot) -> String {
        format!("{}:{}", self.key_prefix, slot.suffix())
    }

    /// Load the draft of `R`, or its fallback.
    pub async fn load_draft<R: StagedRecord>(&self) -> R {
        self.load_slot(R::KIND.draft_slot()).await
    }

    /// Load the published copy of `R`, or its fallback.
    pub async fn load_published<R: StagedRecord>(&self) -> R {
        self.load_slot(R::KIND.published_slot()).await
    }

    /// Stamp and persist a draft.
    ///
    /// The stamp is written into `record`, so the caller holds exactly what was
    /// stored. Safe to retry.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the record could not be encoded or the
    /// backend rejected the write. The previous draft is kept.
    pub async fn save_draft<R: StagedRecord>(&self, record: &mut R) -> Result<(), PersistenceError> {
        record.stamp_draft(self.clock.now());
        let json = encode(record)?;
        let key = self.key(R::KIND.draft_slot());
        match self.storage.set(&key, &json).await {
            Ok(()) => {
                tracing::debug!(kind = %R::KIND, key = %key, "Saved draft");
                Ok(())
            },
            Err(e) => {
                tracing::warn!(kind = %R::KIND, key = %key, error = %e, "Failed to save draft");
                Err(e.into())
            },
        }
    }

    /// Copy the draft of `R` into its published slot.
    ///
    /// A parseable draft is copied verbatim. An absent or corrupt draft
    /// publishes the fallback record, exactly what [`Self::load_draft`] returns.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the draft could not be read or the
    /// published slot could not be written. The published slot keeps its
    /// previous value.
    pub async fn publish<R: StagedRecord>(&self) -> Result<(), PersistenceError> {
        let draft_key = self.key(R::KIND.draft_slot());
        let published_key = self.key(R::KIND.published_slot());

        let raw = self.storage.get(&draft_key).await.map_err(|e| {
            tracing::warn!(kind = %R::KIND, error = %e, "Failed to read draft for publish");
            PersistenceError::from(e)
        })?;

        let payload = match raw {
            Some(raw) if serde_json::from_str::<R>(&raw).is_ok() => raw,
            Some(_) => {
                tracing::warn!(kind = %R::KIND, "Draft is corrupt, publishing fallback");
                encode(&R::fallback())?
            },
            None => encode(&R::fallback())?,
        };

        if let Err(e) = self.storage.set(&published_key, &payload).await {
            tracing::warn!(kind = %R::KIND, error = %e, "Failed to write published slot");
            return Err(e.into());
        }

        tracing::info!(kind = %R::KIND, bytes = payload.len(), "Published record");
        Ok(())
    }

    /// [`Self::publish`] selected at runtime.
    ///
    /// # Errors
    ///
    /// Same as [`Self::publish`].
    pub async fn publish_kind(&self, kind: RecordKind) -> Result<(), PersistenceError> {
        match kind {
            RecordKind::Config => self.publish::<PresentationConfig>().await,
            RecordKind::EventOverride => self.publish::<EventOverride>().await,
        }
    }

    /// Publish both kinds as independent units.
    ///
    /// The override is published even when the config copy fails.
    pub async fn publish_all(&self) -> PublishReport {
        let config = self.publish::<PresentationConfig>().await;
        let event_override = self.publish::<EventOverride>().await;
        PublishReport {
            config,
            event_override,
        }
    }

    /// Restore both config slots to the default record and clear both override
    /// slots. Irreversible.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] at the first slot that could not be written.
    /// Slots before it have already been reset.
    pub async fn reset_to_default(&self) -> Result<(), PersistenceError> {
        let default_config = encode(&PresentationConfig::default())?;

        self.storage
            .set(&self.key(Slot::DraftConfig), &default_config)
            .await?;
        self.storage
            .set(&self.key(Slot::PublishedConfig), &default_config)
            .await?;
        self.storage.remove(&self.key(Slot::DraftEvent)).await?;
        self.storage.remove(&self.key(Slot::PublishedEvent)).await?;

        tracing::info!(prefix = %self.key_prefix, "Reset store to defaults");
        Ok(())
    }

    async fn load_slot<R: StagedRecord>(&self, slot: Slot) -> R {
        let key = self.key(slot);
        match self.storage.get(&key).await {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(key = %key, error = %e, "Stored snapshot is corrupt, using fallback");
                R::fallback()
            }),
            Ok(None) => R::fallback(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to read slot, using fallback");
                R::fallback()
            },
        }
    }
}

fn encode<R: StagedRecord>(record: &R) -> Result<String, PersistenceError> {
    serde_json::to_string(record).map_err(|e| PersistenceError::Serialization {
        kind: R::KIND,
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::mocks::FailingStorage;
    use premium_invite_testing::test_clock;

    fn store() -> ConfigStore<MemoryStorage> {
        ConfigStore::new(MemoryStorage::new(), Arc::new(test_clock()))
    }

    #[test]
    fn test_slot_keys() {
        let store = store();
        assert_eq!(store.key(Slot::DraftConfig), "premiumInvite:draftCfg");
        assert_eq!(store.key(Slot::PublishedConfig), "premiumInvite:publishedCfg");
        assert_eq!(store.key(Slot::DraftEvent), "premiumInvite:draftEvent");
        assert_eq!(store.key(Slot::PublishedEvent), "premiumInvite:publishedEvent");

        let custom = store.with_key_prefix("wedding42");
        assert_eq!(custom.key(Slot::DraftEvent), "wedding42:draftEvent");
    }

    #[tokio::test]
    async fn test_empty_store_loads_fallbacks() {
        let store = store();
        let config: PresentationConfig = store.load_draft().await;
        let over: EventOverride = store.load_published().await;
        assert_eq!(config, PresentationConfig::default());
        assert!(over.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_falls_back() {
        let store = store();
        store
            .storage()
            .set("premiumInvite:draftCfg", "{not json")
            .await
            .unwrap();
        let config: PresentationConfig = store.load_draft().await;
        assert_eq!(config, PresentationConfig::default());
    }

    #[tokio::test]
    async fn test_save_draft_stamps_time() {
        let store = store();
        let mut config = PresentationConfig::default();
        store.save_draft(&mut config).await.unwrap();
        assert_eq!(config.publish_state.draft_updated_at, test_clock().now());

        let loaded: PresentationConfig = store.load_draft().await;
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_publish_copies_draft_bytes() {
        let store = store();
        let mut over = EventOverride {
            venue_name: Some("Garden".to_string()),
            ..EventOverride::default()
        };
        store.save_draft(&mut over).await.unwrap();
        store.publish::<EventOverride>().await.unwrap();

        let draft = store.storage().get("premiumInvite:draftEvent").await.unwrap();
        let published = store
            .storage()
            .get("premiumInvite:publishedEvent")
            .await
            .unwrap();
        assert_eq!(draft, published);
    }

    #[tokio::test]
    async fn test_publish_of_corrupt_draft_writes_fallback() {
        let store = store();
        store
            .storage()
            .set("premiumInvite:draftEvent", "[1,2")
            .await
            .unwrap();
        store.publish_kind(RecordKind::EventOverride).await.unwrap();
        assert_eq!(
            store
                .storage()
                .get("premiumInvite:publishedEvent")
                .await
                .unwrap()
                .as_deref(),
            Some("{}")
        );
    }

    #[tokio::test]
    async fn test_failed_publish_keeps_previous_published() {
        let storage = FailingStorage::new(MemoryStorage::new());
        let store = ConfigStore::new(storage, Arc::new(test_clock()));

        let mut first = EventOverride {
            time_text: Some("18:00".to_string()),
            ..EventOverride::default()
        };
        store.save_draft(&mut first).await.unwrap();
        store.publish::<EventOverride>().await.unwrap();

        let mut second = EventOverride {
            time_text: Some("20:00".to_string()),
            ..EventOverride::default()
        };
        store.save_draft(&mut second).await.unwrap();
        store.storage().fail_writes_for("premiumInvite:publishedEvent");

        assert!(store.publish::<EventOverride>().await.is_err());
        let live: EventOverride = store.load_published().await;
        assert_eq!(live, first);
    }

    #[tokio::test]
    async fn test_publish_all_isolates_kinds() {
        let storage = FailingStorage::new(MemoryStorage::new());
        let store = ConfigStore::new(storage, Arc::new(test_clock()));

        let mut over = EventOverride {
            notes: Some("Parking on site".to_string()),
            ..EventOverride::default()
        };
        store.save_draft(&mut over).await.unwrap();
        store.storage().fail_writes_for("premiumInvite:publishedCfg");

        let report = store.publish_all().await;
        assert!(report.config.is_err());
        assert!(report.event_override.is_ok());
        assert!(!report.is_complete());

        let live: EventOverride = store.load_published().await;
        assert_eq!(live, over);
    }

    #[tokio::test]
    async fn test_unreadable_draft_fails_publish() {
        let storage = FailingStorage::new(MemoryStorage::new());
        let store = ConfigStore::new(storage, Arc::new(test_clock()));
        store.storage().fail_reads(true);

        assert!(store.publish::<PresentationConfig>().await.is_err());
        let loaded: PresentationConfig = store.load_draft().await;
        assert_eq!(loaded, PresentationConfig::default());
    }

    #[tokio::test]
    async fn test_reset_restores_defaults() {
        let store = store();
        let mut config = PresentationConfig::default();
        config.content.couple_names = "A & B".to_string();
        store.save_draft(&mut config).await.unwrap();
        let mut over = EventOverride {
            dress_code: Some("Casual".to_string()),
            ..EventOverride::default()
        };
        store.save_draft(&mut over).await.unwrap();
        store.publish_all().await.into_result().unwrap();

        store.reset_to_default().await.unwrap();

        let draft: PresentationConfig = store.load_draft().await;
        let live: PresentationConfig = store.load_published().await;
        assert_eq!(draft, PresentationConfig::default());
        assert_eq!(live, PresentationConfig::default());
        assert!(store.load_draft::<EventOverride>().await.is_empty());
        assert!(store.load_published::<EventOverride>().await.is_empty());
        assert_eq!(
            store.storage().get("premiumInvite:draftEvent").await.unwrap(),
            None
        );
    }
}
