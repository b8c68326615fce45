//! Integration tests for the draft/publish lifecycle.

#![allow(clippy::unwrap_used)]

use premium_invite::config::DEFAULT_COUPLE_NAMES;
use premium_invite::merge::merge;
use premium_invite::mocks::FailingStorage;
use premium_invite::providers::KeyValueStorage;
use premium_invite::stores::{FileStorage, MemoryStorage};
use premium_invite::{BaseEvent, ConfigStore, EventOverride, PresentationConfig};
use premium_invite_testing::test_clock;
use std::sync::Arc;

fn memory_store() -> ConfigStore<MemoryStorage> {
    ConfigStore::new(MemoryStorage::new(), Arc::new(test_clock()))
}

#[tokio::test]
async fn test_publish_then_load_published_returns_saved_draft() {
    let store = memory_store();
    let mut draft = PresentationConfig::default();
    draft.content.couple_names = "A & B".to_string();
    draft.style.card_radius_px = 24;
    store.save_draft(&mut draft).await.unwrap();

    store.publish::<PresentationConfig>().await.unwrap();

    let live: PresentationConfig = store.load_published().await;
    assert_eq!(live, draft);
    assert_eq!(
        store.storage().get("premiumInvite:draftCfg").await.unwrap(),
        store.storage().get("premiumInvite:publishedCfg").await.unwrap()
    );
}

#[tokio::test]
async fn test_never_saved_draft_defaults_to_stock_names() {
    let store = memory_store();
    let draft: PresentationConfig = store.load_draft().await;
    assert_eq!(draft.content.couple_names, DEFAULT_COUPLE_NAMES);

    // Publishing an absent draft publishes the default record.
    store.publish::<PresentationConfig>().await.unwrap();
    let live: PresentationConfig = store.load_published().await;
    assert_eq!(live, PresentationConfig::default());
}

#[tokio::test]
async fn test_editing_after_publish_leaves_live_version() {
    let store = memory_store();
    let mut draft = PresentationConfig::default();
    draft.content.couple_names = "A & B".to_string();
    store.save_draft(&mut draft).await.unwrap();
    store.publish::<PresentationConfig>().await.unwrap();

    draft.content.couple_names = "C & D".to_string();
    store.save_draft(&mut draft).await.unwrap();

    let live: PresentationConfig = store.load_published().await;
    let current: PresentationConfig = store.load_draft().await;
    assert_eq!(live.content.couple_names, "A & B");
    assert_eq!(current.content.couple_names, "C & D");
}

#[tokio::test]
async fn test_reset_from_any_state_restores_defaults() {
    let store = memory_store();
    store
        .storage()
        .set("premiumInvite:publishedCfg", "garbage")
        .await
        .unwrap();
    let mut over = EventOverride {
        venue_name: Some("Somewhere".to_string()),
        ..EventOverride::default()
    };
    store.save_draft(&mut over).await.unwrap();
    store.publish::<EventOverride>().await.unwrap();

    store.reset_to_default().await.unwrap();

    assert_eq!(store.load_draft::<PresentationConfig>().await, PresentationConfig::default());
    assert_eq!(store.load_published::<PresentationConfig>().await, PresentationConfig::default());
    assert_eq!(store.load_draft::<EventOverride>().await, EventOverride::default());
    assert_eq!(store.load_published::<EventOverride>().await, EventOverride::default());
}

#[tokio::test]
async fn test_waze_link_flows_from_published_override() {
    let store = memory_store();
    let base = BaseEvent {
        venue_name: Some("Grand Ballroom".to_string()),
        ..BaseEvent::default()
    };

    let live: EventOverride = store.load_published().await;
    assert_eq!(merge(&base, &live).waze_link, None);

    let mut over = EventOverride {
        waze_link: Some("https://waze.com/x".to_string()),
        ..EventOverride::default()
    };
    store.save_draft(&mut over).await.unwrap();
    store.publish::<EventOverride>().await.unwrap();

    let live: EventOverride = store.load_published().await;
    let effective = merge(&base, &live);
    assert_eq!(effective.waze_link.as_deref(), Some("https://waze.com/x"));
    assert_eq!(effective.venue_name.as_deref(), Some("Grand Ballroom"));
}

#[tokio::test]
async fn test_quota_failure_is_retryable() {
    let store = ConfigStore::new(FailingStorage::new(MemoryStorage::new()), Arc::new(test_clock()));
    store.storage().fail_all_writes(true);

    let mut draft = PresentationConfig::default();
    draft.content.couple_names = "A & B".to_string();
    assert!(store.save_draft(&mut draft).await.is_err());
    assert_eq!(store.load_draft::<PresentationConfig>().await, PresentationConfig::default());

    store.storage().heal();
    store.save_draft(&mut draft).await.unwrap();
    assert_eq!(store.load_draft::<PresentationConfig>().await, draft);
}

#[tokio::test]
async fn test_file_backend_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let mut draft = PresentationConfig::default();
    draft.content.couple_names = "A & B".to_string();

    {
        let storage = FileStorage::open(dir.path()).await.unwrap();
        let store = ConfigStore::new(storage, Arc::new(test_clock()));
        store.save_draft(&mut draft).await.unwrap();
        store.publish_all().await.into_result().unwrap();
    }

    let storage = FileStorage::open(dir.path()).await.unwrap();
    let store = ConfigStore::new(storage, Arc::new(test_clock()));
    let live: PresentationConfig = store.load_published().await;
    assert_eq!(live, draft);
    assert!(store.load_published::<EventOverride>().await.is_empty());
}
