//! Integration tests for the Redis storage backend using testcontainers.
//!
//! # Requirements
//!
//! Docker must be running. Run with `cargo test -p premium-invite -- --ignored`.

#![allow(clippy::expect_used)] // Test code uses expect for clear failure messages

use premium_invite::providers::KeyValueStorage;
use premium_invite::settings::StorageBackend;
use premium_invite::stores::{ConfiguredStorage, RedisStorage};
use premium_invite::{ConfigStore, EventOverride, PresentationConfig};
use premium_invite_testing::test_clock;
use std::sync::Arc;
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::redis::{REDIS_PORT, Redis};

/// Start a Redis container and return it with its connection URL.
///
/// The container must be kept alive for the duration of the test.
async fn start_redis() -> (ContainerAsync<Redis>, String) {
    let container = Redis::default()
        .start()
        .await
        .expect("Failed to start redis container");
    let port = container
        .get_host_port_ipv4(REDIS_PORT)
        .await
        .expect("Failed to get redis port");
    (container, format!("redis://127.0.0.1:{port}"))
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_redis_round_trip() {
    let (_container, url) = start_redis().await;
    let storage = RedisStorage::new(&url).await.expect("Failed to connect");

    assert_eq!(storage.get("premiumInvite:missing").await.expect("get"), None);
    storage.set("premiumInvite:slot", "{\"a\":1}").await.expect("set");
    assert_eq!(
        storage.get("premiumInvite:slot").await.expect("get").as_deref(),
        Some("{\"a\":1}")
    );
    storage.remove("premiumInvite:slot").await.expect("remove");
    assert_eq!(storage.get("premiumInvite:slot").await.expect("get"), None);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_redis_backend_survives_reconnect() {
    let (_container, url) = start_redis().await;
    let backend = StorageBackend::Redis { url };
    let mut draft = PresentationConfig::default();
    draft.content.couple_names = "A & B".to_string();
    let over = EventOverride {
        venue_name: Some("Garden".to_string()),
        ..EventOverride::default()
    };

    {
        let storage = ConfiguredStorage::connect(&backend).await.expect("Failed to connect");
        assert_eq!(storage.name(), "redis");
        let store = ConfigStore::new(storage, Arc::new(test_clock()));
        store.save_draft(&mut draft).await.expect("save config");
        store.save_draft(&mut over.clone()).await.expect("save override");
        store.publish_all().await.into_result().expect("publish");
    }

    let storage = ConfiguredStorage::connect(&backend).await.expect("Failed to reconnect");
    let store = ConfigStore::new(storage, Arc::new(test_clock()));
    assert_eq!(store.load_published::<PresentationConfig>().await, draft);
    assert_eq!(store.load_published::<EventOverride>().await, over);

    store.reset_to_default().await.expect("reset");
    assert_eq!(store.load_published::<PresentationConfig>().await, PresentationConfig::default());
    assert!(store.load_published::<EventOverride>().await.is_empty());
    assert!(store.load_draft::<EventOverride>().await.is_empty());
}
