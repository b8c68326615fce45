//! Operator editing session.
//!
//! Holds the in-memory draft, mirrors every change into the live preview and
//! turns store results into status messages for the editor chrome.

use crate::config::PresentationConfig;
use crate::error::PersistenceError;
use crate::event::{EventOverride, OverrideField};
use crate::preview::PreviewPublisher;
use crate::providers::KeyValueStorage;
use crate::stores::{ConfigStore, PublishReport};
use std::fmt;

/// Outcome of a save, publish or reset, as shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorStatus {
    /// Both drafts saved
    Saved,
    /// A draft could not be saved; nothing was published
    SaveFailed(PersistenceError),
    /// Both kinds published
    Published,
    /// At least one kind was not published
    PublishFailed(PublishReport),
    /// Store restored to defaults
    Reset,
    /// Reset did not complete
    ResetFailed(PersistenceError),
}

impl EditorStatus {
    /// Whether the operation fully succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Saved | Self::Published | Self::Reset)
    }

    /// Short message for the operator.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Saved => "Draft saved",
            Self::SaveFailed(_) => "Could not save the draft",
            Self::Published => "Published",
            Self::PublishFailed(_) => "Could not publish",
            Self::Reset => "Reset to default",
            Self::ResetFailed(_) => "Could not reset",
        }
    }
}

impl fmt::Display for EditorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SaveFailed(e) | Self::ResetFailed(e) => write!(f, "{}: {e}", self.message()),
            Self::PublishFailed(report) => {
                write!(f, "{}", self.message())?;
                if let Err(e) = &report.config {
                    write!(f, " (config: {e})")?;
                }
                if let Err(e) = &report.event_override {
                    write!(f, " (event details: {e})")?;
                }
                Ok(())
            },
            _ => f.write_str(self.message()),
        }
    }
}

/// An operator's editing session over one store.
pub struct EditorSession<S> {
    store: ConfigStore<S>,
    config: PresentationConfig,
    event_override: EventOverride,
    preview: PreviewPublisher,
}

impl<S: KeyValueStorage> EditorSession<S> {
    /// Open a session, loading both drafts.
    pub async fn open(store: ConfigStore<S>) -> Self {
        let config: PresentationConfig = store.load_draft().await;
        let event_override: EventOverride = store.load_draft().await;
        Self {
            store,
            config,
            event_override,
            preview: PreviewPublisher::new(),
        }
    }

    /// Current in-memory config.
    #[must_use]
    pub const fn config(&self) -> &PresentationConfig {
        &self.config
    }

    /// Current in-memory override.
    #[must_use]
    pub const fn event_override(&self) -> &EventOverride {
        &self.event_override
    }

    /// The preview publisher, for attaching a frame.
    pub fn preview_mut(&mut self) -> &mut PreviewPublisher {
        &mut self.preview
    }

    /// The backing store.
    #[must_use]
    pub const fn store(&self) -> &ConfigStore<S> {
        &self.store
    }

    /// Attach a preview frame and send it the current snapshot.
    pub fn attach_preview(&mut self, frame: tokio::sync::mpsc::UnboundedSender<serde_json::Value>) {
        self.preview.attach(frame);
        self.sync_preview();
    }

    /// Edit the config in place.
    pub fn update_config<F>(&mut self, f: F)
    where
        F: FnOnce(&mut PresentationConfig),
    {
        f(&mut self.config);
        self.sync_preview();
    }

    /// Set an override text field. Blank input defers to the base event.
    pub fn set_override_field(&mut self, field: OverrideField, value: &str) {
        self.event_override.set_text(field, value);
        self.sync_preview();
    }

    /// Set or clear the venue coordinates.
    pub fn set_coordinates(&mut self, lat: Option<f64>, lng: Option<f64>) {
        self.event_override.lat = lat;
        self.event_override.lng = lng;
        self.sync_preview();
    }

    /// Replace the whole override.
    pub fn replace_override(&mut self, event_override: EventOverride) {
        self.event_override = event_override;
        self.sync_preview();
    }

    /// Save both drafts.
    pub async fn save_draft(&mut self) -> EditorStatus {
        if let Err(e) = self.store.save_draft(&mut self.config).await {
            return EditorStatus::SaveFailed(e);
        }
        if let Err(e) = self.store.save_draft(&mut self.event_override).await {
            return EditorStatus::SaveFailed(e);
        }
        self.sync_preview();
        EditorStatus::Saved
    }

    /// Save, then publish both kinds independently.
    pub async fn publish(&mut self) -> EditorStatus {
        let saved = self.save_draft().await;
        if !saved.is_success() {
            return saved;
        }

        let report = self.store.publish_all().await;
        if report.is_complete() {
            tracing::info!("Published invitation");
            EditorStatus::Published
        } else {
            tracing::warn!(?report, "Publish incomplete");
            EditorStatus::PublishFailed(report)
        }
    }

    /// Restore the store to defaults and discard the in-memory draft.
    ///
    /// On failure the in-memory draft is kept.
    pub async fn reset(&mut self) -> EditorStatus {
        if let Err(e) = self.store.reset_to_default().await {
            return EditorStatus::ResetFailed(e);
        }
        self.config = PresentationConfig::default();
        self.event_override = EventOverride::default();
        self.sync_preview();
        EditorStatus::Reset
    }

    fn sync_preview(&self) {
        self.preview.push_snapshot(&self.config, &self.event_override);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::mocks::FailingStorage;
    use crate::preview::{PreviewSurface, preview_frame};
    use crate::stores::MemoryStorage;
    use premium_invite_testing::test_clock;
    use std::sync::Arc;

    async fn session() -> EditorSession<FailingStorage<MemoryStorage>> {
        let store = ConfigStore::new(FailingStorage::new(MemoryStorage::new()), Arc::new(test_clock()));
        EditorSession::open(store).await
    }

    #[tokio::test]
    async fn test_edits_stream_to_preview() {
        let mut session = session().await;
        let (frame, mut inbox) = preview_frame();
        session.attach_preview(frame);

        session.update_config(|c| c.content.couple_names = "A & B".to_string());
        session.set_override_field(OverrideField::VenueName, "Garden");
        session.set_coordinates(Some(32.1), Some(34.8));

        let mut surface = PreviewSurface::new();
        while let Ok(message) = inbox.try_recv() {
            surface.apply(&message);
        }
        assert_eq!(surface.config().content.couple_names, "A & B");
        assert_eq!(surface.event_override().venue_name.as_deref(), Some("Garden"));
        assert_eq!(surface.event_override().lat, Some(32.1));
    }

    #[tokio::test]
    async fn test_blank_override_field_defers() {
        let mut session = session().await;
        session.set_override_field(OverrideField::DressCode, "Formal");
        session.set_override_field(OverrideField::DressCode, "");
        assert_eq!(session.event_override().dress_code, None);
    }

    #[tokio::test]
    async fn test_save_failure_reports_and_skips_publish() {
        let mut session = session().await;
        session.store().storage().fail_writes_for("premiumInvite:draftCfg");
        session.update_config(|c| c.content.couple_names = "A & B".to_string());

        let status = session.publish().await;
        assert!(matches!(status, EditorStatus::SaveFailed(_)));
        assert!(status.to_string().starts_with("Could not save the draft"));

        let live: PresentationConfig = session.store().load_published().await;
        assert_eq!(live, PresentationConfig::default());
    }

    #[tokio::test]
    async fn test_publish_makes_draft_live() {
        let mut session = session().await;
        session.update_config(|c| c.content.couple_names = "A & B".to_string());
        session.set_override_field(OverrideField::TimeText, "19:30");

        assert_eq!(session.publish().await, EditorStatus::Published);

        let live: PresentationConfig = session.store().load_published().await;
        let live_override: EventOverride = session.store().load_published().await;
        assert_eq!(live.content.couple_names, "A & B");
        assert_eq!(live.publish_state.draft_updated_at, session.config().publish_state.draft_updated_at);
        assert_eq!(live_override.time_text.as_deref(), Some("19:30"));
    }

    #[tokio::test]
    async fn test_partial_publish_reported() {
        let mut session = session().await;
        session.store().storage().fail_writes_for("premiumInvite:publishedEvent");
        let status = session.publish().await;
        match &status {
            EditorStatus::PublishFailed(report) => {
                assert!(report.config.is_ok());
                assert!(report.event_override.is_err());
            },
            other => panic!("expected partial publish, got {other:?}"),
        }
        assert!(status.to_string().contains("event details"));
    }

    #[tokio::test]
    async fn test_reset_discards_local_draft() {
        let mut session = session().await;
        session.update_config(|c| c.content.couple_names = "A & B".to_string());
        session.set_override_field(OverrideField::Notes, "Parking");
        session.save_draft().await;

        assert_eq!(session.reset().await, EditorStatus::Reset);
        assert_eq!(session.config(), &PresentationConfig::default());
        assert!(session.event_override().is_empty());

        let reopened = EditorSession::open(session.store().clone()).await;
        assert_eq!(reopened.config(), &PresentationConfig::default());
    }

    #[tokio::test]
    async fn test_failed_reset_keeps_local_draft() {
        let mut session = session().await;
        session.update_config(|c| c.content.couple_names = "Keep".to_string());
        session.store().storage().fail_all_writes(true);

        assert!(matches!(session.reset().await, EditorStatus::ResetFailed(_)));
        assert_eq!(session.config().content.couple_names, "Keep");
    }
}
