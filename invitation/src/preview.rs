//! Live preview channel.
//!
//! The editor pushes whole snapshots of its in-memory draft into an isolated
//! preview surface, without a round trip through the store:
//!
//! ```text
//! EditorSession ──PreviewPublisher::push──▶ mpsc ──▶ PreviewSurface::run ──▶ apply
//! ```
//!
//! Messages travel as untyped JSON. The surface checks the `type` tag before
//! looking at anything else and deserializes each present key on its own, so
//! a malformed or foreign message can never corrupt the current snapshot.
//! Delivery is fire-and-forget; pushes to a frame that is not attached are
//! dropped.

use crate::config::PresentationConfig;
use crate::event::{BaseEvent, EffectiveEvent, EventOverride};
use crate::merge::merge;
use crate::providers::KeyValueStorage;
use crate::stores::ConfigStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// Type tag of preview update messages.
pub const PREVIEW_UPDATE: &str = "PREVIEW_UPDATE";

/// Editor-to-preview message envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewUpdate {
    /// Always [`PREVIEW_UPDATE`]
    #[serde(rename = "type")]
    pub kind: String,
    /// Replacement config, if changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<PresentationConfig>,
    /// Replacement override, if changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_override: Option<EventOverride>,
}

impl PreviewUpdate {
    /// Build an update carrying the given snapshots.
    #[must_use]
    pub fn new(config: Option<PresentationConfig>, event_override: Option<EventOverride>) -> Self {
        Self {
            kind: PREVIEW_UPDATE.to_string(),
            config,
            event_override,
        }
    }
}

/// Create a preview frame: the sender half goes to
/// [`PreviewPublisher::attach`], the receiver half to [`PreviewSurface::run`].
#[must_use]
pub fn preview_frame() -> (UnboundedSender<Value>, UnboundedReceiver<Value>) {
    unbounded_channel()
}

/// Editor side of the channel.
#[derive(Debug, Clone, Default)]
pub struct PreviewPublisher {
    frame: Option<UnboundedSender<Value>>,
}

impl PreviewPublisher {
    /// A publisher with no frame attached.
    #[must_use]
    pub const fn new() -> Self {
        Self { frame: None }
    }

    /// Attach a preview frame, replacing any previous one.
    pub fn attach(&mut self, frame: UnboundedSender<Value>) {
        self.frame = Some(frame);
    }

    /// Detach the current frame.
    pub fn detach(&mut self) {
        self.frame = None;
    }

    /// Whether pushes currently reach a live frame.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.frame.as_ref().is_some_and(|frame| !frame.is_closed())
    }

    /// Push an update.
    ///
    /// Returns `false` if the update was dropped because no live frame is
    /// attached.
    pub fn push(&self, update: &PreviewUpdate) -> bool {
        let Some(frame) = &self.frame else {
            tracing::trace!("No preview frame attached, dropping update");
            return false;
        };

        let message = match serde_json::to_value(update) {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to encode preview update");
                return false;
            },
        };

        if frame.send(message).is_err() {
            tracing::debug!("Preview frame closed, dropping update");
            return false;
        }
        true
    }

    /// Push both snapshots.
    pub fn push_snapshot(&self, config: &PresentationConfig, event_override: &EventOverride) -> bool {
        self.push(&PreviewUpdate::new(
            Some(config.clone()),
            Some(event_override.clone()),
        ))
    }
}

/// Result of handling one incoming message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The message carried the expected tag.
    Applied {
        /// The config snapshot was replaced
        config: bool,
        /// The override snapshot was replaced
        event_override: bool,
    },
    /// The message was not a preview update and was ignored.
    Rejected,
}

/// Preview side of the channel.
#[derive(Debug, Clone, Default)]
pub struct PreviewSurface {
    config: PresentationConfig,
    event_override: EventOverride,
    config_pushed: bool,
    event_override_pushed: bool,
}

impl PreviewSurface {
    /// A surface showing the default record and no override.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial pull of both drafts from the store.
    ///
    /// A slot that already received a push keeps the pushed value.
    pub async fn mount<S: KeyValueStorage>(&mut self, store: &ConfigStore<S>) {
        let config: PresentationConfig = store.load_draft().await;
        let event_override: EventOverride = store.load_draft().await;

        if !self.config_pushed {
            self.config = config;
        }
        if !self.event_override_pushed {
            self.event_override = event_override;
        }
        tracing::debug!("Preview surface mounted");
    }

    /// Handle one message.
    pub fn apply(&mut self, message: &Value) -> ApplyOutcome {
        if message.get("type").and_then(Value::as_str) != Some(PREVIEW_UPDATE) {
            tracing::debug!("Ignoring message without preview update tag");
            return ApplyOutcome::Rejected;
        }

        let config = match decode_key::<PresentationConfig>(message, "config") {
            Some(config) => {
                self.config = config;
                self.config_pushed = true;
                true
            },
            None => false,
        };

        let event_override = match decode_key::<EventOverride>(message, "eventOverride") {
            Some(event_override) => {
                self.event_override = event_override;
                self.event_override_pushed = true;
                true
            },
            None => false,
        };

        ApplyOutcome::Applied {
            config,
            event_override,
        }
    }

    /// Apply messages in arrival order until every sender is gone.
    ///
    /// Returns the number of accepted messages.
    pub async fn run(&mut self, inbox: &mut UnboundedReceiver<Value>) -> usize {
        let mut applied = 0;
        while let Some(message) = inbox.recv().await {
            if self.apply(&message) != ApplyOutcome::Rejected {
                applied += 1;
            }
        }
        tracing::debug!(applied, "Preview channel closed");
        applied
    }

    /// Current config snapshot.
    #[must_use]
    pub const fn config(&self) -> &PresentationConfig {
        &self.config
    }

    /// Current override snapshot.
    #[must_use]
    pub const fn event_override(&self) -> &EventOverride {
        &self.event_override
    }

    /// Event details as the preview renders them.
    #[must_use]
    pub fn effective_event(&self, base: &BaseEvent) -> EffectiveEvent {
        merge(base, &self.event_override)
    }
}

fn decode_key<T: for<'de> Deserialize<'de>>(message: &Value, key: &str) -> Option<T> {
    let value = message.get(key).filter(|v| !v.is_null())?;
    match T::deserialize(value) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            tracing::debug!(key, error = %e, "Ignoring malformed preview payload");
            None
        },
    }
}
