//! Guest-facing invitation.
//!
//! Assembles what a guest sees: the published config, the published override
//! merged over the base event, and the RSVP deadline that gates the wizard.

use crate::config::PresentationConfig;
use crate::event::{BaseEvent, EffectiveEvent, EventOverride};
use crate::merge::merge;
use crate::providers::{EventSource, GuestResponseFlow, KeyValueStorage};
use crate::stores::ConfigStore;
use crate::wizard::WizardEnvironment;
use crate::wizard::environment::deadline_passed;
use chrono::{DateTime, NaiveDate, Utc};
use premium_invite_core::environment::Clock;
use std::sync::Arc;

/// Parse an RSVP deadline.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (midnight UTC).
/// Anything else yields `None`, which never locks the wizard.
#[must_use]
pub fn parse_deadline(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    tracing::warn!(deadline = raw, "Unparseable RSVP deadline, leaving RSVP open");
    None
}

/// The published invitation as one guest sees it.
pub struct GuestInvitation {
    /// Published presentation config
    pub config: PresentationConfig,
    /// Published override merged over the base event
    pub event: EffectiveEvent,
    /// Effective RSVP deadline
    pub rsvp_deadline: Option<DateTime<Utc>>,
    clock: Arc<dyn Clock>,
}

impl GuestInvitation {
    /// Load the published records and merge them over `base`.
    pub async fn load<S: KeyValueStorage>(
        store: &ConfigStore<S>,
        base: &BaseEvent,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let config: PresentationConfig = store.load_published().await;
        let event_override: EventOverride = store.load_published().await;
        Self::from_parts(config, &event_override, base, clock)
    }

    /// Like [`Self::load`], reading the base event from a source.
    ///
    /// Returns `None` while the source is not ready.
    pub async fn load_from_source<S, E>(
        store: &ConfigStore<S>,
        source: &E,
        clock: Arc<dyn Clock>,
    ) -> Option<Self>
    where
        S: KeyValueStorage,
        E: EventSource,
    {
        let Some(base) = source.current() else {
            tracing::debug!("Base event not ready");
            return None;
        };
        Some(Self::load(store, &base, clock).await)
    }

    /// Assemble from already-loaded records.
    #[must_use]
    pub fn from_parts(
        config: PresentationConfig,
        event_override: &EventOverride,
        base: &BaseEvent,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let event = merge(base, event_override);
        let rsvp_deadline = event.rsvp_deadline_iso.as_deref().and_then(parse_deadline);
        Self {
            config,
            event,
            rsvp_deadline,
            clock,
        }
    }

    /// Whether the RSVP deadline is strictly in the past.
    #[must_use]
    pub fn deadline_passed(&self) -> bool {
        deadline_passed(self.rsvp_deadline, self.clock.as_ref())
    }

    /// Whether guests may still respond or change a response.
    #[must_use]
    pub fn can_edit(&self) -> bool {
        !self.deadline_passed()
    }

    /// Environment for driving the wizard with this invitation's deadline.
    #[must_use]
    pub fn wizard_environment<F: GuestResponseFlow>(&self, flow: Arc<F>) -> WizardEnvironment<F> {
        WizardEnvironment::new(flow, Arc::clone(&self.clock)).with_deadline(self.rsvp_deadline)
    }
}
