//! Invitation studio walkthrough.
//!
//! Edits a draft with a live preview attached, publishes it, then loads the
//! guest view and answers the RSVP wizard, logging each step.
//!
//! ```bash
//! RUST_LOG=debug INVITE_STORAGE=file INVITE_STORAGE_DIR=/tmp/invite cargo run --bin invite-studio
//! ```

use anyhow::{Context, Result};
use chrono::Duration;
use premium_invite::event::OverrideField;
use premium_invite::maps::{Destination, google_maps_url, waze_url};
use premium_invite::preview::{PreviewSurface, preview_frame};
use premium_invite::providers::{EventSource, GuestResponseFlow, Validation};
use premium_invite::stores::ConfiguredStorage;
use premium_invite::wizard::WizardView;
use premium_invite::{
    BaseEvent, ConfigStore, EditorSession, GuestInvitation, StudioSettings, SubmitError,
    WizardAction, WizardForm, WizardReducer, WizardState,
};
use premium_invite_core::environment::{Clock, SystemClock};
use premium_invite_runtime::Store;
use std::sync::{Arc, Mutex, PoisonError};
use tracing_subscriber::EnvFilter;

/// Base event as the event service would supply it.
struct StaticEventSource(BaseEvent);

impl EventSource for StaticEventSource {
    fn current(&self) -> Option<BaseEvent> {
        Some(self.0.clone())
    }
}

#[derive(Default)]
struct DemoFlowState {
    form: WizardForm,
    submitted: bool,
    editing: bool,
}

/// Guest flow that keeps the form in memory and logs submissions.
#[derive(Default)]
struct DemoGuestFlow {
    state: Mutex<DemoFlowState>,
}

impl DemoGuestFlow {
    fn with_state<T>(&self, f: impl FnOnce(&mut DemoFlowState) -> T) -> T {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}

impl GuestResponseFlow for DemoGuestFlow {
    fn form(&self) -> WizardForm {
        self.with_state(|s| s.form.clone())
    }

    fn set_form(&self, form: WizardForm) {
        self.with_state(|s| s.form = form);
    }

    fn validate(&self) -> Validation {
        self.with_state(|s| {
            if s.form.notes.chars().count() > 500 {
                Validation::fail("Notes are limited to 500 characters.")
            } else {
                Validation::ok()
            }
        })
    }

    async fn submit(&self) -> Result<(), SubmitError> {
        self.with_state(|s| {
            tracing::info!(form = ?s.form, "Response received");
            s.submitted = true;
            s.editing = false;
        });
        Ok(())
    }

    fn has_submitted(&self) -> bool {
        self.with_state(|s| s.submitted)
    }

    fn is_editing(&self) -> bool {
        self.with_state(|s| s.editing)
    }

    fn start_edit(&self) {
        self.with_state(|s| s.editing = true);
    }

    fn cancel_edit(&self) {
        self.with_state(|s| s.editing = false);
    }
}

fn base_event() -> BaseEvent {
    BaseEvent {
        date_text: Some("Saturday, February 15, 2026".to_string()),
        time_text: Some("18:00".to_string()),
        venue_name: Some("Grand Ballroom".to_string()),
        address_text: Some("123 Wedding Street, Tel Aviv".to_string()),
        address: None,
        dress_code: Some("Formal".to_string()),
        notes: Some(String::new()),
        lat: Some(32.0853),
        lng: Some(34.7818),
        rsvp_deadline_iso: Some("2026-02-01T21:00:00.000Z".to_string()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = StudioSettings::from_env().context("Invalid studio settings")?;
    tracing::info!(backend = %settings.backend, prefix = %settings.key_prefix, "Starting invitation studio");

    let storage = ConfiguredStorage::connect(&settings.backend)
        .await
        .context("Failed to open storage")?;
    tracing::info!(backend = storage.name(), "Storage ready");

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let store = ConfigStore::new(storage, Arc::clone(&clock)).with_key_prefix(settings.key_prefix);

    // Editor with a live preview frame attached
    let mut editor = EditorSession::open(store.clone()).await;
    let (frame, mut inbox) = preview_frame();
    let preview_store = store.clone();
    let preview = tokio::spawn(async move {
        let mut surface = PreviewSurface::new();
        surface.mount(&preview_store).await;
        let applied = surface.run(&mut inbox).await;
        (surface, applied)
    });
    editor.attach_preview(frame);

    editor.update_config(|c| c.content.couple_names = "Noa & Itai".to_string());
    editor.set_override_field(OverrideField::VenueName, "Garden Terrace");
    editor.set_override_field(OverrideField::WazeLink, "https://waze.com/ul?q=Garden%20Terrace");
    let deadline = (clock.now() + Duration::days(30)).to_rfc3339();
    editor.set_override_field(OverrideField::RsvpDeadline, &deadline);

    let status = editor.publish().await;
    tracing::info!(status = %status, "Editor publish");

    editor.preview_mut().detach();
    let (surface, applied) = preview.await.context("Preview task failed")?;
    tracing::info!(
        applied,
        couple_names = %surface.config().content.couple_names,
        venue = ?surface.effective_event(&base_event()).venue_name,
        "Preview surface settled"
    );

    // Guest view of the published invitation
    let source = StaticEventSource(base_event());
    let invitation = GuestInvitation::load_from_source(&store, &source, Arc::clone(&clock))
        .await
        .context("Base event not ready")?;
    tracing::info!(
        couple_names = %invitation.config.content.couple_names,
        venue = ?invitation.event.venue_name,
        deadline_passed = invitation.deadline_passed(),
        "Guest invitation loaded"
    );
    for action in invitation.event.navigation_actions() {
        tracing::info!(?action, "Navigation action");
    }
    if let Some(destination) = Destination::for_event(&invitation.event) {
        tracing::info!(google = %google_maps_url(&destination), waze = %waze_url(&destination), "Directions");
    }

    // RSVP wizard
    let flow = Arc::new(DemoGuestFlow::default());
    let wizard = Store::new(
        WizardState::default(),
        WizardReducer::new(),
        invitation.wizard_environment(Arc::clone(&flow)),
    );
    for action in [
        WizardAction::SetAttending(true),
        WizardAction::Next,
        WizardAction::IncrementGuests,
        WizardAction::IncrementGuests,
        WizardAction::Next,
        WizardAction::SetDietary("vegetarian".to_string()),
        WizardAction::Next,
    ] {
        wizard.send(action).await?;
    }

    let state = wizard.state(WizardState::clone).await;
    let view = WizardView::resolve(&state, wizard.environment());
    tracing::info!(
        ?view,
        title = ?view.title(&invitation.config.content),
        submitted = flow.has_submitted(),
        "Wizard finished"
    );

    Ok(())
}
