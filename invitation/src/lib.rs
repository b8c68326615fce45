//! # Premium Invitation Studio
//!
//! Draft/publish configuration, live preview and guest RSVP flow for a
//! personalized invitation.
//!
//! ## Architecture
//!
//! ```text
//! Editor ──save_draft──▶ ConfigStore ──publish──▶ published slots
//!   │                        │                         │
//!   └─PREVIEW_UPDATE─▶ PreviewSurface           GuestInvitation
//!                            │                         │
//!                            └────── merge(base, override) ──▶ WizardReducer
//! ```
//!
//! - [`stores::ConfigStore`] keeps two staged record kinds (presentation config and
//!   event override), each with a draft and a published slot. Publishing copies the
//!   draft into the published slot, one kind at a time.
//! - [`preview`] pushes whole draft snapshots from the editor into an isolated
//!   preview surface. Only messages tagged `PREVIEW_UPDATE` are applied.
//! - [`merge::merge`] overlays the sparse override onto externally-owned event data.
//! - [`wizard`] drives the guest response flow as a reducer over an explicit
//!   transition table, reading and writing the host-owned form through
//!   [`providers::GuestResponseFlow`].
//!
//! ## Example: publish and view
//!
//! ```rust,ignore
//! use premium_invite::{ConfigStore, PresentationConfig, stores::MemoryStorage};
//!
//! let store = ConfigStore::new(MemoryStorage::new(), Arc::new(SystemClock));
//!
//! let mut draft: PresentationConfig = store.load_draft().await;
//! draft.content.couple_names = "A & B".to_string();
//! store.save_draft(&mut draft).await?;
//! store.publish::<PresentationConfig>().await?;
//!
//! let live: PresentationConfig = store.load_published().await;
//! assert_eq!(live.content.couple_names, "A & B");
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

pub mod config;
pub mod editor;
pub mod error;
pub mod event;
pub mod guest;
pub mod maps;
pub mod merge;
pub mod preview;
pub mod providers;
pub mod settings;
pub mod stores;
pub mod wizard;

#[cfg(any(test, feature = "test-utils"))]
pub mod mocks;

// Re-export main types for convenience
pub use config::PresentationConfig;
pub use editor::{EditorSession, EditorStatus};
pub use error::{PersistenceError, StorageError, SubmitError};
pub use event::{BaseEvent, EffectiveEvent, EventOverride};
pub use guest::GuestInvitation;
pub use preview::{PreviewPublisher, PreviewSurface, PreviewUpdate};
pub use settings::StudioSettings;
pub use stores::{ConfigStore, RecordKind};
pub use wizard::{WizardAction, WizardForm, WizardReducer, WizardState, WizardStep};
