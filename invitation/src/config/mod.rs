//! Presentation configuration record.
//!
//! The record is persisted as a camelCase JSON snapshot. Every field is
//! required, so a snapshot that deserializes is a complete record; anything
//! else is treated by the store as absent.

mod defaults;

pub use defaults::DEFAULT_COUPLE_NAMES;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current schema version of [`PresentationConfig`].
pub const CONFIG_VERSION: u32 = 1;

/// Versioned presentation configuration for one invitation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationConfig {
    /// Schema version.
    pub version: u32,
    /// Copy shown to guests.
    pub content: Content,
    /// Opening animation, background audio and hero image.
    pub media: Media,
    /// Fonts, colors and density.
    pub style: Style,
    /// Draft and publish timestamps.
    pub publish_state: PublishState,
}

/// Guest-facing copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Couple names in the hero section.
    pub couple_names: String,
    /// Initials used by the opening monogram.
    pub monogram_initials: String,
    /// Small headline above the names.
    pub intro_headline: String,
    /// Free welcome text.
    pub welcome_text: String,
    /// Event detail labels and hints.
    pub labels: Labels,
    /// RSVP wizard strings.
    pub rsvp: RsvpText,
    /// Confirmation view strings.
    pub thank_you: ThankYouText,
    /// Footer line.
    pub footer_text: String,
    /// Order in which sections render.
    pub section_order: Vec<SectionKey>,
}

/// Labels for the event details card and the opening overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Labels {
    pub date: String,
    pub time: String,
    pub venue: String,
    pub address: String,
    pub dress_code: String,
    pub notes: String,
    pub scroll_hint: String,
    pub music_play_hint: String,
    pub tap_to_unmute: String,
    pub skip_button: String,
}

/// Strings used by the response wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct RsvpText {
    pub open_button: String,
    pub step_next: String,
    pub step_back: String,
    pub submit: String,
    pub edit_response: String,
    pub question_attending: String,
    pub yes_option: String,
    pub no_option: String,
    pub question_guests: String,
    pub guests_subtitle: String,
    pub question_final: String,
    pub dietary_placeholder: String,
    pub notes_placeholder: String,
    pub not_attending_title: String,
    pub not_attending_body: String,
    pub not_attending_submit: String,
    pub children_checkbox_label: String,
    pub children_count_label: String,
}

/// Strings for the confirmation view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThankYouText {
    /// Heading after a positive response.
    pub title: String,
    /// Body after a positive response.
    pub body: String,
    /// Shown instead of the wizard once the RSVP deadline passed.
    pub deadline_passed: String,
}

/// Page sections that can be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum SectionKey {
    Hero,
    Welcome,
    EventDetails,
    Rsvp,
    Footer,
}

/// Media assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    /// Opening animation.
    pub opening: OpeningAsset,
    /// Background audio.
    pub audio: AudioAsset,
    /// Optional background image behind the hero section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_gif_url: Option<String>,
    /// Scale factor for the hero image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_gif_scale: Option<f64>,
}

/// Opening animation variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OpeningAsset {
    /// No opening animation.
    None,
    /// Video played before the invitation opens.
    Video {
        /// Asset URL
        url: String,
    },
    /// Lottie animation played before the invitation opens.
    Lottie {
        /// Asset URL
        url: String,
    },
}

/// Background audio variant.
///
/// Persisted as `{"enabled": false}` or
/// `{"enabled": true, "url", "startTimeSec", "volume", "fadeInMs"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AudioAssetRepr", into = "AudioAssetRepr")]
pub enum AudioAsset {
    /// No background audio.
    Disabled,
    /// Background audio track.
    Enabled(AudioTrack),
}

/// Background audio track settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioTrack {
    /// Asset URL.
    pub url: String,
    /// Playback start offset in seconds.
    pub start_time_sec: f64,
    /// Volume in `[0, 1]`.
    pub volume: f64,
    /// Fade-in duration in milliseconds.
    pub fade_in_ms: u32,
}

impl AudioAsset {
    /// Build an enabled track, clamping `volume` into `[0, 1]`.
    #[must_use]
    pub fn enabled(url: impl Into<String>, start_time_sec: f64, volume: f64, fade_in_ms: u32) -> Self {
        Self::Enabled(AudioTrack {
            url: url.into(),
            start_time_sec: start_time_sec.max(0.0),
            volume: clamp_volume(volume),
            fade_in_ms,
        })
    }
}

fn clamp_volume(volume: f64) -> f64 {
    if volume.is_nan() { 0.0 } else { volume.clamp(0.0, 1.0) }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AudioAssetRepr {
    enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_time_sec: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fade_in_ms: Option<u32>,
}

impl TryFrom<AudioAssetRepr> for AudioAsset {
    type Error = String;

    fn try_from(repr: AudioAssetRepr) -> Result<Self, Self::Error> {
        if !repr.enabled {
            return Ok(Self::Disabled);
        }
        let url = repr.url.ok_or_else(|| "enabled audio requires a url".to_string())?;
        let volume = repr.volume.unwrap_or(1.0);
        if !(0.0..=1.0).contains(&volume) {
            return Err(format!("audio volume {volume} outside [0, 1]"));
        }
        Ok(Self::Enabled(AudioTrack {
            url,
            start_time_sec: repr.start_time_sec.unwrap_or(0.0),
            volume,
            fade_in_ms: repr.fade_in_ms.unwrap_or(0),
        }))
    }
}

impl From<AudioAsset> for AudioAssetRepr {
    fn from(asset: AudioAsset) -> Self {
        match asset {
            AudioAsset::Disabled => Self {
                enabled: false,
                url: None,
                start_time_sec: None,
                volume: None,
                fade_in_ms: None,
            },
            AudioAsset::Enabled(track) => Self {
                enabled: true,
                url: Some(track.url),
                start_time_sec: Some(track.start_time_sec),
                volume: Some(track.volume),
                fade_in_ms: Some(track.fade_in_ms),
            },
        }
    }
}

/// Visual style settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    /// Font for headings.
    pub heading_font: HeadingFont,
    /// Font for body text.
    pub body_font: BodyFont,
    /// Primary color as a CSS hex string.
    pub primary_color: String,
    /// Accent color as a CSS hex string.
    pub secondary_color: String,
    /// Background texture.
    pub texture: Texture,
    /// Card corner radius in pixels.
    pub card_radius_px: u32,
    /// Spacing density.
    pub spacing: SpacingDensity,
    /// Button style.
    pub button_style: ButtonStyle,
    /// Per-role font scale multipliers.
    pub font_size: FontScale,
}

/// Heading font choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum HeadingFont {
    #[serde(rename = "Playfair Display")]
    PlayfairDisplay,
    #[serde(rename = "Cormorant Garamond")]
    CormorantGaramond,
    Assistant,
    Rubik,
    #[serde(rename = "Amatic SC")]
    AmaticSc,
}

/// Body font choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum BodyFont {
    Inter,
    #[serde(rename = "Source Sans 3")]
    SourceSans3,
    Assistant,
    Rubik,
    #[serde(rename = "Amatic SC")]
    AmaticSc,
}

/// Background texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Texture {
    None,
    Paper,
    Linen,
}

/// Spacing density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum SpacingDensity {
    Comfortable,
    Compact,
}

/// Button style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum ButtonStyle {
    Filled,
    Outline,
    Rounded,
}

/// Independent font scale multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct FontScale {
    pub hero: f64,
    pub heading: f64,
    pub body: f64,
    pub small: f64,
    pub intro: f64,
}

impl Default for FontScale {
    fn default() -> Self {
        Self {
            hero: 1.0,
            heading: 1.0,
            body: 1.0,
            small: 1.0,
            intro: 1.0,
        }
    }
}

/// Draft and publish timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishState {
    /// Last time the draft was saved.
    pub draft_updated_at: DateTime<Utc>,
    /// Carried over verbatim by publish.
    pub published_updated_at: DateTime<Utc>,
}
