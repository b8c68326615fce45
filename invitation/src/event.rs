//! Event detail records: the externally-owned base event, the sparse
//! operator override, and the merged view guests see.

use serde::{Deserialize, Serialize};

/// Sparse override of base event details.
///
/// Every field is independently optional. `None` means "defer to the base
/// event", never "show an empty value".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct EventOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dress_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsvp_deadline_iso: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waze_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maps_link: Option<String>,
}

/// Text fields of [`EventOverride`] that the editor sets from free input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum OverrideField {
    DateText,
    TimeText,
    VenueName,
    AddressText,
    Notes,
    DressCode,
    RsvpDeadline,
    WazeLink,
    MapsLink,
}

impl EventOverride {
    /// Returns `true` if no field is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Mutable access to a text field.
    pub fn text_mut(&mut self, field: OverrideField) -> &mut Option<String> {
        match field {
            OverrideField::DateText => &mut self.date_text,
            OverrideField::TimeText => &mut self.time_text,
            OverrideField::VenueName => &mut self.venue_name,
            OverrideField::AddressText => &mut self.address_text,
            OverrideField::Notes => &mut self.notes,
            OverrideField::DressCode => &mut self.dress_code,
            OverrideField::RsvpDeadline => &mut self.rsvp_deadline_iso,
            OverrideField::WazeLink => &mut self.waze_link,
            OverrideField::MapsLink => &mut self.maps_link,
        }
    }

    /// Set a text field from free input. Blank input clears the override.
    pub fn set_text(&mut self, field: OverrideField, value: &str) {
        let trimmed = value.trim();
        *self.text_mut(field) = if trimmed.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
    }
}

/// Event data owned by the external event source. Read-only to this crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct BaseEvent {
    #[serde(default)]
    pub date_text: Option<String>,
    #[serde(default)]
    pub time_text: Option<String>,
    #[serde(default)]
    pub venue_name: Option<String>,
    #[serde(default)]
    pub address_text: Option<String>,
    /// Legacy alias consulted when `address_text` is absent.
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub dress_code: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub rsvp_deadline_iso: Option<String>,
}

/// Venue coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct Coordinates {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl Coordinates {
    /// Both components, if both are known.
    #[must_use]
    pub const fn pair(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}

/// Event details after applying the override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct EffectiveEvent {
    pub date_text: Option<String>,
    pub time_text: Option<String>,
    pub venue_name: Option<String>,
    pub address_text: Option<String>,
    pub dress_code: Option<String>,
    pub notes: Option<String>,
    pub coords: Coordinates,
    /// Override-only; navigation actions render only when set.
    pub waze_link: Option<String>,
    /// Override-only; navigation actions render only when set.
    pub maps_link: Option<String>,
    pub rsvp_deadline_iso: Option<String>,
}

/// A navigation action offered on the event details card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Open the Waze link.
    Waze(String),
    /// Open the Google Maps link.
    GoogleMaps(String),
}

impl EffectiveEvent {
    /// Navigation actions to render, in display order.
    ///
    /// Only links the operator configured are offered.
    #[must_use]
    pub fn navigation_actions(&self) -> Vec<NavigationAction> {
        let mut actions = Vec::new();
        if let Some(link) = &self.waze_link {
            actions.push(NavigationAction::Waze(link.clone()));
        }
        if let Some(link) = &self.maps_link {
            actions.push(NavigationAction::GoogleMaps(link.clone()));
        }
        actions
    }
}
