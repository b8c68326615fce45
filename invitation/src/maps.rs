//! Navigation links.
//!
//! Builds Google Maps, Waze and Apple Maps URLs for a venue, from coordinates
//! when both are known and from the free-text address otherwise.

use crate::event::EffectiveEvent;

/// Where to navigate to.
#[derive(Debug, Clone, PartialEq)]
pub enum Destination {
    /// Exact coordinates
    Coordinates {
        /// Latitude
        lat: f64,
        /// Longitude
        lng: f64,
    },
    /// Free-text address
    Address(String),
}

impl Destination {
    /// Destination for an event: coordinates first, then a non-blank address.
    #[must_use]
    pub fn for_event(event: &EffectiveEvent) -> Option<Self> {
        if let Some((lat, lng)) = event.coords.pair() {
            return Some(Self::Coordinates { lat, lng });
        }
        event
            .address_text
            .as_deref()
            .map(str::trim)
            .filter(|address| !address.is_empty())
            .map(|address| Self::Address(address.to_string()))
    }
}

/// Google Maps directions or search URL.
#[must_use]
pub fn google_maps_url(destination: &Destination) -> String {
    match destination {
        Destination::Coordinates { lat, lng } => {
            format!("https://www.google.com/maps/dir/?api=1&destination={lat},{lng}")
        },
        Destination::Address(address) => format!(
            "https://www.google.com/maps/search/?api=1&query={}",
            urlencoding::encode(address)
        ),
    }
}

/// Waze navigation URL.
#[must_use]
pub fn waze_url(destination: &Destination) -> String {
    match destination {
        Destination::Coordinates { lat, lng } => {
            format!("https://waze.com/ul?ll={lat}%2C{lng}&navigate=yes")
        },
        Destination::Address(address) => format!(
            "https://waze.com/ul?q={}&navigate=yes",
            urlencoding::encode(address)
        ),
    }
}

/// Apple Maps directions URL.
#[must_use]
pub fn apple_maps_url(destination: &Destination) -> String {
    match destination {
        Destination::Coordinates { lat, lng } => format!("https://maps.apple.com/?daddr={lat},{lng}"),
        Destination::Address(address) => {
            format!("https://maps.apple.com/?daddr={}", urlencoding::encode(address))
        },
    }
}
