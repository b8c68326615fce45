//! Override-over-base merge.
//!
//! A present override field always wins; an absent one defers to the base
//! event. The merge is total and has no side effects.

use crate::event::{BaseEvent, Coordinates, EffectiveEvent, EventOverride};

/// Overlay `over` onto `base`, field by field.
///
/// `address_text` falls back to the base `address_text`, then to the base
/// `address` alias. `waze_link` and `maps_link` have no base counterpart.
#[must_use]
pub fn merge(base: &BaseEvent, over: &EventOverride) -> EffectiveEvent {
    EffectiveEvent {
        date_text: prefer(over.date_text.as_ref(), base.date_text.as_ref()),
        time_text: prefer(over.time_text.as_ref(), base.time_text.as_ref()),
        venue_name: prefer(over.venue_name.as_ref(), base.venue_name.as_ref()),
        address_text: over
            .address_text
            .clone()
            .or_else(|| base.address_text.clone())
            .or_else(|| base.address.clone()),
        dress_code: prefer(over.dress_code.as_ref(), base.dress_code.as_ref()),
        notes: prefer(over.notes.as_ref(), base.notes.as_ref()),
        coords: Coordinates {
            lat: over.lat.or(base.lat),
            lng: over.lng.or(base.lng),
        },
        waze_link: over.waze_link.clone(),
        maps_link: over.maps_link.clone(),
        rsvp_deadline_iso: prefer(over.rsvp_deadline_iso.as_ref(), base.rsvp_deadline_iso.as_ref()),
    }
}

fn prefer(over: Option<&String>, base: Option<&String>) -> Option<String> {
    over.or(base).cloned()
}
