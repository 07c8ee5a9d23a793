//! Resolves a raw location into the strings a card shows.
//!
//! Each display field has its own fallback chain; the first non-empty value
//! wins. `normalize` is total: any combination of missing fields produces a
//! card.

use crate::domain::models::{DetailRow, DisplayRecord, LocationKind, LocationRecord};

pub const UNKNOWN_LOCATION: &str = "Unknown Location";
pub const UNKNOWN_TYPE: &str = "UNKNOWN";

/// primaryDisplayName → shortName → displayName → fullName → "Unknown Location".
pub fn primary_name(record: &LocationRecord) -> &str {
    let names = record.names();
    names
        .primary_display_name()
        .or_else(|| names.short_name())
        .or_else(|| names.display_name())
        .or_else(|| names.full_name())
        .unwrap_or(UNKNOWN_LOCATION)
}

/// secondaryDisplayName → country name → "".
pub fn secondary_name(record: &LocationRecord) -> &str {
    record
        .names()
        .secondary_display_name()
        .or_else(|| record.country_name())
        .unwrap_or_default()
}

/// displayName → fullName → "".
pub fn full_name(record: &LocationRecord) -> &str {
    let names = record.names();
    names
        .display_name()
        .or_else(|| names.full_name())
        .unwrap_or_default()
}

/// Human label for a type code; unknown codes are shown as they came.
pub fn type_label(code: &str) -> String {
    LocationKind::from_code(code)
        .map(|kind| kind.label().to_string())
        .unwrap_or_else(|| code.to_string())
}

pub fn normalize(record: &LocationRecord) -> DisplayRecord {
    let primary = primary_name(record);
    let full = full_name(record);
    let type_code = record.kind().unwrap_or(UNKNOWN_TYPE);

    let mut details = Vec::new();
    if !full.is_empty() && full != primary {
        details.push(DetailRow::FullName(full.to_string()));
    }
    if let Some(name) = record.country_name() {
        details.push(DetailRow::Country {
            name: name.to_string(),
            code: record.country_code().map(str::to_string),
        });
    }
    if let Some(code) = record.airport_code() {
        details.push(DetailRow::AirportCode(code.to_string()));
    }
    if let Some((lat, long)) = record.lat_long_text() {
        details.push(DetailRow::Coordinates {
            lat: lat.to_string(),
            long: long.to_string(),
        });
    }
    if let Some(id) = record.gaia_id() {
        details.push(DetailRow::LocationId(id.to_string()));
    }

    DisplayRecord {
        primary_name: primary.to_string(),
        secondary_name: secondary_name(record).to_string(),
        full_name: full.to_string(),
        type_code: type_code.to_string(),
        type_label: type_label(type_code),
        details,
    }
}
