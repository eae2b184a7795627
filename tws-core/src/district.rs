//! District-name normalization.
//!
//! Map features and time-series keys come from two independent sources. Both
//! sides go through [`normalize_district`] so that "Badgam", " BADGAM " and
//! "badgam" all resolve to the same dataset entry.

/// Label used when a boundary feature carries no usable `DISTRICT` property.
pub const UNKNOWN_DISTRICT: &str = "Unknown";

/// Reduce a district display name to its lookup key: trimmed and lowercased.
pub fn normalize_district(name: &str) -> String {
    name.trim().to_lowercase()
}
