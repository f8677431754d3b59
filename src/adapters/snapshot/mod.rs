//! Static snapshot adapter
//!
//! Readers for the three bundled CSV snapshots: world-city markers,
//! annual country rankings, and per-city monthly series. Every reader
//! tolerates bad rows (skip and warn) but reports a missing or unreadable
//! file as an error, leaving the degrade decision to the caller.

pub mod cities;
pub mod countries;
pub mod markers;

pub use cities::load_cities;
pub use countries::load_countries;
pub use markers::load_markers;

/// Parse a monthly AQI cell
///
/// The snapshots use `--` for months without a reading. Blank or
/// unparseable cells are treated the same way.
pub(crate) fn parse_month_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "--" {
        return None;
    }
    trimmed.parse().ok()
}
