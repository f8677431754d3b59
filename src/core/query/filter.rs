//! Marker filtering
//!
//! One shared filter implementation serves both data paths. The city
//! match policy is an explicit parameter: live-data callers match by
//! case-insensitive substring, static-data callers match exactly.

use crate::domain::marker::Marker;

/// How a city filter value is compared against marker cities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CityMatch {
    /// Case-insensitive substring containment, e.g. "delhi" matches
    /// "New Delhi"
    Substring,
    /// Exact string equality
    Exact,
}

impl CityMatch {
    fn matches(&self, wanted: &str, city: &str) -> bool {
        match self {
            CityMatch::Substring => city.to_lowercase().contains(&wanted.to_lowercase()),
            CityMatch::Exact => city == wanted,
        }
    }
}

/// Narrow a marker set by the given filters
///
/// Every filter is an intersection; `None` means "All". Continent and
/// country always match exactly.
pub fn filter_markers(
    markers: &[Marker],
    continent: Option<&str>,
    country: Option<&str>,
    city: Option<&str>,
    city_match: CityMatch,
) -> Vec<Marker> {
    markers
        .iter()
        .filter(|marker| continent.map_or(true, |c| marker.continent.as_deref() == Some(c)))
        .filter(|marker| country.map_or(true, |c| marker.country == c))
        .filter(|marker| city.map_or(true, |c| city_match.matches(c, &marker.city)))
        .cloned()
        .collect()
}
