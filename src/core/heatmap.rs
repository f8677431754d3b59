//! Heat-map point derivation
//!
//! Produces one weighted point per city in the monthly snapshot, with the
//! weight being the city's mean-over-valid monthly AQI. Coordinates are
//! resolved from the India rows of the marker snapshot, then from a small
//! built-in table of major cities, then by substring match between city
//! names. A city with no resolvable coordinates is skipped with a logged
//! warning.

use serde::Serialize;

use crate::core::dataset::StaticDataset;
use crate::domain::marker::Marker;

/// Built-in fallback coordinates for major Indian cities
///
/// Only fills names the marker snapshot does not already cover.
const DEFAULT_COORDS: [(&str, f64, f64); 9] = [
    ("Delhi", 28.6139, 77.2090),
    ("Mumbai", 19.0760, 72.8777),
    ("Kolkata", 22.5726, 88.3639),
    ("Chennai", 13.0827, 80.2707),
    ("Bangalore", 12.9716, 77.5946),
    ("Hyderabad", 17.3850, 78.4867),
    ("Pune", 18.5204, 73.8567),
    ("Ahmedabad", 23.0225, 72.5714),
    ("Jaipur", 26.9124, 75.7873),
];

/// One weighted heat-map point
#[derive(Debug, Clone, Serialize)]
pub struct HeatmapPoint {
    pub city: String,
    pub state: String,
    pub value: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Derive heat-map points from the static dataset
pub fn heatmap_points(dataset: &StaticDataset) -> Vec<HeatmapPoint> {
    let coords = india_city_coords(dataset.markers());

    let mut points = Vec::new();
    for city in dataset.cities() {
        let Some((lat, lng)) = resolve_coords(&coords, &city.city) else {
            tracing::warn!(city = %city.city, state = %city.state, "No coordinates found, skipping");
            continue;
        };

        points.push(HeatmapPoint {
            city: city.city.clone(),
            state: city.state.clone(),
            value: city.months.average(),
            latitude: lat,
            longitude: lng,
        });
    }

    points
}

/// Coordinate table from the India markers, padded with the built-ins
///
/// Preserves insertion order so substring fallback resolution is
/// deterministic. Duplicate marker cities keep their first position with
/// the latest coordinates.
fn india_city_coords(markers: &[Marker]) -> Vec<(String, (f64, f64))> {
    let mut coords: Vec<(String, (f64, f64))> = Vec::new();

    for marker in markers.iter().filter(|m| m.country == "India") {
        match coords.iter_mut().find(|(name, _)| *name == marker.city) {
            Some(entry) => entry.1 = (marker.latitude, marker.longitude),
            None => coords.push((marker.city.clone(), (marker.latitude, marker.longitude))),
        }
    }

    for (name, lat, lng) in DEFAULT_COORDS {
        if !coords.iter().any(|(existing, _)| existing == name) {
            coords.push((name.to_string(), (lat, lng)));
        }
    }

    coords
}

/// Exact name lookup, then bidirectional case-insensitive substring
fn resolve_coords(coords: &[(String, (f64, f64))], city: &str) -> Option<(f64, f64)> {
    if let Some((_, found)) = coords.iter().find(|(name, _)| name == city) {
        return Some(*found);
    }

    let wanted = city.to_lowercase();
    coords
        .iter()
        .find(|(name, _)| {
            let candidate = name.to_lowercase();
            candidate.contains(&wanted) || wanted.contains(&candidate)
        })
        .map(|(_, found)| *found)
}
