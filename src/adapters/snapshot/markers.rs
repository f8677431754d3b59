//! Static marker snapshot reader
//!
//! Loads the curated world-city CSV into [`Marker`] records. These rows
//! carry published pollutant sub-indices and their own AQI classification,
//! so the category comes from the file rather than from the value.

use std::path::Path;

use serde::Deserialize;

use crate::domain::aqi::AqiCategory;
use crate::domain::geo::continent_for_country;
use crate::domain::marker::Marker;
use crate::domain::Result;

#[derive(Debug, Deserialize)]
struct MarkerRow {
    #[serde(rename = "Country")]
    country: String,

    #[serde(rename = "City")]
    city: String,

    #[serde(rename = "AQI Value")]
    aqi: f64,

    #[serde(rename = "AQI Category")]
    category: String,

    #[serde(rename = "PM10 AQI Value")]
    pm10: String,

    #[serde(rename = "PM10 AQI Category")]
    pm10_category: String,

    #[serde(rename = "PM2.5 AQI Value")]
    pm25: String,

    #[serde(rename = "PM2.5 AQI Category")]
    pm25_category: String,

    #[serde(rename = "Ozone AQI Value")]
    o3: String,

    #[serde(rename = "Ozone AQI Category")]
    o3_category: String,

    #[serde(rename = "NO2 AQI Value")]
    no2: String,

    #[serde(rename = "NO2 AQI Category")]
    no2_category: String,

    #[serde(rename = "lat")]
    lat: f64,

    #[serde(rename = "lng")]
    lng: f64,
}

impl MarkerRow {
    fn into_marker(self) -> Marker {
        let category = AqiCategory::from_label(self.category.trim()).unwrap_or_else(|| {
            tracing::debug!(label = %self.category, "Unrecognized AQI category label");
            AqiCategory::from_value(self.aqi)
        });
        let continent = continent_for_country(&self.country);

        let mut marker = Marker::new(self.country, self.city, self.aqi, self.lat, self.lng)
            .with_reported_category(category)
            .with_continent(continent);

        marker.pm10 = Some(self.pm10);
        marker.pm10_category = Some(self.pm10_category);
        marker.pm25 = Some(self.pm25);
        marker.pm25_category = Some(self.pm25_category);
        marker.o3 = Some(self.o3);
        marker.o3_category = Some(self.o3_category);
        marker.no2 = Some(self.no2);
        marker.no2_category = Some(self.no2_category);
        marker
    }
}

/// Load markers from the static snapshot CSV
///
/// Malformed rows are skipped with a warning; a missing or unreadable file
/// is an error left to the caller.
pub fn load_markers(path: &Path) -> Result<Vec<Marker>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut markers = Vec::new();

    for record in reader.deserialize::<MarkerRow>() {
        match record {
            Ok(row) => markers.push(row.into_marker()),
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "Skipping malformed marker row");
            }
        }
    }

    tracing::info!(file = %path.display(), count = markers.len(), "Loaded marker snapshot");
    Ok(markers)
}
