//! Marker normalization pipeline
//!
//! Turns raw station records from the live AQI source into canonical
//! [`Marker`] records. The pipeline is parameterized by [`Scope`]: the
//! India scope pins country and continent to constants, the global scope
//! derives the country from the free-text station label and leaves the
//! continent unset.
//!
//! One bad record never aborts a pass. Records whose AQI cannot be read
//! are dropped with a debug log; enrichment failures fall back to default
//! weather attributes.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;

use crate::adapters::waqi::models::{BoundsStation, CityFeed};
use crate::adapters::waqi::source::{AqiSource, Bounds};
use crate::core::normalize::weather::WeatherReadings;
use crate::domain::aqi::parse_reading;
use crate::domain::geo::{continent_for_country, split_station_label};
use crate::domain::marker::Marker;
use crate::domain::Result;
use crate::{log_fetch_complete, log_fetch_start};

/// Normalization scope for a pipeline pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Stations inside the India bounding box; country and continent are
    /// fixed and the result is eligible for cache write-through
    India,
    /// Stations worldwide; country comes from the station label and no
    /// continent is assigned
    Global,
}

impl Scope {
    pub fn bounds(&self) -> Bounds {
        match self {
            Scope::India => Bounds::INDIA,
            Scope::Global => Bounds::GLOBAL,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scope::India => "india",
            Scope::Global => "global",
        }
    }
}

/// Pipeline from raw station records to canonical markers
pub struct MarkerPipeline {
    source: Arc<dyn AqiSource>,
}

impl MarkerPipeline {
    pub fn new(source: Arc<dyn AqiSource>) -> Self {
        Self { source }
    }

    /// Fetch and normalize every station in the scope's bounding box
    ///
    /// Each station with a uid is enriched with weather attributes through
    /// a per-station detail lookup; stations without a uid or with a failed
    /// lookup get the default attributes.
    pub async fn fetch_markers(&self, scope: Scope) -> Result<Vec<Marker>> {
        let started = Instant::now();
        log_fetch_start!("waqi", scope.name());

        let stations = self.source.stations_in_bounds(&scope.bounds()).await?;
        let run_stamp = synthetic_timestamp();

        let mut markers = Vec::with_capacity(stations.len());
        for station in stations {
            let Some(marker) = normalize_station(&station, scope, &run_stamp) else {
                continue;
            };

            let weather = match station.uid {
                Some(uid) => self.station_weather(uid).await,
                None => WeatherReadings::default(),
            };

            markers.push(marker.with_weather(
                weather.wind_speed,
                weather.wind_direction,
                weather.temperature,
            ));
        }

        log_fetch_complete!("waqi", markers.len(), started.elapsed());
        Ok(markers)
    }

    /// Normalize the live feed for a named city into a single marker
    pub async fn city_marker(&self, city: &str) -> Result<Marker> {
        let started = Instant::now();
        log_fetch_start!("waqi", city);

        let feed = self.source.city_feed(city).await?;
        let marker = marker_from_city_feed(&feed);

        log_fetch_complete!("waqi", 1, started.elapsed());
        Ok(marker)
    }

    /// Look up weather attributes for one station, defaulting on failure
    async fn station_weather(&self, uid: i64) -> WeatherReadings {
        match self.source.station_detail(uid).await {
            Ok(detail) => WeatherReadings::from_iaqi(&detail.iaqi),
            Err(e) => {
                tracing::warn!(uid, error = %e, "Weather lookup failed, using defaults");
                WeatherReadings::default()
            }
        }
    }
}

/// Build a marker from a bounds station, or drop it
///
/// Returns `None` when the AQI value is unreadable. Sentinel values (`-`,
/// empty, null) are valid and coerce to 0.0.
fn normalize_station(station: &BoundsStation, scope: Scope, run_stamp: &str) -> Option<Marker> {
    let Some(aqi) = parse_reading(&station.aqi) else {
        tracing::debug!(
            station = %station.station.name,
            raw = %station.aqi,
            "Dropping station with unreadable AQI"
        );
        return None;
    };

    let time = station
        .station
        .time
        .clone()
        .unwrap_or_else(|| run_stamp.to_string());

    let marker = match scope {
        Scope::India => {
            let city = station
                .station
                .name
                .split(',')
                .next()
                .unwrap_or(&station.station.name)
                .trim()
                .to_string();
            Marker::new("India", city, aqi, station.lat, station.lon).with_continent("Asia")
        }
        Scope::Global => {
            let (city, country) = split_station_label(&station.station.name);
            Marker::new(country, city, aqi, station.lat, station.lon)
        }
    };

    Some(marker.with_time(time))
}

/// Normalize a city feed response into a marker
fn marker_from_city_feed(feed: &CityFeed) -> Marker {
    let aqi = parse_reading(&feed.aqi).unwrap_or(0.0);
    let (city, country) = split_station_label(&feed.city.name);
    let continent = continent_for_country(&country);

    let (lat, lon) = match feed.city.geo.as_slice() {
        [lat, lon, ..] => (*lat, *lon),
        _ => (0.0, 0.0),
    };

    let time = feed
        .time
        .as_ref()
        .map(|t| t.s.clone())
        .unwrap_or_else(synthetic_timestamp);

    let weather = WeatherReadings::from_iaqi(&feed.iaqi);

    Marker::new(country, city, aqi, lat, lon)
        .with_continent(continent)
        .with_time(time)
        .with_weather(
            weather.wind_speed,
            weather.wind_direction,
            weather.temperature,
        )
}

/// Timestamp used when the source does not report a capture time
fn synthetic_timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
