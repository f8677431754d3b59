//! AirVisual API response models
//!
//! Only the fields Aeris consumes are modeled; serde ignores the rest of
//! the payload. Conditions types serialize back out for CLI display.

use serde::{Deserialize, Serialize};

/// Top-level AirVisual payload envelope
///
/// `status` is `"success"` on the happy path. On failure the provider puts
/// a `message` inside `data`, so the payload stays untyped until the client
/// has checked the status.
#[derive(Debug, Deserialize)]
pub struct AirVisualEnvelope {
    pub status: String,

    #[serde(default)]
    pub data: serde_json::Value,
}

/// One entry in the countries listing
#[derive(Debug, Clone, Deserialize)]
pub struct CountryEntry {
    pub country: String,
}

/// One entry in the states listing
#[derive(Debug, Clone, Deserialize)]
pub struct StateEntry {
    pub state: String,
}

/// One entry in the cities listing
#[derive(Debug, Clone, Deserialize)]
pub struct CityEntry {
    pub city: String,
}

/// Current conditions for a city or station
///
/// The same shape serves the city detail endpoint and both nearest
/// endpoints; station responses additionally carry a station `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityConditions {
    /// Station name, only present on nearest-station responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub city: String,
    pub state: String,
    pub country: String,

    pub location: Location,
    pub current: CurrentConditions,
}

/// GeoJSON-style point, coordinates are `[longitude, latitude]`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub pollution: Pollution,
    pub weather: Weather,
}

/// Pollution block of a conditions response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pollution {
    /// Measurement timestamp
    pub ts: String,

    /// AQI on the US EPA scale
    pub aqius: f64,

    /// Main pollutant on the US scale
    #[serde(default)]
    pub mainus: String,
}

/// Weather block of a conditions response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weather {
    /// Measurement timestamp
    pub ts: String,

    /// Temperature in Celsius
    pub tp: f64,

    /// Humidity percentage
    pub hu: f64,

    /// Wind speed in m/s
    pub ws: f64,

    /// Wind direction in degrees
    pub wd: f64,
}
