//! AQICN API response models

use serde::Deserialize;
use std::collections::HashMap;

/// Top-level AQICN payload envelope
///
/// Every response carries a `status` discriminator. On failure `data` is a
/// plain string with the provider's message, so it stays untyped here and
/// the client decodes it only after checking the status.
#[derive(Debug, Deserialize)]
pub struct WaqiEnvelope {
    pub status: String,

    #[serde(default)]
    pub data: serde_json::Value,
}

/// One station row from the map bounds endpoint
///
/// Coordinates are required: a row without them fails deserialization and
/// the client skips it, which is the drop-the-record rule for stations that
/// cannot be placed on the map.
#[derive(Debug, Clone, Deserialize)]
pub struct BoundsStation {
    pub lat: f64,
    pub lon: f64,

    /// Station id for the detail feed, absent for some aggregated rows
    #[serde(default)]
    pub uid: Option<i64>,

    /// Raw AQI value, a number or a string (including the "-" sentinel)
    #[serde(default)]
    pub aqi: serde_json::Value,

    pub station: StationMeta,
}

/// Station name and capture time as reported by the bounds endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct StationMeta {
    pub name: String,

    #[serde(default)]
    pub time: Option<String>,
}

/// Detailed station feed, used for weather enrichment
#[derive(Debug, Clone, Deserialize)]
pub struct StationDetail {
    #[serde(default)]
    pub iaqi: HashMap<String, IaqiEntry>,

    #[serde(default)]
    pub time: Option<FeedTime>,
}

/// One pollutant or weather reading in the `iaqi` map
///
/// `v` defaults to null so an entry without a value never sinks the whole
/// feed; alias resolution treats null as absent.
#[derive(Debug, Clone, Deserialize)]
pub struct IaqiEntry {
    #[serde(default)]
    pub v: serde_json::Value,
}

/// Capture time block in feed responses
#[derive(Debug, Clone, Deserialize)]
pub struct FeedTime {
    pub s: String,
}

/// Live feed for a named city
#[derive(Debug, Clone, Deserialize)]
pub struct CityFeed {
    #[serde(default)]
    pub aqi: serde_json::Value,

    pub city: FeedCity,

    #[serde(default)]
    pub iaqi: HashMap<String, IaqiEntry>,

    #[serde(default)]
    pub time: Option<FeedTime>,
}

/// City block in a feed response
///
/// `geo` is `[latitude, longitude]` when present.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedCity {
    pub name: String,

    #[serde(default)]
    pub geo: Vec<f64>,
}
