//! Live AQI source abstraction

use async_trait::async_trait;

use super::models::{BoundsStation, CityFeed, StationDetail};
use crate::domain::Result;

/// Geographic bounding box in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Bounding box covering India
    pub const INDIA: Bounds = Bounds {
        south: 6.7,
        west: 68.1,
        north: 35.1,
        east: 97.4,
    };

    /// Bounding box covering the whole globe
    pub const GLOBAL: Bounds = Bounds {
        south: -90.0,
        west: -180.0,
        north: 90.0,
        east: 180.0,
    };

    /// Formats the box as the `latlng` query parameter value
    pub fn latlng_query(&self) -> String {
        format!("{},{},{},{}", self.south, self.west, self.north, self.east)
    }
}

/// Interface to the primary live AQI provider
///
/// The normalization pipeline works against this trait rather than the
/// concrete client, so tests can drive it with canned station lists.
#[async_trait]
pub trait AqiSource: Send + Sync {
    /// All monitoring stations inside a bounding box
    async fn stations_in_bounds(&self, bounds: &Bounds) -> Result<Vec<BoundsStation>>;

    /// Detailed feed for one station, used for weather enrichment
    async fn station_detail(&self, uid: i64) -> Result<StationDetail>;

    /// Live feed for a named city
    async fn city_feed(&self, city: &str) -> Result<CityFeed>;
}
