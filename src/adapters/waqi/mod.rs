//! AQICN adapter
//!
//! Integration with the AQICN (api.waqi.info) API: bounded-region station
//! lists, per-station detail feeds, and per-city feeds. The [`AqiSource`]
//! trait defines the interface the normalization pipeline consumes, and
//! [`WaqiClient`] provides the HTTP implementation.

pub mod client;
pub mod models;
pub mod source;

pub use client::WaqiClient;
pub use models::{
    BoundsStation, CityFeed, FeedCity, FeedTime, IaqiEntry, StationDetail, StationMeta,
    WaqiEnvelope,
};
pub use source::{AqiSource, Bounds};
