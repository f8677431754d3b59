//! AirVisual (IQAir) adapter
//!
//! Secondary provider used for the location hierarchy and point lookups.
//! Requests authenticate with a `key` query parameter; payloads arrive in
//! a `{status, data}` envelope that the client unwraps before decoding.

pub mod client;
pub mod models;

pub use client::AirVisualClient;
pub use models::{CityConditions, CurrentConditions, Location, Pollution, Weather};
