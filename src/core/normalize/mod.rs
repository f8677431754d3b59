//! Normalization of raw source records into canonical markers

pub mod pipeline;
pub mod weather;

pub use pipeline::{MarkerPipeline, Scope};
pub use weather::WeatherReadings;
