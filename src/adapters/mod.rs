//! External system integrations for Aeris.
//!
//! This module provides adapters for every data source the pipeline reads:
//!
//! - [`waqi`] - World Air Quality Index API (live stations and city feeds)
//! - [`airvisual`] - AirVisual API (location hierarchy and point lookups)
//! - [`snapshot`] - Bundled CSV snapshots (markers, countries, cities)
//! - [`scrape`] - Public ranking pages (most-polluted cities and countries)
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind typed models and domain
//! errors so the core never sees raw payloads. The live-station source is
//! trait-based to enable testing with mock implementations.
//!
//! # WAQI Adapter
//!
//! ```rust,no_run
//! use aeris::adapters::waqi::{AqiSource, Bounds, WaqiClient};
//! use aeris::config::WaqiConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = WaqiConfig::default();
//! let client = WaqiClient::new(config);
//! let stations = client.stations_in_bounds(&Bounds::INDIA).await?;
//! println!("{} stations reporting", stations.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Snapshot Adapter
//!
//! ```rust,no_run
//! use std::path::Path;
//! use aeris::adapters::snapshot::load_countries;
//!
//! # fn example() -> aeris::domain::Result<()> {
//! let countries = load_countries(Path::new("data/polluted_countries.csv"))?;
//! println!("{} ranked countries", countries.len());
//! # Ok(())
//! # }
//! ```

pub mod airvisual;
pub mod scrape;
pub mod snapshot;
pub mod waqi;
