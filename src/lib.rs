// Aeris - Air Quality Data Tool
// Copyright (c) 2025 Aeris Contributors
// Licensed under the MIT License

//! # Aeris - Air Quality Data Tool
//!
//! Aeris is an air quality data tool built in Rust that normalizes live
//! station readings, bundled ranking snapshots, and scraped ranking pages
//! into one canonical marker model for maps, profiles, and heat-maps.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Fetching** live station data from the AQICN API, within a regional
//!   or global window
//! - **Normalizing** every source into the canonical [`domain::Marker`]
//!   record with derived severity categories
//! - **Caching** fetched markers as an atomic JSON snapshot that later
//!   queries serve cache-first
//! - **Serving** ranking profiles and heat-map points from bundled CSV
//!   snapshots
//!
//! ## Architecture
//!
//! Aeris follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (normalize, cache, dataset, query, heatmap)
//! - [`adapters`] - External integrations (AQICN, AirVisual, snapshots,
//!   ranking pages)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aeris::config::load_config;
//! use aeris::core::dataset::StaticDataset;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("aeris.toml")?;
//!
//!     // Load the bundled snapshots
//!     let dataset = StaticDataset::load(&config.data);
//!
//!     println!("{} markers loaded", dataset.markers().len());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! ### Live Data and Caching
//!
//! The India window is served cache-first: a query hits the stored snapshot
//! when one exists and only falls back to a live fetch (with write-through)
//! on a miss or a forced refresh:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use aeris::adapters::waqi::WaqiClient;
//! use aeris::config::load_config;
//! use aeris::core::cache::CacheStore;
//! use aeris::core::dataset::StaticDataset;
//! use aeris::core::normalize::MarkerPipeline;
//! use aeris::core::query::{MarkerQuery, QueryService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("aeris.toml")?;
//!
//!     let dataset = StaticDataset::load(&config.data);
//!     let cache = CacheStore::new(&config.cache.file);
//!     let pipeline = MarkerPipeline::new(Arc::new(WaqiClient::new(config.waqi.clone())));
//!     let service = QueryService::new(&dataset, &cache, &pipeline);
//!
//!     let query = MarkerQuery {
//!         country: Some("India".to_string()),
//!         live: true,
//!         ..Default::default()
//!     };
//!
//!     let markers = service.markers(&query).await;
//!     println!("{} live markers", markers.len());
//!     Ok(())
//! }
//! ```
//!
//! ### Ranking Profiles
//!
//! Country and city profiles come from the bundled snapshots, with
//! typed not-found errors carrying suggested alternatives:
//!
//! ```rust,no_run
//! use aeris::core::dataset::StaticDataset;
//! use aeris::domain::AerisError;
//!
//! # fn example(dataset: &StaticDataset) {
//! match dataset.country_profile("Indai") {
//!     Ok(profile) => println!("{}: {:.1}", profile.country, profile.avg_aqi),
//!     Err(AerisError::NotFound(e)) => {
//!         println!("{} (try: {})", e.message, e.suggestions.join(", "))
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Aeris uses the [`domain::AerisError`] type for all errors:
//!
//! ```rust,no_run
//! use aeris::domain::AerisError;
//!
//! fn example() -> Result<(), AerisError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = aeris::config::load_config("aeris.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Aeris uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!("Starting fetch");
//! warn!(city = "Agra", "No coordinates found, skipping");
//! error!(status = 503, "Provider request failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
