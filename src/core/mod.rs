//! Core business logic for Aeris.
//!
//! This module contains the normalization pipeline and everything that
//! serves normalized data.
//!
//! # Modules
//!
//! - [`normalize`] - Scope-parameterized pipeline from raw station records
//!   to canonical markers
//! - [`cache`] - Marker snapshot persistence with atomic replacement
//! - [`dataset`] - Immutable static dataset plus profiles, stats, and
//!   filter options
//! - [`query`] - Filter layer and live-vs-static data-source selection
//! - [`heatmap`] - Weighted city points for the heat-map view
//! - [`refresh`] - Ranking page scrape orchestration
//!
//! # Query Workflow
//!
//! The typical marker query:
//!
//! 1. **Select source**: live India queries go cache-first, everything
//!    else reads the static dataset
//! 2. **Fetch on miss**: an empty cache triggers a live fetch and
//!    normalization pass
//! 3. **Write through**: a successful pass replaces the cache snapshot
//! 4. **Filter**: continent/country exactly, city by the policy the data
//!    path selects
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use aeris::adapters::waqi::WaqiClient;
//! use aeris::config::load_config;
//! use aeris::core::cache::CacheStore;
//! use aeris::core::dataset::StaticDataset;
//! use aeris::core::normalize::MarkerPipeline;
//! use aeris::core::query::{MarkerQuery, QueryService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("aeris.toml")?;
//!
//! let dataset = StaticDataset::load(&config.data);
//! let cache = CacheStore::new(&config.cache.file);
//! let pipeline = MarkerPipeline::new(Arc::new(WaqiClient::new(config.waqi.clone())));
//! let service = QueryService::new(&dataset, &cache, &pipeline);
//!
//! let query = MarkerQuery {
//!     country: Some("India".to_string()),
//!     live: true,
//!     ..Default::default()
//! };
//! let markers = service.markers(&query).await;
//! println!("{} markers", markers.len());
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod dataset;
pub mod heatmap;
pub mod normalize;
pub mod query;
pub mod refresh;
