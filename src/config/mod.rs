//! Configuration management for Aeris.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Aeris uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Environment variable overrides (`AERIS_*` prefix)
//! - Default values for optional settings
//! - Comprehensive validation
//! - Type-safe configuration structs
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use aeris::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration from file
//! let config = load_config("aeris.toml")?;
//!
//! // Access configuration sections
//! println!("AQICN URL: {}", config.waqi.base_url);
//! println!("Cache file: {}", config.cache.file);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! The configuration is organized into sections:
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`WaqiConfig`] - AQICN provider connection and token
//! - [`AirVisualConfig`] - AirVisual provider connection and key
//! - [`ScrapeConfig`] - Ranking page scrape targets
//! - [`DataConfig`] - Bundled snapshot file locations
//! - [`CacheConfig`] - Marker cache location
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [waqi]
//! base_url = "https://api.waqi.info"
//! api_token = "${WAQI_API_TOKEN}"
//!
//! [airvisual]
//! api_key = "${AIRVISUAL_API_KEY}"
//!
//! [cache]
//! file = "data/cache/india_aqi.json"
//! ```
//!
//! # Environment Variables
//!
//! Use `${VAR_NAME}` syntax for environment variable substitution:
//!
//! ```bash
//! export WAQI_API_TOKEN="your-token"
//! export AIRVISUAL_API_KEY="your-key"
//! ```
//!
//! Any setting can also be overridden directly, for example
//! `AERIS_CACHE_FILE=/tmp/aeris_cache.json`.
//!
//! # Validation
//!
//! Configuration is validated on load:
//!
//! ```rust,no_run
//! use aeris::config::load_config;
//!
//! # fn example() {
//! match load_config("aeris.toml") {
//!     Ok(config) => println!("Configuration valid"),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    AerisConfig, AirVisualConfig, ApplicationConfig, CacheConfig, DataConfig, Environment,
    LoggingConfig, ScrapeConfig, WaqiConfig,
};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};
