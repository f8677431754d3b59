//! Configuration schema types
//!
//! This module defines the configuration structure for Aeris.

use crate::config::secret::secret_string;
use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Runtime environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Staging environment
    Staging,
    /// Production environment
    Production,
}

/// Main Aeris configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AerisConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: Environment,

    /// AQICN (api.waqi.info) provider configuration
    pub waqi: WaqiConfig,

    /// AirVisual (IQAir) provider configuration
    #[serde(default)]
    pub airvisual: AirVisualConfig,

    /// Ranking page scrape configuration
    #[serde(default)]
    pub scrape: ScrapeConfig,

    /// Bundled snapshot file locations
    #[serde(default)]
    pub data: DataConfig,

    /// Marker cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AerisConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.waqi.validate(&self.environment)?;
        self.airvisual.validate()?;
        self.scrape.validate()?;
        self.data.validate()?;
        self.cache.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// AQICN provider configuration
///
/// The AQICN API serves both bounded station lists and per-station feeds.
/// The token is held as a [`SecretString`] so it never appears in debug
/// output or logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaqiConfig {
    /// Base URL of the AQICN API
    #[serde(default = "default_waqi_base_url")]
    pub base_url: String,

    /// API token
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default = "default_empty_secret")]
    pub api_token: SecretString,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl WaqiConfig {
    fn validate(&self, environment: &Environment) -> Result<(), String> {
        use secrecy::ExposeSecret;

        validate_http_url("waqi.base_url", &self.base_url)?;

        if self.api_token.expose_secret().is_empty() {
            return Err("waqi.api_token cannot be empty".to_string());
        }

        // The public demo token only answers for a single fixed station,
        // which would silently produce a near-empty map in a deployment.
        if *environment == Environment::Production && self.api_token.expose_secret() == "demo" {
            return Err(
                "waqi.api_token cannot be the demo token in production environments".to_string(),
            );
        }

        if self.timeout_seconds == 0 {
            return Err("waqi.timeout_seconds must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for WaqiConfig {
    fn default() -> Self {
        Self {
            base_url: default_waqi_base_url(),
            api_token: default_empty_secret(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// AirVisual provider configuration
///
/// AirVisual is an optional secondary provider. A missing key only fails
/// when a command actually needs this provider, so map-and-cache workflows
/// run without one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirVisualConfig {
    /// Base URL of the AirVisual API
    #[serde(default = "default_airvisual_base_url")]
    pub base_url: String,

    /// API key
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default = "default_empty_secret")]
    pub api_key: SecretString,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl AirVisualConfig {
    fn validate(&self) -> Result<(), String> {
        validate_http_url("airvisual.base_url", &self.base_url)?;

        if self.timeout_seconds == 0 {
            return Err("airvisual.timeout_seconds must be > 0".to_string());
        }

        Ok(())
    }

    /// True when an API key has been configured
    pub fn has_key(&self) -> bool {
        use secrecy::ExposeSecret;
        !self.api_key.expose_secret().is_empty()
    }
}

impl Default for AirVisualConfig {
    fn default() -> Self {
        Self {
            base_url: default_airvisual_base_url(),
            api_key: default_empty_secret(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Ranking page scrape configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Most-polluted-cities ranking page
    #[serde(default = "default_cities_url")]
    pub cities_url: String,

    /// Most-polluted-countries ranking page
    #[serde(default = "default_countries_url")]
    pub countries_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_scrape_timeout_seconds")]
    pub timeout_seconds: u64,

    /// User-Agent header sent with scrape requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ScrapeConfig {
    fn validate(&self) -> Result<(), String> {
        validate_http_url("scrape.cities_url", &self.cities_url)?;
        validate_http_url("scrape.countries_url", &self.countries_url)?;

        if self.timeout_seconds == 0 {
            return Err("scrape.timeout_seconds must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            cities_url: default_cities_url(),
            countries_url: default_countries_url(),
            timeout_seconds: default_scrape_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

/// Bundled snapshot file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Global marker snapshot with per-pollutant sub-indices
    #[serde(default = "default_markers_file")]
    pub markers_file: String,

    /// Yearly country ranking snapshot
    #[serde(default = "default_countries_file")]
    pub countries_file: String,

    /// Monthly per-city snapshot
    #[serde(default = "default_cities_file")]
    pub cities_file: String,
}

impl DataConfig {
    fn validate(&self) -> Result<(), String> {
        if self.markers_file.is_empty() {
            return Err("data.markers_file cannot be empty".to_string());
        }
        if self.countries_file.is_empty() {
            return Err("data.countries_file cannot be empty".to_string());
        }
        if self.cities_file.is_empty() {
            return Err("data.cities_file cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            markers_file: default_markers_file(),
            countries_file: default_countries_file(),
            cities_file: default_cities_file(),
        }
    }
}

/// Marker cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache file for fetched India markers
    #[serde(default = "default_cache_file")]
    pub file: String,
}

impl CacheConfig {
    fn validate(&self) -> Result<(), String> {
        if self.file.is_empty() {
            return Err("cache.file cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            file: default_cache_file(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

/// Checks that a configured URL parses and uses an HTTP scheme
fn validate_http_url(field: &str, value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{field} cannot be empty"));
    }

    let url = url::Url::parse(value).map_err(|e| format!("{field} is not a valid URL: {e}"))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(format!("{field} must use http or https, got '{}'", url.scheme()));
    }

    Ok(())
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_waqi_base_url() -> String {
    "https://api.waqi.info".to_string()
}

fn default_airvisual_base_url() -> String {
    "https://api.airvisual.com/v2".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_scrape_timeout_seconds() -> u64 {
    30
}

fn default_cities_url() -> String {
    "https://www.iqair.com/world-most-polluted-cities".to_string()
}

fn default_countries_url() -> String {
    "https://www.aqi.in/world-air-quality-report".to_string()
}

fn default_user_agent() -> String {
    format!("aeris/{}", env!("CARGO_PKG_VERSION"))
}

fn default_markers_file() -> String {
    "data/aqi_latlong.csv".to_string()
}

fn default_countries_file() -> String {
    "data/polluted_countries.csv".to_string()
}

fn default_cities_file() -> String {
    "data/polluted_cities.csv".to_string()
}

fn default_cache_file() -> String {
    "data/cache/india_aqi.json".to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

fn default_empty_secret() -> SecretString {
    secret_string(String::new())
}
