//! `init` command: writes a starter configuration file

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "aeris.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Aeris configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Create a .env file with your credentials:");
                println!("     - Set WAQI_API_TOKEN (https://aqicn.org/data-platform/token/)");
                println!("     - Set AIRVISUAL_API_KEY if you use the AirVisual commands,");
                println!("       then uncomment the api_key line");
                println!("  3. Validate configuration: aeris validate-config");
                println!("  4. Warm the marker cache: aeris refresh");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Bare template with only the settings most installs change
    fn generate_minimal_config() -> String {
        r#"# Aeris Configuration File
# Air Quality Data Tool

# Runtime environment (development, staging, production)
environment = "development"

[application]
log_level = "info"

[waqi]
base_url = "https://api.waqi.info"
api_token = "${WAQI_API_TOKEN}"
timeout_seconds = 10

[airvisual]
base_url = "https://api.airvisual.com/v2"
# Optional. Uncomment once AIRVISUAL_API_KEY is set.
# api_key = "${AIRVISUAL_API_KEY}"
timeout_seconds = 10

[scrape]
cities_url = "https://www.iqair.com/world-most-polluted-cities"
countries_url = "https://www.aqi.in/world-air-quality-report"
timeout_seconds = 30

[data]
markers_file = "data/aqi_latlong.csv"
countries_file = "data/polluted_countries.csv"
cities_file = "data/polluted_cities.csv"

[cache]
file = "data/cache/india_aqi.json"

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Annotated template covering every section
    fn generate_config_with_examples() -> String {
        r#"# Aeris Configuration File
# Air Quality Data Tool
#
# This file contains all configuration options with examples and explanations.
#
# Aeris reads live data from two providers:
#   - AQICN (api.waqi.info) for station maps and city feeds (required)
#   - AirVisual (api.airvisual.com) for location listings (optional)
# and serves bundled CSV snapshots for rankings and profiles.

# ============================================================================
# Environment
# ============================================================================
# Runtime environment (development, staging, production)
# Production refuses the public "demo" AQICN token.
environment = "development"

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# AQICN Provider
# ============================================================================
[waqi]
# Base URL of the AQICN API
base_url = "https://api.waqi.info"

# API token (use environment variable)
# Register at https://aqicn.org/data-platform/token/
api_token = "${WAQI_API_TOKEN}"

# Request timeout in seconds
timeout_seconds = 10

# ============================================================================
# AirVisual Provider (optional)
# ============================================================================
# Only the locations, conditions, and nearest queries need this provider.
[airvisual]
# Base URL of the AirVisual API
base_url = "https://api.airvisual.com/v2"

# API key (use environment variable)
# Uncomment once AIRVISUAL_API_KEY is set.
# api_key = "${AIRVISUAL_API_KEY}"

# Request timeout in seconds
timeout_seconds = 10

# ============================================================================
# Ranking Pages
# ============================================================================
[scrape]
# Most-polluted-cities ranking page
cities_url = "https://www.iqair.com/world-most-polluted-cities"

# World air quality report page
countries_url = "https://www.aqi.in/world-air-quality-report"

# Request timeout in seconds (ranking pages are slow)
timeout_seconds = 30

# Optional: custom User-Agent header for scrape requests
# user_agent = "aeris/1.2.0"

# ============================================================================
# Snapshot Files
# ============================================================================
[data]
# Global marker snapshot with per-pollutant sub-indices
markers_file = "data/aqi_latlong.csv"

# Yearly country ranking snapshot
countries_file = "data/polluted_countries.csv"

# Monthly per-city snapshot
cities_file = "data/polluted_cities.csv"

# ============================================================================
# Marker Cache
# ============================================================================
[cache]
# Cache file for fetched India markers.
# Written atomically; delete it to force a fresh fetch.
file = "data/cache/india_aqi.json"

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable local file logging (console logging is always on)
local_enabled = false

# Local log directory
local_path = "logs"

# Log rotation (daily or hourly)
local_rotation = "daily"
"#
        .to_string()
    }
}
