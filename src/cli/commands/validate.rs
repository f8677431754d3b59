//! `validate-config` command: checks the configuration file and prints a summary

use crate::config::load_config;
use clap::Args;

#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Loading already runs full validation, so a successful load means a
    /// valid configuration.
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                println!();
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Environment: {:?}", config.environment);
        println!("  Log Level: {}", config.application.log_level);
        println!("  AQICN API: {}", config.waqi.base_url);
        println!(
            "  AirVisual API: {} ({})",
            config.airvisual.base_url,
            if config.airvisual.has_key() {
                "key configured"
            } else {
                "no key"
            }
        );
        println!("  Cities Ranking Page: {}", config.scrape.cities_url);
        println!("  Countries Ranking Page: {}", config.scrape.countries_url);
        println!("  Markers Snapshot: {}", config.data.markers_file);
        println!("  Countries Snapshot: {}", config.data.countries_file);
        println!("  Cities Snapshot: {}", config.data.cities_file);
        println!("  Cache File: {}", config.cache.file);
        println!();
        Ok(0)
    }
}
