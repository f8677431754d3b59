//! Status command implementation
//!
//! This module implements the `status` command for displaying the cache
//! snapshot state and a summary of the static dataset.

use crate::config::load_config;
use crate::core::cache::CacheStore;
use crate::core::dataset::StaticDataset;
use chrono::{DateTime, Local};
use clap::Args;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Number of ranking rows to display
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Checking data status");

        println!("📊 Aeris Data Status");
        println!();

        // Load configuration
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Live cache snapshot
        let cache = CacheStore::new(&config.cache.file);
        if cache.exists() {
            let markers = cache.load();
            println!("Live cache: {}", cache.path().display());
            println!("  Markers: {}", markers.len());
            if let Some(modified) = modified_at(&cache) {
                println!("  Updated: {modified}");
            }
        } else {
            println!("Live cache: {} (not yet written)", cache.path().display());
            println!("  Run 'aeris refresh' to populate it.");
        }
        println!();

        // Static dataset summary
        let dataset = StaticDataset::load(&config.data);
        println!("Static dataset:");
        println!("  Markers: {}", dataset.markers().len());
        println!("  Countries: {}", dataset.countries().len());
        println!("  Cities: {}", dataset.cities().len());
        println!("  Global average AQI: {:.1}", dataset.global_average());
        println!();

        let top = dataset.top_polluted(self.top);
        if top.is_empty() {
            println!("No country rankings loaded.");
            return Ok(0);
        }

        // Display rankings in table format
        println!("Top {} polluted countries:", top.len());
        println!();
        println!("{:<6} {:<30} {:<10}", "Rank", "Country", "Avg AQI");
        println!("{}", "-".repeat(48));

        for country in top {
            let rank = country
                .rank
                .map(|r| r.to_string())
                .unwrap_or_else(|| "N/A".to_string());

            println!(
                "{:<6} {:<30} {:<10.1}",
                rank,
                country.country,
                country.effective_average()
            );
        }

        Ok(0)
    }
}

/// Cache file modification time, rendered in local time
fn modified_at(cache: &CacheStore) -> Option<String> {
    let metadata = std::fs::metadata(cache.path()).ok()?;
    let modified = metadata.modified().ok()?;
    let local: DateTime<Local> = modified.into();
    Some(local.format("%Y-%m-%d %H:%M:%S").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_args_defaults() {
        let args = StatusArgs { top: 10 };
        assert_eq!(args.top, 10);
    }
}
