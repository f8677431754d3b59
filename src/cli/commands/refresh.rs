//! Refresh command implementation
//!
//! This module implements the `refresh` command for fetching live station
//! data into the marker cache and for re-scraping the ranking pages.

use crate::adapters::scrape::RankingScraper;
use crate::adapters::waqi::WaqiClient;
use crate::config::{load_config, AerisConfig};
use crate::core::cache::CacheStore;
use crate::core::normalize::{MarkerPipeline, Scope};
use crate::core::refresh::update_all;
use clap::Args;
use std::sync::Arc;

/// Arguments for the refresh command
#[derive(Args, Debug)]
pub struct RefreshArgs {
    /// Fetch the global station window instead of India
    #[arg(long)]
    pub global: bool,

    /// Re-scrape the ranking pages instead of fetching stations
    #[arg(long)]
    pub rankings: bool,
}

impl RefreshArgs {
    /// Execute the refresh command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting refresh command");

        // Load configuration
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        if self.rankings {
            return self.refresh_rankings(&config).await;
        }

        let scope = if self.global {
            Scope::Global
        } else {
            Scope::India
        };

        let pipeline = MarkerPipeline::new(Arc::new(WaqiClient::new(config.waqi.clone())));

        println!("🔄 Fetching live stations ({} window)...", scope.name());

        let markers = match pipeline.fetch_markers(scope).await {
            Ok(m) => m,
            Err(e) => {
                tracing::error!(error = %e, "Live fetch failed");
                println!("❌ Failed to fetch live data");
                println!("   Error: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        println!("✅ Normalized {} marker(s)", markers.len());

        // Only the India window is cached; the global window is display-only
        if self.global {
            println!("   Global results are not cached");
            return Ok(0);
        }

        let cache = CacheStore::new(&config.cache.file);
        match cache.save(&markers) {
            Ok(_) => {
                println!("✅ Cache updated: {}", cache.path().display());
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, "Cache write failed");
                println!("❌ Failed to write cache");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Re-scrape both ranking pages and report per-source success
    async fn refresh_rankings(&self, config: &AerisConfig) -> anyhow::Result<i32> {
        let scraper = RankingScraper::new(&config.scrape);

        println!("🔄 Re-scraping ranking pages...");
        println!();

        let summary = update_all(&scraper).await;

        println!("📊 Refresh Summary:");
        println!(
            "  Cities: {}",
            if summary.cities_updated {
                "✅ Updated"
            } else {
                "❌ Failed"
            }
        );
        println!(
            "  Countries: {}",
            if summary.countries_updated {
                "✅ Updated"
            } else {
                "❌ Failed"
            }
        );
        println!("  Timestamp: {}", summary.timestamp);

        if summary.failed() {
            Ok(4) // Connection error exit code
        } else if !summary.complete() {
            Ok(1) // Partial refresh exit code
        } else {
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_args_defaults() {
        let args = RefreshArgs {
            global: false,
            rankings: false,
        };

        assert!(!args.global);
        assert!(!args.rankings);
    }
}
