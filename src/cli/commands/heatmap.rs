//! Heatmap command implementation
//!
//! This module implements the `heatmap` command for deriving weighted
//! India heat-map points from the monthly city snapshot.

use crate::config::load_config;
use crate::core::dataset::StaticDataset;
use crate::core::heatmap::heatmap_points;
use clap::Args;

/// Arguments for the heatmap command
#[derive(Args, Debug)]
pub struct HeatmapArgs {}

impl HeatmapArgs {
    /// Execute the heatmap command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting heatmap command");

        // Load configuration
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let dataset = StaticDataset::load(&config.data);
        let points = heatmap_points(&dataset);

        println!("{}", serde_json::to_string_pretty(&points)?);
        Ok(0)
    }
}
