//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Aeris using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Aeris - Air Quality Data Tool
#[derive(Parser, Debug)]
#[command(name = "aeris")]
#[command(version, about, long_about = None)]
#[command(author = "Aeris Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "aeris.toml", env = "AERIS_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "AERIS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch live station data or re-scrape the ranking pages
    Refresh(commands::refresh::RefreshArgs),

    /// Query markers, profiles, and provider listings
    Query(commands::query::QueryArgs),

    /// Derive weighted heat-map points from the city snapshot
    Heatmap(commands::heatmap::HeatmapArgs),

    /// Show cache and dataset status
    Status(commands::status::StatusArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_refresh() {
        let cli = Cli::parse_from(["aeris", "refresh"]);
        assert_eq!(cli.config, "aeris.toml");
        assert!(matches!(cli.command, Commands::Refresh(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["aeris", "--config", "custom.toml", "refresh"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["aeris", "--log-level", "debug", "refresh"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_query_markers() {
        let cli = Cli::parse_from(["aeris", "query", "markers", "--country", "India"]);
        assert!(matches!(cli.command, Commands::Query(_)));
    }

    #[test]
    fn test_cli_parse_heatmap() {
        let cli = Cli::parse_from(["aeris", "heatmap"]);
        assert!(matches!(cli.command, Commands::Heatmap(_)));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["aeris", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_status() {
        let cli = Cli::parse_from(["aeris", "status"]);
        assert!(matches!(cli.command, Commands::Status(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["aeris", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
