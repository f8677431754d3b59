// Aeris - Air Quality Data Tool
// Copyright (c) 2025 Aeris Contributors
// Licensed under the MIT License

use aeris::cli::{Cli, Commands};
use aeris::config::LoggingConfig;
use aeris::logging::init_logging;
use clap::Parser;
use std::process;

#[tokio::main]
async fn main() {
    // A missing .env file is fine, variables may come from the shell
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Console-only logging for interactive use, file output stays off
    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let logging_config = LoggingConfig {
        local_enabled: false,
        local_path: String::new(),
        local_rotation: "daily".to_string(),
    };
    if let Err(e) = init_logging(log_level, &logging_config) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(5);
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Aeris - Air Quality Data Tool"
    );

    let exit_code = match run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    process::exit(exit_code);
}

/// Dispatch the parsed subcommand, returning its exit code
async fn run(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Refresh(args) => args.execute(&cli.config).await,
        Commands::Query(args) => args.execute(&cli.config).await,
        Commands::Heatmap(args) => args.execute(&cli.config).await,
        Commands::Status(args) => args.execute(&cli.config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
