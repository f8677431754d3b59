//! Structured logging setup using tracing
//!
//! Console output is always on; an optional JSON file layer with rotation
//! can be enabled through [`LoggingConfig`]. Initialization happens once
//! per process, before any command runs.

use crate::config::LoggingConfig;
use crate::domain::{AerisError, Result};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Keeps the non-blocking file writer alive
///
/// Dropping the guard flushes buffered log lines, so callers hold it for
/// the life of the process.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the logging system
///
/// The console layer is installed unconditionally; the JSON file layer is
/// added when `config.local_enabled` is set, creating the log directory if
/// needed. `RUST_LOG` overrides the configured level when present.
///
/// # Example
///
/// ```no_run
/// use aeris::logging::init_logging;
/// use aeris::config::LoggingConfig;
///
/// let config = LoggingConfig::default();
/// let _guard = init_logging("info", &config).expect("Failed to initialize logging");
/// ```
pub fn init_logging(log_level_str: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let level = parse_log_level(log_level_str)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("aeris={level}")));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(env_filter.clone());

    let mut layers = vec![console_layer.boxed()];

    let file_guard = if config.local_enabled {
        let (layer, guard) = file_layer(config, env_filter)?;
        layers.push(layer);
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry().with(layers).init();

    tracing::info!(
        local_enabled = config.local_enabled,
        local_path = %config.local_path,
        "Logging initialized"
    );

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

type BoxedLayer = Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>;

/// Build the JSON file layer and its flush guard
fn file_layer(config: &LoggingConfig, env_filter: EnvFilter) -> Result<(BoxedLayer, WorkerGuard)> {
    std::fs::create_dir_all(&config.local_path).map_err(|e| {
        AerisError::Configuration(format!(
            "Failed to create log directory {}: {}",
            config.local_path, e
        ))
    })?;

    let rotation = match config.local_rotation.as_str() {
        "hourly" => Rotation::HOURLY,
        _ => Rotation::DAILY,
    };
    let appender = RollingFileAppender::new(rotation, &config.local_path, "aeris.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(non_blocking)
        .with_filter(env_filter)
        .boxed();

    Ok((layer, guard))
}

fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(AerisError::Configuration(format!(
            "Invalid log level: {other}. Must be one of: trace, debug, info, warn, error"
        ))),
    }
}
