//! Integration tests for logging functionality
//!
//! `init_logging` installs a global subscriber, so only one test in this
//! binary may actually initialize; the rest stick to configuration checks.

use aeris::config::LoggingConfig;
use aeris::logging::init_logging;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "logs");
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_init_logging_creates_log_directory() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "daily".to_string(),
    };

    // An invalid level fails before any global state is touched
    assert!(init_logging("not-a-level", &config).is_err());
    assert!(!log_path.exists());

    let guard = init_logging("debug", &config).expect("Failed to initialize logging");
    assert!(log_path.exists());

    tracing::info!("logging integration test event");

    // Dropping the guard flushes the non-blocking file writer
    drop(guard);

    let entries: Vec<_> = std::fs::read_dir(&log_path)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert!(!entries.is_empty());
}
