//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::AerisConfig;
use crate::config::secret::secret_string;
use crate::domain::errors::AerisError;
use crate::domain::result::Result;
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Loads and validates configuration from a TOML file
///
/// `${VAR}` placeholders are expanded from the environment before parsing,
/// then any `AERIS_*` override variables are applied on top of the parsed
/// values.
///
/// # Errors
///
/// Returns a configuration error when the file is missing or unreadable,
/// a placeholder references an unset variable, the TOML is malformed, or
/// validation rejects the resulting config.
///
/// # Examples
///
/// ```no_run
/// use aeris::config::loader::load_config;
///
/// let config = load_config("aeris.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<AerisConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(AerisError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let raw = fs::read_to_string(path).map_err(|e| {
        AerisError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let expanded = substitute_env_vars(&raw)?;

    let mut config: AerisConfig = toml::from_str(&expanded)
        .map_err(|e| AerisError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        AerisError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Expands `${VAR_NAME}` placeholders from the environment
///
/// Placeholders on comment lines are left untouched, so a commented-out
/// setting never forces a variable to be set. All unset variables are
/// collected and reported in a single error.
fn substitute_env_vars(input: &str) -> Result<String> {
    let placeholder_re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut missing = BTreeSet::new();

    let expanded: Vec<String> = input
        .lines()
        .map(|line| {
            if line.trim_start().starts_with('#') {
                return line.to_string();
            }
            placeholder_re
                .replace_all(line, |caps: &regex::Captures<'_>| {
                    let name = &caps[1];
                    std::env::var(name).unwrap_or_else(|_| {
                        missing.insert(name.to_string());
                        String::new()
                    })
                })
                .into_owned()
        })
        .collect();

    if !missing.is_empty() {
        return Err(AerisError::Configuration(format!(
            "Missing required environment variables: {}",
            missing.into_iter().collect::<Vec<_>>().join(", ")
        )));
    }

    Ok(expanded.join("\n") + "\n")
}

/// Applies `AERIS_<SECTION>_<KEY>` environment overrides to a parsed config
///
/// For example `AERIS_WAQI_API_TOKEN` replaces `waqi.api_token` and
/// `AERIS_CACHE_FILE` replaces `cache.file`. Values that fail to parse for
/// typed fields are ignored rather than treated as errors.
fn apply_env_overrides(config: &mut AerisConfig) -> Result<()> {
    fn env(name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    if let Some(val) = env("AERIS_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Some(val) = env("AERIS_WAQI_BASE_URL") {
        config.waqi.base_url = val;
    }
    if let Some(val) = env("AERIS_WAQI_API_TOKEN") {
        config.waqi.api_token = secret_string(val);
    }
    if let Some(timeout) = env("AERIS_WAQI_TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
        config.waqi.timeout_seconds = timeout;
    }

    if let Some(val) = env("AERIS_AIRVISUAL_BASE_URL") {
        config.airvisual.base_url = val;
    }
    if let Some(val) = env("AERIS_AIRVISUAL_API_KEY") {
        config.airvisual.api_key = secret_string(val);
    }
    if let Some(timeout) = env("AERIS_AIRVISUAL_TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
        config.airvisual.timeout_seconds = timeout;
    }

    if let Some(val) = env("AERIS_SCRAPE_CITIES_URL") {
        config.scrape.cities_url = val;
    }
    if let Some(val) = env("AERIS_SCRAPE_COUNTRIES_URL") {
        config.scrape.countries_url = val;
    }
    if let Some(val) = env("AERIS_SCRAPE_USER_AGENT") {
        config.scrape.user_agent = val;
    }

    if let Some(val) = env("AERIS_DATA_MARKERS_FILE") {
        config.data.markers_file = val;
    }
    if let Some(val) = env("AERIS_DATA_COUNTRIES_FILE") {
        config.data.countries_file = val;
    }
    if let Some(val) = env("AERIS_DATA_CITIES_FILE") {
        config.data.cities_file = val;
    }

    if let Some(val) = env("AERIS_CACHE_FILE") {
        config.cache.file = val;
    }

    if let Some(val) = env("AERIS_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Some(val) = env("AERIS_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("TEST_SUBST_VAR", "test_value");
        let result = substitute_env_vars("api_token = \"${TEST_SUBST_VAR}\"").unwrap();
        assert_eq!(result, "api_token = \"test_value\"\n");
        std::env::remove_var("TEST_SUBST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("MISSING_SUBST_VAR");
        let result = substitute_env_vars("api_token = \"${MISSING_SUBST_VAR}\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("COMMENTED_OUT_VAR");
        let result = substitute_env_vars("# api_token = \"${COMMENTED_OUT_VAR}\"");
        assert!(result.is_ok());
    }

    #[test]
    fn test_load_config_missing_file() {
        assert!(load_config("nonexistent.toml").is_err());
    }

    #[test]
    fn test_load_config_valid() {
        use secrecy::ExposeSecret;

        let toml_content = r#"
[application]
log_level = "info"

[waqi]
base_url = "https://api.waqi.info"
api_token = "test-token"

[cache]
file = "data/cache/test.json"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.waqi.base_url, "https://api.waqi.info");
        assert_eq!(config.waqi.api_token.expose_secret().as_ref(), "test-token");
        assert_eq!(config.cache.file, "data/cache/test.json");
    }
}
