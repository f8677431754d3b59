//! Domain error types
//!
//! This module defines the error hierarchy for Aeris. All errors are
//! domain-specific and don't expose third-party types; adapters convert
//! transport and parse failures into these variants at their boundary.

use thiserror::Error;

/// Main Aeris error type
///
/// This is the primary error type used throughout the application.
/// It wraps source-specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum AerisError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// AQICN (api.waqi.info) provider errors
    #[error("AQICN error: {0}")]
    Waqi(#[from] WaqiError),

    /// AirVisual provider errors
    #[error("AirVisual error: {0}")]
    AirVisual(#[from] AirVisualError),

    /// Web scraping errors
    #[error("Scrape error: {0}")]
    Scrape(#[from] ScrapeError),

    /// Snapshot file reading errors
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Cache store errors
    #[error("Cache error: {0}")]
    Cache(String),

    /// Lookup failures carrying suggested alternatives
    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// AQICN-specific errors
///
/// Errors that occur when talking to the AQICN (api.waqi.info) API.
/// These errors don't expose the HTTP client types.
#[derive(Debug, Error)]
pub enum WaqiError {
    /// Failed to reach the AQICN API
    #[error("Failed to connect to AQICN API: {0}")]
    ConnectionFailed(String),

    /// Response body could not be parsed
    #[error("Invalid response from AQICN API: {0}")]
    InvalidResponse(String),

    /// The API answered with a non-ok status in the payload
    #[error("AQICN API rejected the request: {0}")]
    Rejected(String),

    /// HTTP-level error status
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },
}

/// AirVisual-specific errors
///
/// Errors that occur when talking to the AirVisual (IQAir) API.
#[derive(Debug, Error)]
pub enum AirVisualError {
    /// Failed to reach the AirVisual API
    #[error("Failed to connect to AirVisual API: {0}")]
    ConnectionFailed(String),

    /// Response body could not be parsed
    #[error("Invalid response from AirVisual API: {0}")]
    InvalidResponse(String),

    /// The API answered with a non-success status in the payload
    #[error("AirVisual API rejected the request: {0}")]
    Rejected(String),

    /// HTTP-level error status
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },
}

/// Scraping-specific errors
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Failed to download the page
    #[error("Failed to fetch page: {0}")]
    ConnectionFailed(String),

    /// HTTP-level error status
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// The page contained no tables to extract
    #[error("No tables found in page: {0}")]
    NoTables(String),
}

/// Lookup failure with suggested alternatives
///
/// Returned when a profile query names an unknown country, state, or city.
/// The suggestion list carries up to a handful of valid names so callers
/// can present a helpful message instead of a bare "not found".
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct NotFoundError {
    /// Human-readable description of what was not found
    pub message: String,

    /// Up to a few valid alternatives
    pub suggestions: Vec<String>,
}

impl NotFoundError {
    /// Creates a new lookup error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestions: Vec::new(),
        }
    }

    /// Attaches suggested alternatives
    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for AerisError {
    fn from(err: std::io::Error) -> Self {
        AerisError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for AerisError {
    fn from(err: serde_json::Error) -> Self {
        AerisError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for AerisError {
    fn from(err: toml::de::Error) -> Self {
        AerisError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from csv reader errors
impl From<csv::Error> for AerisError {
    fn from(err: csv::Error) -> Self {
        AerisError::Snapshot(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aeris_error_display() {
        let err = AerisError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_waqi_error_conversion() {
        let waqi_err = WaqiError::ConnectionFailed("Network error".to_string());
        let aeris_err: AerisError = waqi_err.into();
        assert!(matches!(aeris_err, AerisError::Waqi(_)));
    }

    #[test]
    fn test_airvisual_error_conversion() {
        let av_err = AirVisualError::Rejected("call limit reached".to_string());
        let aeris_err: AerisError = av_err.into();
        assert!(matches!(aeris_err, AerisError::AirVisual(_)));
    }

    #[test]
    fn test_scrape_error_conversion() {
        let scrape_err = ScrapeError::NoTables("https://example.com".to_string());
        let aeris_err: AerisError = scrape_err.into();
        assert!(matches!(aeris_err, AerisError::Scrape(_)));
    }

    #[test]
    fn test_not_found_error_builder() {
        let err = NotFoundError::new("Could not find data for Atlantis")
            .with_suggestions(vec!["India".to_string(), "China".to_string()]);

        assert_eq!(err.message, "Could not find data for Atlantis");
        assert_eq!(err.suggestions.len(), 2);
        assert_eq!(err.to_string(), "Could not find data for Atlantis");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let aeris_err: AerisError = io_err.into();
        assert!(matches!(aeris_err, AerisError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let aeris_err: AerisError = json_err.into();
        assert!(matches!(aeris_err, AerisError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let aeris_err: AerisError = toml_err.into();
        assert!(matches!(aeris_err, AerisError::Configuration(_)));
        assert!(aeris_err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_aeris_error_implements_std_error() {
        let err = AerisError::Cache("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_waqi_error_implements_std_error() {
        let err = WaqiError::ConnectionFailed("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
