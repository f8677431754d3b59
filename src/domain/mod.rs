//! Domain models and types for Aeris.
//!
//! This module contains the core domain models, types, and business rules
//! for Aeris. Everything here is source-agnostic: adapters normalize their
//! payloads into these types, and the service layer only ever works with
//! them.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **AQI classification** ([`AqiCategory`], [`parse_reading`])
//! - **The unified marker model** ([`Marker`])
//! - **Historical records** ([`CountryAqi`], [`CityAqi`], [`MonthlySeries`])
//! - **Geographic lookups** ([`continent_for_country`], [`split_station_label`])
//! - **Error types** ([`AerisError`], [`WaqiError`], [`AirVisualError`])
//! - **Result type alias** ([`Result`])
//!
//! # Classification
//!
//! Every AQI value maps to exactly one category, and every category to
//! exactly one color:
//!
//! ```rust
//! use aeris::domain::AqiCategory;
//!
//! let category = AqiCategory::from_value(135.0);
//! assert_eq!(category.label(), "Unhealthy for Sensitive Groups");
//! assert_eq!(category.color(), "orange");
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, AerisError>`]:
//!
//! ```rust
//! use aeris::domain::{AerisError, Result};
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let markers: Vec<aeris::domain::Marker> = serde_json::from_str("[]")?;
//!     assert!(markers.is_empty());
//!     Ok(())
//! }
//! ```

pub mod aqi;
pub mod errors;
pub mod geo;
pub mod marker;
pub mod records;
pub mod result;

// Re-export commonly used types for convenience
pub use aqi::{parse_reading, AqiCategory};
pub use errors::{AerisError, AirVisualError, NotFoundError, ScrapeError, WaqiError};
pub use geo::{continent_for_country, simplify_country, split_station_label};
pub use marker::Marker;
pub use records::{CityAqi, CountryAqi, MonthlySeries, MONTH_NAMES};
pub use result::Result;
