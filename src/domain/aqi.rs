//! AQI classification
//!
//! Conversion of raw AQI readings into the six named categories and their
//! marker colors. The breakpoints follow the US EPA scale used by the
//! upstream data sources.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Named AQI category
///
/// Categories are ordered from least to most severe. Each category pairs
/// with a fixed display color used by map markers; the pairing is the same
/// across every data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    /// Classifies a numeric AQI value
    ///
    /// Boundary values belong to the lower category, so 50.0 is Good and
    /// 50.1 is Moderate. Values at or below zero classify as Good, which is
    /// where missing readings land after sentinel substitution.
    pub fn from_value(value: f64) -> Self {
        if value <= 50.0 {
            AqiCategory::Good
        } else if value <= 100.0 {
            AqiCategory::Moderate
        } else if value <= 150.0 {
            AqiCategory::UnhealthySensitive
        } else if value <= 200.0 {
            AqiCategory::Unhealthy
        } else if value <= 300.0 {
            AqiCategory::VeryUnhealthy
        } else {
            AqiCategory::Hazardous
        }
    }

    /// Display label as it appears in marker payloads and CSV snapshots
    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    /// Marker color paired with this category
    pub fn color(&self) -> &'static str {
        match self {
            AqiCategory::Good => "green",
            AqiCategory::Moderate => "yellow",
            AqiCategory::UnhealthySensitive => "orange",
            AqiCategory::Unhealthy => "red",
            AqiCategory::VeryUnhealthy => "purple",
            AqiCategory::Hazardous => "maroon",
        }
    }

    /// Parses a display label back into a category
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Good" => Some(AqiCategory::Good),
            "Moderate" => Some(AqiCategory::Moderate),
            "Unhealthy for Sensitive Groups" => Some(AqiCategory::UnhealthySensitive),
            "Unhealthy" => Some(AqiCategory::Unhealthy),
            "Very Unhealthy" => Some(AqiCategory::VeryUnhealthy),
            "Hazardous" => Some(AqiCategory::Hazardous),
            _ => None,
        }
    }
}

// Categories travel on the wire as their display label, so serialization
// is implemented by hand rather than derived.
impl Serialize for AqiCategory {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for AqiCategory {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        AqiCategory::from_label(&label)
            .ok_or_else(|| de::Error::custom(format!("unknown AQI category: {label}")))
    }
}

/// Parses a raw reading value from an API payload
///
/// Sources report missing readings as `-`, an empty string, or null; those
/// substitute to 0.0 so downstream classification lands in Good. Numbers and
/// numeric strings parse to their value. Anything else returns `None` and
/// the caller drops the record.
pub fn parse_reading(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Null => Some(0.0),
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => match s.as_str() {
            "-" | "" => Some(0.0),
            other => other.trim().parse::<f64>().ok(),
        },
        _ => None,
    }
}
