//! Weather attribute enrichment
//!
//! Station feeds report weather readings in the `iaqi` map under
//! provider-dependent keys. Each attribute is resolved by trying its known
//! aliases in a fixed priority order and falling back to a documented
//! default when none carry a usable value. Readings are normalized to
//! strings so downstream consumers see one type regardless of how the
//! provider encoded the number.

use std::collections::HashMap;

use crate::adapters::waqi::models::IaqiEntry;

const WIND_SPEED_ALIASES: [&str; 2] = ["w", "wind"];
const WIND_DIRECTION_ALIASES: [&str; 2] = ["wd", "wg"];
const TEMPERATURE_ALIASES: [&str; 2] = ["t", "temp"];

pub const DEFAULT_WIND_SPEED: &str = "3.5";
pub const DEFAULT_WIND_DIRECTION: &str = "120";
pub const DEFAULT_TEMPERATURE: &str = "28";

/// Normalized weather attributes for one station
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReadings {
    pub wind_speed: String,
    pub wind_direction: String,
    pub temperature: String,
}

impl Default for WeatherReadings {
    fn default() -> Self {
        Self {
            wind_speed: DEFAULT_WIND_SPEED.to_string(),
            wind_direction: DEFAULT_WIND_DIRECTION.to_string(),
            temperature: DEFAULT_TEMPERATURE.to_string(),
        }
    }
}

impl WeatherReadings {
    /// Resolve weather attributes from a station's `iaqi` map
    pub fn from_iaqi(iaqi: &HashMap<String, IaqiEntry>) -> Self {
        Self {
            wind_speed: resolve_alias(iaqi, &WIND_SPEED_ALIASES, DEFAULT_WIND_SPEED),
            wind_direction: resolve_alias(iaqi, &WIND_DIRECTION_ALIASES, DEFAULT_WIND_DIRECTION),
            temperature: resolve_alias(iaqi, &TEMPERATURE_ALIASES, DEFAULT_TEMPERATURE),
        }
    }
}

/// Take the first alias whose entry holds a stringifiable value
fn resolve_alias(iaqi: &HashMap<String, IaqiEntry>, aliases: &[&str], default: &str) -> String {
    aliases
        .iter()
        .find_map(|alias| iaqi.get(*alias).and_then(|entry| stringify_reading(&entry.v)))
        .unwrap_or_else(|| default.to_string())
}

/// Render a reading as a string, or `None` if the value type is unusable
fn stringify_reading(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
