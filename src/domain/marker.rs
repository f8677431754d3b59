//! Map marker model
//!
//! `Marker` is the unified record every data source normalizes into. Its
//! serde renames pin the wire contract: cache snapshots and downstream
//! consumers read these exact keys, so field names here never change
//! casually.

use serde::{Deserialize, Serialize};

use crate::domain::aqi::AqiCategory;

/// A single air quality measurement point on the map
///
/// Live markers carry capture time and weather readings; markers built from
/// CSV snapshots carry pollutant sub-indices instead. Optional fields are
/// omitted from JSON entirely when absent rather than serialized as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    #[serde(rename = "Country")]
    pub country: String,

    #[serde(rename = "City")]
    pub city: String,

    #[serde(rename = "AQI")]
    pub aqi: f64,

    #[serde(rename = "AQI_Category")]
    pub category: AqiCategory,

    #[serde(rename = "Latitude")]
    pub latitude: f64,

    #[serde(rename = "Longitude")]
    pub longitude: f64,

    #[serde(rename = "Continent", skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,

    /// Display color, always derived from the category
    pub color: String,

    /// Capture timestamp as reported by the station
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<String>,

    #[serde(rename = "PM2.5", skip_serializing_if = "Option::is_none")]
    pub pm25: Option<String>,

    #[serde(rename = "PM2.5_Category", skip_serializing_if = "Option::is_none")]
    pub pm25_category: Option<String>,

    #[serde(rename = "PM10", skip_serializing_if = "Option::is_none")]
    pub pm10: Option<String>,

    #[serde(rename = "PM10_Category", skip_serializing_if = "Option::is_none")]
    pub pm10_category: Option<String>,

    #[serde(rename = "O3", skip_serializing_if = "Option::is_none")]
    pub o3: Option<String>,

    #[serde(rename = "O3_Category", skip_serializing_if = "Option::is_none")]
    pub o3_category: Option<String>,

    #[serde(rename = "NO2", skip_serializing_if = "Option::is_none")]
    pub no2: Option<String>,

    #[serde(rename = "NO2_Category", skip_serializing_if = "Option::is_none")]
    pub no2_category: Option<String>,
}

impl Marker {
    /// Creates a marker with category and color derived from the AQI value
    ///
    /// Sources that publish their own classification override it afterwards
    /// with [`Marker::with_reported_category`]; either way the color always
    /// matches the category.
    pub fn new(
        country: impl Into<String>,
        city: impl Into<String>,
        aqi: f64,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        let category = AqiCategory::from_value(aqi);
        Self {
            country: country.into(),
            city: city.into(),
            aqi,
            category,
            latitude,
            longitude,
            continent: None,
            color: category.color().to_string(),
            time: None,
            wind_speed: None,
            wind_direction: None,
            temperature: None,
            pm25: None,
            pm25_category: None,
            pm10: None,
            pm10_category: None,
            o3: None,
            o3_category: None,
            no2: None,
            no2_category: None,
        }
    }

    /// Replaces the derived category with one reported by the source
    ///
    /// The color is re-derived so it stays paired with the category.
    pub fn with_reported_category(mut self, category: AqiCategory) -> Self {
        self.category = category;
        self.color = category.color().to_string();
        self
    }

    /// Sets the continent
    pub fn with_continent(mut self, continent: impl Into<String>) -> Self {
        self.continent = Some(continent.into());
        self
    }

    /// Sets the capture timestamp
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Sets the weather readings
    pub fn with_weather(
        mut self,
        wind_speed: impl Into<String>,
        wind_direction: impl Into<String>,
        temperature: impl Into<String>,
    ) -> Self {
        self.wind_speed = Some(wind_speed.into());
        self.wind_direction = Some(wind_direction.into());
        self.temperature = Some(temperature.into());
        self
    }
}
