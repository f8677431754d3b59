//! AirVisual HTTP client
//!
//! Thin client over the AirVisual v2 REST API. Covers the location
//! hierarchy (countries, states, cities), city conditions, and the two
//! nearest-location endpoints.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use secrecy::ExposeSecret;
use url::Url;

use crate::adapters::airvisual::models::{
    AirVisualEnvelope, CityConditions, CityEntry, CountryEntry, StateEntry,
};
use crate::config::AirVisualConfig;
use crate::domain::errors::AirVisualError;

/// Client for the AirVisual v2 API
///
/// # Example
///
/// ```no_run
/// use aeris::adapters::airvisual::AirVisualClient;
/// use aeris::config::AirVisualConfig;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = AirVisualConfig::default();
/// let client = AirVisualClient::new(&config);
/// let countries = client.countries().await?;
/// println!("{} countries reporting", countries.len());
/// # Ok(())
/// # }
/// ```
pub struct AirVisualClient {
    base_url: String,
    client: Client,
    config: AirVisualConfig,
}

impl AirVisualClient {
    /// Create a new AirVisual client
    pub fn new(config: &AirVisualConfig) -> Self {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            config: config.clone(),
        }
    }

    /// Build an endpoint URL with the given query parameters plus the key
    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, AirVisualError> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, path))
            .map_err(|e| AirVisualError::InvalidResponse(format!("Invalid URL: {}", e)))?;

        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in params {
                pairs.append_pair(name, value);
            }
            pairs.append_pair("key", self.config.api_key.expose_secret().as_ref());
        }

        Ok(url)
    }

    /// GET a URL and unwrap the AirVisual envelope
    async fn get_data(&self, url: Url) -> Result<serde_json::Value, AirVisualError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            AirVisualError::ConnectionFailed(format!("Failed to reach AirVisual API: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AirVisualError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: AirVisualEnvelope = response.json().await.map_err(|e| {
            AirVisualError::InvalidResponse(format!("Failed to parse AirVisual response: {}", e))
        })?;

        if envelope.status != "success" {
            let message = envelope.data["message"]
                .as_str()
                .map(String::from)
                .unwrap_or_else(|| envelope.data.to_string());
            return Err(AirVisualError::Rejected(message));
        }

        Ok(envelope.data)
    }

    /// List countries with monitoring coverage
    pub async fn countries(&self) -> Result<Vec<String>, AirVisualError> {
        let url = self.endpoint("countries", &[])?;
        let data = self.get_data(url).await?;

        let entries: Vec<CountryEntry> = serde_json::from_value(data).map_err(|e| {
            AirVisualError::InvalidResponse(format!("Unexpected countries payload: {}", e))
        })?;

        Ok(entries.into_iter().map(|entry| entry.country).collect())
    }

    /// List states within a country
    pub async fn states(&self, country: &str) -> Result<Vec<String>, AirVisualError> {
        let url = self.endpoint("states", &[("country", country)])?;
        let data = self.get_data(url).await?;

        let entries: Vec<StateEntry> = serde_json::from_value(data).map_err(|e| {
            AirVisualError::InvalidResponse(format!("Unexpected states payload: {}", e))
        })?;

        Ok(entries.into_iter().map(|entry| entry.state).collect())
    }

    /// List cities within a state
    pub async fn cities(&self, country: &str, state: &str) -> Result<Vec<String>, AirVisualError> {
        let url = self.endpoint("cities", &[("country", country), ("state", state)])?;
        let data = self.get_data(url).await?;

        let entries: Vec<CityEntry> = serde_json::from_value(data).map_err(|e| {
            AirVisualError::InvalidResponse(format!("Unexpected cities payload: {}", e))
        })?;

        Ok(entries.into_iter().map(|entry| entry.city).collect())
    }

    /// Current conditions for a specific city
    pub async fn city(
        &self,
        country: &str,
        state: &str,
        city: &str,
    ) -> Result<CityConditions, AirVisualError> {
        let url = self.endpoint(
            "city",
            &[("country", country), ("state", state), ("city", city)],
        )?;
        let data = self.get_data(url).await?;

        serde_json::from_value(data).map_err(|e| {
            AirVisualError::InvalidResponse(format!("Unexpected city payload: {}", e))
        })
    }

    /// Conditions at the city nearest to the given coordinates
    pub async fn nearest_city(&self, lat: f64, lon: f64) -> Result<CityConditions, AirVisualError> {
        let url = self.endpoint(
            "nearest_city",
            &[("lat", &lat.to_string()), ("lon", &lon.to_string())],
        )?;
        let data = self.get_data(url).await?;

        serde_json::from_value(data).map_err(|e| {
            AirVisualError::InvalidResponse(format!("Unexpected nearest_city payload: {}", e))
        })
    }

    /// Conditions at the monitoring station nearest to the given coordinates
    pub async fn nearest_station(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<CityConditions, AirVisualError> {
        let url = self.endpoint(
            "nearest_station",
            &[("lat", &lat.to_string()), ("lon", &lon.to_string())],
        )?;
        let data = self.get_data(url).await?;

        serde_json::from_value(data).map_err(|e| {
            AirVisualError::InvalidResponse(format!("Unexpected nearest_station payload: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_trims_trailing_slash() {
        let config = AirVisualConfig {
            base_url: "https://api.airvisual.com/v2/".to_string(),
            ..Default::default()
        };

        let client = AirVisualClient::new(&config);
        assert_eq!(client.base_url, "https://api.airvisual.com/v2");
    }

    #[test]
    fn test_endpoint_encodes_params_and_key() {
        let config = AirVisualConfig {
            api_key: crate::config::secret_string("abc123".to_string()),
            ..Default::default()
        };

        let client = AirVisualClient::new(&config);
        let url = client
            .endpoint("states", &[("country", "United Arab Emirates")])
            .unwrap();

        let rendered = url.as_str();
        assert!(rendered.starts_with("https://api.airvisual.com/v2/states?"));
        assert!(rendered.contains("country=United+Arab+Emirates"));
        assert!(rendered.contains("key=abc123"));
    }
}
