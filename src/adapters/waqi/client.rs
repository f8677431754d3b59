//! AQICN API client
//!
//! Thin client over the api.waqi.info REST endpoints. Transport and parse
//! failures are converted to [`WaqiError`] variants at this boundary; no
//! reqwest types leak to callers.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use secrecy::ExposeSecret;

use super::models::{BoundsStation, CityFeed, StationDetail, WaqiEnvelope};
use super::source::{AqiSource, Bounds};
use crate::config::WaqiConfig;
use crate::domain::{AerisError, Result, WaqiError};

/// Client for the AQICN (api.waqi.info) API
///
/// # Example
///
/// ```no_run
/// use aeris::adapters::waqi::{AqiSource, Bounds, WaqiClient};
/// use aeris::config::WaqiConfig;
///
/// # async fn example() -> aeris::domain::Result<()> {
/// let client = WaqiClient::new(WaqiConfig::default());
/// let stations = client.stations_in_bounds(&Bounds::INDIA).await?;
/// println!("{} stations", stations.len());
/// # Ok(())
/// # }
/// ```
pub struct WaqiClient {
    /// Base URL of the AQICN API
    base_url: String,

    /// HTTP client for making requests
    client: Client,

    /// Provider configuration
    config: WaqiConfig,
}

impl WaqiClient {
    /// Create a new AQICN client
    pub fn new(config: WaqiConfig) -> Self {
        let base_url = config.base_url.trim_end_matches('/').to_string();

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url,
            client,
            config,
        }
    }

    fn token(&self) -> &str {
        self.config.api_token.expose_secret().as_ref()
    }

    /// GET a URL, check both HTTP status and the payload envelope, and
    /// return the `data` payload
    async fn get_data(&self, url: &str) -> Result<serde_json::Value> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AerisError::Waqi(WaqiError::ConnectionFailed(e.to_string())))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(AerisError::Waqi(WaqiError::ServerError { status, message }));
        }

        let envelope: WaqiEnvelope = resp
            .json()
            .await
            .map_err(|e| AerisError::Waqi(WaqiError::InvalidResponse(e.to_string())))?;

        if envelope.status != "ok" {
            let message = envelope
                .data
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| envelope.data.to_string());
            return Err(AerisError::Waqi(WaqiError::Rejected(message)));
        }

        Ok(envelope.data)
    }
}

#[async_trait]
impl AqiSource for WaqiClient {
    async fn stations_in_bounds(&self, bounds: &Bounds) -> Result<Vec<BoundsStation>> {
        let url = format!(
            "{}/map/bounds/?latlng={}&token={}",
            self.base_url,
            bounds.latlng_query(),
            self.token()
        );

        let data = self.get_data(&url).await?;

        let rows = match data {
            serde_json::Value::Array(rows) => rows,
            other => {
                return Err(AerisError::Waqi(WaqiError::InvalidResponse(format!(
                    "expected a station array, got {other}"
                ))));
            }
        };

        // Malformed rows are dropped individually so one broken station
        // never costs the whole region.
        let mut stations = Vec::with_capacity(rows.len());
        for row in rows {
            match serde_json::from_value::<BoundsStation>(row) {
                Ok(station) => stations.push(station),
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping malformed station record");
                }
            }
        }

        Ok(stations)
    }

    async fn station_detail(&self, uid: i64) -> Result<StationDetail> {
        let url = format!("{}/feed/@{}/?token={}", self.base_url, uid, self.token());

        let data = self.get_data(&url).await?;

        serde_json::from_value(data)
            .map_err(|e| AerisError::Waqi(WaqiError::InvalidResponse(e.to_string())))
    }

    async fn city_feed(&self, city: &str) -> Result<CityFeed> {
        // City names are user input, so the URL is built with proper
        // percent-encoding instead of string formatting.
        let mut url = url::Url::parse(&self.base_url)
            .map_err(|e| AerisError::Configuration(format!("Invalid waqi.base_url: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| AerisError::Configuration("Invalid waqi.base_url".to_string()))?
            .push("feed")
            .push(city)
            .push("");
        url.query_pairs_mut().append_pair("token", self.token());

        let data = self.get_data(url.as_str()).await?;

        serde_json::from_value(data)
            .map_err(|e| AerisError::Waqi(WaqiError::InvalidResponse(e.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    fn test_config(base_url: &str) -> WaqiConfig {
        WaqiConfig {
            base_url: base_url.to_string(),
            api_token: secret_string("test-token".to_string()),
            timeout_seconds: 10,
        }
    }

    #[test]
    fn test_client_creation_trims_trailing_slash() {
        let client = WaqiClient::new(test_config("https://api.waqi.info/"));
        assert_eq!(client.base_url, "https://api.waqi.info");
    }

    #[test]
    fn test_token_accessor() {
        let client = WaqiClient::new(test_config("https://api.waqi.info"));
        assert_eq!(client.token(), "test-token");
    }
}
