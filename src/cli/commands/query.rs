//! Query command implementation
//!
//! This module implements the `query` command family: marker queries over
//! the static dataset and the live cache, country and city profiles,
//! per-city live feeds, and AirVisual location listings.

use crate::adapters::airvisual::AirVisualClient;
use crate::adapters::waqi::WaqiClient;
use crate::config::{load_config, AerisConfig};
use crate::core::cache::CacheStore;
use crate::core::dataset::StaticDataset;
use crate::core::normalize::MarkerPipeline;
use crate::core::query::{MarkerQuery, QueryService};
use crate::domain::{AerisError, AirVisualError};
use clap::{Args, Subcommand};
use std::sync::Arc;

/// Arguments for the query command
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Query target
    #[command(subcommand)]
    pub target: QueryTarget,
}

/// Available query targets
#[derive(Subcommand, Debug)]
pub enum QueryTarget {
    /// List map markers, filtered by continent, country, and city
    Markers(MarkersArgs),

    /// Show a country's ranking profile with monthly averages
    Country(CountryArgs),

    /// Show a city's monthly profile
    City(CityArgs),

    /// Fetch the live feed for one city from AQICN
    Feed(FeedArgs),

    /// List the distinct filter values in the marker snapshot
    Options,

    /// List countries, states, or cities known to AirVisual
    Locations(LocationsArgs),

    /// Show current conditions for a city via AirVisual
    Conditions(ConditionsArgs),

    /// Show conditions nearest to a coordinate via AirVisual
    Nearest(NearestArgs),
}

impl QueryArgs {
    /// Execute the query command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting query command");

        // Load configuration
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        match &self.target {
            QueryTarget::Markers(args) => args.run(&config).await,
            QueryTarget::Country(args) => args.run(&config),
            QueryTarget::City(args) => args.run(&config),
            QueryTarget::Feed(args) => args.run(&config).await,
            QueryTarget::Options => run_options(&config),
            QueryTarget::Locations(args) => args.run(&config).await,
            QueryTarget::Conditions(args) => args.run(&config).await,
            QueryTarget::Nearest(args) => args.run(&config).await,
        }
    }
}

/// Arguments for the markers query
#[derive(Args, Debug)]
pub struct MarkersArgs {
    /// Filter by continent
    #[arg(long)]
    pub continent: Option<String>,

    /// Filter by country
    #[arg(long)]
    pub country: Option<String>,

    /// Filter by city
    #[arg(long)]
    pub city: Option<String>,

    /// Serve live data, cache-first (applies to the India country filter)
    #[arg(long)]
    pub live: bool,

    /// Force a live fetch even when a cached snapshot exists
    #[arg(long)]
    pub refresh: bool,
}

impl MarkersArgs {
    async fn run(&self, config: &AerisConfig) -> anyhow::Result<i32> {
        let dataset = StaticDataset::load(&config.data);
        let cache = CacheStore::new(&config.cache.file);
        let pipeline = MarkerPipeline::new(Arc::new(WaqiClient::new(config.waqi.clone())));
        let service = QueryService::new(&dataset, &cache, &pipeline);

        let query = MarkerQuery {
            continent: self.continent.clone(),
            country: self.country.clone(),
            city: self.city.clone(),
            live: self.live,
            refresh: self.refresh,
        };

        let markers = service.markers(&query).await;
        println!("{}", serde_json::to_string_pretty(&markers)?);
        Ok(0)
    }
}

/// Arguments for the country profile query
#[derive(Args, Debug)]
pub struct CountryArgs {
    /// Country name, matched exactly
    pub name: String,
}

impl CountryArgs {
    fn run(&self, config: &AerisConfig) -> anyhow::Result<i32> {
        let dataset = StaticDataset::load(&config.data);

        match dataset.country_profile(&self.name) {
            Ok(profile) => {
                println!("{}", serde_json::to_string_pretty(&profile)?);
                Ok(0)
            }
            Err(e) => Ok(report_not_found(e)),
        }
    }
}

/// Arguments for the city profile query
#[derive(Args, Debug)]
pub struct CityArgs {
    /// City name, matched exactly
    pub name: String,

    /// Restrict the match to one state
    #[arg(long)]
    pub state: Option<String>,
}

impl CityArgs {
    fn run(&self, config: &AerisConfig) -> anyhow::Result<i32> {
        let dataset = StaticDataset::load(&config.data);

        match dataset.city_profile(&self.name, self.state.as_deref()) {
            Ok(profile) => {
                println!("{}", serde_json::to_string_pretty(&profile)?);
                Ok(0)
            }
            Err(e) => Ok(report_not_found(e)),
        }
    }
}

/// Arguments for the live city feed query
#[derive(Args, Debug)]
pub struct FeedArgs {
    /// City to fetch, as known to AQICN (e.g. "delhi")
    pub city: String,
}

impl FeedArgs {
    async fn run(&self, config: &AerisConfig) -> anyhow::Result<i32> {
        let pipeline = MarkerPipeline::new(Arc::new(WaqiClient::new(config.waqi.clone())));

        match pipeline.city_marker(&self.city).await {
            Ok(marker) => {
                println!("{}", serde_json::to_string_pretty(&marker)?);
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, city = %self.city, "City feed fetch failed");
                println!("❌ Failed to fetch feed for '{}'", self.city);
                println!("   Error: {e}");
                Ok(4) // Connection error exit code
            }
        }
    }
}

fn run_options(config: &AerisConfig) -> anyhow::Result<i32> {
    let dataset = StaticDataset::load(&config.data);
    let options = dataset.filter_options();

    println!("{}", serde_json::to_string_pretty(&options)?);
    Ok(0)
}

/// Arguments for the locations listing query
#[derive(Args, Debug)]
pub struct LocationsArgs {
    /// List states of this country instead of countries
    #[arg(long)]
    pub country: Option<String>,

    /// List cities of this state (requires --country)
    #[arg(long)]
    pub state: Option<String>,
}

impl LocationsArgs {
    async fn run(&self, config: &AerisConfig) -> anyhow::Result<i32> {
        let Some(client) = airvisual_client(config) else {
            return Ok(2); // Configuration error exit code
        };

        let result = match (&self.country, &self.state) {
            (Some(country), Some(state)) => client.cities(country, state).await,
            (Some(country), None) => client.states(country).await,
            (None, Some(_)) => {
                println!("❌ --state requires --country");
                return Ok(2); // Configuration error exit code
            }
            (None, None) => client.countries().await,
        };

        match result {
            Ok(names) => {
                println!("{}", serde_json::to_string_pretty(&names)?);
                Ok(0)
            }
            Err(e) => Ok(report_airvisual_error(e)),
        }
    }
}

/// Arguments for the city conditions query
#[derive(Args, Debug)]
pub struct ConditionsArgs {
    /// Country the city belongs to
    #[arg(long)]
    pub country: String,

    /// State the city belongs to
    #[arg(long)]
    pub state: String,

    /// City name
    #[arg(long)]
    pub city: String,
}

impl ConditionsArgs {
    async fn run(&self, config: &AerisConfig) -> anyhow::Result<i32> {
        let Some(client) = airvisual_client(config) else {
            return Ok(2); // Configuration error exit code
        };

        match client.city(&self.country, &self.state, &self.city).await {
            Ok(conditions) => {
                println!("{}", serde_json::to_string_pretty(&conditions)?);
                Ok(0)
            }
            Err(e) => Ok(report_airvisual_error(e)),
        }
    }
}

/// Arguments for the nearest conditions query
#[derive(Args, Debug)]
pub struct NearestArgs {
    /// Latitude in decimal degrees
    #[arg(long)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(long)]
    pub lon: f64,

    /// Resolve to the nearest station instead of the nearest city
    #[arg(long)]
    pub station: bool,
}

impl NearestArgs {
    async fn run(&self, config: &AerisConfig) -> anyhow::Result<i32> {
        let Some(client) = airvisual_client(config) else {
            return Ok(2); // Configuration error exit code
        };

        let result = if self.station {
            client.nearest_station(self.lat, self.lon).await
        } else {
            client.nearest_city(self.lat, self.lon).await
        };

        match result {
            Ok(conditions) => {
                println!("{}", serde_json::to_string_pretty(&conditions)?);
                Ok(0)
            }
            Err(e) => Ok(report_airvisual_error(e)),
        }
    }
}

/// Builds an AirVisual client, or reports the missing key
fn airvisual_client(config: &AerisConfig) -> Option<AirVisualClient> {
    if !config.airvisual.has_key() {
        println!("❌ AirVisual API key not configured");
        println!("   Set AERIS_AIRVISUAL_API_KEY or airvisual.api_key in the configuration file");
        return None;
    }

    Some(AirVisualClient::new(&config.airvisual))
}

/// Prints a not-found error with its suggestions
fn report_not_found(e: AerisError) -> i32 {
    match e {
        AerisError::NotFound(not_found) => {
            println!("❌ {}", not_found.message);
            if !not_found.suggestions.is_empty() {
                println!("   Did you mean: {}", not_found.suggestions.join(", "));
            }
            1 // Lookup miss exit code
        }
        other => {
            tracing::error!(error = %other, "Profile lookup failed");
            println!("❌ {other}");
            5 // Fatal error exit code
        }
    }
}

/// Maps an AirVisual failure to console output and an exit code
fn report_airvisual_error(e: AirVisualError) -> i32 {
    tracing::error!(error = %e, "AirVisual request failed");

    match e {
        AirVisualError::ConnectionFailed(_) => {
            println!("❌ Failed to connect to AirVisual");
            println!("   Error: {e}");
            4 // Connection error exit code
        }
        other => {
            println!("❌ AirVisual request failed");
            println!("   Error: {other}");
            5 // Fatal error exit code
        }
    }
}
