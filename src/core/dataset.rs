//! Immutable static dataset
//!
//! Holds the three CSV snapshots loaded once at startup: world-city
//! markers, country rankings, and per-city monthly series. The dataset is
//! constructed at process initialization and passed by reference wherever
//! it is read; nothing mutates it afterwards.
//!
//! A snapshot file that is missing or unreadable degrades to an empty
//! table with a logged warning, so a partial install still serves what it
//! has.

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;

use crate::adapters::snapshot::{load_cities, load_countries, load_markers};
use crate::config::DataConfig;
use crate::domain::errors::NotFoundError;
use crate::domain::marker::Marker;
use crate::domain::records::{CityAqi, CountryAqi, MONTH_NAMES};
use crate::domain::Result;

const SUGGESTION_LIMIT: usize = 5;

/// Filter dropdown values derived from the marker snapshot
#[derive(Debug, Clone, Serialize)]
pub struct FilterOptions {
    pub continents: Vec<String>,
    pub countries: Vec<String>,
    pub cities: Vec<String>,
}

/// Country profile: rank, yearly average, and the display-ready series
#[derive(Debug, Clone, Serialize)]
pub struct CountryProfile {
    pub country: String,
    pub avg_aqi: f64,
    pub months: [&'static str; 12],
    pub monthly_data: [f64; 12],
    pub rank: Option<u32>,
}

/// City profile over the monthly snapshot
#[derive(Debug, Clone, Serialize)]
pub struct CityProfile {
    pub city: String,
    pub state: String,
    pub country: String,
    pub months: [&'static str; 12],
    pub monthly_data: [f64; 12],
}

/// The static tables every query serves from
pub struct StaticDataset {
    markers: Vec<Marker>,
    countries: Vec<CountryAqi>,
    cities: Vec<CityAqi>,
}

impl StaticDataset {
    /// Load all three snapshots from the configured paths
    pub fn load(config: &DataConfig) -> Self {
        let markers = load_markers(Path::new(&config.markers_file)).unwrap_or_else(|e| {
            tracing::warn!(file = %config.markers_file, error = %e, "Marker snapshot unavailable");
            Vec::new()
        });
        let countries = load_countries(Path::new(&config.countries_file)).unwrap_or_else(|e| {
            tracing::warn!(file = %config.countries_file, error = %e, "Country snapshot unavailable");
            Vec::new()
        });
        let cities = load_cities(Path::new(&config.cities_file)).unwrap_or_else(|e| {
            tracing::warn!(file = %config.cities_file, error = %e, "City snapshot unavailable");
            Vec::new()
        });

        Self::from_parts(markers, countries, cities)
    }

    /// Build a dataset from already-loaded tables
    pub fn from_parts(
        markers: Vec<Marker>,
        countries: Vec<CountryAqi>,
        cities: Vec<CityAqi>,
    ) -> Self {
        Self {
            markers,
            countries,
            cities,
        }
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn countries(&self) -> &[CountryAqi] {
        &self.countries
    }

    pub fn cities(&self) -> &[CityAqi] {
        &self.cities
    }

    /// Sorted, de-duplicated filter values from the marker snapshot
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            continents: sorted_unique(self.markers.iter().filter_map(|m| m.continent.as_deref())),
            countries: sorted_unique(self.markers.iter().map(|m| m.country.as_str())),
            cities: sorted_unique(self.markers.iter().map(|m| m.city.as_str())),
        }
    }

    /// Mean of the published yearly averages
    ///
    /// Countries without a published average are excluded. Empty table
    /// yields 0.
    pub fn global_average(&self) -> f64 {
        let averages: Vec<f64> = self.countries.iter().filter_map(|c| c.average).collect();
        if averages.is_empty() {
            return 0.0;
        }
        averages.iter().sum::<f64>() / averages.len() as f64
    }

    /// The n most polluted countries by yearly average, descending
    ///
    /// Duplicate country names keep their first occurrence.
    pub fn top_polluted(&self, n: usize) -> Vec<&CountryAqi> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut ranked: Vec<&CountryAqi> = self
            .countries
            .iter()
            .filter(|c| seen.insert(c.country.as_str()))
            .collect();

        ranked.sort_by(|a, b| {
            b.effective_average()
                .partial_cmp(&a.effective_average())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(n);
        ranked
    }

    /// Profile for one country by exact name
    pub fn country_profile(&self, name: &str) -> Result<CountryProfile> {
        let Some(row) = self.countries.iter().find(|c| c.country == name) else {
            let suggestions = self
                .countries
                .iter()
                .map(|c| c.country.clone())
                .take(SUGGESTION_LIMIT)
                .collect();
            return Err(NotFoundError::new(format!("Could not find data for {}", name))
                .with_suggestions(suggestions)
                .into());
        };

        Ok(CountryProfile {
            country: row.country.clone(),
            avg_aqi: row.effective_average(),
            months: MONTH_NAMES,
            monthly_data: row.months.display_values(),
            rank: row.rank,
        })
    }

    /// Profile for one city, optionally pinned to a state
    ///
    /// Lookup is by exact name. When the city is missing, the suggestion
    /// list depends on whether the state itself is known.
    pub fn city_profile(&self, city: &str, state: Option<&str>) -> Result<CityProfile> {
        let found = self
            .cities
            .iter()
            .find(|c| c.city == city && state.map_or(true, |s| c.state == s));

        if let Some(row) = found {
            return Ok(CityProfile {
                city: row.city.clone(),
                state: row.state.clone(),
                country: "Unknown".to_string(),
                months: MONTH_NAMES,
                monthly_data: row.months.display_values(),
            });
        }

        let error = match state {
            Some(state) if self.cities.iter().any(|c| c.state == state) => {
                let suggestions = self
                    .cities
                    .iter()
                    .filter(|c| c.state == state)
                    .map(|c| c.city.clone())
                    .take(SUGGESTION_LIMIT)
                    .collect();
                NotFoundError::new(format!("City {} not found in {}", city, state))
                    .with_suggestions(suggestions)
            }
            Some(state) => {
                let suggestions = sorted_unique(self.cities.iter().map(|c| c.state.as_str()))
                    .into_iter()
                    .take(SUGGESTION_LIMIT)
                    .collect();
                NotFoundError::new(format!("State {} not found", state))
                    .with_suggestions(suggestions)
            }
            None => {
                let suggestions = sorted_unique(self.cities.iter().map(|c| c.city.as_str()))
                    .into_iter()
                    .take(SUGGESTION_LIMIT)
                    .collect();
                NotFoundError::new(format!("City {} not found", city)).with_suggestions(suggestions)
            }
        };

        Err(error.into())
    }
}

fn sorted_unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut unique: Vec<String> = values
        .filter(|v| !v.is_empty())
        .collect::<HashSet<_>>()
        .into_iter()
        .map(String::from)
        .collect();
    unique.sort();
    unique
}
