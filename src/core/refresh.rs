//! Ranking refresh
//!
//! Runs both public ranking scrapes and reports per-source success. One
//! source failing never aborts the other; the summary records which
//! sources produced rows this run.

use chrono::Utc;
use serde::Serialize;

use crate::adapters::scrape::RankingScraper;

/// Outcome of one ranking refresh run
#[derive(Debug, Clone, Serialize)]
pub struct RefreshSummary {
    pub cities_updated: bool,
    pub countries_updated: bool,
    pub timestamp: String,
}

impl RefreshSummary {
    /// Whether every source refreshed successfully
    pub fn complete(&self) -> bool {
        self.cities_updated && self.countries_updated
    }

    /// Whether no source refreshed at all
    pub fn failed(&self) -> bool {
        !self.cities_updated && !self.countries_updated
    }
}

/// Scrape both ranking pages concurrently
pub async fn update_all(scraper: &RankingScraper) -> RefreshSummary {
    let (cities, countries) =
        futures::future::join(scraper.most_polluted_cities(), scraper.world_report()).await;

    let cities_updated = match cities {
        Ok(rows) => {
            tracing::info!(count = rows.len(), "Most-polluted cities refreshed");
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "Most-polluted cities scrape failed");
            false
        }
    };

    let countries_updated = match countries {
        Ok(rows) => {
            tracing::info!(count = rows.len(), "World report refreshed");
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "World report scrape failed");
            false
        }
    };

    RefreshSummary {
        cities_updated,
        countries_updated,
        timestamp: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    }
}
