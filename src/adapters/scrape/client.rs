//! Ranking page scraper
//!
//! Downloads the two public ranking pages and runs the table extractor
//! over them. Pages are fetched with the configured user agent since both
//! sites reject the default library agent.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

use crate::adapters::scrape::table::{scrape_ranked_rows, ScrapedRow};
use crate::config::ScrapeConfig;
use crate::domain::errors::ScrapeError;

/// Scraper for the public most-polluted ranking pages
pub struct RankingScraper {
    client: Client,
    config: ScrapeConfig,
}

impl RankingScraper {
    /// Create a new scraper
    pub fn new(config: &ScrapeConfig) -> Self {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30))
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            config: config.clone(),
        }
    }

    /// Scrape the most-polluted cities page
    pub async fn most_polluted_cities(&self) -> Result<Vec<ScrapedRow>, ScrapeError> {
        self.scrape_page(&self.config.cities_url).await
    }

    /// Scrape the world air quality report page
    pub async fn world_report(&self) -> Result<Vec<ScrapedRow>, ScrapeError> {
        self.scrape_page(&self.config.countries_url).await
    }

    async fn scrape_page(&self, url: &str) -> Result<Vec<ScrapedRow>, ScrapeError> {
        tracing::info!(url = %url, "Scraping ranking page");

        let response = self.client.get(url).send().await.map_err(|e| {
            ScrapeError::ConnectionFailed(format!("Failed to fetch {}: {}", url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ScrapeError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(|e| {
            ScrapeError::ConnectionFailed(format!("Failed to read body of {}: {}", url, e))
        })?;

        let rows = scrape_ranked_rows(&body).ok_or_else(|| ScrapeError::NoTables(url.to_string()))?;

        tracing::info!(url = %url, count = rows.len(), "Scraped ranking rows");
        Ok(rows)
    }
}
