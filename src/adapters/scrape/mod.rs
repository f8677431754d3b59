//! Ranking page scrape adapter
//!
//! Fetches the public most-polluted rankings and extracts their tables
//! with a tolerant hand-rolled scanner.

pub mod client;
pub mod table;

pub use client::RankingScraper;
pub use table::{scrape_ranked_rows, ScrapedRow};
