//! End-to-end tests for the live marker pipeline and cache-first queries
//!
//! A mockito server stands in for the AQICN API; the cache lives in a
//! temporary directory.

use std::sync::Arc;

use aeris::adapters::waqi::WaqiClient;
use aeris::config::{secret_string, WaqiConfig};
use aeris::core::cache::CacheStore;
use aeris::core::dataset::StaticDataset;
use aeris::core::normalize::MarkerPipeline;
use aeris::core::query::{MarkerQuery, QueryService};
use aeris::domain::Marker;
use mockito::Matcher;
use tempfile::TempDir;

const BOUNDS_BODY: &str = r#"{"status": "ok", "data": [
    {"lat": 28.6139, "lon": 77.209, "aqi": "155",
     "station": {"name": "Anand Vihar, Delhi, India", "time": "2024-06-01T14:00:00+05:30"}},
    {"lat": 19.076, "lon": 72.8777, "aqi": "-",
     "station": {"name": "Bandra, Mumbai, India"}}
]}"#;

fn pipeline_for(base_url: &str) -> MarkerPipeline {
    let config = WaqiConfig {
        base_url: base_url.to_string(),
        api_token: secret_string("test-token".to_string()),
        timeout_seconds: 5,
    };
    MarkerPipeline::new(Arc::new(WaqiClient::new(config)))
}

fn empty_dataset() -> StaticDataset {
    StaticDataset::from_parts(Vec::new(), Vec::new(), Vec::new())
}

fn india_query() -> MarkerQuery {
    MarkerQuery {
        country: Some("India".to_string()),
        live: true,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_live_query_normalizes_and_populates_cache() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/map/bounds/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(BOUNDS_BODY)
        .create_async()
        .await;

    let temp_dir = TempDir::new().unwrap();
    let cache = CacheStore::new(temp_dir.path().join("india.json"));
    let dataset = empty_dataset();
    let pipeline = pipeline_for(&server.url());
    let service = QueryService::new(&dataset, &cache, &pipeline);

    let markers = service.markers(&india_query()).await;

    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].country, "India");
    assert_eq!(markers[0].continent.as_deref(), Some("Asia"));
    assert_eq!(markers[0].city, "Anand Vihar");
    assert_eq!(markers[0].aqi, 155.0);

    // Stations without a detail feed get the default weather readings
    assert_eq!(markers[0].wind_speed.as_deref(), Some("3.5"));
    assert_eq!(markers[0].temperature.as_deref(), Some("28"));

    // The "-" sentinel normalizes to a zero reading
    assert_eq!(markers[1].aqi, 0.0);
    assert_eq!(markers[1].color, "green");

    // Write-through happened
    assert!(cache.exists());
    assert_eq!(cache.load().len(), 2);
}

#[tokio::test]
async fn test_cached_markers_served_without_network() {
    let temp_dir = TempDir::new().unwrap();
    let cache = CacheStore::new(temp_dir.path().join("india.json"));
    cache
        .save(&[Marker::new("India", "New Delhi", 155.0, 28.6139, 77.209)])
        .unwrap();

    // Nothing listens at this address; a fetch attempt would fail
    let dataset = empty_dataset();
    let pipeline = pipeline_for("http://127.0.0.1:9");
    let service = QueryService::new(&dataset, &cache, &pipeline);

    let markers = service.markers(&india_query()).await;

    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].city, "New Delhi");
}

#[tokio::test]
async fn test_refresh_bypasses_and_overwrites_cache() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/map/bounds/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(BOUNDS_BODY)
        .create_async()
        .await;

    let temp_dir = TempDir::new().unwrap();
    let cache = CacheStore::new(temp_dir.path().join("india.json"));
    cache
        .save(&[Marker::new("India", "Stale", 10.0, 0.0, 0.0)])
        .unwrap();

    let dataset = empty_dataset();
    let pipeline = pipeline_for(&server.url());
    let service = QueryService::new(&dataset, &cache, &pipeline);

    let mut query = india_query();
    query.refresh = true;
    let markers = service.markers(&query).await;

    mock.assert_async().await;
    assert_eq!(markers.len(), 2);

    let cached = cache.load();
    assert_eq!(cached.len(), 2);
    assert!(cached.iter().all(|m| m.city != "Stale"));
}

#[tokio::test]
async fn test_repeated_normalization_yields_identical_markers() {
    use aeris::core::normalize::Scope;

    // Every station reports its own capture time, so two passes over the
    // same payload must produce byte-for-byte identical markers
    let body = r#"{"status": "ok", "data": [
        {"lat": 28.6139, "lon": 77.209, "aqi": "155",
         "station": {"name": "Anand Vihar, Delhi, India", "time": "2024-06-01T14:00:00+05:30"}},
        {"lat": 19.076, "lon": 72.8777, "aqi": "-",
         "station": {"name": "Bandra, Mumbai, India", "time": "2024-06-01T14:05:00+05:30"}}
    ]}"#;

    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/map/bounds/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let pipeline = pipeline_for(&server.url());

    let first = pipeline.fetch_markers(Scope::India).await.unwrap();
    let second = pipeline.fetch_markers(Scope::India).await.unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_failed_fetch_keeps_cache_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let cache = CacheStore::new(temp_dir.path().join("india.json"));
    cache
        .save(&[Marker::new("India", "New Delhi", 155.0, 28.6139, 77.209)])
        .unwrap();

    let dataset = empty_dataset();
    let pipeline = pipeline_for("http://127.0.0.1:9");
    let service = QueryService::new(&dataset, &cache, &pipeline);

    // A forced refresh that fails serves empty and never writes
    let mut query = india_query();
    query.refresh = true;
    let markers = service.markers(&query).await;

    assert!(markers.is_empty());
    assert_eq!(cache.load().len(), 1);
}

#[tokio::test]
async fn test_live_city_filter_matches_substring() {
    let temp_dir = TempDir::new().unwrap();
    let cache = CacheStore::new(temp_dir.path().join("india.json"));
    cache
        .save(&[
            Marker::new("India", "New Delhi", 155.0, 28.6139, 77.209),
            Marker::new("India", "Mumbai", 98.0, 19.076, 72.8777),
        ])
        .unwrap();

    let dataset = empty_dataset();
    let pipeline = pipeline_for("http://127.0.0.1:9");
    let service = QueryService::new(&dataset, &cache, &pipeline);

    let mut query = india_query();
    query.city = Some("delhi".to_string());
    let markers = service.markers(&query).await;

    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].city, "New Delhi");
}
