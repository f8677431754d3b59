//! Integration tests for the AQICN adapter
//!
//! All HTTP traffic goes to a local mockito server; the live API is never
//! contacted.

use aeris::adapters::waqi::{AqiSource, Bounds, WaqiClient};
use aeris::config::{secret_string, WaqiConfig};
use aeris::domain::{AerisError, WaqiError};
use mockito::Matcher;

fn client_for(server: &mockito::Server) -> WaqiClient {
    WaqiClient::new(WaqiConfig {
        base_url: server.url(),
        api_token: secret_string("test-token".to_string()),
        timeout_seconds: 5,
    })
}

#[tokio::test]
async fn test_stations_in_bounds_sends_window_and_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/map/bounds/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("latlng".into(), "6.7,68.1,35.1,97.4".into()),
            Matcher::UrlEncoded("token".into(), "test-token".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"status": "ok", "data": [
                {"lat": 28.6139, "lon": 77.209, "uid": 2554, "aqi": "155",
                 "station": {"name": "Anand Vihar, Delhi, India", "time": "2024-06-01T14:00:00+05:30"}},
                {"lat": 19.076, "lon": 72.8777, "uid": 2556, "aqi": 98,
                 "station": {"name": "Bandra, Mumbai, India"}}
            ]}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let stations = client.stations_in_bounds(&Bounds::INDIA).await.unwrap();

    mock.assert_async().await;
    assert_eq!(stations.len(), 2);
    assert_eq!(stations[0].station.name, "Anand Vihar, Delhi, India");
    assert_eq!(stations[0].aqi, serde_json::json!("155"));
    assert_eq!(stations[1].uid, Some(2556));
    assert!(stations[1].station.time.is_none());
}

#[tokio::test]
async fn test_malformed_station_rows_are_skipped() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/map/bounds/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{"status": "ok", "data": [
                {"uid": 1, "aqi": 42, "station": {"name": "No coordinates"}},
                {"lat": 13.0827, "lon": 80.2707, "aqi": 67,
                 "station": {"name": "Alandur, Chennai, India"}}
            ]}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let stations = client.stations_in_bounds(&Bounds::INDIA).await.unwrap();

    // The row without coordinates is dropped, the rest survive
    assert_eq!(stations.len(), 1);
    assert_eq!(stations[0].station.name, "Alandur, Chennai, India");
    assert_eq!(stations[0].uid, None);
}

#[tokio::test]
async fn test_provider_rejection_surfaces_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/map/bounds/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status": "error", "data": "Invalid key"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.stations_in_bounds(&Bounds::INDIA).await.unwrap_err();

    match err {
        AerisError::Waqi(WaqiError::Rejected(message)) => {
            assert_eq!(message, "Invalid key");
        }
        other => panic!("Expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_error_becomes_server_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/map/bounds/")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("upstream unavailable")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.stations_in_bounds(&Bounds::INDIA).await.unwrap_err();

    match err {
        AerisError::Waqi(WaqiError::ServerError { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "upstream unavailable");
        }
        other => panic!("Expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_station_detail_returns_readings() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/feed/@2554/")
        .match_query(Matcher::UrlEncoded("token".into(), "test-token".into()))
        .with_status(200)
        .with_body(
            r#"{"status": "ok", "data": {
                "aqi": 155,
                "iaqi": {"w": {"v": 2.1}, "t": {"v": 31}, "pm25": {"v": 155}},
                "time": {"s": "2024-06-01 14:00:00"}
            }}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let detail = client.station_detail(2554).await.unwrap();

    mock.assert_async().await;
    assert_eq!(detail.iaqi.len(), 3);
    assert_eq!(detail.iaqi["w"].v, serde_json::json!(2.1));
    assert_eq!(detail.time.unwrap().s, "2024-06-01 14:00:00");
}

#[tokio::test]
async fn test_city_feed_parses_city_block() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/feed/delhi/")
        .match_query(Matcher::UrlEncoded("token".into(), "test-token".into()))
        .with_status(200)
        .with_body(
            r#"{"status": "ok", "data": {
                "aqi": 172,
                "city": {"name": "New Delhi, India", "geo": [28.6139, 77.209]},
                "iaqi": {"w": {"v": 3.1}},
                "time": {"s": "2024-06-01 15:00:00"}
            }}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let feed = client.city_feed("delhi").await.unwrap();

    mock.assert_async().await;
    assert_eq!(feed.city.name, "New Delhi, India");
    assert_eq!(feed.city.geo, vec![28.6139, 77.209]);
    assert_eq!(feed.aqi, serde_json::json!(172));
}
