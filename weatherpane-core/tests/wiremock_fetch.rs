//! Integration tests for the fetch handler using wiremock.
//!
//! These exercise the full request/response cycle against a mock HTTP
//! server: the two payload shapes, the no-data case, and the failure paths.

use weatherpane_core::{FetchFailure, WeatherFetcher};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{any, method, path},
};

/// Mount a GET mock for `/weather` returning the given JSON body.
async fn mount_weather(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn days_payload_yields_a_snapshot() {
    let server = MockServer::start().await;
    mount_weather(
        &server,
        serde_json::json!({
            "days": [
                {"temp": 21, "conditions": "clear sky", "humidity": 40, "windspeed": 5}
            ]
        }),
    )
    .await;

    let fetcher = WeatherFetcher::new();
    let snapshot = fetcher
        .fetch(&format!("{}/weather", server.uri()))
        .await
        .expect("days payload must yield a snapshot");

    assert_eq!(snapshot.temperature, 21.0);
    assert_eq!(snapshot.description, "clear sky");
    assert_eq!(snapshot.humidity, 40.0);
    assert_eq!(snapshot.wind_speed, 5.0);
}

#[tokio::test]
async fn alerts_payload_yields_ordered_alerts() {
    let server = MockServer::start().await;
    mount_weather(
        &server,
        serde_json::json!({
            "alerts": [
                {"description": "Storm warning"},
                {"description": "Flood watch"}
            ]
        }),
    )
    .await;

    let fetcher = WeatherFetcher::new();
    let err = fetcher
        .fetch(&format!("{}/weather", server.uri()))
        .await
        .unwrap_err();

    match err {
        FetchFailure::Alerts(alerts) => {
            assert_eq!(alerts, vec!["Storm warning", "Flood watch"]);
        }
        other => panic!("expected Alerts, got {other:?}"),
    }
}

#[tokio::test]
async fn payload_without_known_keys_is_empty() {
    let server = MockServer::start().await;
    mount_weather(&server, serde_json::json!({"queryCost": 1})).await;

    let fetcher = WeatherFetcher::new();
    let err = fetcher
        .fetch(&format!("{}/weather", server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchFailure::Empty));
}

#[tokio::test]
async fn non_2xx_status_is_a_request_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fetcher = WeatherFetcher::new();
    let err = fetcher
        .fetch(&format!("{}/weather", server.uri()))
        .await
        .unwrap_err();

    match err {
        FetchFailure::Request(detail) => assert!(detail.contains("500"), "detail: {detail}"),
        other => panic!("expected Request, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_unexpected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let fetcher = WeatherFetcher::new();
    let err = fetcher
        .fetch(&format!("{}/weather", server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchFailure::Unexpected(_)));
}

#[tokio::test]
async fn empty_url_sends_no_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let fetcher = WeatherFetcher::new();
    let err = fetcher.fetch("").await.unwrap_err();

    assert!(matches!(err, FetchFailure::Validation));
    // MockServer verifies the expect(0) when it drops.
}

#[tokio::test]
async fn connection_failure_is_a_request_failure() {
    // Nothing listens on port 9; the connection attempt must fail.
    let fetcher = WeatherFetcher::new();
    let err = fetcher.fetch("http://127.0.0.1:9/weather").await.unwrap_err();

    assert!(matches!(err, FetchFailure::Request(_)));
}
