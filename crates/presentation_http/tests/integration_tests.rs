//! Integration tests for HTTP handlers
//!
//! The server is built from the fixture datasets through the real loaders,
//! with the air-quality index served by wiremock.
#![allow(clippy::expect_used)]

use std::{path::PathBuf, sync::Arc};

use application::FixedClock;
use axum::{
    Router,
    http::{HeaderName, HeaderValue},
};
use axum_test::TestServer;
use chrono::NaiveDate;
use infrastructure::{AirQualityAdapter, AppConfig, load_reference_data};
use presentation_http::{
    AppState, ReloadableReferenceData, RequestIdLayer, routes::create_router,
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

const INDEX_PATH: &str = "/pjp-api/rest/aqindex/getIndex";

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn test_config(air_quality_uri: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.air_quality.stations_file = fixture("stations.json");
    config.air_quality.base_url = format!("{air_quality_uri}{INDEX_PATH}");
    config.air_quality.timeout_secs = 1;
    config.traffic.file = fixture("average_traffic.csv");
    config.paid_parking.file = fixture("paid_parking_zones.geojson");
    config.paid_parking.prices.insert("A1".to_string(), 6.0);
    config.paid_parking.prices.insert("B".to_string(), 2.0);
    config
}

/// Friday 2026-10-16, 17:05
fn friday_evening() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .expect("valid date")
            .and_hms_opt(17, 5, 0)
            .expect("valid time"),
    )
}

fn create_test_server(air_quality: &MockServer, clock: FixedClock) -> TestServer {
    TestServer::new(create_test_router(air_quality, clock)).expect("Failed to create test server")
}

fn create_test_router(air_quality: &MockServer, clock: FixedClock) -> Router {
    let config = test_config(&air_quality.uri());
    let data = load_reference_data(&config).expect("fixtures load");
    let adapter = AirQualityAdapter::new(&config.air_quality).expect("client builds");

    let reload_config = config.clone();
    let reference_data = ReloadableReferenceData::new(data, move || {
        Ok(load_reference_data(&reload_config)?)
    });

    let state = AppState::new(
        reference_data,
        Arc::new(adapter),
        Arc::new(clock),
        config.traffic.result_key.as_str(),
    );
    create_router(state)
}

async fn mount_index(server: &MockServer, station_id: &str, level: u8, label: &str) {
    Mock::given(method("GET"))
        .and(path(format!("{INDEX_PATH}/{station_id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": station_id.parse::<i64>().unwrap_or_default(),
            "stCalcDate": "2026-10-16 16:20:21",
            "stIndexLevel": { "id": level, "indexLevelName": label }
        })))
        .mount(server)
        .await;
}

// ============ Health Endpoint Tests ============

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let upstream = MockServer::start().await;
    let server = create_test_server(&upstream, friday_evening());

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn readiness_reports_loaded_datasets() {
    let upstream = MockServer::start().await;
    mount_index(&upstream, "10955", 0, "Bardzo dobry").await;
    let server = create_test_server(&upstream, friday_evening());

    let response = server.get("/ready").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["ready"], true);
    assert_eq!(body["reference_data"]["stations"], 3);
    assert_eq!(body["reference_data"]["zones"], 2);
    assert_eq!(body["reference_data"]["traffic_rows"], 3);
    assert_eq!(body["air_quality"]["healthy"], true);
}

#[tokio::test]
async fn readiness_survives_air_quality_outage() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&upstream)
        .await;
    let server = create_test_server(&upstream, friday_evening());

    let response = server.get("/ready").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["air_quality"]["healthy"], false);
}

// ============ Traffic Endpoint Tests ============

#[tokio::test]
async fn traffic_for_hour_and_day() {
    let upstream = MockServer::start().await;
    let server = create_test_server(&upstream, friday_evening());

    let response = server
        .get("/get_traffic")
        .add_query_param("hour", 8)
        .add_query_param("day_of_week", "Monday")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "traffic_result": 42.37 }));
}

#[tokio::test]
async fn traffic_without_row_is_404() {
    let upstream = MockServer::start().await;
    let server = create_test_server(&upstream, friday_evening());

    let response = server
        .get("/get_traffic")
        .add_query_param("hour", 9)
        .add_query_param("day_of_week", "Monday")
        .await;

    response.assert_status_not_found();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "No data found for the provided parameters.");
    assert_eq!(body["code"], "not_found");
}

#[tokio::test]
async fn traffic_with_bad_hour_is_404() {
    let upstream = MockServer::start().await;
    let server = create_test_server(&upstream, friday_evening());

    let response = server.get("/get_traffic?hour=noon&day_of_week=Monday").await;

    response.assert_status_not_found();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "invalid_input");
}

#[tokio::test]
async fn current_traffic_uses_clock() {
    let upstream = MockServer::start().await;
    let server = create_test_server(&upstream, friday_evening());

    let response = server.get("/get_current_traffic").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "traffic_result": 88.01 }));
}

#[tokio::test]
async fn current_traffic_without_row_is_404() {
    let upstream = MockServer::start().await;
    let clock = FixedClock(
        NaiveDate::from_ymd_opt(2026, 10, 14)
            .expect("valid date")
            .and_hms_opt(12, 0, 0)
            .expect("valid time"),
    );
    let server = create_test_server(&upstream, clock);

    let response = server.get("/get_current_traffic").await;

    response.assert_status_not_found();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "No data found for the current time.");
}

// ============ Savings Endpoint Tests ============

#[tokio::test]
async fn walking_versus_car() {
    let upstream = MockServer::start().await;
    let server = create_test_server(&upstream, friday_evening());

    let response = server
        .get("/get_saving_for_travel")
        .add_query_param("transport_type", 0)
        .add_query_param("distance", 10)
        .add_query_param("avg_consumption", 7)
        .add_query_param("fuel_type", 0)
        .add_query_param("fuel_price", 6)
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let cost = body["cost_difference"].as_f64().expect("number");
    let co2 = body["co2_difference"].as_f64().expect("number");
    assert!((cost - 4.2).abs() < 1e-9);
    assert!((co2 - 1640.0).abs() < 1e-9);
}

#[tokio::test]
async fn destination_in_projected_zone_adds_parking() {
    let upstream = MockServer::start().await;
    let server = create_test_server(&upstream, friday_evening());

    let response = server
        .get("/get_saving_for_travel?transport_type=3&distance=10&avg_consumption=7&fuel_price=6&lat=50.0413&lon=21.999")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let cost = body["cost_difference"].as_f64().expect("number");
    // A1 lies inside B; the first zone in the file wins
    assert!((cost - (4.2 + 6.0)).abs() < 1e-9);
}

#[tokio::test]
async fn destination_in_outer_zone_only() {
    let upstream = MockServer::start().await;
    let server = create_test_server(&upstream, friday_evening());

    let response = server
        .get("/get_saving_for_travel?transport_type=3&distance=10&avg_consumption=7&fuel_price=6&lat=49.854&lon=22.0")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let cost = body["cost_difference"].as_f64().expect("number");
    assert!((cost - (4.2 + 2.0)).abs() < 1e-9);
}

#[tokio::test]
async fn destination_outside_zones_parks_free() {
    let upstream = MockServer::start().await;
    let server = create_test_server(&upstream, friday_evening());

    let response = server
        .get("/get_saving_for_travel?transport_type=3&distance=10&avg_consumption=7&fuel_price=6&lat=52.2297&lon=21.0122")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let cost = body["cost_difference"].as_f64().expect("number");
    assert!((cost - 4.2).abs() < 1e-9);
}

#[tokio::test]
async fn invalid_transport_type_is_404() {
    let upstream = MockServer::start().await;
    let server = create_test_server(&upstream, friday_evening());

    let response = server
        .get("/get_saving_for_travel")
        .add_query_param("transport_type", 7)
        .await;

    response.assert_status_not_found();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid transport type");
}

#[tokio::test]
async fn empty_parameters_use_defaults() {
    let upstream = MockServer::start().await;
    let server = create_test_server(&upstream, friday_evening());

    let response = server
        .get("/get_saving_for_travel?transport_type=&distance=&lat=&lon=")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    // walking 10 km, gasoline car at 164 g/km
    let co2 = body["co2_difference"].as_f64().expect("number");
    assert!((co2 - 1640.0).abs() < 1e-9);
}

#[tokio::test]
async fn annual_saving_reports_kilograms() {
    let upstream = MockServer::start().await;
    let server = create_test_server(&upstream, friday_evening());

    let response = server
        .get("/get_annual_saving?avg_consumption=5&fuel_type=1&fuel_price=6&daily_distance=20")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let cost = body["cost"].as_f64().expect("number");
    let co2 = body["co2"].as_f64().expect("number");
    assert!((cost - 2190.0).abs() < 1e-6);
    assert!((co2 - 1131.5).abs() < 1e-6);
}

#[tokio::test]
async fn annual_saving_with_negative_distance_is_404() {
    let upstream = MockServer::start().await;
    let server = create_test_server(&upstream, friday_evening());

    let response = server.get("/get_annual_saving?daily_distance=-5").await;

    response.assert_status_not_found();
}

// ============ Air Quality Endpoint Tests ============

#[tokio::test]
async fn air_quality_for_default_station() {
    let upstream = MockServer::start().await;
    mount_index(&upstream, "10955", 2, "Umiarkowany").await;
    let server = create_test_server(&upstream, friday_evening());

    let response = server.get("/get_air_quality").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["air_quality"], "Umiarkowany");
    assert_eq!(body["air_quality_id"], 2);
    assert_eq!(body["extra_points"], 5);
}

#[tokio::test]
async fn air_quality_for_nearest_station() {
    let upstream = MockServer::start().await;
    mount_index(&upstream, "114", 4, "Zły").await;
    let server = create_test_server(&upstream, friday_evening());

    let response = server
        .get("/get_air_quality")
        .add_query_param("lat", 52.2297)
        .add_query_param("lon", 21.0122)
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["station_id"], "114");
    assert_eq!(body["air_quality_id"], 4);
    assert_eq!(body["extra_points"], 0);
}

#[tokio::test]
async fn air_quality_upstream_failure_is_503() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&upstream)
        .await;
    let server = create_test_server(&upstream, friday_evening());

    let response = server.get("/get_air_quality").await;

    response.assert_status_service_unavailable();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "service_unavailable");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn air_quality_malformed_payload_is_503() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "stIndexLevel": null })))
        .mount(&upstream)
        .await;
    let server = create_test_server(&upstream, friday_evening());

    let response = server.get("/get_air_quality").await;

    response.assert_status_service_unavailable();
}

#[tokio::test]
async fn unknown_route_is_404() {
    let upstream = MockServer::start().await;
    let server = create_test_server(&upstream, friday_evening());

    let response = server.get("/get_route").await;

    response.assert_status_not_found();
}

// ============ Request Id Tests ============

#[tokio::test]
async fn request_id_is_echoed() {
    let upstream = MockServer::start().await;
    let router = create_test_router(&upstream, friday_evening()).layer(RequestIdLayer::new());
    let server = TestServer::new(router).expect("Failed to create test server");

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("android-1234"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("x-request-id"), "android-1234");
}

#[tokio::test]
async fn request_id_is_generated_when_absent() {
    let upstream = MockServer::start().await;
    let router = create_test_router(&upstream, friday_evening()).layer(RequestIdLayer::new());
    let server = TestServer::new(router).expect("Failed to create test server");

    let response = server.get("/health").await;

    let id = response.header("x-request-id");
    let id = id.to_str().expect("ascii header");
    assert!(uuid::Uuid::parse_str(id).is_ok());
}
