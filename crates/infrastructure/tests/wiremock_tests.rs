//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - Air-quality adapter against a mocked index endpoint
//! - Reference data loading from files on disk

use std::io::Write;

use application::{ApplicationError, ports::AirQualityPort};
use infrastructure::{AirQualityAdapter, AirQualityAppConfig, AppConfig, load_reference_data};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> AirQualityAppConfig {
    AirQualityAppConfig {
        base_url: format!("{}/aqindex/getIndex", server.uri()),
        timeout_secs: 2,
        ..AirQualityAppConfig::default()
    }
}

// ============================================================================
// Air-Quality Adapter Tests
// ============================================================================

mod air_quality_adapter_tests {
    use super::*;

    #[tokio::test]
    async fn current_index_returns_reading() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/aqindex/getIndex/10955"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 10955,
                "stCalcDate": "2026-10-16 12:20:21",
                "stIndexLevel": { "id": 1, "indexLevelName": "Dobry" }
            })))
            .mount(&server)
            .await;

        let adapter = AirQualityAdapter::new(&config_for(&server)).unwrap();
        let reading = adapter.current_index("10955").await.unwrap();

        assert_eq!(reading.station_id, "10955");
        assert_eq!(reading.label, "Dobry");
        assert_eq!(reading.level.id(), 1);
    }

    #[tokio::test]
    async fn server_error_is_upstream_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let adapter = AirQualityAdapter::new(&config_for(&server)).unwrap();
        let err = adapter.current_index("10955").await.unwrap_err();

        assert!(matches!(err, ApplicationError::UpstreamFailure(_)));
    }

    #[tokio::test]
    async fn out_of_range_level_is_upstream_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "stIndexLevel": { "id": 9, "indexLevelName": "???" }
            })))
            .mount(&server)
            .await;

        let adapter = AirQualityAdapter::new(&config_for(&server)).unwrap();
        let err = adapter.current_index("10955").await.unwrap_err();

        assert!(matches!(err, ApplicationError::UpstreamFailure(_)));
    }

    #[tokio::test]
    async fn availability_probes_default_station() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/aqindex/getIndex/10955"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "stIndexLevel": { "id": 0, "indexLevelName": "Bardzo dobry" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let adapter = AirQualityAdapter::new(&config_for(&server)).unwrap();
        assert!(adapter.is_available().await);
    }

    #[tokio::test]
    async fn unreachable_service_is_unavailable() {
        let config = AirQualityAppConfig {
            base_url: "http://127.0.0.1:1/aqindex/getIndex".to_string(),
            timeout_secs: 1,
            ..AirQualityAppConfig::default()
        };
        let adapter = AirQualityAdapter::new(&config).unwrap();
        assert!(!adapter.is_available().await);
    }
}

// ============================================================================
// Reference Data Loading Tests
// ============================================================================

mod reference_data_tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_full_bundle_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();

        config.air_quality.stations_file = write(
            &dir,
            "stations.json",
            r#"[{"id": 10955, "stationName": "Rzeszów", "gegrLat": "50.0413", "gegrLon": "21.999"}]"#,
        );
        config.traffic.file = write(
            &dir,
            "traffic.csv",
            "hour,day_of_week,traffic\n8,Monday,42.371\n",
        );
        config.paid_parking.file = write(
            &dir,
            "zones.geojson",
            r#"{"type": "FeatureCollection", "features": [{
                "type": "Feature",
                "properties": {"Podstrefa": "A"},
                "geometry": {"type": "Polygon", "coordinates": [[
                    [21.989, 50.0313], [22.009, 50.0313], [22.009, 50.0513],
                    [21.989, 50.0513], [21.989, 50.0313]
                ]]}
            }]}"#,
        );
        config.paid_parking.source_crs = "EPSG:4326".to_string();
        config.paid_parking.zone_crs = "EPSG:4326".to_string();
        config.paid_parking.prices.insert("A".to_string(), 5.0);

        let data = load_reference_data(&config).unwrap();
        let summary = data.summary();

        assert_eq!(summary.stations, 1);
        assert_eq!(summary.zones, 1);
        assert_eq!(summary.traffic_rows, 1);
    }

    #[test]
    fn missing_file_is_reported() {
        let mut config = AppConfig::default();
        config.air_quality.stations_file = "/nonexistent/stations.json".into();

        let err = load_reference_data(&config).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/stations.json"));
    }
}
