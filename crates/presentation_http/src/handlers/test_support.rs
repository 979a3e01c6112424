//! In-memory state for handler tests

use std::sync::Arc;

use application::{
    AirQualitySettings, ApplicationError, FixedClock, ReferenceData, RequestDefaults,
    ports::AirQualityPort,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use domain::{
    AirQualityLevel, AirQualityReading, CrsTransform, GeoLocation, ParkingZone, Station,
    TrafficRow, TrafficTable, TransportProfiles, Weekday, ZoneIndex,
};
use geo::{LineString, MultiPolygon, Polygon};

use crate::{config_reload::ReloadableReferenceData, state::AppState};

/// Answers every station with level 0
struct GoodAirPort;

#[async_trait]
impl AirQualityPort for GoodAirPort {
    async fn current_index(&self, station_id: &str) -> Result<AirQualityReading, ApplicationError> {
        Ok(AirQualityReading {
            station_id: station_id.to_string(),
            label: "Bardzo dobry".to_string(),
            level: AirQualityLevel::new(0).unwrap(),
        })
    }

    async fn is_available(&self) -> bool {
        true
    }
}

/// Three stations, one 5 PLN zone around Rzeszów, two traffic rows
pub fn reference_data() -> ReferenceData {
    let ring = LineString::from(vec![
        (21.989, 50.0313),
        (22.009, 50.0313),
        (22.009, 50.0513),
        (21.989, 50.0513),
        (21.989, 50.0313),
    ]);
    let zones = ZoneIndex::new(
        vec![ParkingZone::new(
            "A",
            MultiPolygon::new(vec![Polygon::new(ring, vec![])]),
            5.0,
        )],
        CrsTransform::identity(),
    )
    .unwrap();

    let traffic = TrafficTable::new(vec![
        TrafficRow {
            hour: 8,
            day_of_week: Weekday::Monday,
            value: 42.371,
        },
        TrafficRow {
            hour: 17,
            day_of_week: Weekday::Friday,
            value: 88.006,
        },
    ])
    .unwrap();

    ReferenceData::new(
        vec![
            Station::new("10955", GeoLocation::rzeszow()),
            Station::new("400", GeoLocation::warsaw()),
            Station::new("401", GeoLocation::krakow()),
        ],
        zones,
        traffic,
        TransportProfiles::default(),
        AirQualitySettings::default(),
        RequestDefaults::default(),
    )
    .unwrap()
}

/// Monday 2026-10-12, 08:30
pub fn monday_morning() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2026, 10, 12)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap(),
    )
}

pub fn test_state_with(port: Arc<dyn AirQualityPort>) -> AppState {
    AppState::new(
        ReloadableReferenceData::new(reference_data(), || Ok(reference_data())),
        port,
        Arc::new(monday_morning()),
        "traffic_result",
    )
}

pub fn test_state() -> AppState {
    test_state_with(Arc::new(GoodAirPort))
}
