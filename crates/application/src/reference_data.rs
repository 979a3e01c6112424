//! Immutable bundle of everything loaded at startup
//!
//! One `ReferenceData` is built per (re)load and shared behind an `Arc`;
//! nothing in it changes afterwards.

use domain::{DomainError, Station, TrafficTable, TransportProfiles, ZoneIndex};
use serde::{Deserialize, Serialize};

/// Tunables for the air-quality lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirQualitySettings {
    /// Station used when the caller sends no coordinates
    #[serde(default = "default_station_id")]
    pub default_station_id: String,
    /// Bonus points per index level, indexed by level id
    #[serde(default = "default_extra_points")]
    pub extra_points: Vec<i32>,
}

fn default_station_id() -> String {
    "10955".to_string()
}

fn default_extra_points() -> Vec<i32> {
    vec![10, 8, 5, 2, 0, 0]
}

impl Default for AirQualitySettings {
    fn default() -> Self {
        Self {
            default_station_id: default_station_id(),
            extra_points: default_extra_points(),
        }
    }
}

/// Values used for request parameters the caller leaves out
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RequestDefaults {
    #[serde(default)]
    pub transport_type: i64,
    #[serde(default = "default_distance")]
    pub distance_km: f64,
    #[serde(default = "default_daily_distance")]
    pub daily_distance_km: f64,
    #[serde(default)]
    pub fuel_type: i64,
}

const fn default_distance() -> f64 {
    10.0
}

const fn default_daily_distance() -> f64 {
    30.0
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            transport_type: 0,
            distance_km: default_distance(),
            daily_distance_km: default_daily_distance(),
            fuel_type: 0,
        }
    }
}

/// Dataset sizes, reported by readiness checks and the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceDataSummary {
    pub stations: usize,
    pub zones: usize,
    pub traffic_rows: usize,
}

/// Stations, parking zones, traffic averages and transport profiles
#[derive(Debug)]
pub struct ReferenceData {
    stations: Vec<Station>,
    zones: ZoneIndex,
    traffic: TrafficTable,
    profiles: TransportProfiles,
    air_quality: AirQualitySettings,
    defaults: RequestDefaults,
}

impl ReferenceData {
    /// Bundle loaded datasets, checking the invariants lookups rely on
    ///
    /// # Errors
    ///
    /// Returns `InvalidReferenceData` for an empty station list, a blank
    /// default station or broken transport profiles.
    pub fn new(
        stations: Vec<Station>,
        zones: ZoneIndex,
        traffic: TrafficTable,
        profiles: TransportProfiles,
        air_quality: AirQualitySettings,
        defaults: RequestDefaults,
    ) -> Result<Self, DomainError> {
        if stations.is_empty() {
            return Err(DomainError::InvalidReferenceData(
                "station list is empty".to_string(),
            ));
        }
        if air_quality.default_station_id.trim().is_empty() {
            return Err(DomainError::InvalidReferenceData(
                "default air-quality station id is blank".to_string(),
            ));
        }
        profiles.validate()?;

        Ok(Self {
            stations,
            zones,
            traffic,
            profiles,
            air_quality,
            defaults,
        })
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub const fn zones(&self) -> &ZoneIndex {
        &self.zones
    }

    pub const fn traffic(&self) -> &TrafficTable {
        &self.traffic
    }

    pub const fn profiles(&self) -> &TransportProfiles {
        &self.profiles
    }

    pub const fn air_quality(&self) -> &AirQualitySettings {
        &self.air_quality
    }

    pub const fn defaults(&self) -> &RequestDefaults {
        &self.defaults
    }

    pub fn summary(&self) -> ReferenceDataSummary {
        ReferenceDataSummary {
            stations: self.stations.len(),
            zones: self.zones.len(),
            traffic_rows: self.traffic.len(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::sync::Arc;

    use domain::{
        CrsTransform, GeoLocation, ParkingZone, Station, TrafficRow, TrafficTable, Weekday,
        ZoneIndex,
    };
    use geo::{LineString, MultiPolygon, Polygon};

    use super::*;

    /// Square zone of side 0.02 degrees centred on Rzeszów, priced 5 PLN
    pub fn zone_index() -> ZoneIndex {
        let ring = LineString::from(vec![
            (21.989, 50.0313),
            (22.009, 50.0313),
            (22.009, 50.0513),
            (21.989, 50.0513),
            (21.989, 50.0313),
        ]);
        let area = MultiPolygon::new(vec![Polygon::new(ring, vec![])]);
        ZoneIndex::new(
            vec![ParkingZone::new("A", area, 5.0)],
            CrsTransform::identity(),
        )
        .unwrap()
    }

    pub fn stations() -> Vec<Station> {
        vec![
            Station::new("10955", GeoLocation::rzeszow()),
            Station::new("400", GeoLocation::warsaw()),
            Station::new("401", GeoLocation::krakow()),
        ]
    }

    pub fn traffic() -> TrafficTable {
        TrafficTable::new(vec![
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
        .unwrap()
    }

    pub fn reference_data() -> Arc<ReferenceData> {
        Arc::new(
            ReferenceData::new(
                stations(),
                zone_index(),
                traffic(),
                TransportProfiles::default(),
                AirQualitySettings::default(),
                RequestDefaults::default(),
            )
            .unwrap(),
        )
    }
}
