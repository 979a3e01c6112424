//! Air-quality measuring stations and the nearest-station search

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoLocation;

/// A fixed-location sensor station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Identifier used by the remote air-quality service
    pub id: String,
    /// Human readable name, when the dataset provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Station position
    pub location: GeoLocation,
}

impl Station {
    /// Create a new station
    pub fn new(id: impl Into<String>, location: GeoLocation) -> Self {
        Self {
            id: id.into(),
            name: None,
            location,
        }
    }

    /// Attach a display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Haversine distance from `target` to this station in kilometers
    #[must_use]
    pub fn distance_km(&self, target: &GeoLocation) -> f64 {
        target.distance_km(&self.location)
    }
}

/// Find the station closest to `target`
///
/// Linear scan with a strict `<` comparison: on equal distances the station
/// that appears first in `stations` wins. Returns `None` for an empty list,
/// or when no distance is comparable (a non-finite target).
pub fn nearest_station<'a>(target: &GeoLocation, stations: &'a [Station]) -> Option<&'a Station> {
    let mut nearest = None;
    let mut min_distance = f64::INFINITY;

    for station in stations {
        let distance = station.distance_km(target);
        if distance < min_distance {
            min_distance = distance;
            nearest = Some(station);
        }
    }

    nearest
}
