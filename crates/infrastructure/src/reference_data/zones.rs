//! Paid parking subzones from GeoJSON

use std::fs;

use domain::{ParkingZone, ZoneIndex};
use geo::{Geometry, MultiPolygon};
use geojson::{FeatureCollection, GeoJson};
use serde_json::Value;
use tracing::debug;

use super::ReferenceDataError;
use crate::config::PaidParkingConfig;

/// Price of `zone` from the configured table
///
/// Exact match first; keys are then compared ignoring ASCII case because
/// some configuration sources lowercase them.
fn price_for(config: &PaidParkingConfig, zone: &str) -> Option<f64> {
    config.prices.get(zone).copied().or_else(|| {
        config
            .prices
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(zone))
            .map(|(_, price)| *price)
    })
}

fn property_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Load the zone file and build the spatial index
///
/// # Errors
///
/// Fails on unreadable or non-FeatureCollection files, features without a
/// (multi)polygon or a subzone id, subzones without a configured price and
/// unsupported reference systems.
pub fn load_zones(config: &PaidParkingConfig) -> Result<ZoneIndex, ReferenceDataError> {
    let path = config.file.as_path();
    let transform = config.transform()?;

    let text = fs::read_to_string(path).map_err(|e| ReferenceDataError::io(path, e))?;
    let geojson: GeoJson = text.parse().map_err(|e| ReferenceDataError::GeoJson {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;
    let collection = FeatureCollection::try_from(geojson).map_err(|e| {
        ReferenceDataError::GeoJson {
            path: path.to_path_buf(),
            source: Box::new(e),
        }
    })?;

    let mut zones = Vec::with_capacity(collection.features.len());
    for (position, feature) in collection.features.into_iter().enumerate() {
        let subzone_id = feature
            .property(&config.zone_property)
            .and_then(property_text)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                ReferenceDataError::invalid_record(
                    path,
                    format!("feature {position} has no `{}` property", config.zone_property),
                )
            })?;

        let geometry = feature.geometry.ok_or_else(|| {
            ReferenceDataError::invalid_record(path, format!("subzone {subzone_id} has no geometry"))
        })?;
        let area = match Geometry::<f64>::try_from(geometry) {
            Ok(Geometry::Polygon(polygon)) => MultiPolygon::new(vec![polygon]),
            Ok(Geometry::MultiPolygon(multi)) => multi,
            Ok(_) => {
                return Err(ReferenceDataError::invalid_record(
                    path,
                    format!("subzone {subzone_id} is not a polygon"),
                ));
            },
            Err(e) => {
                return Err(ReferenceDataError::GeoJson {
                    path: path.to_path_buf(),
                    source: Box::new(e),
                });
            },
        };

        let price = price_for(config, &subzone_id)
            .ok_or_else(|| ReferenceDataError::MissingPrice(subzone_id.clone()))?;
        zones.push(ParkingZone::new(subzone_id, area, price));
    }

    debug!(count = zones.len(), path = %path.display(), "Loaded parking zones");
    Ok(ZoneIndex::new(zones, transform)?)
}
