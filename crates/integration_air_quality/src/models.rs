//! Air-quality index payloads

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::AirQualityError;

/// Lowest and highest index level ids the service publishes
const LEVEL_RANGE: std::ops::RangeInclusive<i64> = 0..=5;

/// One index level ("Dobry", id 1)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexLevel {
    pub id: u8,
    pub label: String,
}

/// Current index of one measuring station
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirQualityIndex {
    pub station_id: String,
    pub level: IndexLevel,
    /// When the service calculated the index (`stCalcDate`), if reported
    pub calculated_at: Option<String>,
}

impl AirQualityIndex {
    /// Pull the index out of a raw response body
    ///
    /// `index_key` names the object holding the overall level and
    /// `level_name_key` the label inside it; the id is always under `id`.
    pub(crate) fn from_payload(
        station_id: &str,
        payload: &Value,
        index_key: &str,
        level_name_key: &str,
    ) -> Result<Self, AirQualityError> {
        let level = payload
            .get(index_key)
            .filter(|level| !level.is_null())
            .ok_or_else(|| {
                AirQualityError::ParseError(format!("missing `{index_key}` in response"))
            })?;

        let raw_id = level
            .get("id")
            .and_then(Value::as_i64)
            .ok_or_else(|| AirQualityError::ParseError("index level has no numeric id".into()))?;
        if !LEVEL_RANGE.contains(&raw_id) {
            return Err(AirQualityError::UnknownIndex(raw_id));
        }

        let label = level
            .get(level_name_key)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                AirQualityError::ParseError(format!("index level has no `{level_name_key}`"))
            })?;

        Ok(Self {
            station_id: station_id.to_string(),
            level: IndexLevel {
                id: u8::try_from(raw_id).map_err(|_| AirQualityError::UnknownIndex(raw_id))?,
                label: label.to_string(),
            },
            calculated_at: payload
                .get("stCalcDate")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }
}
