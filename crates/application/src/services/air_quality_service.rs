//! Air-quality lookup for a location

use std::{fmt, sync::Arc};

use domain::{GeoLocation, nearest_station};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{AirQualityPort, ReferenceDataSource},
};

/// Air quality near a location, as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AirQualityReport {
    /// Station that was queried
    pub station_id: String,
    /// Index level label
    pub air_quality: String,
    /// Index level id, 0 (best) to 5 (worst)
    pub air_quality_id: u8,
    pub extra_points: i32,
}

/// Resolves the closest measuring station and fetches its index
pub struct AirQualityService {
    data: Arc<dyn ReferenceDataSource>,
    port: Arc<dyn AirQualityPort>,
}

impl fmt::Debug for AirQualityService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AirQualityService").finish_non_exhaustive()
    }
}

impl AirQualityService {
    pub fn new(data: Arc<dyn ReferenceDataSource>, port: Arc<dyn AirQualityPort>) -> Self {
        Self { data, port }
    }

    /// Station to query for `location`, the configured default without one
    ///
    /// # Errors
    ///
    /// `NotFound` if no station can be chosen for the location.
    pub fn station_for(&self, location: Option<&GeoLocation>) -> Result<String, ApplicationError> {
        let data = self.data.current();
        match location {
            Some(location) => nearest_station(location, data.stations())
                .map(|station| station.id.clone())
                .ok_or_else(|| {
                    ApplicationError::NotFound(format!("No station found near {location}"))
                }),
            None => Ok(data.air_quality().default_station_id.clone()),
        }
    }

    /// Current air quality near `location`
    ///
    /// # Errors
    ///
    /// `NotFound` if no station can be chosen; upstream failures from the
    /// port are passed through.
    #[instrument(skip(self))]
    pub async fn air_quality(
        &self,
        location: Option<GeoLocation>,
    ) -> Result<AirQualityReport, ApplicationError> {
        let station_id = self.station_for(location.as_ref())?;
        debug!(%station_id, "Selected air-quality station");

        let reading = self
            .port
            .current_index(&station_id)
            .await
            .inspect_err(|e| warn!(%station_id, error = %e, "Air-quality fetch failed"))?;

        let extra_points = reading
            .level
            .extra_points(&self.data.current().air_quality().extra_points);
        info!(
            %station_id,
            level = reading.level.id(),
            extra_points,
            "Fetched air quality"
        );

        Ok(AirQualityReport {
            station_id,
            air_quality: reading.label,
            air_quality_id: reading.level.id(),
            extra_points,
        })
    }

    /// Whether the remote index answers
    pub async fn is_available(&self) -> bool {
        self.port.is_available().await
    }
}
