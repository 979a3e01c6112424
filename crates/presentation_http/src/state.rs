//! Application state shared across handlers

use std::sync::Arc;

use application::{
    AirQualityService, TrafficService, TravelService,
    ports::{AirQualityPort, Clock, ReferenceDataSource},
};

use crate::config_reload::ReloadableReferenceData;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Savings and annual projection
    pub travel_service: Arc<TravelService>,
    /// Traffic averages
    pub traffic_service: Arc<TrafficService>,
    /// Nearest-station air quality
    pub air_quality_service: Arc<AirQualityService>,
    /// Reference datasets, swapped on reload
    pub reference_data: ReloadableReferenceData,
    /// JSON key of the traffic value in responses
    pub traffic_result_key: Arc<str>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("reference_data", &self.reference_data)
            .field("traffic_result_key", &self.traffic_result_key)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Wire the services to one reloadable reference data source
    pub fn new(
        reference_data: ReloadableReferenceData,
        air_quality: Arc<dyn AirQualityPort>,
        clock: Arc<dyn Clock>,
        traffic_result_key: impl Into<Arc<str>>,
    ) -> Self {
        let source: Arc<dyn ReferenceDataSource> = Arc::new(reference_data.clone());
        Self {
            travel_service: Arc::new(TravelService::new(Arc::clone(&source))),
            traffic_service: Arc::new(TrafficService::new(Arc::clone(&source), clock)),
            air_quality_service: Arc::new(AirQualityService::new(source, air_quality)),
            reference_data,
            traffic_result_key: traffic_result_key.into(),
        }
    }
}
