//! Traffic average lookups

use std::{fmt, sync::Arc};

use chrono::{Datelike, Timelike};
use domain::Weekday;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    error::ApplicationError,
    ports::{Clock, ReferenceDataSource},
};

/// Round to two decimal places
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A traffic average for one hour of one weekday
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrafficReading {
    pub hour: u32,
    pub day_of_week: Weekday,
    /// Average rounded to two decimals
    pub value: f64,
}

/// Looks up historical traffic averages
pub struct TrafficService {
    data: Arc<dyn ReferenceDataSource>,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for TrafficService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrafficService").finish_non_exhaustive()
    }
}

impl TrafficService {
    pub fn new(data: Arc<dyn ReferenceDataSource>, clock: Arc<dyn Clock>) -> Self {
        Self { data, clock }
    }

    /// Average for an hour (0-23) and an English weekday name
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an unknown weekday or an hour past 23, `NotFound`
    /// when the table has no such row.
    #[instrument(skip(self))]
    pub fn traffic_at(&self, hour: u32, day_of_week: &str) -> Result<TrafficReading, ApplicationError> {
        let day: Weekday = day_of_week.parse()?;
        self.lookup(hour, day, "No data found for the provided parameters.")
    }

    /// Average for the current local hour and weekday
    ///
    /// # Errors
    ///
    /// `NotFound` when the table has no row for the current time.
    #[instrument(skip(self))]
    pub fn current_traffic(&self) -> Result<TrafficReading, ApplicationError> {
        let now = self.clock.now();
        let day = Weekday::from(now.weekday());
        debug!(hour = now.hour(), %day, "Resolved current time");
        self.lookup(now.hour(), day, "No data found for the current time.")
    }

    fn lookup(
        &self,
        hour: u32,
        day: Weekday,
        missing: &str,
    ) -> Result<TrafficReading, ApplicationError> {
        let data = self.data.current();
        let value = data
            .traffic()
            .average(hour, day)?
            .ok_or_else(|| ApplicationError::NotFound(missing.to_string()))?;

        Ok(TrafficReading {
            hour,
            day_of_week: day,
            value: round_to_cents(value),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{ports::FixedClock, reference_data::fixtures::reference_data};

    fn service_at(day: u32, hour: u32) -> TrafficService {
        // 2024-03-04 was a Monday
        let instant = NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(hour, 30, 0)
            .unwrap();
        TrafficService::new(Arc::new(reference_data()), Arc::new(FixedClock(instant)))
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert!((round_to_cents(42.371) - 42.37).abs() < f64::EPSILON);
        assert!((round_to_cents(7.0) - 7.0).abs() < f64::EPSILON);
        assert!((round_to_cents(-1.234) + 1.23).abs() < f64::EPSILON);
    }

    #[test]
    fn lookup_by_hour_and_day() {
        let reading = service_at(4, 0).traffic_at(8, "Monday").unwrap();
        assert_eq!(reading.day_of_week, Weekday::Monday);
        assert!((reading.value - 42.37).abs() < f64::EPSILON);
    }

    #[test]
    fn day_name_is_case_insensitive() {
        assert!(service_at(4, 0).traffic_at(17, "friday").is_ok());
    }

    #[test]
    fn missing_row_is_not_found() {
        let result = service_at(4, 0).traffic_at(3, "Sunday");
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }

    #[test]
    fn bad_parameters_are_client_errors() {
        let service = service_at(4, 0);
        let bad_day = service.traffic_at(8, "Someday").unwrap_err();
        let bad_hour = service.traffic_at(24, "Monday").unwrap_err();
        assert!(bad_day.is_client_error());
        assert!(bad_hour.is_client_error());
    }

    #[test]
    fn current_traffic_uses_clock() {
        let reading = service_at(4, 8).current_traffic().unwrap();
        assert_eq!(reading.hour, 8);
        assert!((reading.value - 42.37).abs() < f64::EPSILON);

        // Friday 2024-03-08, 17:30
        let reading = service_at(8, 17).current_traffic().unwrap();
        assert_eq!(reading.day_of_week, Weekday::Friday);
        assert!((reading.value - 88.01).abs() < 1e-9);
    }

    #[test]
    fn current_traffic_without_row_is_not_found() {
        let result = service_at(5, 3).current_traffic();
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }
}
