//! Query parameter coercion shared by the handlers
//!
//! Parameters arrive as raw strings. Empty values count as absent so that
//! `?lat=&lon=` behaves like omitting both.

use domain::GeoLocation;

use crate::error::ApiError;

/// Trimmed value, or `None` when absent or empty
pub fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Optional floating point parameter
pub fn optional_f64(name: &str, value: Option<&str>) -> Result<Option<f64>, ApiError> {
    present(value)
        .map(|raw| {
            raw.parse::<f64>()
                .map_err(|_| ApiError::invalid_param(name, raw))
        })
        .transpose()
}

/// Optional integer parameter
pub fn optional_i64(name: &str, value: Option<&str>) -> Result<Option<i64>, ApiError> {
    present(value)
        .map(|raw| {
            raw.parse::<i64>()
                .map_err(|_| ApiError::invalid_param(name, raw))
        })
        .transpose()
}

/// Coordinates, present only when both `lat` and `lon` are given
pub fn optional_location(
    lat: Option<&str>,
    lon: Option<&str>,
) -> Result<Option<GeoLocation>, ApiError> {
    match (optional_f64("lat", lat)?, optional_f64("lon", lon)?) {
        (Some(lat), Some(lon)) => GeoLocation::from_raw(lat, lon)
            .map(Some)
            .map_err(|e| ApiError::InvalidInput(e.to_string())),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_are_absent() {
        assert_eq!(present(None), None);
        assert_eq!(present(Some("")), None);
        assert_eq!(present(Some("  ")), None);
        assert_eq!(present(Some(" 8 ")), Some("8"));
    }

    #[test]
    fn floats_parse_or_fail_with_name() {
        assert_eq!(optional_f64("distance", Some("12.5")).unwrap(), Some(12.5));
        assert_eq!(optional_f64("distance", Some("")).unwrap(), None);

        let err = optional_f64("distance", Some("far")).unwrap_err();
        assert!(err.to_string().contains("distance"));
    }

    #[test]
    fn integers_reject_fractions() {
        assert_eq!(optional_i64("fuel_type", Some("2")).unwrap(), Some(2));
        assert_eq!(optional_i64("fuel_type", Some("-1")).unwrap(), Some(-1));
        assert!(optional_i64("fuel_type", Some("1.5")).is_err());
    }

    #[test]
    fn location_needs_both_coordinates() {
        assert!(optional_location(Some("50.04"), None).unwrap().is_none());
        assert!(optional_location(None, Some("22.0")).unwrap().is_none());
        assert!(optional_location(Some(""), Some("22.0")).unwrap().is_none());

        let loc = optional_location(Some("50.04"), Some("22.0")).unwrap().unwrap();
        assert!((loc.latitude() - 50.04).abs() < f64::EPSILON);
        assert!((loc.longitude() - 22.0).abs() < f64::EPSILON);
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        assert!(matches!(
            optional_location(Some("NaN"), Some("22.0")),
            Err(ApiError::InvalidInput(_))
        ));
        assert!(optional_location(Some("50.0"), Some("inf")).is_err());
    }
}
