//! WGS84 point and great-circle distance

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Mean Earth radius used by the haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point given in decimal degrees
///
/// Station coordinates are range-checked when the dataset is loaded. Request
/// coordinates only need to be finite, since they are projected into the zone
/// CRS or compared against stations and never used as map tiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    lat: f64,
    lon: f64,
}

impl GeoLocation {
    /// Range-checked constructor for dataset coordinates
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` unless latitude is within ±90 and longitude
    /// within ±180. NaN and infinities fail the same check.
    pub fn new(lat: f64, lon: f64) -> Result<Self, DomainError> {
        let lat_ok = (-90.0..=90.0).contains(&lat);
        let lon_ok = (-180.0..=180.0).contains(&lon);
        if lat_ok && lon_ok {
            Ok(Self { lat, lon })
        } else {
            Err(DomainError::invalid_input(format!(
                "coordinates ({lat}, {lon}) are outside WGS84 bounds"
            )))
        }
    }

    /// Constructor for request coordinates
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either coordinate is NaN or infinite.
    pub fn from_raw(lat: f64, lon: f64) -> Result<Self, DomainError> {
        if lat.is_finite() && lon.is_finite() {
            Ok(Self { lat, lon })
        } else {
            Err(DomainError::invalid_input(format!(
                "coordinates must be finite, got ({lat}, {lon})"
            )))
        }
    }

    /// Skip every check; for constants and test data
    #[must_use]
    pub const fn new_unchecked(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.lat
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.lon
    }

    /// Coordinates in (x, y) = (longitude, latitude) order
    #[must_use]
    pub const fn to_xy(&self) -> (f64, f64) {
        (self.lon, self.lat)
    }

    /// Great-circle distance in kilometers
    ///
    /// Haversine on a sphere of radius [`EARTH_RADIUS_KM`]. The haversine
    /// term is clamped to `[0, 1]`; rounding near identical or antipodal
    /// points would otherwise push `sqrt` out of its domain.
    #[must_use]
    pub fn distance_km(&self, other: &Self) -> f64 {
        let half_dlat = (other.lat - self.lat).to_radians() / 2.0;
        let half_dlon = (other.lon - self.lon).to_radians() / 2.0;
        let cos_product = self.lat.to_radians().cos() * other.lat.to_radians().cos();

        let h = cos_product
            .mul_add(half_dlon.sin().powi(2), half_dlat.sin().powi(2))
            .clamp(0.0, 1.0);

        2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lon)
    }
}

/// Reference points in Poland
impl GeoLocation {
    /// Rzeszów market square
    #[must_use]
    pub const fn rzeszow() -> Self {
        Self::new_unchecked(50.0413, 21.999)
    }

    #[must_use]
    pub const fn warsaw() -> Self {
        Self::new_unchecked(52.2297, 21.0122)
    }

    #[must_use]
    pub const fn krakow() -> Self {
        Self::new_unchecked(50.0647, 19.945)
    }
}
