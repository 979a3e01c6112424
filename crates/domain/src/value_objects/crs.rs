//! Coordinate reference systems
//!
//! Forward transformation from geographic WGS84 coordinates into the projected
//! systems parking-zone datasets are commonly published in (Polish PUWG-1992,
//! CS2000 zones, UTM). Axis order is always `(x, y)`: longitude/easting first.

use std::{fmt, str::FromStr};

use crate::errors::DomainError;

/// Reference ellipsoid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis in meters
    pub semi_major_axis: f64,
    /// Flattening
    pub flattening: f64,
}

impl Ellipsoid {
    /// WGS 84
    pub const WGS84: Self = Self {
        semi_major_axis: 6_378_137.0,
        flattening: 1.0 / 298.257_223_563,
    };

    /// GRS 1980 (ETRS89 and the Polish national grids)
    pub const GRS80: Self = Self {
        semi_major_axis: 6_378_137.0,
        flattening: 1.0 / 298.257_222_101,
    };

    /// First eccentricity squared
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        self.flattening * (2.0 - self.flattening)
    }

    /// Length of the meridian arc from the equator to `phi` (radians)
    fn meridian_arc(&self, phi: f64) -> f64 {
        let e2 = self.eccentricity_squared();
        let e4 = e2 * e2;
        let e6 = e4 * e2;

        self.semi_major_axis
            * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * phi
                - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * phi).sin()
                + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * phi).sin()
                - (35.0 * e6 / 3072.0) * (6.0 * phi).sin())
    }
}

/// Transverse Mercator projection parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransverseMercator {
    pub ellipsoid: Ellipsoid,
    /// Central meridian in degrees
    pub central_meridian: f64,
    /// Latitude of origin in degrees
    pub latitude_of_origin: f64,
    /// Scale factor on the central meridian
    pub scale_factor: f64,
    pub false_easting: f64,
    pub false_northing: f64,
}

impl TransverseMercator {
    /// PUWG-1992 (EPSG:2180)
    pub const PUWG_1992: Self = Self {
        ellipsoid: Ellipsoid::GRS80,
        central_meridian: 19.0,
        latitude_of_origin: 0.0,
        scale_factor: 0.9993,
        false_easting: 500_000.0,
        false_northing: -5_300_000.0,
    };

    /// CS2000 zone 5..=8 (EPSG:2176..=2179)
    #[must_use]
    pub fn cs2000(zone: u8) -> Self {
        Self {
            ellipsoid: Ellipsoid::GRS80,
            central_meridian: f64::from(zone) * 3.0,
            latitude_of_origin: 0.0,
            scale_factor: 0.999_923,
            false_easting: f64::from(zone).mul_add(1_000_000.0, 500_000.0),
            false_northing: 0.0,
        }
    }

    /// UTM zone 1..=60 on the given ellipsoid
    #[must_use]
    pub fn utm(zone: u8, south: bool, ellipsoid: Ellipsoid) -> Self {
        Self {
            ellipsoid,
            central_meridian: f64::from(zone).mul_add(6.0, -183.0),
            latitude_of_origin: 0.0,
            scale_factor: 0.9996,
            false_easting: 500_000.0,
            false_northing: if south { 10_000_000.0 } else { 0.0 },
        }
    }

    /// Project geographic `(longitude, latitude)` degrees to `(easting, northing)` meters
    #[must_use]
    pub fn forward(&self, longitude: f64, latitude: f64) -> (f64, f64) {
        let e2 = self.ellipsoid.eccentricity_squared();
        let ep2 = e2 / (1.0 - e2);
        let k0 = self.scale_factor;

        let phi = latitude.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let tan_phi = phi.tan();

        let n = self.ellipsoid.semi_major_axis / e2.mul_add(-sin_phi * sin_phi, 1.0).sqrt();
        let t = tan_phi * tan_phi;
        let c = ep2 * cos_phi * cos_phi;
        let a = (longitude - self.central_meridian).to_radians() * cos_phi;

        let m = self.ellipsoid.meridian_arc(phi);
        let m0 = self
            .ellipsoid
            .meridian_arc(self.latitude_of_origin.to_radians());

        let x = k0
            * n
            * (a + (1.0 - t + c) * a.powi(3) / 6.0
                + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * a.powi(5) / 120.0);
        let y = k0
            * (m - m0
                + n * tan_phi
                    * (a * a / 2.0
                        + (5.0 - t + 9.0 * c + 4.0 * c * c) * a.powi(4) / 24.0
                        + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * a.powi(6)
                            / 720.0));

        (self.false_easting + x, self.false_northing + y)
    }
}

/// A supported coordinate reference system
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Crs {
    /// Geographic WGS84 degrees (EPSG:4326)
    Geographic,
    /// Projected transverse Mercator grid identified by its EPSG code
    Projected {
        epsg: u32,
        projection: TransverseMercator,
    },
}

impl Crs {
    /// Look up a CRS by EPSG code
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for codes outside the supported set.
    pub fn from_epsg(epsg: u32) -> Result<Self, DomainError> {
        let projection = match epsg {
            4326 => return Ok(Self::Geographic),
            2180 => TransverseMercator::PUWG_1992,
            2176..=2179 => TransverseMercator::cs2000((epsg - 2171) as u8),
            32601..=32660 => TransverseMercator::utm((epsg - 32600) as u8, false, Ellipsoid::WGS84),
            32701..=32760 => TransverseMercator::utm((epsg - 32700) as u8, true, Ellipsoid::WGS84),
            25828..=25838 => TransverseMercator::utm((epsg - 25800) as u8, false, Ellipsoid::GRS80),
            _ => {
                return Err(DomainError::invalid_input(format!(
                    "unsupported coordinate reference system EPSG:{epsg}"
                )));
            },
        };
        Ok(Self::Projected { epsg, projection })
    }

    /// EPSG code of this CRS
    #[must_use]
    pub const fn epsg(&self) -> u32 {
        match self {
            Self::Geographic => 4326,
            Self::Projected { epsg, .. } => *epsg,
        }
    }
}

impl FromStr for Crs {
    type Err = DomainError;

    /// Accepts `EPSG:2180`, `epsg:2180` or a bare `2180`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let code = trimmed
            .split_once(':')
            .map_or(trimmed, |(authority, code)| {
                if authority.eq_ignore_ascii_case("epsg") {
                    code
                } else {
                    ""
                }
            });
        let epsg = code.trim().parse::<u32>().map_err(|_| {
            DomainError::invalid_input(format!("unrecognised coordinate reference system: {s}"))
        })?;
        Self::from_epsg(epsg)
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.epsg())
    }
}

/// A deterministic transform between two reference systems
///
/// Inputs and outputs are both `(x, y)` ordered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrsTransform {
    source: Crs,
    target: Crs,
}

impl CrsTransform {
    /// Build a transform from `source` to `target`
    ///
    /// Only geographic sources (or identical source and target) are supported.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the source is a different projected system.
    pub fn new(source: Crs, target: Crs) -> Result<Self, DomainError> {
        if source != Crs::Geographic && source != target {
            return Err(DomainError::invalid_input(format!(
                "cannot transform from projected {source} to {target}"
            )));
        }
        Ok(Self { source, target })
    }

    /// Identity transform on geographic coordinates
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            source: Crs::Geographic,
            target: Crs::Geographic,
        }
    }

    #[must_use]
    pub const fn source(&self) -> Crs {
        self.source
    }

    #[must_use]
    pub const fn target(&self) -> Crs {
        self.target
    }

    /// Transform an `(x, y)` pair
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for non-finite input or output.
    pub fn transform(&self, x: f64, y: f64) -> Result<(f64, f64), DomainError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(DomainError::invalid_input(format!(
                "coordinate ({x}, {y}) is not finite"
            )));
        }

        let out = match (self.source, self.target) {
            (source, target) if source == target => (x, y),
            (_, Crs::Projected { projection, .. }) => projection.forward(x, y),
            (_, Crs::Geographic) => (x, y),
        };

        if !out.0.is_finite() || !out.1.is_finite() {
            return Err(DomainError::invalid_input(format!(
                "coordinate ({x}, {y}) cannot be projected to {}",
                self.target
            )));
        }
        Ok(out)
    }
}
