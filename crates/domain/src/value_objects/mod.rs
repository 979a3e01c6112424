//! Value Objects - Immutable, identity-less domain primitives

mod crs;
mod geo_location;

pub use crs::{Crs, CrsTransform, Ellipsoid, TransverseMercator};
pub use geo_location::{EARTH_RADIUS_KM, GeoLocation};
