//! Domain layer for EcoRoute
//!
//! Contains the geodesic math, reference-data entities, parking-zone lookup
//! and the per-transport cost model. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
