//! HTTP request handlers

pub mod air_quality;
pub mod health;
pub mod params;
pub mod traffic;
pub mod travel;

#[cfg(test)]
pub(crate) mod test_support;
