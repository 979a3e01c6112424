//! Access to the current reference-data bundle

use std::sync::Arc;

use crate::reference_data::ReferenceData;

/// Hands out the reference data valid for the request being served
///
/// A source may swap in a new bundle at any time; callers hold on to the
/// returned `Arc` for the duration of one request.
pub trait ReferenceDataSource: Send + Sync {
    fn current(&self) -> Arc<ReferenceData>;
}

impl ReferenceDataSource for Arc<ReferenceData> {
    fn current(&self) -> Arc<ReferenceData> {
        Self::clone(self)
    }
}
