//! Paid parking subzones and the point-in-polygon price lookup
//!
//! Zones are indexed by bounding box in an R-tree; exact containment is then
//! tested with `geo::Contains`, which is boundary-exclusive: a point lying
//! exactly on a zone edge is not inside that zone. When zones overlap, the one
//! that comes first in the dataset wins, same as a linear scan would.

use geo::{BoundingRect, Contains, MultiPolygon, Point};
use rstar::{AABB, RTree, RTreeObject};

use crate::{
    errors::DomainError,
    value_objects::{CrsTransform, GeoLocation},
};

/// A named paid-parking subzone with a fixed price
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingZone {
    /// Subzone identifier (the `Podstrefa` attribute in municipal datasets)
    pub subzone_id: String,
    /// Zone geometry in the zone dataset's reference system
    pub area: MultiPolygon<f64>,
    /// Parking price in PLN
    pub price: f64,
}

impl ParkingZone {
    pub fn new(subzone_id: impl Into<String>, area: MultiPolygon<f64>, price: f64) -> Self {
        Self {
            subzone_id: subzone_id.into(),
            area,
            price,
        }
    }

    /// Whether the projected point lies strictly inside this zone
    #[must_use]
    pub fn contains(&self, point: &Point<f64>) -> bool {
        self.area.contains(point)
    }
}

#[derive(Debug, Clone, Copy)]
struct ZoneEnvelope {
    index: usize,
    aabb: AABB<[f64; 2]>,
}

impl RTreeObject for ZoneEnvelope {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.aabb
    }
}

/// Immutable spatial index over all paid-parking zones
pub struct ZoneIndex {
    zones: Vec<ParkingZone>,
    tree: RTree<ZoneEnvelope>,
    transform: CrsTransform,
}

impl std::fmt::Debug for ZoneIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoneIndex")
            .field("zones", &self.zones.len())
            .field("source", &self.transform.source())
            .field("target", &self.transform.target())
            .finish()
    }
}

impl ZoneIndex {
    /// Build the index
    ///
    /// `transform` maps query coordinates into the zones' reference system.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReferenceData` if `zones` is empty, a zone has no
    /// geometry, or a price is negative or not finite.
    pub fn new(zones: Vec<ParkingZone>, transform: CrsTransform) -> Result<Self, DomainError> {
        if zones.is_empty() {
            return Err(DomainError::InvalidReferenceData(
                "parking zone dataset is empty".to_string(),
            ));
        }

        let mut envelopes = Vec::with_capacity(zones.len());
        for (index, zone) in zones.iter().enumerate() {
            if !zone.price.is_finite() || zone.price < 0.0 {
                return Err(DomainError::InvalidReferenceData(format!(
                    "subzone {} has invalid price {}",
                    zone.subzone_id, zone.price
                )));
            }
            let rect = zone.area.bounding_rect().ok_or_else(|| {
                DomainError::InvalidReferenceData(format!(
                    "subzone {} has an empty geometry",
                    zone.subzone_id
                ))
            })?;
            envelopes.push(ZoneEnvelope {
                index,
                aabb: AABB::from_corners(
                    [rect.min().x, rect.min().y],
                    [rect.max().x, rect.max().y],
                ),
            });
        }

        Ok(Self {
            zones,
            tree: RTree::bulk_load(envelopes),
            transform,
        })
    }

    /// Number of indexed zones
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// All zones in dataset order
    #[must_use]
    pub fn zones(&self) -> &[ParkingZone] {
        &self.zones
    }

    #[must_use]
    pub const fn transform(&self) -> &CrsTransform {
        &self.transform
    }

    /// Find the zone containing `location`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the coordinate is not finite or cannot be projected.
    pub fn zone_at(&self, location: &GeoLocation) -> Result<Option<&ParkingZone>, DomainError> {
        let (x, y) = location.to_xy();
        let (x, y) = self.transform.transform(x, y)?;
        let point = Point::new(x, y);

        let first_match = self
            .tree
            .locate_in_envelope_intersecting(&AABB::from_point([x, y]))
            .map(|entry| entry.index)
            .filter(|&index| self.zones[index].contains(&point))
            .min();

        Ok(first_match.map(|index| &self.zones[index]))
    }

    /// Parking price at `location`, `0.0` outside every zone
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the coordinate is not finite or cannot be projected.
    pub fn price_at(&self, location: &GeoLocation) -> Result<f64, DomainError> {
        Ok(self.zone_at(location)?.map_or(0.0, |zone| zone.price))
    }
}
