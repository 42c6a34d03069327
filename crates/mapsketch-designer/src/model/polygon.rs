use geo::{LineString, Polygon};
use mapsketch_core::LatLng;

use crate::geometry;

/// A free-form polygon whose ring follows click order.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPolygon {
    /// Closed ring: first point equals last.
    pub ring: Vec<LatLng>,
}

impl GeoPolygon {
    /// Builds the ring, appending the first point if the clicks did not
    /// already end on it.
    pub fn from_points(points: &[LatLng]) -> Self {
        let mut ring = points.to_vec();
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            if !first.same_position(last) {
                ring.push(*first);
            }
        }
        Self { ring }
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        Polygon::new(
            LineString::new(self.ring.iter().map(geometry::to_coord).collect()),
            vec![],
        )
    }
}
