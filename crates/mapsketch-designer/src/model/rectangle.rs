use geo::{LineString, Polygon};
use mapsketch_core::LatLng;

use crate::geometry;

/// An axis-aligned box in latitude/longitude space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoRectangle {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoRectangle {
    /// Box spanned by two opposite corners, in either order.
    pub fn from_corners(a: LatLng, b: LatLng) -> Self {
        Self {
            south: a.lat.min(b.lat),
            west: a.lng.min(b.lng),
            north: a.lat.max(b.lat),
            east: a.lng.max(b.lng),
        }
    }

    /// Corners in ring order: SW, SE, NE, NW.
    pub fn corners(&self) -> [LatLng; 4] {
        [
            LatLng::new(self.south, self.west),
            LatLng::new(self.south, self.east),
            LatLng::new(self.north, self.east),
            LatLng::new(self.north, self.west),
        ]
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        let corners = self.corners();
        let mut coords: Vec<_> = corners.iter().map(geometry::to_coord).collect();
        coords.push(geometry::to_coord(&corners[0]));
        Polygon::new(LineString::new(coords), vec![])
    }
}
