use geo::LineString;
use mapsketch_core::LatLng;

use crate::geometry;

/// An open path in click order.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLine {
    pub points: Vec<LatLng>,
}

impl GeoLine {
    pub fn from_points(points: &[LatLng]) -> Self {
        Self {
            points: points.to_vec(),
        }
    }

    pub fn to_line_string(&self) -> LineString<f64> {
        LineString::new(self.points.iter().map(geometry::to_coord).collect())
    }
}
