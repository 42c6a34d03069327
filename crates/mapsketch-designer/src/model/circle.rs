use geo::Polygon;
use mapsketch_core::LatLng;

use crate::geometry;

/// A circle defined by its center and a great-circle radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCircle {
    pub center: LatLng,
    pub radius_m: f64,
}

impl GeoCircle {
    pub fn new(center: LatLng, radius_m: f64) -> Self {
        Self { center, radius_m }
    }

    /// Center click plus a click on the circumference.
    pub fn from_points(center: LatLng, edge: LatLng) -> Self {
        Self::new(center, geometry::distance_m(&center, &edge))
    }

    /// Regular polygon with `steps` vertices approximating the circle.
    pub fn to_polygon(&self, steps: usize) -> Polygon<f64> {
        Polygon::new(
            geometry::circle_ring(&self.center, self.radius_m, steps),
            vec![],
        )
    }
}
