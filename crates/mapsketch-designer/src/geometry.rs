//! Geometry backend built on the `geo` crate.
//!
//! Converts between map points and `geo` coordinates (x = longitude,
//! y = latitude) and wraps the predicates and boolean operations used by
//! conflict resolution. The `geo` boolean and relate implementations can
//! panic on numerically awkward input; every such call runs under
//! `catch_unwind` and comes back as a [`GeometryError`].

use geo::{
    Area, BooleanOps, Coord, CoordsIter, HaversineDestination, HaversineDistance, LineString,
    MultiPolygon, Point, Polygon, Relate,
};
use mapsketch_core::{GeometryError, LatLng};
use std::panic::{self, AssertUnwindSafe};

/// Remaining area below this fraction of the original candidate counts as
/// fully consumed.
const EMPTY_AREA_RATIO: f64 = 1e-9;

/// Converts a map point to a `geo` point.
pub fn to_point(p: &LatLng) -> Point<f64> {
    Point::new(p.lng, p.lat)
}

/// Converts a map point to a `geo` coordinate.
pub fn to_coord(p: &LatLng) -> Coord<f64> {
    Coord { x: p.lng, y: p.lat }
}

/// Converts a `geo` coordinate back to a map point.
pub fn from_coord(c: &Coord<f64>) -> LatLng {
    LatLng::new(c.y, c.x)
}

/// Great-circle distance in meters.
pub fn distance_m(a: &LatLng, b: &LatLng) -> f64 {
    to_point(a).haversine_distance(&to_point(b))
}

/// Closed ring approximating a circle of `radius_m` meters around `center`.
///
/// Vertices walk clockwise from north; the first vertex is repeated at the
/// end.
pub fn circle_ring(center: &LatLng, radius_m: f64, steps: usize) -> LineString<f64> {
    let origin = to_point(center);
    let mut coords: Vec<Coord<f64>> = (0..steps)
        .map(|i| {
            let bearing = -(i as f64 * 360.0 / steps as f64);
            origin.haversine_destination(bearing, radius_m).0
        })
        .collect();
    if let Some(first) = coords.first().copied() {
        coords.push(first);
    }
    LineString::new(coords)
}

/// Pairwise spatial relation between a candidate and an existing region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    /// Candidate lies entirely within the existing region.
    pub within: bool,
    /// Candidate entirely contains the existing region.
    pub contains: bool,
    /// The regions share at least one point.
    pub intersects: bool,
}

/// Computes the DE-9IM relation of `candidate` against `existing`.
pub fn relate(
    candidate: &MultiPolygon<f64>,
    existing: &MultiPolygon<f64>,
) -> Result<Relation, GeometryError> {
    ensure_finite(candidate, "candidate")?;
    ensure_finite(existing, "existing shape")?;
    guarded("relate", || {
        let matrix = candidate.relate(existing);
        Relation {
            within: matrix.is_within(),
            contains: matrix.is_contains(),
            intersects: matrix.is_intersects(),
        }
    })
}

/// Whether two regions share at least one point.
pub fn intersects(a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> Result<bool, GeometryError> {
    relate(a, b).map(|r| r.intersects)
}

/// Geometric set difference `a - b`.
pub fn difference(
    a: &MultiPolygon<f64>,
    b: &MultiPolygon<f64>,
) -> Result<MultiPolygon<f64>, GeometryError> {
    ensure_finite(a, "candidate")?;
    ensure_finite(b, "existing shape")?;
    guarded("difference", || a.difference(b))
}

/// True if nothing meaningful is left of a region whose original area was
/// `reference_area`.
pub fn is_consumed(region: &MultiPolygon<f64>, reference_area: f64) -> bool {
    region.0.is_empty() || region.unsigned_area() <= reference_area * EMPTY_AREA_RATIO
}

/// Wraps a single polygon as a region.
pub fn region_of(polygon: &Polygon<f64>) -> MultiPolygon<f64> {
    MultiPolygon::new(vec![polygon.clone()])
}

fn ensure_finite(region: &MultiPolygon<f64>, context: &str) -> Result<(), GeometryError> {
    if region
        .coords_iter()
        .all(|c| c.x.is_finite() && c.y.is_finite())
    {
        Ok(())
    } else {
        Err(GeometryError::NonFinite {
            context: context.to_string(),
        })
    }
}

fn guarded<T>(operation: &str, f: impl FnOnce() -> T) -> Result<T, GeometryError> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        GeometryError::OperationFailed {
            operation: operation.to_string(),
            message,
        }
    })
}
