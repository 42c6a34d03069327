use chrono::Utc;
use geo::{Area, LineString, MultiPolygon, Polygon};
use mapsketch_core::{DrawError, LatLng, ShapeKind};
use uuid::Uuid;

use crate::geometry;

mod circle;
mod line;
mod polygon;
mod rectangle;

pub use circle::GeoCircle;
pub use line::GeoLine;
pub use polygon::GeoPolygon;
pub use rectangle::GeoRectangle;

/// Geometry of a drawn feature.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureGeometry {
    Polygon(Polygon<f64>),
    /// Only produced when trimming splits a candidate into disjoint pieces.
    MultiPolygon(MultiPolygon<f64>),
    LineString(LineString<f64>),
}

impl FeatureGeometry {
    /// GeoJSON geometry type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Polygon(_) => "Polygon",
            Self::MultiPolygon(_) => "MultiPolygon",
            Self::LineString(_) => "LineString",
        }
    }

    /// The geometry as an area region, or `None` for lines.
    pub fn as_region(&self) -> Option<MultiPolygon<f64>> {
        match self {
            Self::Polygon(p) => Some(geometry::region_of(p)),
            Self::MultiPolygon(mp) => Some(mp.clone()),
            Self::LineString(_) => None,
        }
    }

    /// Collapses a single-part region back to a plain polygon.
    pub fn from_region(region: MultiPolygon<f64>) -> Self {
        let mut parts = region.0;
        if parts.len() == 1 {
            if let Some(p) = parts.pop() {
                return Self::Polygon(p);
            }
        }
        Self::MultiPolygon(MultiPolygon::new(parts))
    }

    /// Every ring of an area geometry, exterior first.
    pub fn rings(&self) -> Vec<&LineString<f64>> {
        fn polygon_rings(p: &Polygon<f64>) -> impl Iterator<Item = &LineString<f64>> {
            std::iter::once(p.exterior()).chain(p.interiors().iter())
        }
        match self {
            Self::Polygon(p) => polygon_rings(p).collect(),
            Self::MultiPolygon(mp) => mp.0.iter().flat_map(polygon_rings).collect(),
            Self::LineString(_) => Vec::new(),
        }
    }

    /// Unsigned area in square degrees; zero for lines.
    pub fn area(&self) -> f64 {
        match self {
            Self::Polygon(p) => p.unsigned_area(),
            Self::MultiPolygon(mp) => mp.unsigned_area(),
            Self::LineString(_) => 0.0,
        }
    }
}

/// Property block of a drawn feature.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureProperties {
    pub id: String,
    pub shape_type: ShapeKind,
    /// Drawn radius in meters, circles only.
    pub radius: Option<f64>,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

/// A drawn shape with its identity and properties.
///
/// Identity and properties are fixed at construction. The geometry can only
/// be replaced inside this crate, before the feature is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnFeature {
    id: String,
    geometry: FeatureGeometry,
    properties: FeatureProperties,
}

impl DrawnFeature {
    /// Creates a feature with fresh identifiers stamped with the current time.
    pub fn new(kind: ShapeKind, geometry: FeatureGeometry, radius: Option<f64>) -> Self {
        Self::with_timestamp(kind, geometry, radius, Utc::now().timestamp_millis())
    }

    /// Creates a feature with fresh identifiers and an explicit timestamp.
    pub fn with_timestamp(
        kind: ShapeKind,
        geometry: FeatureGeometry,
        radius: Option<f64>,
        created_at: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            geometry,
            properties: FeatureProperties {
                id: Uuid::new_v4().to_string(),
                shape_type: kind,
                radius: if kind == ShapeKind::Circle { radius } else { None },
                created_at,
            },
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.properties.shape_type
    }

    pub fn geometry(&self) -> &FeatureGeometry {
        &self.geometry
    }

    pub fn properties(&self) -> &FeatureProperties {
        &self.properties
    }

    pub(crate) fn replace_geometry(&mut self, geometry: FeatureGeometry) {
        self.geometry = geometry;
    }
}

/// Output of shape materialization.
#[derive(Debug, Clone, PartialEq)]
pub struct Materialized {
    pub kind: ShapeKind,
    pub geometry: FeatureGeometry,
    pub radius: Option<f64>,
}

/// Turns captured points into a geometry for `kind`.
pub fn materialize(
    kind: ShapeKind,
    points: &[LatLng],
    circle_steps: usize,
) -> Result<Materialized, DrawError> {
    let required = kind.min_points();
    if points.len() < required {
        return Err(DrawError::NotEnoughPoints {
            kind,
            required,
            actual: points.len(),
        });
    }

    let (geometry, radius) = match kind {
        ShapeKind::Circle => {
            let circle = GeoCircle::from_points(points[0], points[1]);
            (
                FeatureGeometry::Polygon(circle.to_polygon(circle_steps)),
                Some(circle.radius_m),
            )
        }
        ShapeKind::Rectangle => {
            let rect = GeoRectangle::from_corners(points[0], points[1]);
            (FeatureGeometry::Polygon(rect.to_polygon()), None)
        }
        ShapeKind::Polygon => (
            FeatureGeometry::Polygon(GeoPolygon::from_points(points).to_polygon()),
            None,
        ),
        ShapeKind::LineString => (
            FeatureGeometry::LineString(GeoLine::from_points(points).to_line_string()),
            None,
        ),
    };

    if kind.is_areal() && geometry.area() <= 0.0 {
        return Err(DrawError::DegenerateShape { kind });
    }

    Ok(Materialized {
        kind,
        geometry,
        radius,
    })
}
