//! Geographic point and shape kind definitions.

use serde::{Deserialize, Serialize};

/// A geographic position in degrees.
///
/// Stored latitude-first like a map pointer event, but GeoJSON output is
/// always `[lng, lat]`; see [`LatLng::to_lng_lat`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new point.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns true when both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Coordinate pair in GeoJSON axis order.
    pub fn to_lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    /// Exact coordinate equality, used for ring closing.
    pub fn same_position(&self, other: &LatLng) -> bool {
        self.lat == other.lat && self.lng == other.lng
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

/// The kinds of shape a user can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Polygon,
    LineString,
}

impl ShapeKind {
    /// All kinds in toolbar order.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::Polygon,
        ShapeKind::LineString,
    ];

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::Rectangle => "Rectangle",
            Self::Polygon => "Polygon",
            Self::LineString => "LineString",
        }
    }

    /// Two-click kinds materialize on the second click.
    pub fn fixed_point_count(&self) -> Option<usize> {
        match self {
            Self::Circle | Self::Rectangle => Some(2),
            Self::Polygon | Self::LineString => None,
        }
    }

    /// Minimum number of captured points before the shape can be finished.
    pub fn min_points(&self) -> usize {
        match self {
            Self::Circle | Self::Rectangle => 2,
            Self::Polygon | Self::LineString => 3,
        }
    }

    /// Whether the kind produces an area geometry that takes part in
    /// conflict resolution.
    pub fn is_areal(&self) -> bool {
        !matches!(self, Self::LineString)
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "circle" => Ok(Self::Circle),
            "rectangle" => Ok(Self::Rectangle),
            "polygon" => Ok(Self::Polygon),
            "linestring" | "line" => Ok(Self::LineString),
            other => Err(format!("unknown shape kind: {}", other)),
        }
    }
}
