//! Provisional shape shown while a shape is being drawn.

use mapsketch_core::{LatLng, ShapeKind};

use crate::geometry;
use crate::renderer::{LayerStyle, MapRenderer};

/// Live preview geometry for a shape in progress.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewShape {
    Circle { center: LatLng, radius_m: f64 },
    Rectangle { corner_a: LatLng, corner_b: LatLng },
    Polygon(Vec<LatLng>),
    Line(Vec<LatLng>),
}

impl PreviewShape {
    /// Preview from the captured points plus the cursor position.
    ///
    /// Returns `None` until at least one point has been captured.
    pub fn build(kind: ShapeKind, points: &[LatLng], cursor: LatLng) -> Option<Self> {
        let first = *points.first()?;
        let shape = match kind {
            ShapeKind::Circle => Self::Circle {
                center: first,
                radius_m: geometry::distance_m(&first, &cursor),
            },
            ShapeKind::Rectangle => Self::Rectangle {
                corner_a: first,
                corner_b: cursor,
            },
            ShapeKind::Polygon => Self::Polygon(with_cursor(points, cursor)),
            ShapeKind::LineString => Self::Line(with_cursor(points, cursor)),
        };
        Some(shape)
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle { .. } => ShapeKind::Circle,
            Self::Rectangle { .. } => ShapeKind::Rectangle,
            Self::Polygon(_) => ShapeKind::Polygon,
            Self::Line(_) => ShapeKind::LineString,
        }
    }
}

fn with_cursor(points: &[LatLng], cursor: LatLng) -> Vec<LatLng> {
    let mut out = Vec::with_capacity(points.len() + 1);
    out.extend_from_slice(points);
    out.push(cursor);
    out
}

/// Holds at most one live preview layer.
#[derive(Debug)]
pub struct PreviewSlot<L> {
    layer: Option<L>,
}

impl<L> Default for PreviewSlot<L> {
    fn default() -> Self {
        Self { layer: None }
    }
}

impl<L> PreviewSlot<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.layer.is_some()
    }

    /// Removes the current preview, if any, then shows `shape`.
    pub fn replace<R>(&mut self, renderer: &mut R, shape: &PreviewShape)
    where
        R: MapRenderer<Layer = L>,
    {
        self.clear(renderer);
        self.layer = Some(renderer.add_preview_layer(shape, &LayerStyle::preview()));
    }

    /// Removes the current preview, if any.
    pub fn clear<R>(&mut self, renderer: &mut R)
    where
        R: MapRenderer<Layer = L>,
    {
        if let Some(layer) = self.layer.take() {
            renderer.remove_layer(layer);
        }
    }
}
