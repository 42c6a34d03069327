//! Map rendering interface.
//!
//! The engine never draws anything itself. It hands accepted features and
//! the live preview to a [`MapRenderer`], which owns the actual map layers.
//! [`RecordingRenderer`] is a headless implementation that keeps a log of
//! layer operations, used by the command line front end and by tests.

use std::collections::BTreeMap;

use mapsketch_core::ShapeKind;

use crate::model::DrawnFeature;
use crate::preview::PreviewShape;

const LINE_COLOR: &str = "#f59e0b";
const AREA_COLOR: &str = "#3b82f6";
const PREVIEW_COLOR: &str = "#3388ff";

/// Stroke and fill style for a map layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyle {
    pub color: &'static str,
    pub weight: f64,
    pub fill_opacity: f64,
}

impl LayerStyle {
    /// Style of an accepted feature of `kind`.
    pub fn for_kind(kind: ShapeKind) -> Self {
        let color = match kind {
            ShapeKind::LineString => LINE_COLOR,
            _ => AREA_COLOR,
        };
        Self {
            color,
            weight: 3.0,
            fill_opacity: 0.2,
        }
    }

    /// Style of the in-progress preview.
    pub fn preview() -> Self {
        Self {
            color: PREVIEW_COLOR,
            weight: 3.0,
            fill_opacity: 0.2,
        }
    }
}

/// Rendering backend driven by a draw session.
pub trait MapRenderer {
    /// Handle to a layer on the map.
    type Layer;

    /// Adds a persistent layer for an accepted feature.
    fn add_feature_layer(&mut self, feature: &DrawnFeature, style: &LayerStyle) -> Self::Layer;

    /// Adds a provisional layer for the shape in progress.
    fn add_preview_layer(&mut self, preview: &PreviewShape, style: &LayerStyle) -> Self::Layer;

    /// Removes a layer previously returned by this renderer.
    fn remove_layer(&mut self, layer: Self::Layer);

    /// Shows the error banner.
    fn show_error(&mut self, message: &str);

    /// Hides the error banner.
    fn clear_error(&mut self);
}

/// What a recorded layer shows.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerContent {
    Feature { id: String, kind: ShapeKind },
    Preview(PreviewShape),
}

/// A layer operation performed on a [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOp {
    Added(u64),
    Removed(u64),
    ErrorShown(String),
    ErrorCleared,
}

/// Headless renderer that records every operation.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    next_layer: u64,
    layers: BTreeMap<u64, LayerContent>,
    ops: Vec<RenderOp>,
    banner: Option<String>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layers currently on the map.
    pub fn layers(&self) -> impl Iterator<Item = (&u64, &LayerContent)> {
        self.layers.iter()
    }

    pub fn feature_layer_count(&self) -> usize {
        self.layers
            .values()
            .filter(|l| matches!(l, LayerContent::Feature { .. }))
            .count()
    }

    pub fn preview_layer_count(&self) -> usize {
        self.layers
            .values()
            .filter(|l| matches!(l, LayerContent::Preview(_)))
            .count()
    }

    /// The current preview shape, if one is shown.
    pub fn preview(&self) -> Option<&PreviewShape> {
        self.layers.values().find_map(|l| match l {
            LayerContent::Preview(shape) => Some(shape),
            LayerContent::Feature { .. } => None,
        })
    }

    /// Message currently in the error banner.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn ops(&self) -> &[RenderOp] {
        &self.ops
    }

    fn add(&mut self, content: LayerContent) -> u64 {
        self.next_layer += 1;
        let id = self.next_layer;
        self.layers.insert(id, content);
        self.ops.push(RenderOp::Added(id));
        id
    }
}

impl MapRenderer for RecordingRenderer {
    type Layer = u64;

    fn add_feature_layer(&mut self, feature: &DrawnFeature, style: &LayerStyle) -> u64 {
        tracing::trace!("Feature layer {} in {}", feature.id(), style.color);
        self.add(LayerContent::Feature {
            id: feature.id().to_string(),
            kind: feature.kind(),
        })
    }

    fn add_preview_layer(&mut self, preview: &PreviewShape, _style: &LayerStyle) -> u64 {
        self.add(LayerContent::Preview(preview.clone()))
    }

    fn remove_layer(&mut self, layer: u64) {
        if self.layers.remove(&layer).is_some() {
            self.ops.push(RenderOp::Removed(layer));
        } else {
            tracing::warn!("Attempted to remove unknown layer {}", layer);
        }
    }

    fn show_error(&mut self, message: &str) {
        self.banner = Some(message.to_string());
        self.ops.push(RenderOp::ErrorShown(message.to_string()));
    }

    fn clear_error(&mut self) {
        if self.banner.take().is_some() {
            self.ops.push(RenderOp::ErrorCleared);
        }
    }
}
