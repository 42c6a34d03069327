//! Input handling for the draw session.

use chrono::{DateTime, Utc};
use mapsketch_core::{DrawError, LatLng, ShapeKind};
use tracing::{info, warn};

use super::DrawSession;
use crate::capture::CaptureStep;
use crate::model::{self, DrawnFeature, FeatureGeometry};
use crate::preview::PreviewShape;
use crate::renderer::{LayerStyle, MapRenderer};

/// What an input event did to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOutcome {
    /// Nothing happened.
    Ignored,
    /// A point was captured for the shape in progress.
    PointAdded { count: usize },
    /// A shape was accepted into the collection.
    Accepted { id: String },
    /// A shape was finished but rejected.
    Rejected(DrawError),
}

impl<R: MapRenderer> DrawSession<R> {
    /// Primary click on the map.
    pub fn click(&mut self, point: LatLng) -> DrawOutcome {
        match self.capture.click(point) {
            CaptureStep::Ignored => DrawOutcome::Ignored,
            CaptureStep::Collected { count } => DrawOutcome::PointAdded { count },
            CaptureStep::Ready { kind, points } => self.finish(kind, &points),
        }
    }

    /// Secondary gesture (right click). Finishes polygons and lines.
    pub fn secondary_gesture(&mut self) -> DrawOutcome {
        match self.capture.secondary() {
            CaptureStep::Ready { kind, points } => self.finish(kind, &points),
            CaptureStep::Ignored | CaptureStep::Collected { .. } => DrawOutcome::Ignored,
        }
    }

    /// Pointer moved to `cursor`. Rebuilds the preview.
    pub fn pointer_move(&mut self, cursor: LatLng) {
        let Some(kind) = self.capture.active_kind() else {
            return;
        };
        if !cursor.is_finite() {
            return;
        }
        if let Some(shape) = PreviewShape::build(kind, self.capture.points(), cursor) {
            self.preview.replace(&mut self.renderer, &shape);
        }
    }

    /// Drops the shape in progress and returns to idle.
    pub fn cancel(&mut self) {
        self.preview.clear(&mut self.renderer);
        self.capture.reset();
    }

    /// Sets the session clock to `now` and expires the banner if its delay
    /// has elapsed. Returns true if the banner was hidden.
    ///
    /// Banners raised later are stamped with this time, so a host driving
    /// its own clock should tick before feeding input.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        self.clock = now;
        let expired = self.banner.expire(now);
        if expired {
            self.renderer.clear_error();
        }
        expired
    }

    pub fn dismiss_error(&mut self) {
        if self.banner.dismiss() {
            self.renderer.clear_error();
        }
    }

    fn finish(&mut self, kind: ShapeKind, points: &[LatLng]) -> DrawOutcome {
        self.preview.clear(&mut self.renderer);
        self.capture.reset();

        match self.accept(kind, points) {
            Ok(id) => {
                info!("Accepted {} {}", kind, id);
                DrawOutcome::Accepted { id }
            }
            Err(err) => {
                warn!("Rejected {}: {}", kind, err);
                self.raise_error(&err);
                DrawOutcome::Rejected(err)
            }
        }
    }

    fn accept(&mut self, kind: ShapeKind, points: &[LatLng]) -> Result<String, DrawError> {
        let shape = model::materialize(kind, points, self.config.drawing.circle_steps)?;
        let mut feature = DrawnFeature::new(shape.kind, shape.geometry, shape.radius);

        if let Some(candidate) = feature.geometry().as_region() {
            let existing = self.collection.polygon_regions();
            let trimmed = self.resolver.resolve(candidate, &existing)?;
            feature.replace_geometry(FeatureGeometry::from_region(trimmed));
        }

        let layer = self
            .renderer
            .add_feature_layer(&feature, &LayerStyle::for_kind(kind));
        self.feature_layers.push(layer);
        Ok(self.collection.append(feature).id().to_string())
    }

    fn raise_error(&mut self, err: &DrawError) {
        let message = err.to_string();
        self.banner.raise(message.as_str(), self.clock);
        self.renderer.show_error(&message);
    }
}
