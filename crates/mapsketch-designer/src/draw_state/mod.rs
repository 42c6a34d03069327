//! Draw session manager.
//!
//! Ties capture, preview, conflict resolution, the collection and the
//! renderer together. All transitions run synchronously on input events.
//!
//! This module is split into submodules:
//! - `input`: clicks, pointer moves, finishing and cancelling shapes
//! - `file_io`: GeoJSON export

mod file_io;
mod input;

use chrono::{DateTime, Utc};
use mapsketch_core::{DrawError, LatLng, ShapeKind};
use mapsketch_settings::Config;
use tracing::{debug, warn};

use crate::capture::{CaptureMachine, CaptureState};
use crate::collection::FeatureStore;
use crate::conflict::ConflictResolver;
use crate::notification::ErrorBanner;
use crate::preview::PreviewSlot;
use crate::renderer::MapRenderer;
use crate::toolbar::{self, ToolbarEntry};

pub use input::DrawOutcome;

/// One drawing session over a map.
pub struct DrawSession<R: MapRenderer> {
    config: Config,
    capture: CaptureMachine,
    preview: PreviewSlot<R::Layer>,
    collection: FeatureStore,
    feature_layers: Vec<R::Layer>,
    banner: ErrorBanner,
    resolver: ConflictResolver,
    renderer: R,
    /// Session time, advanced by `tick`. Banner deadlines are measured on it.
    clock: DateTime<Utc>,
}

impl<R: MapRenderer> DrawSession<R> {
    /// Session with default settings.
    pub fn new(renderer: R) -> Self {
        Self::with_config(Config::default(), renderer)
    }

    pub fn with_config(config: Config, renderer: R) -> Self {
        Self {
            banner: ErrorBanner::new(config.notifications.error_dismiss_ms),
            resolver: ConflictResolver::new(config.conflict.on_primitive_failure),
            config,
            capture: CaptureMachine::new(),
            preview: PreviewSlot::new(),
            collection: FeatureStore::new(),
            feature_layers: Vec::new(),
            renderer,
            clock: Utc::now(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn collection(&self) -> &FeatureStore {
        &self.collection
    }

    pub fn capture_state(&self) -> &CaptureState {
        self.capture.state()
    }

    pub fn active_kind(&self) -> Option<ShapeKind> {
        self.capture.active_kind()
    }

    /// Points captured for the shape in progress.
    pub fn points(&self) -> &[LatLng] {
        self.capture.points()
    }

    pub fn has_preview(&self) -> bool {
        self.preview.is_active()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Layers of accepted features, in collection order.
    pub fn feature_layers(&self) -> &[R::Layer] {
        &self.feature_layers
    }

    /// Current session time.
    pub fn clock(&self) -> DateTime<Utc> {
        self.clock
    }

    pub fn error_message(&self) -> Option<&str> {
        self.banner.message()
    }

    pub fn toolbar(&self) -> Vec<ToolbarEntry> {
        toolbar::toolbar_entries(&self.collection, &self.config.limits, self.active_kind())
    }

    pub fn status_hint(&self) -> String {
        toolbar::status_hint(self.active_kind())
    }

    /// Selects the kind to draw, or `None` to stop drawing.
    ///
    /// Any shape in progress is discarded. A kind whose cap is reached
    /// cannot be selected unless it is already the active kind.
    pub fn select_kind(&mut self, kind: Option<ShapeKind>) -> Result<(), DrawError> {
        let Some(kind) = kind else {
            self.cancel();
            return Ok(());
        };

        if let Err(err) = self
            .collection
            .check_cap(kind, &self.config.limits, self.active_kind())
        {
            warn!("Cannot select {}: {}", kind, err);
            return Err(err);
        }

        self.preview.clear(&mut self.renderer);
        self.capture.begin(kind);
        debug!("Selected {}", kind);
        Ok(())
    }

    /// Toolbar button behavior: pressing the active kind deselects it.
    ///
    /// Returns the kind that is active afterwards.
    pub fn toggle_kind(&mut self, kind: ShapeKind) -> Result<Option<ShapeKind>, DrawError> {
        if self.active_kind() == Some(kind) {
            self.select_kind(None)?;
        } else {
            self.select_kind(Some(kind))?;
        }
        Ok(self.active_kind())
    }
}
