//! Interaction capture state machine.
//!
//! Collects clicked points for the shape in progress and decides when the
//! shape is complete. Two-click kinds complete on their second click;
//! multi-click kinds complete on a secondary gesture once enough points
//! exist.

use mapsketch_core::{LatLng, ShapeKind};

/// Capture state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CaptureState {
    /// No shape kind selected.
    #[default]
    Idle,
    /// Collecting points for a shape of `kind`.
    Collecting { kind: ShapeKind, points: Vec<LatLng> },
}

/// Result of feeding an input to the capture machine.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureStep {
    /// Input had no effect.
    Ignored,
    /// A point was recorded; the shape is not complete yet.
    Collected { count: usize },
    /// The shape is complete. The machine has already returned to idle.
    Ready { kind: ShapeKind, points: Vec<LatLng> },
}

#[derive(Debug, Clone, Default)]
pub struct CaptureMachine {
    state: CaptureState,
}

impl CaptureMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CaptureState {
        &self.state
    }

    pub fn active_kind(&self) -> Option<ShapeKind> {
        match &self.state {
            CaptureState::Idle => None,
            CaptureState::Collecting { kind, .. } => Some(*kind),
        }
    }

    pub fn points(&self) -> &[LatLng] {
        match &self.state {
            CaptureState::Idle => &[],
            CaptureState::Collecting { points, .. } => points,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, CaptureState::Idle)
    }

    /// Starts collecting for `kind`, dropping any points captured so far.
    pub fn begin(&mut self, kind: ShapeKind) {
        self.state = CaptureState::Collecting {
            kind,
            points: Vec::new(),
        };
    }

    /// Returns to idle, dropping any captured points.
    pub fn reset(&mut self) {
        self.state = CaptureState::Idle;
    }

    /// Primary click at `point`.
    pub fn click(&mut self, point: LatLng) -> CaptureStep {
        let CaptureState::Collecting { kind, points } = &mut self.state else {
            return CaptureStep::Ignored;
        };
        if !point.is_finite() {
            tracing::warn!("Ignoring click at non-finite position {}", point);
            return CaptureStep::Ignored;
        }

        points.push(point);
        let count = points.len();
        let kind = *kind;

        match kind.fixed_point_count() {
            Some(n) if count >= n => self.take_ready(),
            _ => {
                tracing::debug!("Captured point {} for {}", count, kind);
                CaptureStep::Collected { count }
            }
        }
    }

    /// Secondary gesture (right click). Finishes multi-click shapes.
    pub fn secondary(&mut self) -> CaptureStep {
        let CaptureState::Collecting { kind, points } = &self.state else {
            return CaptureStep::Ignored;
        };
        if kind.fixed_point_count().is_some() || points.len() < kind.min_points() {
            return CaptureStep::Ignored;
        }
        self.take_ready()
    }

    fn take_ready(&mut self) -> CaptureStep {
        match std::mem::take(&mut self.state) {
            CaptureState::Collecting { kind, points } => CaptureStep::Ready { kind, points },
            CaptureState::Idle => CaptureStep::Ignored,
        }
    }
}
