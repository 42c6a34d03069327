//! Scripted input replay.
//!
//! A script is a JSON array of input events fed to a [`DrawSession`] in
//! order, e.g.
//!
//! ```json
//! [
//!   { "action": "select", "kind": "Rectangle" },
//!   { "action": "click", "lat": 51.50, "lng": -0.10 },
//!   { "action": "click", "lat": 51.51, "lng": -0.08 }
//! ]
//! ```

use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Duration, Utc};
use mapsketch_core::{LatLng, ShapeKind};
use mapsketch_designer::{DrawOutcome, DrawSession, MapRenderer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ScriptStep {
    /// Pick a kind, or stop drawing when `kind` is absent.
    Select {
        #[serde(default)]
        kind: Option<ShapeKind>,
    },
    /// Toolbar press: selects the kind, or deselects it when already active.
    Toggle { kind: ShapeKind },
    Click { lat: f64, lng: f64 },
    Move { lat: f64, lng: f64 },
    /// Secondary gesture.
    Finish,
    Cancel,
    /// Advance the banner clock.
    Wait { ms: i64 },
    Dismiss,
}

/// Tally of a replay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplaySummary {
    pub accepted: Vec<String>,
    pub rejected: Vec<String>,
    /// Selections refused because of a cap.
    pub refused: Vec<String>,
}

pub fn load_script(path: impl AsRef<Path>) -> Result<Vec<ScriptStep>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let steps: Vec<ScriptStep> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse script {}", path.display()))?;

    for (n, step) in steps.iter().enumerate() {
        if let ScriptStep::Wait { ms } = step {
            if wait_duration(*ms).is_none() {
                bail!("Step {}: wait of {} ms is out of range", n + 1, ms);
            }
        }
    }
    Ok(steps)
}

/// A non-negative wait that fits in a `Duration`.
fn wait_duration(ms: i64) -> Option<Duration> {
    Duration::try_milliseconds(ms).filter(|d| *d >= Duration::zero())
}

/// Feeds `steps` to `session`. Waits advance a virtual clock starting at
/// `start`, and the session is ticked to `start` before the first step.
pub fn replay<R: MapRenderer>(
    session: &mut DrawSession<R>,
    steps: &[ScriptStep],
    start: DateTime<Utc>,
) -> ReplaySummary {
    let mut summary = ReplaySummary::default();
    let mut now = start;
    session.tick(now);

    for step in steps {
        match step {
            ScriptStep::Select { kind } => {
                if let Err(e) = session.select_kind(*kind) {
                    summary.refused.push(e.to_string());
                }
            }
            ScriptStep::Toggle { kind } => {
                if let Err(e) = session.toggle_kind(*kind) {
                    summary.refused.push(e.to_string());
                }
            }
            ScriptStep::Click { lat, lng } => {
                record(&mut summary, session.click(LatLng::new(*lat, *lng)));
            }
            ScriptStep::Move { lat, lng } => session.pointer_move(LatLng::new(*lat, *lng)),
            ScriptStep::Finish => record(&mut summary, session.secondary_gesture()),
            ScriptStep::Cancel => session.cancel(),
            ScriptStep::Wait { ms } => {
                match wait_duration(*ms).and_then(|d| now.checked_add_signed(d)) {
                    Some(later) => {
                        now = later;
                        session.tick(now);
                    }
                    None => tracing::warn!("Skipping wait of {} ms", ms),
                }
            }
            ScriptStep::Dismiss => session.dismiss_error(),
        }
    }

    summary
}

fn record(summary: &mut ReplaySummary, outcome: DrawOutcome) {
    match outcome {
        DrawOutcome::Accepted { id } => summary.accepted.push(id),
        DrawOutcome::Rejected(err) => summary.rejected.push(err.to_string()),
        DrawOutcome::Ignored | DrawOutcome::PointAdded { .. } => {}
    }
}
