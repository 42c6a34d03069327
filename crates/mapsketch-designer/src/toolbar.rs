//! Toolbar view model.
//!
//! One entry per shape kind, carrying the button label, usage counter and
//! whether the kind can currently be picked.

use mapsketch_core::ShapeKind;
use mapsketch_settings::ShapeLimits;

use crate::collection::FeatureStore;

#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarEntry {
    pub kind: ShapeKind,
    pub label: &'static str,
    pub count: usize,
    pub max: usize,
    pub active: bool,
    /// Cap reached and the kind is not the one being drawn.
    pub disabled: bool,
    pub tooltip: String,
}

impl ToolbarEntry {
    /// Button text, e.g. `Circle (2/5)`.
    pub fn display(&self) -> String {
        format!("{} ({}/{})", self.label, self.count, self.max)
    }
}

/// Builds the toolbar entries in display order.
pub fn toolbar_entries(
    store: &FeatureStore,
    limits: &ShapeLimits,
    active: Option<ShapeKind>,
) -> Vec<ToolbarEntry> {
    ShapeKind::ALL
        .iter()
        .map(|&kind| {
            let count = store.count_of(kind);
            let max = limits.max_for(kind);
            let is_active = active == Some(kind);
            let disabled = count >= max && !is_active;
            let tooltip = if disabled {
                format!("Limit reached ({max})")
            } else {
                kind.label().to_string()
            };
            ToolbarEntry {
                kind,
                label: kind.label(),
                count,
                max,
                active: is_active,
                disabled,
                tooltip,
            }
        })
        .collect()
}

/// Status line under the toolbar.
pub fn status_hint(active: Option<ShapeKind>) -> String {
    match active {
        Some(kind) => format!("Drawing: {kind} (Right click to finish Polygon/Line)"),
        None => "Select a tool to start drawing".to_string(),
    }
}
