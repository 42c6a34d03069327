//! Append-only store of accepted features.

use geo::MultiPolygon;
use mapsketch_core::{DrawError, ShapeKind};
use mapsketch_settings::ShapeLimits;

use crate::model::DrawnFeature;

/// Ordered collection of accepted features.
///
/// Features are only ever appended; nothing hands out mutable access to a
/// stored feature.
#[derive(Debug, Clone, Default)]
pub struct FeatureStore {
    features: Vec<DrawnFeature>,
}

impl FeatureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an accepted feature and returns a reference to it.
    pub fn append(&mut self, feature: DrawnFeature) -> &DrawnFeature {
        self.features.push(feature);
        &self.features[self.features.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Features in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DrawnFeature> {
        self.features.iter()
    }

    pub fn as_slice(&self) -> &[DrawnFeature] {
        &self.features
    }

    pub fn get(&self, id: &str) -> Option<&DrawnFeature> {
        self.features.iter().find(|f| f.id() == id)
    }

    /// Number of accepted features created as `kind`.
    pub fn count_of(&self, kind: ShapeKind) -> usize {
        self.features.iter().filter(|f| f.kind() == kind).count()
    }

    /// Area regions of every polygon-like feature, in insertion order,
    /// paired with the feature id.
    pub fn polygon_regions(&self) -> Vec<(&str, MultiPolygon<f64>)> {
        self.features
            .iter()
            .filter_map(|f| f.geometry().as_region().map(|r| (f.id(), r)))
            .collect()
    }

    /// Checks whether a new shape of `kind` may be started.
    ///
    /// The currently active kind stays selectable so a draw in progress can
    /// finish even if the cap was reached meanwhile.
    pub fn check_cap(
        &self,
        kind: ShapeKind,
        limits: &ShapeLimits,
        active: Option<ShapeKind>,
    ) -> Result<(), DrawError> {
        let max = limits.max_for(kind);
        if self.count_of(kind) >= max && active != Some(kind) {
            return Err(DrawError::LimitReached { kind, max });
        }
        Ok(())
    }
}
