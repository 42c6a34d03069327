//! Conflict resolution between a drawn polygon and accepted polygons.
//!
//! Resolution runs in two passes over the accepted polygons, both in
//! collection order:
//!
//! 1. **Enclosure**: the candidate may neither lie within an accepted shape
//!    nor contain one. The first violation wins.
//! 2. **Trimming**: every accepted shape that intersects the running
//!    candidate is subtracted from it. If a subtraction leaves nothing the
//!    candidate is rejected as a total overlap.
//!
//! Failures of the geometric primitives themselves are handled according to
//! [`PrimitiveFailurePolicy`].

use geo::{Area, MultiPolygon};
use mapsketch_core::{DrawError, GeometryError};
use mapsketch_settings::PrimitiveFailurePolicy;
use tracing::{debug, warn};

use crate::geometry;

/// Applies enclosure and overlap rules to candidate polygons.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictResolver {
    policy: PrimitiveFailurePolicy,
}

impl ConflictResolver {
    pub fn new(policy: PrimitiveFailurePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> PrimitiveFailurePolicy {
        self.policy
    }

    /// Runs the enclosure check followed by trimming.
    pub fn resolve(
        &self,
        candidate: MultiPolygon<f64>,
        existing: &[(&str, MultiPolygon<f64>)],
    ) -> Result<MultiPolygon<f64>, DrawError> {
        self.check_enclosure(&candidate, existing)?;
        self.trim_overlaps(candidate, existing)
    }

    /// Fails if the candidate nests inside, or encloses, any existing region.
    pub fn check_enclosure(
        &self,
        candidate: &MultiPolygon<f64>,
        existing: &[(&str, MultiPolygon<f64>)],
    ) -> Result<(), DrawError> {
        for (id, region) in existing {
            let relation = match geometry::relate(candidate, region) {
                Ok(r) => r,
                Err(e) => {
                    self.handle_failure(e, id)?;
                    continue;
                }
            };

            if relation.within {
                return Err(DrawError::NestedInside {
                    existing_id: id.to_string(),
                });
            }
            if relation.contains {
                return Err(DrawError::EnclosesExisting {
                    existing_id: id.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Subtracts every intersecting existing region from the candidate.
    pub fn trim_overlaps(
        &self,
        candidate: MultiPolygon<f64>,
        existing: &[(&str, MultiPolygon<f64>)],
    ) -> Result<MultiPolygon<f64>, DrawError> {
        let reference_area = candidate.unsigned_area();
        let mut current = candidate;

        for (id, region) in existing {
            let overlaps = match geometry::intersects(&current, region) {
                Ok(v) => v,
                Err(e) => {
                    self.handle_failure(e, id)?;
                    continue;
                }
            };
            if !overlaps {
                continue;
            }

            let remainder = match geometry::difference(&current, region) {
                Ok(d) => d,
                Err(e) => {
                    self.handle_failure(e, id)?;
                    continue;
                }
            };

            if geometry::is_consumed(&remainder, reference_area) {
                debug!("Candidate fully consumed by {}", id);
                return Err(DrawError::TotalOverlap);
            }
            debug!(
                "Trimmed candidate against {} ({} part(s) left)",
                id,
                remainder.0.len()
            );
            current = remainder;
        }

        Ok(current)
    }

    fn handle_failure(&self, err: GeometryError, existing_id: &str) -> Result<(), DrawError> {
        match self.policy {
            PrimitiveFailurePolicy::Reject => {
                warn!("Geometry failure against {}: {}", existing_id, err);
                Err(DrawError::GeometryFailure {
                    reason: err.to_string(),
                })
            }
            PrimitiveFailurePolicy::Skip => {
                warn!(
                    "Geometry failure against {}, skipping it: {}",
                    existing_id, err
                );
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    fn square(x0: f64, y0: f64, size: f64) -> MultiPolygon<f64> {
        geometry::region_of(&polygon![
            (x: x0, y: y0),
            (x: x0 + size, y: y0),
            (x: x0 + size, y: y0 + size),
            (x: x0, y: y0 + size),
            (x: x0, y: y0),
        ])
    }

    fn nan_square() -> MultiPolygon<f64> {
        square(f64::NAN, 0.0, 1.0)
    }

    #[test]
    fn test_first_enclosure_violation_wins() {
        let resolver = ConflictResolver::default();
        let existing = vec![
            ("small", square(1.0, 1.0, 1.0)),
            ("big", square(-10.0, -10.0, 30.0)),
        ];
        let err = resolver
            .check_enclosure(&square(0.0, 0.0, 5.0), &existing)
            .unwrap_err();
        assert_eq!(
            err,
            DrawError::EnclosesExisting {
                existing_id: "small".to_string()
            }
        );
    }

    #[test]
    fn test_trim_skips_disjoint() {
        let resolver = ConflictResolver::default();
        let candidate = square(0.0, 0.0, 2.0);
        let existing = vec![("far", square(10.0, 10.0, 1.0))];
        let out = resolver.trim_overlaps(candidate.clone(), &existing).unwrap();
        assert!((out.unsigned_area() - candidate.unsigned_area()).abs() < 1e-12);
    }

    #[test]
    fn test_trim_splits_into_parts() {
        let resolver = ConflictResolver::default();
        // A vertical bar through the middle of a wide candidate.
        let candidate = geometry::region_of(&polygon![
            (x: 0.0, y: 0.0),
            (x: 6.0, y: 0.0),
            (x: 6.0, y: 2.0),
            (x: 0.0, y: 2.0),
            (x: 0.0, y: 0.0),
        ]);
        let bar = geometry::region_of(&polygon![
            (x: 2.0, y: -1.0),
            (x: 4.0, y: -1.0),
            (x: 4.0, y: 3.0),
            (x: 2.0, y: 3.0),
            (x: 2.0, y: -1.0),
        ]);
        let out = resolver.resolve(candidate, &[("bar", bar)]).unwrap();
        assert_eq!(out.0.len(), 2);
        assert!((out.unsigned_area() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_overlap_across_several_shapes() {
        let resolver = ConflictResolver::default();
        let candidate = square(0.0, 0.0, 2.0);
        let existing = vec![
            ("left", square(-1.0, -1.0, 2.0)),
            (
                "right",
                geometry::region_of(&polygon![
                    (x: 0.5, y: -1.0),
                    (x: 3.0, y: -1.0),
                    (x: 3.0, y: 3.0),
                    (x: 0.5, y: 3.0),
                    (x: 0.5, y: -1.0),
                ]),
            ),
            (
                "top-left",
                geometry::region_of(&polygon![
                    (x: -1.0, y: 0.5),
                    (x: 1.0, y: 0.5),
                    (x: 1.0, y: 3.0),
                    (x: -1.0, y: 3.0),
                    (x: -1.0, y: 0.5),
                ]),
            ),
        ];
        assert_eq!(
            resolver.resolve(candidate, &existing),
            Err(DrawError::TotalOverlap)
        );
    }

    #[test]
    fn test_reject_policy_surfaces_failure() {
        let resolver = ConflictResolver::new(PrimitiveFailurePolicy::Reject);
        let err = resolver
            .resolve(square(0.0, 0.0, 1.0), &[("bad", nan_square())])
            .unwrap_err();
        assert!(matches!(err, DrawError::GeometryFailure { .. }));
    }

    #[test]
    fn test_skip_policy_ignores_failing_shape() {
        let resolver = ConflictResolver::new(PrimitiveFailurePolicy::Skip);
        let existing = vec![
            ("bad", nan_square()),
            ("overlap", square(1.0, 0.0, 2.0)),
        ];
        let out = resolver.resolve(square(0.0, 0.0, 2.0), &existing).unwrap();
        assert!((out.unsigned_area() - 2.0).abs() < 1e-9);
    }
}
