use geo::{polygon, Area, MultiPolygon};
use mapsketch_core::DrawError;
use mapsketch_designer::conflict::ConflictResolver;
use mapsketch_designer::geometry::region_of;
use mapsketch_settings::PrimitiveFailurePolicy;

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> MultiPolygon<f64> {
    region_of(&polygon![
        (x: x0, y: y0),
        (x: x1, y: y0),
        (x: x1, y: y1),
        (x: x0, y: y1),
        (x: x0, y: y0),
    ])
}

#[test]
fn test_nested_candidate_rejected() {
    let resolver = ConflictResolver::default();
    let existing = vec![("outer", rect(0.0, 0.0, 10.0, 10.0))];
    assert_eq!(
        resolver.resolve(rect(2.0, 2.0, 4.0, 4.0), &existing),
        Err(DrawError::NestedInside {
            existing_id: "outer".to_string()
        })
    );
}

#[test]
fn test_enclosing_candidate_rejected() {
    let resolver = ConflictResolver::default();
    let existing = vec![("inner", rect(2.0, 2.0, 4.0, 4.0))];
    let err = resolver
        .resolve(rect(0.0, 0.0, 10.0, 10.0), &existing)
        .unwrap_err();
    assert_eq!(err.to_string(), "Cannot enclose an existing shape.");
    assert!(err.is_enclosure());
}

#[test]
fn test_enclosure_checked_before_trimming() {
    // The overlapping shape comes first but the enclosed one must still win.
    let resolver = ConflictResolver::default();
    let existing = vec![
        ("overlap", rect(8.0, 0.0, 12.0, 2.0)),
        ("inner", rect(2.0, 2.0, 4.0, 4.0)),
    ];
    assert!(matches!(
        resolver.resolve(rect(0.0, 0.0, 10.0, 10.0), &existing),
        Err(DrawError::EnclosesExisting { ref existing_id }) if existing_id == "inner"
    ));
}

#[test]
fn test_partial_overlap_trimmed() {
    let resolver = ConflictResolver::default();
    let existing = vec![("a", rect(0.0, 0.0, 2.0, 2.0))];
    let out = resolver
        .resolve(rect(1.0, 0.0, 3.0, 2.0), &existing)
        .unwrap();
    assert_eq!(out.0.len(), 1);
    assert!((out.unsigned_area() - 2.0).abs() < 1e-9);
}

#[test]
fn test_touching_edge_leaves_candidate_whole() {
    let resolver = ConflictResolver::default();
    let existing = vec![("a", rect(0.0, 0.0, 1.0, 1.0))];
    let out = resolver
        .resolve(rect(1.0, 0.0, 2.0, 1.0), &existing)
        .unwrap();
    assert!((out.unsigned_area() - 1.0).abs() < 1e-9);
}

#[test]
fn test_identical_shape_is_nested() {
    let resolver = ConflictResolver::default();
    let existing = vec![("same", rect(0.0, 0.0, 1.0, 1.0))];
    assert!(matches!(
        resolver.resolve(rect(0.0, 0.0, 1.0, 1.0), &existing),
        Err(DrawError::NestedInside { .. })
    ));
}

#[test]
fn test_default_policy_is_reject() {
    assert_eq!(
        ConflictResolver::default().policy(),
        PrimitiveFailurePolicy::Reject
    );
}
