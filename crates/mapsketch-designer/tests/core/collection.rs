use mapsketch_core::{DrawError, LatLng, ShapeKind};
use mapsketch_designer::{materialize, DrawnFeature, FeatureStore};
use mapsketch_settings::ShapeLimits;

fn feature(kind: ShapeKind, points: &[LatLng]) -> DrawnFeature {
    let m = materialize(kind, points, 32).unwrap();
    DrawnFeature::new(m.kind, m.geometry, m.radius)
}

#[test]
fn test_counts_per_kind() {
    let mut store = FeatureStore::new();
    store.append(feature(
        ShapeKind::Circle,
        &[LatLng::new(0.0, 0.0), LatLng::new(0.0, 0.01)],
    ));
    store.append(feature(
        ShapeKind::LineString,
        &[
            LatLng::new(1.0, 0.0),
            LatLng::new(1.0, 1.0),
            LatLng::new(2.0, 1.0),
        ],
    ));
    assert_eq!(store.count_of(ShapeKind::Circle), 1);
    assert_eq!(store.count_of(ShapeKind::LineString), 1);
    assert_eq!(store.count_of(ShapeKind::Polygon), 0);
}

#[test]
fn test_default_caps() {
    let limits = ShapeLimits::default();
    let mut store = FeatureStore::new();
    for i in 0..5 {
        let lat = i as f64 * 2.0;
        store.append(feature(
            ShapeKind::Rectangle,
            &[LatLng::new(lat, 0.0), LatLng::new(lat + 1.0, 1.0)],
        ));
    }
    assert_eq!(
        store.check_cap(ShapeKind::Rectangle, &limits, None),
        Err(DrawError::LimitReached {
            kind: ShapeKind::Rectangle,
            max: 5
        })
    );
    assert!(store.check_cap(ShapeKind::Polygon, &limits, None).is_ok());
}
