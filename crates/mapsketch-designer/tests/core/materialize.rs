use geo::{Area, HaversineDistance, Point};
use mapsketch_core::{LatLng, ShapeKind};
use mapsketch_designer::{materialize, FeatureGeometry};

fn exterior(geometry: &FeatureGeometry) -> Vec<(f64, f64)> {
    match geometry {
        FeatureGeometry::Polygon(p) => p.exterior().coords().map(|c| (c.x, c.y)).collect(),
        other => panic!("expected polygon, got {}", other.type_name()),
    }
}

#[test]
fn test_rectangle_ring_order() {
    let m = materialize(
        ShapeKind::Rectangle,
        &[LatLng::new(51.51, -0.08), LatLng::new(51.50, -0.10)],
        64,
    )
    .unwrap();
    assert_eq!(
        exterior(&m.geometry),
        vec![
            (-0.10, 51.50),
            (-0.08, 51.50),
            (-0.08, 51.51),
            (-0.10, 51.51),
            (-0.10, 51.50),
        ]
    );
}

#[test]
fn test_circle_vertex_count_and_radius() {
    let center = LatLng::new(48.85, 2.35);
    let edge = LatLng::new(48.86, 2.35);
    let m = materialize(ShapeKind::Circle, &[center, edge], 64).unwrap();

    let ring = exterior(&m.geometry);
    assert_eq!(ring.len(), 65);
    assert_eq!(ring.first(), ring.last());

    let radius = m.radius.unwrap();
    let c = Point::new(center.lng, center.lat);
    for (x, y) in ring {
        let d = c.haversine_distance(&Point::new(x, y));
        assert!((d - radius).abs() < 1e-3 * radius.max(1.0), "{d} vs {radius}");
    }
}

#[test]
fn test_circle_steps_configurable() {
    let m = materialize(
        ShapeKind::Circle,
        &[LatLng::new(0.0, 0.0), LatLng::new(0.0, 0.5)],
        8,
    )
    .unwrap();
    assert_eq!(exterior(&m.geometry).len(), 9);
}

#[test]
fn test_polygon_closed_once() {
    let points = [
        LatLng::new(0.0, 0.0),
        LatLng::new(0.0, 1.0),
        LatLng::new(1.0, 1.0),
        LatLng::new(0.0, 0.0),
    ];
    let m = materialize(ShapeKind::Polygon, &points, 64).unwrap();
    assert_eq!(exterior(&m.geometry).len(), 4);
    assert!(m.geometry.area() > 0.0);
}

#[test]
fn test_line_left_open() {
    let points = [
        LatLng::new(0.0, 0.0),
        LatLng::new(0.0, 1.0),
        LatLng::new(0.0, 0.0),
    ];
    let m = materialize(ShapeKind::LineString, &points, 64).unwrap();
    match m.geometry {
        FeatureGeometry::LineString(ls) => {
            let coords: Vec<_> = ls.coords().map(|c| (c.x, c.y)).collect();
            assert_eq!(coords, vec![(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)]);
            assert_eq!(ls.unsigned_area(), 0.0);
        }
        other => panic!("expected line, got {}", other.type_name()),
    }
    assert_eq!(m.radius, None);
}
