use geo::{HaversineDistance, Point};
use mapsketch_core::{LatLng, ShapeKind};
use mapsketch_designer::{materialize, FeatureGeometry};
use proptest::prelude::*;

fn exterior(geometry: &FeatureGeometry) -> Vec<(f64, f64)> {
    match geometry {
        FeatureGeometry::Polygon(p) => p.exterior().coords().map(|c| (c.x, c.y)).collect(),
        _ => Vec::new(),
    }
}

proptest! {
    #[test]
    fn circle_vertices_lie_on_radius(
        lat in -60.0f64..60.0,
        lng in -170.0f64..170.0,
        dlat in 0.001f64..0.5,
        dlng in -0.5f64..0.5,
    ) {
        let center = LatLng::new(lat, lng);
        let edge = LatLng::new(lat + dlat, lng + dlng);
        let m = materialize(ShapeKind::Circle, &[center, edge], 64).unwrap();
        let radius = m.radius.unwrap();
        let ring = exterior(&m.geometry);

        prop_assert_eq!(ring.first(), ring.last());
        let c = Point::new(lng, lat);
        for (x, y) in ring {
            let d = c.haversine_distance(&Point::new(x, y));
            prop_assert!((d - radius).abs() <= radius * 1e-4);
        }
    }

    #[test]
    fn rectangle_has_four_corners_of_the_box(
        lat_a in -80.0f64..80.0,
        lng_a in -170.0f64..170.0,
        dlat in 0.001f64..5.0,
        dlng in 0.001f64..5.0,
        swap in any::<bool>(),
    ) {
        let a = LatLng::new(lat_a, lng_a);
        let b = LatLng::new(lat_a + dlat, lng_a + dlng);
        let points = if swap { [b, a] } else { [a, b] };
        let m = materialize(ShapeKind::Rectangle, &points, 64).unwrap();
        let ring = exterior(&m.geometry);

        prop_assert_eq!(ring.len(), 5);
        prop_assert_eq!(ring[0], ring[4]);
        let (west, east) = (lng_a, lng_a + dlng);
        let (south, north) = (lat_a, lat_a + dlat);
        prop_assert_eq!(
            &ring[..4],
            &[(west, south), (east, south), (east, north), (west, north)][..]
        );
    }
}
