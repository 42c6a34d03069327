use mapsketch_core::{LatLng, ShapeKind};
use mapsketch_designer::{DrawSession, FeatureCollection, Geometry, RecordingRenderer};
use mapsketch_settings::Config;
use serde_json::Value;
use tempfile::tempdir;

fn assert_close(a: &[[f64; 2]], b: &[[f64; 2]]) {
    assert_eq!(a.len(), b.len());
    for (p, q) in a.iter().zip(b) {
        assert!((p[0] - q[0]).abs() < 1e-12 && (p[1] - q[1]).abs() < 1e-12);
    }
}

fn populated_session(config: Config) -> DrawSession<RecordingRenderer> {
    let mut s = DrawSession::with_config(config, RecordingRenderer::new());

    s.select_kind(Some(ShapeKind::Rectangle)).unwrap();
    s.click(LatLng::new(51.50, -0.10));
    s.click(LatLng::new(51.51, -0.08));

    s.select_kind(Some(ShapeKind::Circle)).unwrap();
    s.click(LatLng::new(51.60, -0.10));
    s.click(LatLng::new(51.605, -0.10));

    s.select_kind(Some(ShapeKind::LineString)).unwrap();
    s.click(LatLng::new(51.40, -0.20));
    s.click(LatLng::new(51.41, -0.19));
    s.click(LatLng::new(51.42, -0.21));
    s.secondary_gesture();

    assert_eq!(s.collection().len(), 3);
    s
}

#[test]
fn test_export_into_directory_uses_default_name() {
    let dir = tempdir().unwrap();
    let s = populated_session(Config::default());

    let written = s.export_to_file(dir.path()).unwrap();
    assert_eq!(written, dir.path().join("features.json"));

    let text = std::fs::read_to_string(&written).unwrap();
    assert!(text.contains('\n'));
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["type"], "FeatureCollection");

    let features = value["features"].as_array().unwrap();
    assert_eq!(features.len(), 3);
    for (json, feature) in features.iter().zip(s.collection().iter()) {
        assert_eq!(json["type"], "Feature");
        assert_eq!(json["id"], feature.id());
        assert_eq!(json["properties"]["id"], feature.properties().id.as_str());
        assert_ne!(json["id"], json["properties"]["id"]);
        assert_eq!(json["properties"]["shapeType"], feature.kind().label());
        assert_eq!(
            json["properties"]["createdAt"].as_i64(),
            Some(feature.properties().created_at)
        );
    }

    assert_eq!(features[0]["geometry"]["type"], "Polygon");
    assert!(features[0]["properties"].get("radius").is_none());
    assert!(features[1]["properties"]["radius"].as_f64().unwrap() > 500.0);
    assert_eq!(features[2]["geometry"]["type"], "LineString");
    assert_eq!(features[2]["geometry"]["coordinates"][0][0], -0.20);
    assert_eq!(features[2]["geometry"]["coordinates"][0][1], 51.40);
}

#[test]
fn test_export_reloads_with_same_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.geojson");
    let s = populated_session(Config::default());
    s.export_to_file(&path).unwrap();

    let loaded = FeatureCollection::load_from_file(&path).unwrap();
    let expected = s.to_geojson();
    assert_eq!(loaded.features.len(), expected.features.len());
    for (a, b) in loaded.features.iter().zip(&expected.features) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.properties.id, b.properties.id);
        assert_eq!(a.properties.shape_type, b.properties.shape_type);
        match (&a.geometry, &b.geometry) {
            (Geometry::Polygon { coordinates: x }, Geometry::Polygon { coordinates: y }) => {
                assert_close(&x[0], &y[0]);
            }
            (Geometry::LineString { coordinates: x }, Geometry::LineString { coordinates: y }) => {
                assert_close(x, y);
            }
            _ => panic!("geometry type changed on reload"),
        }
    }
}

#[test]
fn test_compact_export_and_custom_name() {
    let dir = tempdir().unwrap();
    let mut config = Config::default();
    config.export.pretty = false;
    config.export.file_name = "shapes.json".to_string();
    let s = populated_session(config);

    let written = s.export_to_file(dir.path()).unwrap();
    assert!(written.ends_with("shapes.json"));
    let text = std::fs::read_to_string(written).unwrap();
    assert!(!text.contains('\n'));
}

#[test]
fn test_empty_collection_exports_empty_array() {
    let s = DrawSession::new(RecordingRenderer::new());
    let value: Value = serde_json::from_str(&s.export_json().unwrap()).unwrap();
    assert_eq!(value["features"], Value::Array(vec![]));
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let s = DrawSession::new(RecordingRenderer::new());
    let err = s
        .export_to_file(dir.path().join("missing").join("features.json"))
        .unwrap_err();
    assert!(format!("{err:#}").contains("Failed to write feature file"));
}
