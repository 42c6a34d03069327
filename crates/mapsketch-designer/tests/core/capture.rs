use mapsketch_core::{LatLng, ShapeKind};
use mapsketch_designer::{CaptureMachine, CaptureState, CaptureStep};

#[test]
fn test_circle_completes_without_secondary() {
    let mut machine = CaptureMachine::new();
    machine.begin(ShapeKind::Circle);
    machine.click(LatLng::new(10.0, 10.0));
    let step = machine.click(LatLng::new(10.0, 10.1));
    assert!(matches!(
        step,
        CaptureStep::Ready {
            kind: ShapeKind::Circle,
            ..
        }
    ));
    assert_eq!(machine.state(), &CaptureState::Idle);
}

#[test]
fn test_line_keeps_collecting_past_three_points() {
    let mut machine = CaptureMachine::new();
    machine.begin(ShapeKind::LineString);
    for i in 0..6 {
        let step = machine.click(LatLng::new(0.0, i as f64));
        assert_eq!(step, CaptureStep::Collected { count: i + 1 });
    }
    assert_eq!(machine.points().len(), 6);
}

#[test]
fn test_line_secondary_with_two_points_is_ignored() {
    let mut machine = CaptureMachine::new();
    machine.begin(ShapeKind::LineString);
    machine.click(LatLng::new(0.0, 0.0));
    machine.click(LatLng::new(0.0, 1.0));
    assert_eq!(machine.secondary(), CaptureStep::Ignored);
    assert_eq!(machine.active_kind(), Some(ShapeKind::LineString));
}

#[test]
fn test_reset_returns_to_idle() {
    let mut machine = CaptureMachine::new();
    machine.begin(ShapeKind::Polygon);
    machine.click(LatLng::new(0.0, 0.0));
    machine.reset();
    assert!(machine.is_idle());
    assert!(machine.points().is_empty());
}
