//! Unit tests for paths and viewport transforms.

use crate::helpers::EPSILON;
use inkboard::geometry::{Path, Scalar, Screen, Vector, World};
use inkboard::viewport::{SketchFocus, Viewport};

fn viewports() -> Vec<Viewport> {
    vec![
        Viewport::new(SketchFocus::default(), Vector::new(800.0, 600.0)),
        Viewport::new(SketchFocus::new(Vector::new(3.5, -2.0), 2.5), Vector::new(1920.0, 1080.0)),
        Viewport::new(SketchFocus::new(Vector::new(-100.0, 40.0), -3.0), Vector::new(300.0, 900.0)),
    ]
}

// ============================================================================
// Transforms
// ============================================================================

#[test]
fn test_screen_world_round_trip() {
    let samples = [(0.0, 0.0), (400.0, 300.0), (-25.0, 1200.0), (799.5, 0.25)];
    for viewport in viewports() {
        let to_world = viewport.screen_to_world();
        let to_screen = viewport.world_to_screen();
        for &(x, y) in &samples {
            let p = Vector::<Screen>::new(x, y);
            let back = p.transform(&to_world).transform(&to_screen);
            assert!(p.distance(back) < 1e-6, "{viewport:?}: {p:?} -> {back:?}");
        }
    }
}

#[test]
fn test_scalar_round_trip() {
    for viewport in viewports() {
        let s = Scalar::<World>::new(0.125);
        let back = s.transform(&viewport.world_to_screen()).transform(&viewport.screen_to_world());
        assert!((back.value - s.value).abs() < EPSILON);
    }
}

#[test]
fn test_bounding_area_matches_scale_and_aspect() {
    let viewport = Viewport::new(SketchFocus::new(Vector::new(1.0, 2.0), 1.0), Vector::new(800.0, 400.0));
    let area = viewport.to_bounding_area();
    assert!((area.width() - 1.0).abs() < EPSILON);
    assert!((area.height() - 0.5).abs() < EPSILON);
    assert!(area.centre().distance(Vector::new(1.0, 2.0)) < EPSILON);
}

// ============================================================================
// Paths
// ============================================================================

fn polyline(points: &[(f64, f64)]) -> Path<Screen> {
    Path::from_positions(points.iter().map(|&(x, y)| (Vector::new(x, y), Scalar::new(1.0))))
}

#[test]
fn test_length_is_sum_of_segments() {
    let path = polyline(&[(0.0, 0.0), (3.0, 4.0), (3.0, 10.0), (0.0, 10.0)]);
    assert!((path.length().value - (5.0 + 6.0 + 3.0)).abs() < EPSILON);
}

#[test]
fn test_t_is_monotonic_from_zero_to_one() {
    let path = polyline(&[(0.0, 0.0), (1.0, 0.0), (1.0, 2.0), (5.0, 2.0), (5.0, -1.0)]);
    let ts: Vec<f64> = path.points().iter().map(|p| p.t).collect();

    assert_eq!(ts.first().copied(), Some(0.0));
    assert!((ts.last().copied().unwrap() - 1.0).abs() < EPSILON);
    assert!(ts.windows(2).all(|pair| pair[0] <= pair[1]), "{ts:?}");

    // t tracks arc length: the second point is 1 unit into a 10 unit path
    assert!((ts[1] - 0.1).abs() < EPSILON);
}

#[test]
fn test_concatenation_merges_shared_endpoint() {
    let head = polyline(&[(0.0, 0.0), (2.0, 0.0)]);
    let tail = polyline(&[(2.0, 0.0), (2.0, 2.0)]);
    let joined = head + tail;
    assert_eq!(joined.len(), 3);
    assert!((joined.length().value - 4.0).abs() < EPSILON);
    assert!((joined.points()[1].t - 0.5).abs() < EPSILON);
}

#[test]
fn test_concatenation_bridges_gap() {
    let joined = polyline(&[(0.0, 0.0), (1.0, 0.0)]) + polyline(&[(2.0, 0.0), (3.0, 0.0)]);
    assert_eq!(joined.len(), 4);
    assert!((joined.length().value - 3.0).abs() < EPSILON);
}

#[test]
fn test_path_bounds_include_sizes() {
    let path = Path::<World>::from_positions([
        (Vector::new(0.0, 0.0), Scalar::new(0.5)),
        (Vector::new(4.0, 1.0), Scalar::new(1.0)),
    ]);
    let area = path.bounding_area();
    assert_eq!((area.x_min, area.x_max, area.y_min, area.y_max), (-0.5, 5.0, -0.5, 2.0));
}
