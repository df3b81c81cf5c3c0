use super::*;
use crate::foundation::core::Point;

const SQUARE: &str = "M0,0 L100,0 L100,100 L0,100 Z";
const DIAMOND: &str = "M50,0 L100,50 L50,100 L0,50 Z";

fn starts(data: &str) -> Vec<Point> {
    parse(data).unwrap().subpaths[0]
        .segments
        .iter()
        .map(|s| s.p0)
        .collect()
}

#[test]
fn square_to_diamond_midpoint_averages_corners() {
    let it = CurveMorpher::default().create_interpolator(SQUARE, DIAMOND);
    let mid = starts(&it.sample(0.5));
    let expected = [(25.0, 0.0), (100.0, 25.0), (75.0, 100.0), (0.0, 75.0)];
    assert_eq!(mid.len(), expected.len());
    for (p, (x, y)) in mid.iter().zip(expected) {
        assert!((p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9, "{p:?}");
    }
}

#[test]
fn endpoints_are_the_inputs() {
    let it = CurveMorpher::default().create_interpolator(SQUARE, DIAMOND);
    assert_eq!(it.sample(0.0), SQUARE);
    assert_eq!(it.sample(1.0), DIAMOND);
}

#[test]
fn interior_output_is_cubic_path_data() {
    let it = CurveMorpher::default().create_interpolator(SQUARE, DIAMOND);
    let out = it.sample(0.3);
    assert!(out.starts_with('M'));
    assert_eq!(out.matches('C').count(), 4);
    assert_eq!(parse(&out).unwrap().segment_count(), 4);
}

#[test]
fn malformed_input_snaps_at_half() {
    let it = CurveMorpher::default().create_interpolator("M0,0 L10", DIAMOND);
    assert_eq!(it.sample(0.3), "M0,0 L10");
    assert_eq!(it.sample(0.6), DIAMOND);

    let it = CurveMorpher::default().create_interpolator(SQUARE, "");
    assert_eq!(it.sample(0.4), SQUARE);
    assert_eq!(it.sample(0.5), "");
}

#[test]
fn caches_fill_once_and_clear() {
    let morpher = CurveMorpher::default();
    let a = morpher.create_interpolator(SQUARE, DIAMOND);
    let b = morpher.create_interpolator(SQUARE, DIAMOND);
    assert_eq!(a.sample(0.42), b.sample(0.42));
    assert_eq!(morpher.parsed.len(), 2);
    assert_eq!(morpher.aligned.len(), 1);

    morpher.dispose();
    assert_eq!(morpher.parsed.len(), 0);
    assert_eq!(morpher.aligned.len(), 0);
    // Interpolators handed out earlier survive a clear.
    assert_eq!(a.sample(0.42), b.sample(0.42));
}

#[test]
fn disabled_alignment_keeps_start_points() {
    let to = "M100,100 L0,100 L0,0 L100,0 Z";
    let opts = CurveMorpherOpts {
        align_points: false,
        ..CurveMorpherOpts::default()
    };
    let it = CurveMorpher::new(opts).create_interpolator(SQUARE, to);
    let mid = starts(&it.sample(0.5));
    assert!((mid[0].x - 50.0).abs() < 1e-9 && (mid[0].y - 50.0).abs() < 1e-9);

    let it = CurveMorpher::default().create_interpolator(SQUARE, to);
    let mid = starts(&it.sample(0.5));
    assert!((mid[0].x - 100.0).abs() < 1e-9 && (mid[0].y - 100.0).abs() < 1e-9);
}

#[test]
fn options_validate_tolerance() {
    assert!(CurveMorpherOpts::default().validate().is_ok());
    let bad = CurveMorpherOpts {
        closed_tolerance: f64::NAN,
        ..CurveMorpherOpts::default()
    };
    assert!(bad.validate().is_err());
}
