use super::*;

#[test]
fn anchors_follow_supported_commands() {
    let pts = anchor_points("M10,10 l5,0 H30 v5 C0,0 0,0 1,1 Q5,5 9,9 L2,2 Z");
    assert_eq!(
        pts,
        vec![
            Point::new(10.0, 10.0),
            Point::new(15.0, 10.0),
            Point::new(30.0, 10.0),
            Point::new(30.0, 15.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
        ]
    );
}

#[test]
fn skipped_commands_still_move_the_pen() {
    let pts = anchor_points("M0,0 Q5,5 10,0 l1,1");
    assert_eq!(pts, vec![Point::new(0.0, 0.0), Point::new(11.0, 1.0)]);
}

#[test]
fn malformed_data_keeps_leading_anchors() {
    let pts = anchor_points("M0,0 L1,1 L2");
    assert_eq!(pts, vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
}

#[test]
fn resampling_uses_fractional_indices() {
    let pts = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
    let out = resample(&pts, 5);
    let xs: Vec<f64> = out.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
}

#[test]
fn empty_lists_fill_with_origin() {
    assert_eq!(resample(&[], 3), vec![Point::ORIGIN; 3]);
    assert_eq!(resample(&[Point::new(1.0, 1.0)], 1).len(), 1);
}

#[test]
fn morph_emits_polyline_of_longer_count() {
    let it = ResampleMorpher.create_interpolator("M0,0 L10,0 L10,10", "M0,0 L20,0");
    let mid = it.sample(0.5);
    assert!(mid.starts_with('M') && mid.ends_with('Z'));
    assert_eq!(mid.matches('L').count(), 2);
    assert_eq!(it.sample(0.0), "M0,0 L10,0 L10,10");
    assert_eq!(it.sample(1.0), "M0,0 L20,0");
}

#[test]
fn too_few_points_return_from() {
    let it = ResampleMorpher.create_interpolator("M3,3", "");
    assert_eq!(it.sample(0.5), "M3,3");
    assert_eq!(it.sample(1.0), "");
}
