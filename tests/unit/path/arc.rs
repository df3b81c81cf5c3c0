use super::*;
use kurbo::ParamCurve;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn zero_radius_falls_back_to_line() {
    let segs = arc_to_cubics(
        Point::new(0.0, 0.0),
        Vec2::new(0.0, 5.0),
        0.0,
        false,
        true,
        Point::new(10.0, 0.0),
    );
    assert_eq!(segs, vec![line_cubic(Point::new(0.0, 0.0), Point::new(10.0, 0.0))]);
}

#[test]
fn half_circle_splits_into_quarter_turns() {
    let segs = arc_to_cubics(
        Point::new(0.0, 0.0),
        Vec2::new(5.0, 5.0),
        0.0,
        false,
        true,
        Point::new(10.0, 0.0),
    );
    assert_eq!(segs.len(), 2);
    assert!(close(segs[0].p0, Point::new(0.0, 0.0)));
    assert!(close(segs[1].p3, Point::new(10.0, 0.0)));
    assert!(close(segs[0].p3, segs[1].p0));

    // Every sampled point sits on the circle, within the usual cubic approximation error.
    let center = Point::new(5.0, 0.0);
    for seg in &segs {
        for i in 0..=10 {
            let p = seg.eval(i as f64 / 10.0);
            let r = (p - center).hypot();
            assert!((r - 5.0).abs() < 5.0 * 3e-4, "radius {r}");
        }
    }
}

#[test]
fn too_small_radii_are_scaled_up() {
    let segs = arc_to_cubics(
        Point::new(0.0, 0.0),
        Vec2::new(1.0, 1.0),
        0.0,
        false,
        true,
        Point::new(10.0, 0.0),
    );
    // Scaled to exactly half the chord, so the arc is still a half circle.
    assert_eq!(segs.len(), 2);
    let mid = segs[0].p3;
    assert!((mid.x - 5.0).abs() < 1e-9);
    assert!((mid.y.abs() - 5.0).abs() < 1e-9);
}

#[test]
fn large_arc_flag_selects_the_long_way_round() {
    let small = arc_to_cubics(
        Point::new(0.0, 0.0),
        Vec2::new(10.0, 10.0),
        0.0,
        false,
        true,
        Point::new(10.0, 0.0),
    );
    let large = arc_to_cubics(
        Point::new(0.0, 0.0),
        Vec2::new(10.0, 10.0),
        0.0,
        true,
        true,
        Point::new(10.0, 0.0),
    );
    assert_eq!(small.len(), 1);
    assert_eq!(large.len(), 4);
}

#[test]
fn coincident_endpoints_degrade_to_a_point_line() {
    let p = Point::new(3.0, 3.0);
    let segs = arc_to_cubics(p, Vec2::new(4.0, 4.0), 30.0, true, false, p);
    assert_eq!(segs, vec![line_cubic(p, p)]);
}
