use super::*;

fn square() -> Subpath {
    Subpath::new(vec![
        line_cubic(Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
        line_cubic(Point::new(10.0, 0.0), Point::new(10.0, 10.0)),
        line_cubic(Point::new(10.0, 10.0), Point::new(0.0, 10.0)),
        line_cubic(Point::new(0.0, 10.0), Point::new(0.0, 0.0)),
    ])
}

#[test]
fn centroid_averages_segment_endpoints() {
    let c = square().centroid();
    assert!((c.x - 5.0).abs() < 1e-12);
    assert!((c.y - 5.0).abs() < 1e-12);
    assert_eq!(Subpath::default().centroid(), Point::ORIGIN);
}

#[test]
fn closed_detection_uses_per_axis_tolerance() {
    assert!(square().is_closed(0.5));
    let mut open = square();
    open.segments.pop();
    assert!(!open.is_closed(0.5));
    assert!(!Subpath::default().is_closed(0.5));
}

#[test]
fn rotation_keeps_cyclic_order() {
    let sq = square();
    let r = sq.rotated(1);
    assert_eq!(r.segments[0], sq.segments[1]);
    assert_eq!(r.segments[3], sq.segments[0]);
    assert_eq!(sq.rotated(4), sq);
}

#[test]
fn degenerate_subpath_is_a_single_point() {
    let d = Subpath::degenerate(Point::new(3.0, 4.0));
    assert_eq!(d.len(), 1);
    assert!(d.is_degenerate());
    assert!(!square().is_degenerate());
}

#[test]
fn line_elevation_places_handles_at_thirds() {
    let c = line_cubic(Point::new(0.0, 0.0), Point::new(3.0, 6.0));
    assert!((c.p1.x - 1.0).abs() < 1e-12 && (c.p1.y - 2.0).abs() < 1e-12);
    assert!((c.p2.x - 2.0).abs() < 1e-12 && (c.p2.y - 4.0).abs() < 1e-12);
}

#[test]
fn quad_elevation_matches_degree_elevation_formula() {
    let c = quad_cubic(Point::new(0.0, 0.0), Point::new(3.0, 3.0), Point::new(6.0, 0.0));
    assert!((c.p1.x - 2.0).abs() < 1e-12 && (c.p1.y - 2.0).abs() < 1e-12);
    assert!((c.p2.x - 4.0).abs() < 1e-12 && (c.p2.y - 2.0).abs() < 1e-12);
}

#[test]
fn document_serializes_move_and_cubics() {
    let doc = PathDocument::new(vec![Subpath::new(vec![CubicBez::new(
        (0.0, 0.0),
        (1.0, 0.0),
        (2.0, 0.0),
        (3.0, 0.0),
    )])]);
    assert_eq!(doc.to_svg(), "M0,0C1,0 2,0 3,0");
    assert_eq!(doc.segment_count(), 1);
    assert_eq!(doc.to_bez_path().elements().len(), 2);
}
