use super::*;
use crate::{foundation::core::Point, path::parser::parse};

fn square() -> PathDocument {
    parse("M0,0 L100,0 L100,100 L0,100 Z").unwrap()
}

fn diamond() -> PathDocument {
    parse("M50,0 L100,50 L50,100 L0,50 Z").unwrap()
}

#[test]
fn equal_topologies_pass_through() {
    let (a, b) = align(&square(), &diamond(), AlignOpts::default());
    assert_eq!(a, square());
    assert_eq!(b, diamond());
}

#[test]
fn symmetric_ties_keep_rotation_zero() {
    let (a, _) = align(&square(), &diamond(), AlignOpts::default());
    assert_eq!(a.subpaths[0].segments[0].p0, Point::new(0.0, 0.0));
}

#[test]
fn closed_subpath_rotates_to_nearest_start() {
    // Same square, but the target starts at the bottom-right corner.
    let to = parse("M100,100 L0,100 L0,0 L100,0 Z").unwrap();
    let (a, b) = align(&square(), &to, AlignOpts::default());
    assert_eq!(a.subpaths[0].segments[0].p0, Point::new(100.0, 100.0));
    assert_eq!(a.subpaths[0].segments, b.subpaths[0].segments);
}

#[test]
fn rotation_can_be_disabled() {
    let to = parse("M100,100 L0,100 L0,0 L100,0 Z").unwrap();
    let opts = AlignOpts {
        rotate: false,
        ..AlignOpts::default()
    };
    let (a, _) = align(&square(), &to, opts);
    assert_eq!(a, square());
}

#[test]
fn open_subpaths_are_never_rotated() {
    let from = parse("M0,0 L100,0 L100,100 L0,100").unwrap();
    let to = parse("M100,100 L0,100 L0,0 L100,0").unwrap();
    let (a, _) = align(&from, &to, AlignOpts::default());
    assert_eq!(a, from);
}

#[test]
fn surplus_subpaths_pair_with_degenerate_points() {
    let from = square();
    let to = parse("M0,0 L10,0 L10,10 Z M50,50 L60,50 L60,60 Z").unwrap();
    let (a, b) = align(&from, &to, AlignOpts::default());
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 2);

    let ghost = &a.subpaths[1];
    assert_eq!(ghost.len(), b.subpaths[1].len());
    let center = to.subpaths[1].centroid();
    for seg in &ghost.segments {
        assert_eq!(seg.p0, center);
        assert_eq!(seg.p3, center);
    }
}

#[test]
fn segment_counts_match_pairwise() {
    let from = parse("M0,0 L10,0 L10,10 Z").unwrap();
    let to = parse("M0,0 C1,1 2,2 3,3 L5,5 L6,6 L7,7 L8,8 L9,9 Z").unwrap();
    let (a, b) = align(&from, &to, AlignOpts::default());
    for (sa, sb) in a.subpaths.iter().zip(&b.subpaths) {
        assert_eq!(sa.len(), sb.len());
    }
    assert_eq!(a.segment_count(), to.segment_count());
}

#[test]
fn empty_documents_align_to_empty() {
    let (a, b) = align(&PathDocument::default(), &PathDocument::default(), AlignOpts::default());
    assert!(a.is_empty() && b.is_empty());
}

#[test]
fn empty_subpath_collapses_to_partner_centroid() {
    let from = PathDocument::new(vec![Subpath::default()]);
    let (a, b) = align(&from, &square(), AlignOpts::default());
    assert_eq!(a.subpaths[0].len(), 4);
    assert!(a.subpaths[0].segments.iter().all(|s| s.p0 == Point::new(50.0, 50.0)));
    assert_eq!(b, square());
}
