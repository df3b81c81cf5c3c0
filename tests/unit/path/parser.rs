use super::*;

fn pt_eq(a: Point, b: (f64, f64)) -> bool {
    (a.x - b.0).abs() < 1e-9 && (a.y - b.1).abs() < 1e-9
}

#[test]
fn square_closes_with_a_fourth_segment() {
    let doc = parse("M0,0 L100,0 L100,100 L0,100 Z").unwrap();
    assert_eq!(doc.len(), 1);
    let sub = &doc.subpaths[0];
    assert_eq!(sub.len(), 4);
    assert!(pt_eq(sub.segments[3].p3, (0.0, 0.0)));
}

#[test]
fn close_without_gap_adds_nothing() {
    let doc = parse("M0,0 L10,0 L10,10 L0,0 Z").unwrap();
    assert_eq!(doc.subpaths[0].len(), 3);
}

#[test]
fn move_seals_previous_subpath() {
    let doc = parse("M0,0 L10,0 M20,20 L30,20 L30,30").unwrap();
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.subpaths[0].len(), 1);
    assert_eq!(doc.subpaths[1].len(), 2);
}

#[test]
fn relative_commands_accumulate() {
    let doc = parse("m10,10 l5,0 h5 v5 z").unwrap();
    let segs = &doc.subpaths[0].segments;
    assert!(pt_eq(segs[0].p3, (15.0, 10.0)));
    assert!(pt_eq(segs[1].p3, (20.0, 10.0)));
    assert!(pt_eq(segs[2].p3, (20.0, 15.0)));
    assert!(pt_eq(segs[3].p3, (10.0, 10.0)));
}

#[test]
fn relative_move_after_close_starts_from_subpath_start() {
    let doc = parse("M10,10 L20,10 L20,20 Z m5,5 l1,0").unwrap();
    assert!(pt_eq(doc.subpaths[1].segments[0].p0, (15.0, 15.0)));
}

#[test]
fn smooth_cubic_reflects_previous_control() {
    let doc = parse("M0,0 C0,10 10,10 10,0 S20,-10 20,0").unwrap();
    let s = &doc.subpaths[0].segments[1];
    assert!(pt_eq(s.p1, (10.0, -10.0)));
}

#[test]
fn smooth_cubic_after_other_family_uses_current_point() {
    let doc = parse("M0,0 Q5,5 10,0 S20,-10 20,0").unwrap();
    let s = &doc.subpaths[0].segments[1];
    assert!(pt_eq(s.p1, (10.0, 0.0)));

    let doc = parse("M0,0 L10,0 T20,0").unwrap();
    let t = &doc.subpaths[0].segments[1];
    assert!(pt_eq(t.p1, (10.0, 0.0)));
}

#[test]
fn smooth_quadratic_chains_reflections() {
    let doc = parse("M0,0 Q5,10 10,0 T20,0").unwrap();
    let t = &doc.subpaths[0].segments[1];
    // Reflected control is (15,-10); the cubic handle sits 2/3 of the way towards it.
    assert!(pt_eq(t.p1, (10.0 + 2.0 / 3.0 * 5.0, -10.0 * 2.0 / 3.0)));
}

#[test]
fn arcs_become_cubics_ending_on_target() {
    let doc = parse("M0,0 A5,5 0 0 1 10,0").unwrap();
    let segs = &doc.subpaths[0].segments;
    assert_eq!(segs.len(), 2);
    assert!(pt_eq(segs[1].p3, (10.0, 0.0)));
}

#[test]
fn empty_input_is_an_empty_document() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse("M5,5").unwrap().is_empty());
}

#[test]
fn malformed_numbers_fail_the_parse() {
    assert!(parse("M0,0 L1e,2").is_err());
    assert!(parse("M0,0 L--1,2").is_err());
}

#[test]
fn segments_are_continuous() {
    let doc = parse("M0,0 C1,2 3,4 5,6 Q7,8 9,10 A3,3 0 1 1 20,20 H30 V40 Z").unwrap();
    for sub in &doc.subpaths {
        for w in sub.segments.windows(2) {
            assert!(pt_eq(w[1].p0, (w[0].p3.x, w[0].p3.y)));
        }
    }
}
