use std::fmt::Write as _;

use crate::foundation::core::{CubicBez, Point};

/// Append `v` using the shortest decimal that round-trips; `-0` is written as `0`.
fn push_num(out: &mut String, v: f64) {
    let v = if v == 0.0 { 0.0 } else { v };
    let _ = write!(out, "{v}");
}

fn push_point(out: &mut String, p: Point) {
    push_num(out, p.x);
    out.push(',');
    push_num(out, p.y);
}

/// `M x,y` followed by `C x1,y1 x2,y2 x,y` for every segment of every non-empty subpath.
pub fn write_cubic_path<'a>(subpaths: impl IntoIterator<Item = &'a [CubicBez]>) -> String {
    let mut out = String::new();
    for segments in subpaths {
        let Some(first) = segments.first() else {
            continue;
        };
        out.push('M');
        push_point(&mut out, first.p0);
        for seg in segments {
            out.push('C');
            push_point(&mut out, seg.p1);
            out.push(' ');
            push_point(&mut out, seg.p2);
            out.push(' ');
            push_point(&mut out, seg.p3);
        }
    }
    out
}

/// Closed polyline `M…L…Z`; empty input yields an empty string.
pub fn write_polyline(points: &[Point]) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };
    let mut out = String::with_capacity(points.len() * 12);
    out.push('M');
    push_point(&mut out, *first);
    for p in rest {
        out.push('L');
        push_point(&mut out, *p);
    }
    out.push('Z');
    out
}
