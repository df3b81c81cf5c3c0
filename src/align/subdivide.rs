use crate::{foundation::core::CubicBez, foundation::math::lerp_point, path::model::Subpath};

/// Split `seg` at parameter `t` with De Casteljau's construction.
///
/// The halves share the split point exactly and together trace the original curve.
pub fn split_at(seg: CubicBez, t: f64) -> (CubicBez, CubicBez) {
    let a = lerp_point(seg.p0, seg.p1, t);
    let b = lerp_point(seg.p1, seg.p2, t);
    let c = lerp_point(seg.p2, seg.p3, t);
    let d = lerp_point(a, b, t);
    let e = lerp_point(b, c, t);
    let f = lerp_point(d, e, t);
    (CubicBez::new(seg.p0, a, d, f), CubicBez::new(f, e, c, seg.p3))
}

/// Cut `seg` into `pieces` consecutive segments of equal parameter span.
///
/// Each cut splits the remainder at `1 / remaining`, so the pieces cover `[0, 1/n]`,
/// `[1/n, 2/n]`, and so on of the original parameter range. `pieces <= 1` returns the
/// segment unchanged.
pub fn subdivide_segment(seg: CubicBez, pieces: usize) -> Vec<CubicBez> {
    if pieces <= 1 {
        return vec![seg];
    }
    let mut out = Vec::with_capacity(pieces);
    let mut rest = seg;
    for i in 0..pieces - 1 {
        let (left, right) = split_at(rest, 1.0 / (pieces - i) as f64);
        out.push(left);
        rest = right;
    }
    out.push(rest);
    out
}

/// Grow `sub` to exactly `target` segments, spreading the extra cuts evenly.
///
/// Segment `i` of `n` receives `round(target * (i + 1) / n) - round(target * i / n)` pieces.
/// Subpaths that already have `target` segments or more are returned unchanged.
pub(crate) fn subdivide_subpath(sub: &Subpath, target: usize) -> Subpath {
    let n = sub.len();
    if n == 0 || n >= target {
        return sub.clone();
    }
    let ratio = target as f64 / n as f64;
    let mut segments = Vec::with_capacity(target);
    let mut allocated = 0usize;
    for (i, seg) in sub.segments.iter().enumerate() {
        let ideal_end = (ratio * (i + 1) as f64).round() as usize;
        let pieces = ideal_end.saturating_sub(allocated);
        segments.extend(subdivide_segment(*seg, pieces));
        allocated = ideal_end;
    }
    Subpath::new(segments)
}

#[cfg(test)]
#[path = "../../tests/unit/align/subdivide.rs"]
mod tests;
