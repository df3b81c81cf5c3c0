use crate::{
    align::subdivide::subdivide_subpath,
    foundation::math::dist2,
    path::model::{PathDocument, Subpath},
};

/// Options for [`align`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AlignOpts {
    /// Rotate closed from-subpaths to best match their partner.
    pub rotate: bool,
    /// Per-axis distance under which a subpath's end counts as touching its start.
    pub closed_tolerance: f64,
}

impl Default for AlignOpts {
    fn default() -> Self {
        Self {
            rotate: true,
            closed_tolerance: 0.5,
        }
    }
}

/// Reconcile two documents so they have the same number of subpaths and, pairwise, the same
/// number of segments.
///
/// Subpaths pair by index; a subpath without a partner is matched with a degenerate subpath
/// at its own centroid, so it grows out of (or shrinks into) a point. The shorter subpath of
/// each pair is subdivided up to the longer count. With `opts.rotate`, a closed from-subpath
/// is cyclically rotated to minimise the summed squared control-point distance.
///
/// Never fails: empty inputs come back as empty documents and empty subpaths collapse to a
/// point at their partner's centroid.
pub fn align(
    from: &PathDocument,
    to: &PathDocument,
    opts: AlignOpts,
) -> (PathDocument, PathDocument) {
    let count = from.len().max(to.len());
    let mut out_from = Vec::with_capacity(count);
    let mut out_to = Vec::with_capacity(count);

    for i in 0..count {
        let (a, b) = match (from.subpaths.get(i), to.subpaths.get(i)) {
            (Some(a), Some(b)) => pair(a, b),
            (Some(a), None) => (a.clone(), Subpath::degenerate(a.centroid())),
            (None, Some(b)) => (Subpath::degenerate(b.centroid()), b.clone()),
            (None, None) => continue,
        };

        let target = a.len().max(b.len());
        let a = subdivide_subpath(&a, target);
        let b = subdivide_subpath(&b, target);
        let a = if opts.rotate {
            rotate_to_fit(&a, &b, opts.closed_tolerance)
        } else {
            a
        };
        out_from.push(a);
        out_to.push(b);
    }

    (PathDocument::new(out_from), PathDocument::new(out_to))
}

fn pair(a: &Subpath, b: &Subpath) -> (Subpath, Subpath) {
    match (a.is_empty(), b.is_empty()) {
        (false, false) => (a.clone(), b.clone()),
        (true, false) => (Subpath::degenerate(b.centroid()), b.clone()),
        (false, true) => (a.clone(), Subpath::degenerate(a.centroid())),
        (true, true) => (Subpath::degenerate(a.centroid()), Subpath::degenerate(b.centroid())),
    }
}

// Relative cost difference below which two rotations count as a tie.
const TIE_EPSILON: f64 = 1e-9;

fn control_point_cost(a: &Subpath, b: &Subpath) -> f64 {
    a.segments
        .iter()
        .zip(&b.segments)
        .map(|(s, t)| {
            dist2(s.p0, t.p0) + dist2(s.p1, t.p1) + dist2(s.p2, t.p2) + dist2(s.p3, t.p3)
        })
        .sum()
}

/// Cyclic rotation of `from` with the lowest control-point cost against `to`.
///
/// Open subpaths, and subpaths of a single segment, are returned unchanged. Ties keep the
/// earliest rotation, so an already optimal input is never disturbed.
pub(crate) fn rotate_to_fit(from: &Subpath, to: &Subpath, closed_tolerance: f64) -> Subpath {
    if from.len() <= 1 || !from.is_closed(closed_tolerance) {
        return from.clone();
    }

    let mut best = 0;
    let mut best_cost = control_point_cost(from, to);
    for offset in 1..from.len() {
        let cost = control_point_cost(&from.rotated(offset), to);
        if cost < best_cost - best_cost * TIE_EPSILON {
            best = offset;
            best_cost = cost;
        }
    }

    if best == 0 {
        from.clone()
    } else {
        tracing::trace!(offset = best, "rotated closed subpath");
        from.rotated(best)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/align/aligner.rs"]
mod tests;
