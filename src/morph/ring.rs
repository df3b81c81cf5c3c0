//! Closed point rings shared by the polygon-based strategies.

use std::{cmp::Ordering, collections::BinaryHeap};

use crate::{
    foundation::core::Point,
    foundation::math::{dist2, lerp_point},
    morph::interpolator::Interpolator,
    path::serialize::write_polyline,
};

// Relative cost difference below which two rotations count as a tie.
const TIE_EPSILON: f64 = 1e-9;

/// Upper bound on the points a strategy generates for one ring. Matching is quadratic in
/// ring length, so sampling density gives way to this bound on very large paths.
pub(crate) const MAX_RING_POINTS: usize = 2048;

/// Drop trailing points that repeat the first one; rings are implicitly closed.
pub(crate) fn close_ring(mut ring: Vec<Point>) -> Vec<Point> {
    while ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

/// Edge of a ring ordered by the length of its current pieces; ties go to the lower index.
struct EdgePieces {
    piece_len: f64,
    index: usize,
}

impl PartialEq for EdgePieces {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EdgePieces {}

impl PartialOrd for EdgePieces {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EdgePieces {
    fn cmp(&self, other: &Self) -> Ordering {
        self.piece_len
            .total_cmp(&other.piece_len)
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// Grow `ring` to `target` points by splitting edges, longest pieces first.
///
/// Each extra point goes to the edge whose pieces are currently longest, then every edge is
/// cut into equal pieces in a single pass.
pub(crate) fn bisect_to(ring: &mut Vec<Point>, target: usize) {
    let n = ring.len();
    if n == 0 || n >= target {
        return;
    }
    let lengths: Vec<f64> = (0..n)
        .map(|i| (ring[(i + 1) % n] - ring[i]).hypot())
        .collect();
    let mut pieces = vec![1usize; n];
    let mut heap: BinaryHeap<EdgePieces> = lengths
        .iter()
        .enumerate()
        .map(|(index, &piece_len)| EdgePieces { piece_len, index })
        .collect();
    for _ in n..target {
        let Some(longest) = heap.pop() else {
            break;
        };
        let i = longest.index;
        pieces[i] += 1;
        heap.push(EdgePieces {
            piece_len: lengths[i] / pieces[i] as f64,
            index: i,
        });
    }

    let mut out = Vec::with_capacity(target);
    for (i, &count) in pieces.iter().enumerate() {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        out.push(a);
        for k in 1..count {
            out.push(lerp_point(a, b, k as f64 / count as f64));
        }
    }
    *ring = out;
}

/// Split every edge longer than `max_len` into equal pieces no longer than `max_len`.
///
/// `max_len` is raised when needed so that at most [`MAX_RING_POINTS`] points are added.
pub(crate) fn split_long_edges(ring: &[Point], max_len: f64) -> Vec<Point> {
    let n = ring.len();
    if n < 2 || max_len.is_nan() || max_len <= 0.0 {
        return ring.to_vec();
    }
    let perimeter: f64 = (0..n).map(|i| (ring[(i + 1) % n] - ring[i]).hypot()).sum();
    let max_len = max_len.max(perimeter / MAX_RING_POINTS as f64);
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        out.push(a);
        let len = (b - a).hypot();
        if len > max_len {
            let pieces = (len / max_len).ceil() as usize;
            for k in 1..pieces {
                out.push(lerp_point(a, b, k as f64 / pieces as f64));
            }
        }
    }
    out
}

fn rotation_cost(from: &[Point], to: &[Point], offset: usize) -> f64 {
    let n = from.len();
    to.iter()
        .enumerate()
        .map(|(i, &q)| dist2(from[(i + offset) % n], q))
        .sum()
}

/// Offset into `from` whose cyclic rotation lies closest to `to`. Ties keep offset zero.
pub(crate) fn best_rotation(from: &[Point], to: &[Point]) -> usize {
    if from.len() != to.len() || from.len() < 2 {
        return 0;
    }
    let mut best = 0;
    let mut best_cost = rotation_cost(from, to, 0);
    for offset in 1..from.len() {
        let cost = rotation_cost(from, to, offset);
        if cost < best_cost - best_cost * TIE_EPSILON {
            best = offset;
            best_cost = cost;
        }
    }
    best
}

pub(crate) fn rotate(ring: &[Point], offset: usize) -> Vec<Point> {
    if ring.is_empty() {
        return Vec::new();
    }
    let offset = offset % ring.len();
    ring[offset..].iter().chain(&ring[..offset]).copied().collect()
}

/// Bring two rings to the same length and rotate `from` onto `to`.
pub(crate) fn match_rings(mut from: Vec<Point>, mut to: Vec<Point>) -> (Vec<Point>, Vec<Point>) {
    let target = from.len().max(to.len());
    bisect_to(&mut from, target);
    bisect_to(&mut to, target);
    let offset = best_rotation(&from, &to);
    (rotate(&from, offset), to)
}

/// Interpolator lerping two matched rings and emitting `M…L…Z` polylines.
pub(crate) fn ring_interpolator(
    from_data: &str,
    to_data: &str,
    from: Vec<Point>,
    to: Vec<Point>,
) -> Interpolator {
    Interpolator::new(from_data, to_data, move |t| {
        let frame: Vec<Point> = from
            .iter()
            .zip(&to)
            .map(|(&a, &b)| lerp_point(a, b, t))
            .collect();
        write_polyline(&frame)
    })
}

#[cfg(test)]
#[path = "../../tests/unit/morph/ring.rs"]
mod tests;
