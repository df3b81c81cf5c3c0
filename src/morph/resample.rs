//! Uniform resampling of anchor points.
//!
//! Only the on-curve anchors of `M`, `L`, `H`, `V` and `C` commands are kept; control points
//! and the other curve families are skipped. Both anchor lists are stretched to the longer
//! length by fractional index and interpolated into a polyline.

use crate::{
    foundation::core::Point,
    foundation::math::{is_finite_point, lerp_point},
    morph::interpolator::{Interpolator, Morpher},
    path::serialize::write_polyline,
    path::tokenizer::{PathCommand, PathTokenizer},
};

#[derive(Clone, Copy, Debug, Default)]
pub struct ResampleMorpher;

impl ResampleMorpher {
    pub fn new() -> Self {
        Self
    }
}

impl Morpher for ResampleMorpher {
    fn create_interpolator(&self, from: &str, to: &str) -> Interpolator {
        let a = anchor_points(from);
        let b = anchor_points(to);
        let fallback = from.to_owned();
        let count = a.len().max(b.len());
        if count < 2 {
            return Interpolator::new(from, to, move |_| fallback.clone());
        }
        let a = resample(&a, count);
        let b = resample(&b, count);
        Interpolator::new(from, to, move |t| {
            let frame: Vec<Point> = a
                .iter()
                .zip(&b)
                .map(|(&p, &q)| lerp_point(p, q, t))
                .filter(|p| is_finite_point(*p))
                .collect();
            if frame.len() < 2 {
                return fallback.clone();
            }
            write_polyline(&frame)
        })
    }

    fn name(&self) -> &'static str {
        "resample"
    }
}

/// On-curve anchors of `M L H V C` commands, in order. Parsing stops at the first error and
/// keeps what was read so far.
pub(crate) fn anchor_points(data: &str) -> Vec<Point> {
    let mut out = Vec::new();
    let mut current = Point::ORIGIN;
    let mut start = Point::ORIGIN;
    let resolve = |current: Point, abs: bool, p: Point| {
        if abs { p } else { current + p.to_vec2() }
    };

    for cmd in PathTokenizer::new(data) {
        let cmd = match cmd {
            Ok(cmd) => cmd,
            Err(err) => {
                tracing::warn!(%err, "stopped reading anchors at malformed path data");
                break;
            }
        };
        let anchor = match cmd {
            PathCommand::MoveTo { abs, to } => {
                current = resolve(current, abs, to);
                start = current;
                true
            }
            PathCommand::LineTo { abs, to } | PathCommand::CubicTo { abs, to, .. } => {
                current = resolve(current, abs, to);
                true
            }
            PathCommand::HorizontalTo { abs, x } => {
                current.x = if abs { x } else { current.x + x };
                true
            }
            PathCommand::VerticalTo { abs, y } => {
                current.y = if abs { y } else { current.y + y };
                true
            }
            PathCommand::SmoothCubicTo { abs, to, .. }
            | PathCommand::QuadTo { abs, to, .. }
            | PathCommand::SmoothQuadTo { abs, to }
            | PathCommand::ArcTo { abs, to, .. } => {
                current = resolve(current, abs, to);
                false
            }
            PathCommand::Close => {
                current = start;
                false
            }
        };
        if anchor && is_finite_point(current) {
            out.push(current);
        }
    }
    out
}

/// Stretch `points` to exactly `count` entries by linear interpolation at fractional
/// indices. An empty list becomes `count` origins.
pub(crate) fn resample(points: &[Point], count: usize) -> Vec<Point> {
    if points.len() == count || count < 2 {
        return points.to_vec();
    }
    if points.is_empty() {
        return vec![Point::ORIGIN; count];
    }
    let last = points.len() - 1;
    let step = last as f64 / (count - 1) as f64;
    (0..count)
        .map(|i| {
            let idx = i as f64 * step;
            let lower = (idx.floor() as usize).min(last);
            let upper = (idx.ceil() as usize).min(last);
            if lower == upper {
                points[lower]
            } else {
                lerp_point(points[lower], points[upper], idx - lower as f64)
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/morph/resample.rs"]
mod tests;
