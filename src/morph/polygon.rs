//! Polygon-sampling morphing.
//!
//! Each path becomes a closed ring of points. Rings are equalized, rotated onto each other,
//! and interpolated point by point; output is always a polyline.

use kurbo::{ParamCurve, ParamCurveArclen};

use crate::{
    foundation::core::{CubicBez, Point},
    foundation::error::{MorphError, MorphResult},
    morph::interpolator::{Interpolator, Morpher},
    morph::ring::{MAX_RING_POINTS, close_ring, match_rings, ring_interpolator},
    path::model::{PathDocument, line_cubic},
    path::parser::parse,
};

const ARCLEN_ACCURACY: f64 = 1e-3;
const MIN_SAMPLES: usize = 3;

/// Options for [`PolygonMorpher`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PolygonMorpherOpts {
    /// Arc-length spacing between sampled points on curved input.
    pub morph_precision: f64,
}

impl Default for PolygonMorpherOpts {
    fn default() -> Self {
        Self {
            morph_precision: 10.0,
        }
    }
}

impl PolygonMorpherOpts {
    pub fn validate(&self) -> MorphResult<()> {
        if !self.morph_precision.is_finite() || self.morph_precision <= 0.0 {
            return Err(MorphError::validation(
                "morph_precision must be finite and > 0",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct PolygonMorpher {
    opts: PolygonMorpherOpts,
}

impl PolygonMorpher {
    pub fn new(opts: PolygonMorpherOpts) -> Self {
        Self { opts }
    }

    fn ring(&self, data: &str) -> Vec<Point> {
        match parse(data) {
            Ok(doc) => polygon_ring(&doc, self.opts.morph_precision),
            Err(err) => {
                tracing::warn!(%err, "path data failed to parse, morph will snap");
                Vec::new()
            }
        }
    }
}

impl Morpher for PolygonMorpher {
    fn create_interpolator(&self, from: &str, to: &str) -> Interpolator {
        let a = self.ring(from);
        let b = self.ring(to);
        if a.is_empty() || b.is_empty() {
            return Interpolator::snap(from, to);
        }
        let (a, b) = match_rings(a, b);
        ring_interpolator(from, to, a, b)
    }

    fn name(&self) -> &'static str {
        "polygon"
    }
}

fn is_line(seg: &CubicBez) -> bool {
    let line = line_cubic(seg.p0, seg.p3);
    (seg.p1 - line.p1).hypot2() < 1e-12 && (seg.p2 - line.p2).hypot2() < 1e-12
}

/// Ring for one document: exact vertices for a single straight-edged contour, otherwise
/// equal arc-length samples over every subpath, at most [`MAX_RING_POINTS`] of them.
pub(crate) fn polygon_ring(doc: &PathDocument, spacing: f64) -> Vec<Point> {
    if let [sub] = doc.subpaths.as_slice()
        && sub.segments.iter().all(is_line)
    {
        let mut ring: Vec<Point> = sub.segments.iter().map(|s| s.p0).collect();
        ring.extend(sub.last_point());
        return close_ring(ring);
    }
    sample_by_length(doc, spacing)
}

fn sample_by_length(doc: &PathDocument, spacing: f64) -> Vec<Point> {
    let segments: Vec<CubicBez> = doc
        .subpaths
        .iter()
        .flat_map(|s| s.segments.iter().copied())
        .collect();
    let Some(first) = segments.first() else {
        return Vec::new();
    };

    let lengths: Vec<f64> = segments
        .iter()
        .map(|s| s.arclen(ARCLEN_ACCURACY))
        .collect();
    let total: f64 = lengths.iter().sum();
    if total <= 0.0 {
        return vec![first.p0; MIN_SAMPLES];
    }

    let count = ((total / spacing).ceil() as usize).clamp(MIN_SAMPLES, MAX_RING_POINTS);
    let step = total / count as f64;

    let mut out = Vec::with_capacity(count);
    let mut seg_idx = 0;
    let mut seg_start = 0.0;
    for i in 0..count {
        let target = i as f64 * step;
        while seg_idx + 1 < segments.len() && seg_start + lengths[seg_idx] < target {
            seg_start += lengths[seg_idx];
            seg_idx += 1;
        }
        let seg = &segments[seg_idx];
        let local = (target - seg_start).clamp(0.0, lengths[seg_idx]);
        let t = if lengths[seg_idx] > 0.0 {
            seg.inv_arclen(local, ARCLEN_ACCURACY)
        } else {
            0.0
        };
        out.push(seg.eval(t));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/morph/polygon.rs"]
mod tests;
