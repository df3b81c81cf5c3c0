//! Morphing through kurbo's path parser and flattener.

use kurbo::{BezPath, PathEl};

use crate::{
    foundation::core::Point,
    foundation::error::{MorphError, MorphResult},
    morph::interpolator::{Interpolator, Morpher},
    morph::ring::{close_ring, match_rings, ring_interpolator, split_long_edges},
};

const FLATTEN_TOLERANCE: f64 = 0.1;

/// Options for [`FlattenMorpher`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FlattenMorpherOpts {
    /// Edges longer than this are split before matching.
    pub max_segment_length: f64,
}

impl Default for FlattenMorpherOpts {
    fn default() -> Self {
        Self {
            max_segment_length: 10.0,
        }
    }
}

impl FlattenMorpherOpts {
    pub fn validate(&self) -> MorphResult<()> {
        if !self.max_segment_length.is_finite() || self.max_segment_length <= 0.0 {
            return Err(MorphError::validation(
                "max_segment_length must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// Flattens the first contour of each path with kurbo, then morphs the resulting rings.
#[derive(Clone, Debug, Default)]
pub struct FlattenMorpher {
    opts: FlattenMorpherOpts,
}

impl FlattenMorpher {
    pub fn new(opts: FlattenMorpherOpts) -> Self {
        Self { opts }
    }

    fn ring(&self, data: &str) -> Vec<Point> {
        match BezPath::from_svg(data) {
            Ok(path) => split_long_edges(&first_contour(&path), self.opts.max_segment_length),
            Err(err) => {
                tracing::warn!(%err, "kurbo rejected path data, morph will snap");
                Vec::new()
            }
        }
    }
}

impl Morpher for FlattenMorpher {
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
        "flatten"
    }
}

/// Polyline approximation of the first subpath of `path`, as an implicitly closed ring.
fn first_contour(path: &BezPath) -> Vec<Point> {
    let mut ring = Vec::new();
    let mut moves = 0;
    kurbo::flatten(path.iter(), FLATTEN_TOLERANCE, |el| match el {
        PathEl::MoveTo(p) => {
            moves += 1;
            if moves == 1 {
                ring.push(p);
            }
        }
        PathEl::LineTo(p) if moves == 1 => ring.push(p),
        _ => {}
    });
    close_ring(ring)
}

#[cfg(test)]
#[path = "../../tests/unit/morph/flatten.rs"]
mod tests;
