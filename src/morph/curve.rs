//! Curve-subdivision morphing: the primary strategy.
//!
//! Both paths are parsed into cubic subpaths and aligned to a common topology, then every
//! control point is interpolated linearly. Straight edges stay straight and curves stay
//! smooth throughout the morph.

use std::sync::Arc;

use crate::{
    align::aligner::{AlignOpts, align},
    foundation::core::CubicBez,
    foundation::error::{MorphError, MorphResult},
    foundation::math::lerp_point,
    morph::cache::Memo,
    morph::interpolator::{Interpolator, Morpher},
    path::model::{PathDocument, Subpath},
    path::parser::parse,
    path::serialize::write_cubic_path,
};

/// Options for [`CurveMorpher`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CurveMorpherOpts {
    /// Rotate closed subpaths so their starting points line up.
    pub align_points: bool,
    /// Per-axis tolerance used to decide whether a subpath is closed.
    pub closed_tolerance: f64,
}

impl Default for CurveMorpherOpts {
    fn default() -> Self {
        Self {
            align_points: true,
            closed_tolerance: 0.5,
        }
    }
}

impl CurveMorpherOpts {
    pub fn validate(&self) -> MorphResult<()> {
        if !self.closed_tolerance.is_finite() || self.closed_tolerance < 0.0 {
            return Err(MorphError::validation(
                "closed_tolerance must be finite and >= 0",
            ));
        }
        Ok(())
    }

    fn align_opts(&self) -> AlignOpts {
        AlignOpts {
            rotate: self.align_points,
            closed_tolerance: self.closed_tolerance,
        }
    }
}

type AlignedPair = (PathDocument, PathDocument);

/// Cubic-subdivision morpher with per-instance parse and alignment caches.
#[derive(Debug, Default)]
pub struct CurveMorpher {
    opts: CurveMorpherOpts,
    parsed: Memo<String, PathDocument>,
    aligned: Memo<(String, String), AlignedPair>,
}

impl CurveMorpher {
    pub fn new(opts: CurveMorpherOpts) -> Self {
        Self {
            opts,
            ..Self::default()
        }
    }

    pub fn opts(&self) -> CurveMorpherOpts {
        self.opts
    }

    /// Drop every cached parse and alignment.
    pub fn clear(&self) {
        self.parsed.clear();
        self.aligned.clear();
    }

    /// Parse `data`, treating malformed input as an empty document.
    fn parsed(&self, data: &str) -> Arc<PathDocument> {
        self.parsed.get_or_insert_with(data.to_owned(), || {
            parse(data).unwrap_or_else(|err| {
                tracing::warn!(%err, "path data failed to parse, morph will snap");
                PathDocument::default()
            })
        })
    }

    fn aligned(&self, from: &str, to: &str) -> Option<Arc<AlignedPair>> {
        let a = self.parsed(from);
        let b = self.parsed(to);
        if a.is_empty() || b.is_empty() {
            return None;
        }
        let key = (from.to_owned(), to.to_owned());
        Some(self.aligned.get_or_insert_with(key, || {
            tracing::debug!(
                from_subpaths = a.len(),
                to_subpaths = b.len(),
                "aligning path pair"
            );
            align(&a, &b, self.opts.align_opts())
        }))
    }
}

impl Morpher for CurveMorpher {
    fn create_interpolator(&self, from: &str, to: &str) -> Interpolator {
        let Some(pair) = self.aligned(from, to) else {
            return Interpolator::snap(from, to);
        };
        Interpolator::new(from, to, move |t| {
            let (a, b) = &*pair;
            let frames: Vec<Subpath> = a
                .subpaths
                .iter()
                .zip(&b.subpaths)
                .map(|(sa, sb)| lerp_subpath(sa, sb, t))
                .collect();
            write_cubic_path(frames.iter().map(|s| s.segments.as_slice()))
        })
    }

    fn dispose(&self) {
        self.clear();
    }

    fn name(&self) -> &'static str {
        "curve"
    }
}

fn lerp_subpath(a: &Subpath, b: &Subpath, t: f64) -> Subpath {
    let segments = a
        .segments
        .iter()
        .zip(&b.segments)
        .map(|(s, e)| {
            CubicBez::new(
                lerp_point(s.p0, e.p0, t),
                lerp_point(s.p1, e.p1, t),
                lerp_point(s.p2, e.p2, t),
                lerp_point(s.p3, e.p3, t),
            )
        })
        .collect();
    Subpath::new(segments)
}

#[cfg(test)]
#[path = "../../tests/unit/morph/curve.rs"]
mod tests;
