use crate::{
    foundation::core::{BezPath, CubicBez, Point},
    foundation::math::lerp_point,
    path::serialize,
};

/// One contiguous contour made of continuous cubic segments.
///
/// `segments[i + 1].p0 == segments[i].p3` for every `i`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Subpath {
    /// Ordered cubic segments.
    pub segments: Vec<CubicBez>,
}

impl Subpath {
    /// Wrap an ordered list of cubic segments.
    pub fn new(segments: Vec<CubicBez>) -> Self {
        Self { segments }
    }

    /// A single zero-length segment sitting at `p`.
    ///
    /// Used by the aligner as the counterpart of a subpath that has no partner, so the
    /// partner grows out of (or collapses into) a point.
    pub fn degenerate(p: Point) -> Self {
        Self::new(vec![CubicBez::new(p, p, p, p)])
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn first_point(&self) -> Option<Point> {
        self.segments.first().map(|s| s.p0)
    }

    pub fn last_point(&self) -> Option<Point> {
        self.segments.last().map(|s| s.p3)
    }

    /// Mean of every segment's start and end point; the origin for an empty subpath.
    pub fn centroid(&self) -> Point {
        if self.segments.is_empty() {
            return Point::ORIGIN;
        }
        let (sx, sy) = self.segments.iter().fold((0.0, 0.0), |(sx, sy), seg| {
            (sx + seg.p0.x + seg.p3.x, sy + seg.p0.y + seg.p3.y)
        });
        let count = (self.segments.len() * 2) as f64;
        Point::new(sx / count, sy / count)
    }

    /// Whether the contour ends where it starts, within `tolerance` on each axis.
    pub fn is_closed(&self, tolerance: f64) -> bool {
        match (self.first_point(), self.last_point()) {
            (Some(a), Some(b)) => (a.x - b.x).abs() < tolerance && (a.y - b.y).abs() < tolerance,
            _ => false,
        }
    }

    /// All four control points of every segment are equal.
    pub fn is_degenerate(&self) -> bool {
        self.segments
            .iter()
            .all(|s| s.p0 == s.p1 && s.p1 == s.p2 && s.p2 == s.p3)
    }

    /// Cyclic rotation so that `segments[offset]` becomes the first segment.
    pub fn rotated(&self, offset: usize) -> Self {
        if self.segments.is_empty() {
            return self.clone();
        }
        let offset = offset % self.segments.len();
        let mut segments = Vec::with_capacity(self.segments.len());
        segments.extend_from_slice(&self.segments[offset..]);
        segments.extend_from_slice(&self.segments[..offset]);
        Self::new(segments)
    }
}

/// A parsed path: an ordered list of subpaths. Order drives pairing during alignment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathDocument {
    /// Subpaths in source order.
    pub subpaths: Vec<Subpath>,
}

impl PathDocument {
    pub fn new(subpaths: Vec<Subpath>) -> Self {
        Self { subpaths }
    }

    pub fn len(&self) -> usize {
        self.subpaths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    /// Total number of cubic segments across all subpaths.
    pub fn segment_count(&self) -> usize {
        self.subpaths.iter().map(Subpath::len).sum()
    }

    /// Serialize as `M` plus one `C` per segment for every non-empty subpath.
    pub fn to_svg(&self) -> String {
        serialize::write_cubic_path(self.subpaths.iter().map(|s| s.segments.as_slice()))
    }

    /// Convert to a kurbo path for hosts that render through kurbo.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for sub in &self.subpaths {
            let Some(start) = sub.first_point() else {
                continue;
            };
            path.move_to(start);
            for seg in &sub.segments {
                path.curve_to(seg.p1, seg.p2, seg.p3);
            }
        }
        path
    }
}

/// Exact degree elevation of a straight line.
pub(crate) fn line_cubic(from: Point, to: Point) -> CubicBez {
    CubicBez::new(
        from,
        lerp_point(from, to, 1.0 / 3.0),
        lerp_point(from, to, 2.0 / 3.0),
        to,
    )
}

/// Exact degree elevation of a quadratic with control point `ctrl`.
pub(crate) fn quad_cubic(from: Point, ctrl: Point, to: Point) -> CubicBez {
    CubicBez::new(
        from,
        from + (ctrl - from) * (2.0 / 3.0),
        to + (ctrl - to) * (2.0 / 3.0),
        to,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/path/model.rs"]
mod tests;
