use crate::foundation::core::Point;

/// Map `value` from `[from_a, from_b]` onto `[to_a, to_b]`, clamping to the target range.
///
/// A zero-width source range acts as a step at `from_a`.
pub fn clamp_remap(from_a: f64, from_b: f64, to_a: f64, to_b: f64, value: f64) -> f64 {
    let span = from_b - from_a;
    let t = if span.abs() <= f64::EPSILON {
        if value < from_a { 0.0 } else { 1.0 }
    } else {
        ((value - from_a) / span).clamp(0.0, 1.0)
    };
    to_a + (to_b - to_a) * t
}

#[inline]
pub(crate) fn lerp_f64(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
pub(crate) fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    Point::new(lerp_f64(a.x, b.x, t), lerp_f64(a.y, b.y, t))
}

#[inline]
pub(crate) fn dist2(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

pub(crate) fn is_finite_point(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
