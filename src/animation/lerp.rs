use crate::foundation::core::{Rgba8, Size};

/// Interpolation contract for animated attribute types.
///
/// Points and vectors use kurbo's inherent `lerp` instead.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Size {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Size::new(
            a.width + (b.width - a.width) * t,
            a.height + (b.height - a.height) * t,
        )
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

/// Optional attributes: present on both sides lerp, present on one side fade through the
/// "empty" value supplied by `absent`, absent on both stays absent.
pub(crate) fn lerp_option<T: Lerp + Clone>(
    a: &Option<T>,
    b: &Option<T>,
    t: f64,
    absent: impl Fn(&T) -> T,
) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(T::lerp(a, b, t)),
        (Some(a), None) => {
            if t >= 1.0 {
                None
            } else {
                Some(T::lerp(a, &absent(a), t))
            }
        }
        (None, Some(b)) => {
            if t <= 0.0 {
                None
            } else {
                Some(T::lerp(&absent(b), b, t))
            }
        }
        (None, None) => None,
    }
}
