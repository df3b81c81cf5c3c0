//! Elliptical arc to cubic conversion.
//!
//! Endpoint parameterization is converted to center parameterization, the sweep is split
//! into pieces of at most a quarter turn, and each piece gets the classic
//! `4/3 * tan(theta / 4)` handle length.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::{
    foundation::core::{CubicBez, Point, Vec2},
    path::model::line_cubic,
};

/// Approximate the SVG arc from `from` to `to` with cubic segments.
///
/// Zero radii and coincident endpoints degrade to a single straight cubic.
pub fn arc_to_cubics(
    from: Point,
    radii: Vec2,
    x_rotation_deg: f64,
    large_arc: bool,
    sweep: bool,
    to: Point,
) -> Vec<CubicBez> {
    let mut rx = radii.x.abs();
    let mut ry = radii.y.abs();
    if rx == 0.0 || ry == 0.0 {
        return vec![line_cubic(from, to)];
    }

    let (sin_phi, cos_phi) = x_rotation_deg.to_radians().sin_cos();

    // Midpoint difference in the ellipse's rotated frame.
    let hx = (from.x - to.x) / 2.0;
    let hy = (from.y - to.y) / 2.0;
    let xp = cos_phi * hx + sin_phi * hy;
    let yp = -sin_phi * hx + cos_phi * hy;

    let xp_sq = xp * xp;
    let yp_sq = yp * yp;

    let lambda = xp_sq / (rx * rx) + yp_sq / (ry * ry);
    if lambda > 1.0 {
        let scale = lambda.sqrt();
        rx *= scale;
        ry *= scale;
    }
    let rx_sq = rx * rx;
    let ry_sq = ry * ry;

    let denom = rx_sq * yp_sq + ry_sq * xp_sq;
    if denom == 0.0 {
        return vec![line_cubic(from, to)];
    }

    let mut coef = ((rx_sq * ry_sq - denom) / denom).max(0.0).sqrt();
    if large_arc == sweep {
        coef = -coef;
    }
    let cxp = coef * rx * yp / ry;
    let cyp = -coef * ry * xp / rx;

    let cx = cos_phi * cxp - sin_phi * cyp + (from.x + to.x) / 2.0;
    let cy = sin_phi * cxp + cos_phi * cyp + (from.y + to.y) / 2.0;

    let ux = (xp - cxp) / rx;
    let uy = (yp - cyp) / ry;
    let vx = (-xp - cxp) / rx;
    let vy = (-yp - cyp) / ry;

    let theta1 = vector_angle(1.0, 0.0, ux, uy);
    let mut dtheta = vector_angle(ux, uy, vx, vy);
    if !sweep && dtheta > 0.0 {
        dtheta -= TAU;
    }
    if sweep && dtheta < 0.0 {
        dtheta += TAU;
    }

    let pieces = ((dtheta.abs() / FRAC_PI_2).ceil() as usize).max(1);
    let step = dtheta / pieces as f64;
    let alpha = 4.0 / 3.0 * (step / 4.0).tan();

    let to_user = |x: f64, y: f64| {
        Point::new(cos_phi * x - sin_phi * y + cx, sin_phi * x + cos_phi * y + cy)
    };

    let mut out = Vec::with_capacity(pieces);
    for i in 0..pieces {
        let a1 = theta1 + i as f64 * step;
        let a2 = theta1 + (i + 1) as f64 * step;
        let (sin1, cos1) = a1.sin_cos();
        let (sin2, cos2) = a2.sin_cos();

        let e1 = (rx * cos1, ry * sin1);
        let e2 = (rx * cos2, ry * sin2);
        let c1 = (e1.0 - alpha * rx * sin1, e1.1 + alpha * ry * cos1);
        let c2 = (e2.0 + alpha * rx * sin2, e2.1 - alpha * ry * cos2);

        out.push(CubicBez::new(
            to_user(e1.0, e1.1),
            to_user(c1.0, c1.1),
            to_user(c2.0, c2.1),
            to_user(e2.0, e2.1),
        ));
    }

    // Pin the chain to the exact requested endpoints so continuity survives rounding.
    if let Some(first) = out.first_mut() {
        first.p0 = from;
    }
    if let Some(last) = out.last_mut() {
        last.p3 = to;
    }
    out
}

/// Signed angle from `u` to `v`.
fn vector_angle(ux: f64, uy: f64, vx: f64, vy: f64) -> f64 {
    let dot = ux * vx + uy * vy;
    let len = ((ux * ux + uy * uy) * (vx * vx + vy * vy)).sqrt();
    if len == 0.0 {
        return 0.0;
    }
    let angle = (dot / len).clamp(-1.0, 1.0).acos();
    if ux * vy - uy * vx < 0.0 { -angle } else { angle }
}

#[cfg(test)]
#[path = "../../tests/unit/path/arc.rs"]
mod tests;
