//! Triangle and circle primitives used to size an ink trap.
//!
//! Angles are in degrees throughout.

use std::f64::consts::PI;

use kurbo::{Point, Vec2};

use crate::error::RejectReason;

/// Below this, `sin` of an angle is treated as zero.
const SIN_EPSILON: f64 = 1e-12;

/// Euclidean distance between two points.
pub fn distance(p: Point, q: Point) -> f64 {
    p.distance(q)
}

/// Interior angle at `corner` between the rays to `a` and `b`, in (0, 180).
///
/// Law of cosines on the triangle (corner, a, b). The cosine is clamped to
/// [-1, 1] so floating-point overshoot on near-collinear corners does not
/// produce NaN; fully collinear or zero-length configurations fail.
pub fn angle_at(corner: Point, a: Point, b: Point) -> Result<f64, RejectReason> {
    let side_a = distance(corner, a);
    let side_b = distance(corner, b);
    let opposite = distance(a, b);
    if side_a == 0.0 || side_b == 0.0 {
        return Err(RejectReason::DegenerateTriangle);
    }

    let cos = (side_a * side_a + side_b * side_b - opposite * opposite) / (2.0 * (side_a * side_b));
    if !cos.is_finite() {
        return Err(RejectReason::DegenerateTriangle);
    }

    let angle = cos.clamp(-1.0, 1.0).acos().to_degrees();
    if angle <= 0.0 || angle >= 180.0 {
        return Err(RejectReason::DegenerateTriangle);
    }
    Ok(angle)
}

/// Direction of the ray from `from` to `to`, in (-180, 180].
pub fn bearing_angle(from: Point, to: Point) -> f64 {
    let angle = (to.y - from.y).atan2(to.x - from.x).to_degrees();
    if angle <= -180.0 {
        angle + 360.0
    } else {
        angle
    }
}

/// Polar offset from `origin`.
pub fn point_at_angle_distance(origin: Point, angle: f64, distance: f64) -> Point {
    origin + Vec2::from_angle(angle.to_radians()) * distance
}

/// Hypotenuse of a right triangle from one cathetus and its opposite angle.
pub fn cathetus_from_cathetus_angle(cathetus: f64, angle: f64) -> Result<f64, RejectReason> {
    let sin = angle.to_radians().sin();
    if sin.abs() < SIN_EPSILON {
        return Err(RejectReason::DegenerateTriangle);
    }
    Ok(cathetus / sin)
}

pub fn hypotenuse(c1: f64, c2: f64) -> f64 {
    c1.hypot(c2)
}

/// Triangle area from its side lengths (Heron's formula).
///
/// The radicand is clamped at zero so near-degenerate triangles give 0
/// instead of NaN.
pub fn triangle_area(a: f64, b: f64, c: f64) -> f64 {
    let s = (a + b + c) / 2.0;
    (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt()
}

pub fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}
