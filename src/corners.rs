//! Placing the notional circle in a corner.
//!
//! A circle of diameter `aperture` is pressed into the interior angle of
//! the corner. The two points where it meets the adjacent edges bound the
//! ink trap; the distance from the corner to its center decides whether
//! the corner is sharp enough to deserve one.

use kurbo::Point;

use crate::error::RejectReason;
use crate::geom::{
    angle_at, bearing_angle, cathetus_from_cathetus_angle, circle_area, distance, hypotenuse,
    point_at_angle_distance, triangle_area,
};
use crate::node::CornerContext;

/// Geometry of a corner that can host a trap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolvedCorner {
    /// Interior angle at the corner, degrees.
    pub angle: f64,
    /// Distance from the corner to each intersection.
    pub half_chord: f64,
    /// Distance from the corner to the circle center.
    pub center_distance: f64,
    pub center: Point,
    /// Intersection on the edge towards the previous node.
    pub toward_prev: Point,
    /// Intersection on the edge towards the next node.
    pub toward_next: Point,
    /// Circle area over the area of the (prev, corner, next) triangle.
    /// Infinite when the triangle area rounds to zero.
    pub coverage: f64,
}

impl SolvedCorner {
    /// Midpoint of the chord between the two intersections.
    pub fn chord_midpoint(&self) -> Point {
        self.toward_prev.midpoint(self.toward_next)
    }
}

/// Find where a circle of diameter `aperture` touches both edges of the corner.
///
/// The circle center is placed at half the corner angle from whichever
/// edge bearing is numerically smaller. This is a fixed convention and does
/// not depend on which neighbor is `prev`, so reversing the path yields the
/// same center.
pub fn solve_corner(
    ctx: &CornerContext,
    aperture: f64,
    threshold: f64,
) -> Result<SolvedCorner, RejectReason> {
    ctx.validate()?;
    if !(aperture.is_finite() && aperture > 0.0) {
        return Err(RejectReason::InvalidParameter {
            name: "aperture",
            value: aperture,
        });
    }

    let corner = ctx.corner.point;
    let prev = ctx.prev.point;
    let next = ctx.next.point;

    let angle = angle_at(corner, prev, next)?;
    let radius = aperture / 2.0;
    let half_chord = cathetus_from_cathetus_angle(radius, angle / 2.0)?;

    let prev_edge = distance(corner, prev);
    let next_edge = distance(corner, next);
    let shorter = prev_edge.min(next_edge);
    if half_chord > shorter {
        return Err(RejectReason::ApertureTooLarge {
            half_chord,
            edge: shorter,
        });
    }

    let bearing_prev = bearing_angle(corner, prev);
    let bearing_next = bearing_angle(corner, next);
    let toward_prev = point_at_angle_distance(corner, bearing_prev, half_chord);
    let toward_next = point_at_angle_distance(corner, bearing_next, half_chord);

    let center_distance = hypotenuse(radius, half_chord);
    let base = bearing_prev.min(bearing_next);
    let center = point_at_angle_distance(corner, base + angle / 2.0, center_distance);

    let ratio = center_distance / aperture;
    if ratio < threshold {
        return Err(RejectReason::BelowThreshold { ratio, threshold });
    }

    // Informational only: thin corners can round the area to zero.
    let triangle = triangle_area(prev_edge, next_edge, distance(prev, next));
    let coverage = if triangle > 0.0 {
        circle_area(radius) / triangle
    } else {
        f64::INFINITY
    };

    log::debug!(
        "corner at ({:.1}, {:.1}): angle {:.2}\u{00b0}, half chord {:.2}, ratio {:.3}, coverage {:.3}",
        corner.x, corner.y, angle, half_chord, ratio, coverage,
    );

    Ok(SolvedCorner {
        angle,
        half_chord,
        center_distance,
        center,
        toward_prev,
        toward_next,
        coverage,
    })
}
