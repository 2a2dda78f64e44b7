//! Replacement geometry for a solved corner.
//!
//! The original corner is displaced away from the chord between the two
//! intersections by `depth`, then one of three styles decides which nodes
//! stand in for it. Nodes are emitted in path order, from the edge
//! towards the previous node to the edge towards the next one.

mod curved;
mod flat_top;
mod straight;

use kurbo::Point;

use crate::config::{InktrapParameters, InktrapStyle};
use crate::corners::SolvedCorner;
use crate::error::RejectReason;
use crate::node::{CornerContext, Node};

/// Nodes that replace one corner node, plus the geometry they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Replacement {
    /// Spliced into the path in place of the corner, in path order.
    pub nodes: Vec<Node>,
    /// Angle, intersections, circle center and coverage of the corner.
    /// The center is a construction point, not part of the outline.
    pub solved: SolvedCorner,
    /// Corner position after applying `depth`.
    pub displaced_corner: Point,
}

pub type InktrapResult = Result<Replacement, RejectReason>;

/// Build the nodes that replace `ctx.corner`.
pub fn build_replacement(
    ctx: &CornerContext,
    params: &InktrapParameters,
    solved: &SolvedCorner,
) -> InktrapResult {
    params.validate()?;

    let depth = match params.style {
        // An oversized plateau drops back to the undisplaced straight trap.
        InktrapStyle::FlatTop if params.flat_top_size >= params.aperture => 0.0,
        _ => params.depth,
    };
    let displaced = displace(ctx.corner.point, solved.chord_midpoint(), depth);
    let nodes = match params.style {
        InktrapStyle::Straight => straight::nodes(solved, displaced),
        InktrapStyle::Curved => curved::nodes(ctx, solved, displaced),
        InktrapStyle::FlatTop => flat_top::nodes(solved, displaced, params),
    };

    Ok(Replacement {
        nodes,
        solved: *solved,
        displaced_corner: displaced,
    })
}

/// Push `corner` away from `midpoint` by `depth` times their offset.
fn displace(corner: Point, midpoint: Point, depth: f64) -> Point {
    if depth == 0.0 {
        return corner;
    }
    corner + (corner - midpoint) * depth
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corners::solve_corner;
    use crate::node::NodeKind;

    const TOLERANCE: f64 = 1e-6;

    fn assert_point(actual: Point, x: f64, y: f64) {
        assert!(
            (actual.x - x).abs() < TOLERANCE && (actual.y - y).abs() < TOLERANCE,
            "expected ({x}, {y}), got ({}, {})",
            actual.x,
            actual.y
        );
    }

    fn right_angle() -> CornerContext {
        CornerContext::new(
            Node::line((-100.0, 0.0)),
            Node::line((0.0, 100.0)),
            Node::line((100.0, 0.0)),
        )
    }

    fn params(style: InktrapStyle, depth: f64, flat_top_size: f64) -> InktrapParameters {
        InktrapParameters {
            aperture: 20.0,
            threshold: 0.0,
            depth,
            style,
            flat_top_size,
        }
    }

    fn replace(p: &InktrapParameters) -> Replacement {
        let ctx = right_angle();
        let solved = solve_corner(&ctx, p.aperture, p.threshold).unwrap();
        build_replacement(&ctx, p, &solved).unwrap()
    }

    fn points(r: &Replacement) -> Vec<Point> {
        r.nodes.iter().map(|n| n.point).collect()
    }

    #[test]
    fn straight_reference_scenario() {
        let r = replace(&params(InktrapStyle::Straight, 1.0, 0.0));

        assert_eq!(r.nodes.len(), 3);
        assert_point(r.nodes[0].point, -10.0, 90.0);
        // Chord midpoint (0, 90), so depth 1 lands at (0, 110).
        assert_point(r.nodes[1].point, 0.0, 110.0);
        assert_point(r.nodes[2].point, 10.0, 90.0);
        assert!(r.nodes.iter().all(|n| n.kind == NodeKind::Line && !n.smooth));
        assert_point(r.solved.center, 0.0, 100.0 - 300f64.sqrt());
        assert!((r.solved.angle - 90.0).abs() < TOLERANCE);
    }

    #[test]
    fn zero_depth_keeps_the_corner() {
        let r = replace(&params(InktrapStyle::Straight, 0.0, 0.0));
        assert_eq!(r.displaced_corner, Point::new(0.0, 100.0));
        assert_eq!(r.nodes[1].point, Point::new(0.0, 100.0));
    }

    #[test]
    fn negative_depth_pulls_the_corner_inwards() {
        let r = replace(&params(InktrapStyle::Straight, -0.5, 0.0));
        assert_point(r.displaced_corner, 0.0, 95.0);
    }

    #[test]
    fn flat_top_of_zero_matches_straight() {
        let straight = replace(&params(InktrapStyle::Straight, 1.0, 0.0));
        let flat = replace(&params(InktrapStyle::FlatTop, 1.0, 0.0));
        assert_eq!(flat, straight);
    }

    #[test]
    fn oversized_flat_top_falls_back_to_undisplaced_straight() {
        let undisplaced = replace(&params(InktrapStyle::Straight, 0.0, 0.0));
        for size in [20.0, 25.0, 35.0] {
            let flat = replace(&params(InktrapStyle::FlatTop, 1.0, size));
            assert_eq!(flat, undisplaced);
            assert_point(flat.nodes[1].point, 0.0, 100.0);
        }
    }

    #[test]
    fn flat_top_cuts_the_tip() {
        let r = replace(&params(InktrapStyle::FlatTop, 1.0, 5.0));
        let pts = points(&r);

        assert_eq!(pts.len(), 4);
        assert_point(pts[0], -10.0, 90.0);
        // A quarter of the way from (0, 110) towards each intersection.
        assert_point(pts[1], -2.5, 105.0);
        assert_point(pts[2], 2.5, 105.0);
        assert_point(pts[3], 10.0, 90.0);
        assert!(!pts.contains(&r.displaced_corner));
    }

    #[test]
    fn flat_top_without_depth_is_a_bevel() {
        let r = replace(&params(InktrapStyle::FlatTop, 0.0, 5.0));
        let pts = points(&r);

        assert_eq!(pts.len(), 2);
        assert_point(pts[0], -2.5, 97.5);
        assert_point(pts[1], 2.5, 97.5);
    }

    #[test]
    fn curved_nodes_and_flags() {
        let r = replace(&params(InktrapStyle::Curved, 1.0, 0.0));
        let kinds: Vec<NodeKind> = r.nodes.iter().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Line,
                NodeKind::OffCurve,
                NodeKind::OffCurve,
                NodeKind::Curve,
                NodeKind::OffCurve,
                NodeKind::OffCurve,
                NodeKind::Curve,
            ]
        );
        assert!(r.nodes[0].smooth);
        assert!(r.nodes[6].smooth);
        assert!(!r.nodes[3].smooth);
        assert_point(r.nodes[0].point, -10.0, 90.0);
        assert_point(r.nodes[3].point, 0.0, 110.0);
        assert_point(r.nodes[6].point, 10.0, 90.0);
    }

    #[test]
    fn curved_handles_continue_the_edges() {
        let r = replace(&params(InktrapStyle::Curved, 1.0, 0.0));

        // The edge from (-100, 0) runs at 45°; the handle continues it by a
        // third of the distance to the displaced corner.
        let reach = Point::new(-10.0, 90.0).distance(Point::new(0.0, 110.0)) / 3.0;
        let step = reach / 2f64.sqrt();
        assert_point(r.nodes[1].point, -10.0 + step, 90.0 + step);
        assert_point(r.nodes[5].point, 10.0 - step, 90.0 + step);

        // Inner handles average the outer one with the point a third of the
        // way from the displaced corner to the intersection.
        let third = Point::new(0.0, 110.0).lerp(Point::new(-10.0, 90.0), 1.0 / 3.0);
        let inner = r.nodes[1].point.midpoint(third);
        assert_point(r.nodes[2].point, inner.x, inner.y);
        assert_point(r.nodes[4].point, -inner.x, inner.y);
    }

    #[test]
    fn reversed_corner_reverses_the_nodes() {
        let ctx = right_angle();
        let p = params(InktrapStyle::Straight, 1.0, 0.0);
        let forward = build_replacement(&ctx, &p, &solve_corner(&ctx, 20.0, 0.0).unwrap()).unwrap();
        let rev = ctx.reversed();
        let backward = build_replacement(&rev, &p, &solve_corner(&rev, 20.0, 0.0).unwrap()).unwrap();

        let mut reversed = points(&backward);
        reversed.reverse();
        for (a, b) in points(&forward).iter().zip(&reversed) {
            assert_point(*b, a.x, a.y);
        }
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let ctx = right_angle();
        let solved = solve_corner(&ctx, 20.0, 0.0).unwrap();
        let p = params(InktrapStyle::FlatTop, 1.0, -3.0);
        assert!(matches!(
            build_replacement(&ctx, &p, &solved),
            Err(RejectReason::InvalidParameter { .. })
        ));
    }
}
