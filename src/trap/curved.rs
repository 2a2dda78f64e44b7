//! Notch drawn with cubic segments.
//!
//! Each side becomes a cubic from the intersection to the displaced
//! corner. The handle at the intersection continues the original edge by
//! a third of the segment's reach, so the intersection is smooth. The
//! handle near the displaced corner averages that point with the point a
//! third of the way from the displaced corner back to the intersection.

use kurbo::{Point, Vec2};

use crate::corners::SolvedCorner;
use crate::node::{CornerContext, Node, NodeKind};

pub fn nodes(ctx: &CornerContext, solved: &SolvedCorner, displaced: Point) -> Vec<Node> {
    let corner = ctx.corner.point;
    // Edge directions as travelled from each neighbor into the corner.
    let in_prev = (corner - ctx.prev.point).normalize();
    let in_next = (corner - ctx.next.point).normalize();

    let (outer_prev, inner_prev) = handles(solved.toward_prev, in_prev, displaced);
    let (outer_next, inner_next) = handles(solved.toward_next, in_next, displaced);

    vec![
        Node::new(solved.toward_prev, NodeKind::Line, true),
        Node::off_curve(outer_prev),
        Node::off_curve(inner_prev),
        Node::new(displaced, NodeKind::Curve, false),
        Node::off_curve(inner_next),
        Node::off_curve(outer_next),
        Node::new(solved.toward_next, NodeKind::Curve, true),
    ]
}

/// (handle at the intersection, handle near the displaced corner)
fn handles(intersection: Point, edge_dir: Vec2, displaced: Point) -> (Point, Point) {
    let reach = intersection.distance(displaced) / 3.0;
    let outer = intersection + edge_dir * reach;
    let third = displaced.lerp(intersection, 1.0 / 3.0);
    (outer, outer.midpoint(third))
}
