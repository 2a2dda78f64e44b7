//! Straight-edged notch.

use kurbo::Point;

use crate::corners::SolvedCorner;
use crate::node::Node;

/// Intersection, displaced corner, intersection; all sharp line nodes.
pub fn nodes(solved: &SolvedCorner, displaced: Point) -> Vec<Node> {
    vec![
        Node::line(solved.toward_prev),
        Node::line(displaced),
        Node::line(solved.toward_next),
    ]
}
