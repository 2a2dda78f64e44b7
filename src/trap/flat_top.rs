//! Notch with its tip cut off.
//!
//! Works like the chamfer on a plain corner, applied to the displaced
//! corner of the trap: the tip is replaced by two points moved towards
//! the intersections, leaving a plateau.

use kurbo::Point;

use crate::config::InktrapParameters;
use crate::corners::SolvedCorner;
use crate::node::Node;

use super::straight;

pub fn nodes(solved: &SolvedCorner, displaced: Point, params: &InktrapParameters) -> Vec<Node> {
    let size = params.flat_top_size;
    // A plateau wider than the trap itself would cross the intersections;
    // the caller has already dropped the displacement for that case.
    if size <= 0.0 || size >= params.aperture {
        return straight::nodes(solved, displaced);
    }

    let factor = size / params.aperture;
    let left = Node::line(displaced.lerp(solved.toward_prev, factor));
    let right = Node::line(displaced.lerp(solved.toward_next, factor));

    // Without depth the intersections sit on the original edges, so only
    // the bevel is left.
    if params.depth == 0.0 {
        return vec![left, right];
    }

    vec![
        Node::line(solved.toward_prev),
        left,
        right,
        Node::line(solved.toward_next),
    ]
}
