//! Outline nodes and the three-node window around a corner.

use kurbo::Point;

use crate::error::RejectReason;

/// Point type of a node, following the UFO convention.
///
/// On-curve kinds name the segment that ends at the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// First point of an open contour.
    Move,
    Line,
    Curve,
    QCurve,
    /// Bezier control point. Never a corner.
    OffCurve,
}

impl NodeKind {
    pub fn is_on_curve(self) -> bool {
        !matches!(self, NodeKind::OffCurve)
    }
}

/// A positioned node with its kind and smooth flag.
///
/// An on-curve node that is not smooth is a corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub point: Point,
    pub kind: NodeKind,
    pub smooth: bool,
}

impl Node {
    pub fn new(point: impl Into<Point>, kind: NodeKind, smooth: bool) -> Self {
        Node {
            point: point.into(),
            kind,
            smooth,
        }
    }

    /// A sharp on-curve node ending a line segment.
    pub fn line(point: impl Into<Point>) -> Self {
        Node::new(point, NodeKind::Line, false)
    }

    pub fn off_curve(point: impl Into<Point>) -> Self {
        Node::new(point, NodeKind::OffCurve, false)
    }

    pub fn is_corner(&self) -> bool {
        self.kind.is_on_curve() && !self.smooth
    }
}

/// A corner node together with its immediate neighbors in path order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerContext {
    pub prev: Node,
    pub corner: Node,
    pub next: Node,
}

impl CornerContext {
    pub fn new(prev: Node, corner: Node, next: Node) -> Self {
        CornerContext { prev, corner, next }
    }

    /// Check that the window describes a usable line-line corner.
    pub fn validate(&self) -> Result<(), RejectReason> {
        if !self.corner.kind.is_on_curve() {
            return Err(RejectReason::InvalidCorner("node is an off-curve point".into()));
        }
        if !self.prev.kind.is_on_curve() || !self.next.kind.is_on_curve() {
            return Err(RejectReason::InvalidCorner(
                "neighbor is an off-curve point".into(),
            ));
        }
        let (p, c, n) = (self.prev.point, self.corner.point, self.next.point);
        if p == c || c == n || p == n {
            return Err(RejectReason::InvalidCorner("zero-length edge".into()));
        }
        Ok(())
    }

    /// The same corner walked in the opposite direction.
    pub fn reversed(&self) -> Self {
        CornerContext {
            prev: self.next,
            corner: self.corner,
            next: self.prev,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_curve_neighbors_are_rejected() {
        let ctx = CornerContext::new(
            Node::off_curve((0.0, 0.0)),
            Node::line((10.0, 10.0)),
            Node::line((20.0, 0.0)),
        );
        assert!(matches!(ctx.validate(), Err(RejectReason::InvalidCorner(_))));
        assert!(matches!(
            ctx.reversed().validate(),
            Err(RejectReason::InvalidCorner(_))
        ));
    }

    #[test]
    fn coincident_points_are_rejected() {
        let ctx = CornerContext::new(
            Node::line((0.0, 0.0)),
            Node::line((0.0, 0.0)),
            Node::line((20.0, 0.0)),
        );
        assert!(matches!(ctx.validate(), Err(RejectReason::InvalidCorner(_))));
    }

    #[test]
    fn smooth_nodes_are_not_corners() {
        assert!(Node::line((0.0, 0.0)).is_corner());
        assert!(!Node::new((0.0, 0.0), NodeKind::Curve, true).is_corner());
        assert!(!Node::off_curve((0.0, 0.0)).is_corner());
    }
}
