//! Editable contours and batch ink trap application.

use kurbo::{BezPath, PathEl, Point};
use rayon::prelude::*;

use crate::config::InktrapParameters;
use crate::create_inktrap;
use crate::error::{InktrapError, RejectReason};
use crate::node::{CornerContext, Node, NodeKind};
use crate::trap::InktrapResult;

/// Handles within this cosine of straight are treated as tangent-continuous.
const SMOOTH_COS: f64 = 0.9999;

/// An ordered run of nodes. Closed contours are cyclic.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub nodes: Vec<Node>,
    pub closed: bool,
}

/// What happened at one requested corner.
#[derive(Debug, Clone, PartialEq)]
pub struct CornerOutcome {
    /// Index of the corner in the contour before any splicing.
    pub index: usize,
    pub result: InktrapResult,
}

impl Contour {
    pub fn new(nodes: Vec<Node>, closed: bool) -> Self {
        Contour { nodes, closed }
    }

    /// Closed contour of sharp line nodes.
    pub fn polygon(points: &[Point]) -> Self {
        Contour::new(points.iter().map(|&p| Node::line(p)).collect(), true)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn prev_index(&self, index: usize) -> Option<usize> {
        let n = self.nodes.len();
        if index >= n {
            None
        } else if index > 0 {
            Some(index - 1)
        } else if self.closed && n > 1 {
            Some(n - 1)
        } else {
            None
        }
    }

    pub fn next_index(&self, index: usize) -> Option<usize> {
        let n = self.nodes.len();
        if index + 1 < n {
            Some(index + 1)
        } else if index < n && self.closed && n > 1 {
            Some(0)
        } else {
            None
        }
    }

    /// The node at `index` with its neighbors.
    pub fn corner_context(&self, index: usize) -> Result<CornerContext, RejectReason> {
        let corner = *self
            .nodes
            .get(index)
            .ok_or_else(|| RejectReason::InvalidCorner(format!("no node at index {index}")))?;
        let prev = self
            .prev_index(index)
            .ok_or_else(|| RejectReason::InvalidCorner("node has no previous node".into()))?;
        let next = self
            .next_index(index)
            .ok_or_else(|| RejectReason::InvalidCorner("node has no next node".into()))?;
        if prev == next {
            return Err(RejectReason::InvalidCorner("contour has fewer than three nodes".into()));
        }
        Ok(CornerContext::new(self.nodes[prev], corner, self.nodes[next]))
    }

    /// Sharp on-curve nodes between two on-curve neighbors.
    pub fn corner_candidates(&self) -> Vec<usize> {
        (0..self.nodes.len())
            .filter(|&i| {
                self.nodes[i].is_corner()
                    && self
                        .corner_context(i)
                        .map_or(false, |ctx| ctx.prev.kind.is_on_curve() && ctx.next.kind.is_on_curve())
            })
            .collect()
    }

    /// Replace the node at `index` with `replacement`.
    pub fn splice(&mut self, index: usize, replacement: &[Node]) {
        self.nodes.splice(index..=index, replacement.iter().copied());
    }

    /// Convert to a `kurbo::BezPath`.
    ///
    /// Closed contours start at their first on-curve node. A contour made
    /// only of off-curve points has no such node and yields an empty path.
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        let n = self.nodes.len();
        let Some(start) = self.nodes.iter().position(|node| node.kind.is_on_curve()) else {
            return path;
        };

        path.move_to(self.nodes[start].point);
        let steps = if self.closed { n } else { n - start - 1 };
        let mut pending: Vec<Point> = Vec::new();
        for k in 1..=steps {
            let node = self.nodes[(start + k) % n];
            if !node.kind.is_on_curve() {
                pending.push(node.point);
                continue;
            }
            let closing = k == n;
            if !(closing && pending.is_empty() && node.kind == NodeKind::Line) {
                segment_to(&mut path, node, &pending);
            }
            pending.clear();
        }

        if self.closed {
            path.close_path();
        }
        path
    }

    /// Build a contour from a `kurbo::BezPath` holding one subpath.
    ///
    /// If the last on-curve point returns to the start it is folded into
    /// the first node, which then carries the closing segment's type.
    /// On-curve nodes whose handles are tangent-continuous are marked smooth.
    pub fn from_bezpath(path: &BezPath) -> Result<Contour, InktrapError> {
        let elements = path.elements();
        let first = match elements.first() {
            Some(PathEl::MoveTo(p)) => *p,
            _ => return Err(InktrapError::InvalidPath("path must start with MoveTo".into())),
        };

        let mut closed = false;
        let mut nodes: Vec<Node> = Vec::new();
        for el in elements.iter().skip(1) {
            match *el {
                PathEl::LineTo(p) => nodes.push(Node::line(p)),
                PathEl::QuadTo(a, p) => {
                    nodes.push(Node::off_curve(a));
                    nodes.push(Node::new(p, NodeKind::QCurve, false));
                }
                PathEl::CurveTo(a, b, p) => {
                    nodes.push(Node::off_curve(a));
                    nodes.push(Node::off_curve(b));
                    nodes.push(Node::new(p, NodeKind::Curve, false));
                }
                PathEl::ClosePath => closed = true,
                PathEl::MoveTo(_) => {
                    return Err(InktrapError::InvalidPath("unexpected MoveTo mid-path".into()))
                }
            }
        }

        let first_kind = if !closed {
            NodeKind::Move
        } else {
            match nodes.last() {
                Some(last) if last.point == first => {
                    let kind = last.kind;
                    nodes.pop();
                    kind
                }
                _ => NodeKind::Line,
            }
        };
        nodes.insert(0, Node::new(first, first_kind, false));

        let mut contour = Contour::new(nodes, closed);
        contour.mark_smooth();
        Ok(contour)
    }

    fn mark_smooth(&mut self) {
        for i in 0..self.nodes.len() {
            let node = self.nodes[i];
            if !node.kind.is_on_curve() {
                continue;
            }
            let (Some(p), Some(n)) = (self.prev_index(i), self.next_index(i)) else {
                continue;
            };
            let (prev, next) = (self.nodes[p], self.nodes[n]);
            if prev.kind.is_on_curve() && next.kind.is_on_curve() {
                continue;
            }
            let v_in = node.point - prev.point;
            let v_out = next.point - node.point;
            let len = v_in.hypot() * v_out.hypot();
            if len > 0.0 && v_in.dot(v_out) / len > SMOOTH_COS {
                self.nodes[i].smooth = true;
            }
        }
    }
}

fn segment_to(path: &mut BezPath, node: Node, offs: &[Point]) {
    let p = node.point;
    match (node.kind, offs) {
        (_, []) => path.line_to(p),
        (_, &[a]) => path.quad_to(a, p),
        (NodeKind::Curve, &[a, b]) => path.curve_to(a, b, p),
        (NodeKind::QCurve, _) => {
            // TrueType spline: implied on-curve points between off-curves.
            for pair in offs.windows(2) {
                path.quad_to(pair[0], pair[0].midpoint(pair[1]));
            }
            if let Some(&last) = offs.last() {
                path.quad_to(last, p);
            }
        }
        (_, _) => {
            log::warn!(
                "{} off-curve points before ({:.1}, {:.1}); using the outer two",
                offs.len(),
                p.x,
                p.y
            );
            path.curve_to(offs[0], offs[offs.len() - 1], p);
        }
    }
}

/// Add ink traps at the given node indices of `contour`.
///
/// Corners are evaluated in parallel against the unmodified contour, then
/// accepted replacements are spliced from the highest index down so the
/// remaining indices stay valid. A rejected corner leaves its node as is
/// and does not affect the others.
///
/// Two neighboring corners share an edge. When both are accepted and their
/// intersections would pass each other on that edge, the second one in
/// path order is rejected with [`RejectReason::ApertureTooLarge`].
pub fn apply_inktraps(
    contour: &Contour,
    indices: &[usize],
    params: &InktrapParameters,
) -> (Contour, Vec<CornerOutcome>) {
    let mut indices = indices.to_vec();
    indices.sort_unstable();
    indices.dedup();

    let mut outcomes: Vec<CornerOutcome> = indices
        .par_iter()
        .map(|&index| CornerOutcome {
            index,
            result: contour
                .corner_context(index)
                .and_then(|ctx| create_inktrap(&ctx, params)),
        })
        .collect();
    reject_overlapping(contour, &mut outcomes);

    let mut result = contour.clone();
    for outcome in outcomes.iter().rev() {
        match &outcome.result {
            Ok(replacement) => result.splice(outcome.index, &replacement.nodes),
            Err(reason) => log::info!("node {}: {}", outcome.index, reason),
        }
    }
    (result, outcomes)
}

/// `outcomes` must be sorted by index.
fn reject_overlapping(contour: &Contour, outcomes: &mut [CornerOutcome]) {
    for k in 0..outcomes.len() {
        let (index, reach) = match &outcomes[k].result {
            Ok(r) => (outcomes[k].index, r.solved.half_chord),
            Err(_) => continue,
        };
        let Some(next) = contour.next_index(index) else {
            continue;
        };
        let Ok(j) = outcomes.binary_search_by_key(&next, |o| o.index) else {
            continue;
        };
        let next_reach = match &outcomes[j].result {
            Ok(r) => r.solved.half_chord,
            Err(_) => continue,
        };
        let edge = contour.nodes[index].point.distance(contour.nodes[next].point);
        if reach + next_reach > edge {
            outcomes[j].result = Err(RejectReason::ApertureTooLarge {
                half_chord: next_reach,
                edge: edge - reach,
            });
        }
    }
}
