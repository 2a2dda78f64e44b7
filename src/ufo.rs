//! Ink traps on UFO glyphs.
//!
//! Contours are read from `norad` into [`Contour`]s for solving; accepted
//! replacements are spliced back into the original point lists so that
//! untouched points keep their names and identifiers.

use std::path::Path;

use norad::{ContourPoint, Glyph, PointType};

use crate::config::InktrapParameters;
use crate::contour::{apply_inktraps, Contour, CornerOutcome};
use crate::error::InktrapError;
use crate::node::{Node, NodeKind};

/// Which nodes of a glyph get a trap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every sharp on-curve node between two on-curve neighbors.
    AllCorners,
    /// Explicit `(contour, node)` indices.
    Nodes(Vec<(usize, usize)>),
}

/// A corner outcome tagged with its contour.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphOutcome {
    pub contour: usize,
    pub outcome: CornerOutcome,
}

/// Convert a `norad::Contour` to a [`Contour`].
///
/// A contour is open when its first point is a move.
pub fn contour_from_norad(contour: &norad::Contour) -> Contour {
    let nodes = contour
        .points
        .iter()
        .map(|p| Node::new((p.x, p.y), node_kind(&p.typ), p.smooth))
        .collect();
    let closed = !matches!(contour.points.first(), Some(p) if p.typ == PointType::Move);
    Contour::new(nodes, closed)
}

/// Convert a [`Contour`] to a `norad::Contour`.
pub fn contour_to_norad(contour: &Contour) -> norad::Contour {
    let points = contour.nodes.iter().map(contour_point).collect();
    norad::Contour::new(points, None, None)
}

fn node_kind(typ: &PointType) -> NodeKind {
    match typ {
        PointType::Move => NodeKind::Move,
        PointType::Line => NodeKind::Line,
        PointType::OffCurve => NodeKind::OffCurve,
        PointType::Curve => NodeKind::Curve,
        PointType::QCurve => NodeKind::QCurve,
    }
}

fn point_type(kind: NodeKind) -> PointType {
    match kind {
        NodeKind::Move => PointType::Move,
        NodeKind::Line => PointType::Line,
        NodeKind::OffCurve => PointType::OffCurve,
        NodeKind::Curve => PointType::Curve,
        NodeKind::QCurve => PointType::QCurve,
    }
}

fn contour_point(node: &Node) -> ContourPoint {
    ContourPoint::new(
        node.point.x,
        node.point.y,
        point_type(node.kind),
        node.smooth,
        None,
        None,
        None,
    )
}

/// Add ink traps to the selected nodes of `glyph`.
///
/// Selections are checked up front; an out-of-range index fails the whole
/// call and leaves the glyph unchanged. Per-corner rejections are reported
/// in the returned outcomes and never fail the call.
pub fn apply_to_glyph(
    glyph: &mut Glyph,
    selection: &Selection,
    params: &InktrapParameters,
) -> Result<Vec<GlyphOutcome>, InktrapError> {
    params.validate()?;

    let contours: Vec<Contour> = glyph.contours.iter().map(contour_from_norad).collect();
    let mut per_contour: Vec<Vec<usize>> = vec![Vec::new(); contours.len()];
    match selection {
        Selection::AllCorners => {
            for (indices, contour) in per_contour.iter_mut().zip(&contours) {
                *indices = contour.corner_candidates();
            }
        }
        Selection::Nodes(nodes) => {
            for &(contour, node) in nodes {
                let in_range = contours.get(contour).map_or(false, |c| node < c.len());
                if !in_range {
                    return Err(InktrapError::NodeOutOfRange { contour, node });
                }
                per_contour[contour].push(node);
            }
        }
    }

    let mut outcomes = Vec::new();
    for (contour_ix, (contour, indices)) in contours.iter().zip(&per_contour).enumerate() {
        if indices.is_empty() {
            continue;
        }
        let (_, contour_outcomes) = apply_inktraps(contour, indices, params);

        let points = &mut glyph.contours[contour_ix].points;
        for outcome in contour_outcomes.iter().rev() {
            if let Ok(replacement) = &outcome.result {
                let new_points: Vec<ContourPoint> =
                    replacement.nodes.iter().map(contour_point).collect();
                points.splice(outcome.index..=outcome.index, new_points);
            }
        }

        outcomes.extend(contour_outcomes.into_iter().map(|outcome| GlyphOutcome {
            contour: contour_ix,
            outcome,
        }));
    }
    Ok(outcomes)
}

/// Load a UFO, add traps to one glyph of its default layer, and save it in
/// place.
///
/// The font is written only when `save` is set and at least one corner was
/// accepted. With `save` unset this reports what would change.
pub fn inktrap_ufo(
    ufo_path: &Path,
    glyph_name: &str,
    selection: &Selection,
    params: &InktrapParameters,
    save: bool,
) -> Result<Vec<GlyphOutcome>, InktrapError> {
    let mut font = norad::Font::load(ufo_path)?;
    let glyph = font
        .default_layer_mut()
        .get_glyph_mut(glyph_name)
        .ok_or_else(|| InktrapError::GlyphNotFound(glyph_name.to_string()))?;
    let outcomes = apply_to_glyph(glyph, selection, params)?;
    if save && outcomes.iter().any(|o| o.outcome.result.is_ok()) {
        font.save(ufo_path)?;
    }
    Ok(outcomes)
}
