//! inktrap: notches at sharp corners of font outlines.
//!
//! An ink trap is a small notch carved into a sharp vertex so ink does not
//! pool there at small print sizes. The solver presses a notional circle
//! of a given aperture into the corner, finds where it touches both edges,
//! and replaces the corner with a straight, curved, or flat-topped notch.
//!
//! # Example
//!
//! ```
//! use inktrap::{create_inktrap, CornerContext, InktrapParameters, Node};
//!
//! let ctx = CornerContext::new(
//!     Node::line((-100.0, 0.0)),
//!     Node::line((0.0, 100.0)),
//!     Node::line((100.0, 0.0)),
//! );
//! let params = InktrapParameters { threshold: 0.0, ..InktrapParameters::default() };
//! let trap = create_inktrap(&ctx, &params)?;
//! assert_eq!(trap.nodes.len(), 3);
//! # Ok::<(), inktrap::RejectReason>(())
//! ```

#![forbid(unsafe_code)]

mod config;
mod contour;
mod corners;
mod geom;
mod node;
mod trap;

pub mod error;

#[cfg(feature = "ufo")]
pub mod ufo;

// Re-export kurbo so downstream users get the same `Point`.
pub use kurbo;
pub use kurbo::Point;

pub use config::{
    InktrapParameters, InktrapStyle, DEFAULT_APERTURE, DEFAULT_DEPTH, DEFAULT_FLAT_TOP_SIZE,
    DEFAULT_THRESHOLD,
};
pub use contour::{apply_inktraps, Contour, CornerOutcome};
pub use corners::{solve_corner, SolvedCorner};
pub use error::{InktrapError, RejectReason};
pub use geom::{
    angle_at, bearing_angle, cathetus_from_cathetus_angle, circle_area, distance, hypotenuse,
    point_at_angle_distance, triangle_area,
};
pub use node::{CornerContext, Node, NodeKind};
pub use trap::{build_replacement, InktrapResult, Replacement};

/// Solve a corner and build its replacement in one step.
pub fn create_inktrap(ctx: &CornerContext, params: &InktrapParameters) -> InktrapResult {
    params.validate()?;
    let solved = solve_corner(ctx, params.aperture, params.threshold)?;
    build_replacement(ctx, params, &solved)
}
