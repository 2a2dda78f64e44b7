use thiserror::Error;

/// Why an ink trap was not created at a corner.
///
/// Every variant is local to one corner: callers skip that corner and
/// carry on with the rest of the outline.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RejectReason {
    #[error("invalid corner: {0}")]
    InvalidCorner(String),

    #[error("degenerate triangle at corner")]
    DegenerateTriangle,

    #[error("aperture too large: needs {half_chord:.2} units along an edge of {edge:.2}")]
    ApertureTooLarge { half_chord: f64, edge: f64 },

    #[error("corner below threshold: ratio {ratio:.3} < {threshold:.3}")]
    BelowThreshold { ratio: f64, threshold: f64 },

    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Errors from the font-level layer (loading, selecting, saving).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InktrapError {
    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("glyph not found: {0}")]
    GlyphNotFound(String),

    #[error("no node {node} in contour {contour}")]
    NodeOutOfRange { contour: usize, node: usize },

    #[error(transparent)]
    Reject(#[from] RejectReason),

    #[cfg(feature = "ufo")]
    #[error("norad error: {0}")]
    Norad(#[from] norad::error::FontLoadError),

    #[cfg(feature = "ufo")]
    #[error("norad write error: {0}")]
    NoradWrite(#[from] norad::error::FontWriteError),
}
