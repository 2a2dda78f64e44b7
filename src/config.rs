use crate::error::RejectReason;

/// All ink trap parameters in one struct.
/// Passed by value into the solver; adjustable at runtime from an editor
/// panel or the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InktrapParameters {
    /// Diameter of the notional circle pressed into the corner.
    pub aperture: f64,
    /// Minimum ratio of corner-to-circle-center distance over aperture.
    /// 0 accepts every valid corner. Larger = only sharper corners get a trap.
    pub threshold: f64,
    /// How far the corner is pushed beyond its original position, as a
    /// multiple of its offset from the chord between the two intersections.
    /// 0 = no displacement. Negative values pull the corner inwards.
    pub depth: f64,
    pub style: InktrapStyle,
    /// Width of the plateau for [`InktrapStyle::FlatTop`]. 0 = pointed.
    pub flat_top_size: f64,
}

/// Shape of the notch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InktrapStyle {
    /// Straight edges meeting at the displaced corner.
    #[default]
    Straight,
    /// Cubic segments into the displaced corner, smooth at the intersections.
    Curved,
    /// Straight edges with the tip cut off.
    FlatTop,
}

pub const DEFAULT_APERTURE: f64 = 20.0;

/// Push the corner out by its full offset from the chord.
pub const DEFAULT_DEPTH: f64 = 1.0;

pub const DEFAULT_FLAT_TOP_SIZE: f64 = 0.0;

/// Threshold that rejects corners of 90° and wider.
///
/// A right angle gives a ratio of √3/2 ≈ 0.866.
pub const DEFAULT_THRESHOLD: f64 = 0.87;

impl Default for InktrapParameters {
    fn default() -> Self {
        Self {
            aperture: DEFAULT_APERTURE,
            threshold: DEFAULT_THRESHOLD,
            depth: DEFAULT_DEPTH,
            style: InktrapStyle::default(),
            flat_top_size: DEFAULT_FLAT_TOP_SIZE,
        }
    }
}

impl InktrapParameters {
    pub fn validate(&self) -> Result<(), RejectReason> {
        if !(self.aperture.is_finite() && self.aperture > 0.0) {
            return Err(RejectReason::InvalidParameter {
                name: "aperture",
                value: self.aperture,
            });
        }
        if !self.threshold.is_finite() {
            return Err(RejectReason::InvalidParameter {
                name: "threshold",
                value: self.threshold,
            });
        }
        if !self.depth.is_finite() {
            return Err(RejectReason::InvalidParameter {
                name: "depth",
                value: self.depth,
            });
        }
        if !(self.flat_top_size.is_finite() && self.flat_top_size >= 0.0) {
            return Err(RejectReason::InvalidParameter {
                name: "flat_top_size",
                value: self.flat_top_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(InktrapParameters::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let params = InktrapParameters {
            aperture: 0.0,
            ..InktrapParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(RejectReason::InvalidParameter { name: "aperture", .. })
        ));

        let params = InktrapParameters {
            flat_top_size: -1.0,
            ..InktrapParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(RejectReason::InvalidParameter { name: "flat_top_size", .. })
        ));

        let params = InktrapParameters {
            depth: f64::NAN,
            ..InktrapParameters::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn negative_depth_is_allowed() {
        let params = InktrapParameters {
            depth: -0.5,
            ..InktrapParameters::default()
        };
        assert_eq!(params.validate(), Ok(()));
    }
}
