//! Interlocking (cross-halving) joint

use super::{centred_start, rectangle, JointGeometry, JointTemplate};
use crate::error::{CamToolResult, ParameterError, ParameterResult};
use jointkit_core::JointSide;

/// One centred notch of width `thickness + fit` and depth `thickness - fit`
/// cut into each mating edge. Both sides are identical.
#[derive(Debug, Clone, PartialEq)]
pub struct InterlockingJoint {
    thickness: f64,
    fit: f64,
}

impl InterlockingJoint {
    pub fn new(thickness: f64, fit: f64) -> ParameterResult<Self> {
        ParameterError::require_positive("thickness", thickness)?;
        let joint = Self { thickness, fit };
        if joint.width() <= 0.0 || joint.depth() <= 0.0 {
            return Err(ParameterError::InvalidDimensions(format!(
                "notch {} x {} from thickness {} and fit {}",
                joint.width(),
                joint.depth(),
                thickness,
                fit
            )));
        }
        Ok(joint)
    }

    pub fn width(&self) -> f64 {
        self.thickness + self.fit
    }

    pub fn depth(&self) -> f64 {
        self.thickness - self.fit
    }
}

impl JointTemplate for InterlockingJoint {
    fn family(&self) -> &'static str {
        "interlocking"
    }

    fn generate(&self, length: f64, _side: JointSide) -> CamToolResult<JointGeometry> {
        let x0 = centred_start(self.family(), length, self.width())?;
        let mut geometry = JointGeometry::new();
        geometry.subtract(rectangle(x0, 0.0, x0 + self.width(), self.depth()));
        Ok(geometry)
    }
}
