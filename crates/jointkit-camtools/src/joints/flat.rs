//! Flat (butt) joint

use super::{rectangle, JointGeometry, JointTemplate};
use crate::error::{CamToolResult, ParameterError};
use jointkit_core::JointSide;

/// Side A is left untouched; side B loses the full `length x thickness`
/// band so the mating panel sits flush against it.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatJoint {
    thickness: f64,
}

impl FlatJoint {
    pub fn new(thickness: f64) -> Self {
        Self { thickness }
    }
}

impl JointTemplate for FlatJoint {
    fn family(&self) -> &'static str {
        "flat"
    }

    fn generate(&self, length: f64, side: JointSide) -> CamToolResult<JointGeometry> {
        ParameterError::require_positive("edge length", length)?;
        let mut geometry = JointGeometry::new();
        if side == JointSide::B {
            geometry.subtract(rectangle(0.0, 0.0, length, self.thickness));
        }
        Ok(geometry)
    }
}
