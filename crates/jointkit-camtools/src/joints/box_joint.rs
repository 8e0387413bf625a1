//! Box (finger) joint

use super::{rectangle, JointGeometry, JointTemplate};
use crate::error::{CamToolResult, ParameterError, ParameterResult};
use jointkit_core::JointSide;

/// Alternating fingers at pitch `length / segments`.
///
/// The band `0 <= y <= thickness` along the edge is split into `segments`
/// equal pieces. Side A removes the odd pieces and keeps fingers on the even
/// ones; side B removes the even pieces. The two halves fill each other.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxJoint {
    thickness: f64,
    segments: u32,
}

impl BoxJoint {
    pub fn new(thickness: f64, segments: u32) -> ParameterResult<Self> {
        ParameterError::require_positive("thickness", thickness)?;
        ParameterError::require_count("segments", segments, 2)?;
        Ok(Self {
            thickness,
            segments,
        })
    }

    pub fn pitch(&self, length: f64) -> f64 {
        length / self.segments as f64
    }
}

impl JointTemplate for BoxJoint {
    fn family(&self) -> &'static str {
        "box"
    }

    fn generate(&self, length: f64, side: JointSide) -> CamToolResult<JointGeometry> {
        ParameterError::require_positive("edge length", length)?;
        let pitch = self.pitch(length);
        let removed_parity = match side {
            JointSide::A => 1,
            JointSide::B => 0,
        };

        let mut geometry = JointGeometry::new();
        for index in (0..self.segments).filter(|i| i % 2 == removed_parity) {
            let x0 = pitch * index as f64;
            // The last piece ends exactly on the edge end.
            let x1 = if index + 1 == self.segments {
                length
            } else {
                pitch * (index + 1) as f64
            };
            geometry.subtract(rectangle(x0, 0.0, x1, self.thickness));
        }
        Ok(geometry)
    }
}
