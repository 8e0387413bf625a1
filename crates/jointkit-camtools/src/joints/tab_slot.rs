//! Tab-and-slot joint

use super::{centred_start, rectangle, JointGeometry, JointTemplate};
use crate::error::{CamToolResult, ParameterError, ParameterResult};
use jointkit_core::JointSide;

/// Explicit tabs on side A mating with slots on side B.
///
/// `tabnum` tabs of `tabsize` separated by `tabspace`, centred on the edge.
/// Tabs are narrowed and slots widened by `fit` (signed, positive is a gap).
#[derive(Debug, Clone, PartialEq)]
pub struct TabSlotJoint {
    thickness: f64,
    tabsize: f64,
    tabspace: f64,
    tabnum: u32,
    fit: f64,
}

impl TabSlotJoint {
    pub fn new(
        thickness: f64,
        tabsize: f64,
        tabspace: f64,
        tabnum: u32,
        fit: f64,
    ) -> ParameterResult<Self> {
        ParameterError::require_positive("thickness", thickness)?;
        ParameterError::require_positive("tabsize", tabsize)?;
        ParameterError::require_count("tabnum", tabnum, 1)?;
        if !(tabspace.is_finite() && tabspace >= 0.0) {
            return Err(ParameterError::InvalidValue {
                name: "tabspace".to_string(),
                reason: format!("{} must not be negative", tabspace),
            });
        }
        if tabsize - fit <= 0.0 {
            return Err(ParameterError::InvalidDimensions(format!(
                "tab width {} after fit {}",
                tabsize - fit,
                fit
            )));
        }
        Ok(Self {
            thickness,
            tabsize,
            tabspace,
            tabnum,
            fit,
        })
    }

    /// Length covered by the nominal tab pattern.
    pub fn span(&self) -> f64 {
        self.tabnum as f64 * self.tabsize + (self.tabnum - 1) as f64 * self.tabspace
    }

    fn tab_centres(&self, length: f64) -> CamToolResult<Vec<f64>> {
        let start = centred_start(self.family(), length, self.span())?;
        let pitch = self.tabsize + self.tabspace;
        Ok((0..self.tabnum)
            .map(|i| start + i as f64 * pitch + self.tabsize / 2.0)
            .collect())
    }
}

impl JointTemplate for TabSlotJoint {
    fn family(&self) -> &'static str {
        "tab_and_slot"
    }

    fn generate(&self, length: f64, side: JointSide) -> CamToolResult<JointGeometry> {
        let t = self.thickness;
        let mut geometry = JointGeometry::new();
        for centre in self.tab_centres(length)? {
            match side {
                JointSide::A => {
                    let half = (self.tabsize - self.fit) / 2.0;
                    geometry.add(rectangle(centre - half, -t, centre + half, 0.0));
                }
                JointSide::B => {
                    let half = (self.tabsize + self.fit) / 2.0;
                    geometry.subtract(rectangle(centre - half, 0.0, centre + half, t));
                }
            }
        }
        Ok(geometry)
    }
}
