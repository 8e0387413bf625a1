//! Bolt joint with captive nut traps

use super::{centred_start, circle, JointGeometry, JointTemplate};
use crate::error::{CamToolResult, ParameterError, ParameterResult};
use jointkit_core::{FastenerSpec, JointSide, Path, Point};

/// Side A gets a T-slot per bolt: a channel for the bolt shank running in
/// from the edge, widened into a trap that holds the nut. Side B gets a
/// round clearance hole per bolt, centred in the material thickness.
///
/// Bolts sit at pitch `nut_width + boltspace`, the pattern centred on the
/// edge. Every opening is grown by the material's clearance fit.
#[derive(Debug, Clone, PartialEq)]
pub struct BoltJoint {
    thickness: f64,
    fastener: FastenerSpec,
    clearance: f64,
    boltspace: f64,
    boltnum: u32,
    boltlength: f64,
}

impl BoltJoint {
    pub fn new(
        thickness: f64,
        fastener: FastenerSpec,
        clearance: f64,
        boltspace: f64,
        boltnum: u32,
        boltlength: f64,
    ) -> ParameterResult<Self> {
        ParameterError::require_positive("thickness", thickness)?;
        ParameterError::require_positive("boltlength", boltlength)?;
        ParameterError::require_count("boltnum", boltnum, 1)?;
        if !(boltspace.is_finite() && boltspace >= 0.0) {
            return Err(ParameterError::InvalidValue {
                name: "boltspace".to_string(),
                reason: format!("{} must not be negative", boltspace),
            });
        }

        let joint = Self {
            thickness,
            fastener,
            clearance,
            boltspace,
            boltnum,
            boltlength,
        };

        let (trap_start, _, _) = joint.slot_depths();
        if trap_start <= 0.0 {
            return Err(ParameterError::InvalidDimensions(format!(
                "bolt length {} too short for thickness {} and nut height {}",
                boltlength, thickness, fastener.nut_height
            )));
        }
        if joint.hole_radius() * 2.0 >= thickness {
            return Err(ParameterError::InvalidDimensions(format!(
                "clearance hole {} does not fit in thickness {}",
                joint.hole_radius() * 2.0,
                thickness
            )));
        }
        Ok(joint)
    }

    pub fn pitch(&self) -> f64 {
        self.fastener.nut_width + self.boltspace
    }

    pub fn span(&self) -> f64 {
        self.boltnum as f64 * self.fastener.nut_width
            + (self.boltnum - 1) as f64 * self.boltspace
    }

    pub fn hole_radius(&self) -> f64 {
        self.fastener.bolt_diameter / 2.0 + self.clearance
    }

    /// Depths of the nut trap start, nut trap end and channel end.
    fn slot_depths(&self) -> (f64, f64, f64) {
        let l = self.boltlength;
        let t = self.thickness;
        let h = self.fastener.nut_height;
        let c = self.clearance;
        (l - t - 2.0 * h, l - t - h + 2.0 * c, l - t + 2.0 * c)
    }

    fn bolt_centres(&self, length: f64) -> CamToolResult<Vec<f64>> {
        let start = centred_start(self.family(), length, self.span())?;
        Ok((0..self.boltnum)
            .map(|i| start + self.fastener.nut_width / 2.0 + i as f64 * self.pitch())
            .collect())
    }

    fn t_slot(&self, x: f64) -> Path {
        let a = self.fastener.bolt_diameter / 2.0 + self.clearance;
        let b = self.fastener.nut_width / 2.0 + self.clearance;
        let (y_a, y_b, y_c) = self.slot_depths();
        let outline = [
            (-a, 0.0),
            (-a, y_a),
            (-b, y_a),
            (-b, y_b),
            (-a, y_b),
            (-a, y_c),
            (a, y_c),
            (a, y_b),
            (b, y_b),
            (b, y_a),
            (a, y_a),
            (a, 0.0),
        ];
        let points: Vec<Point> = outline
            .iter()
            .map(|&(dx, y)| Point::new(x + dx, y))
            .collect();
        Path::polyline(&points, true)
    }
}

impl JointTemplate for BoltJoint {
    fn family(&self) -> &'static str {
        "bolt"
    }

    fn generate(&self, length: f64, side: JointSide) -> CamToolResult<JointGeometry> {
        let mut geometry = JointGeometry::new();
        for x in self.bolt_centres(length)? {
            match side {
                JointSide::A => geometry.subtract(self.t_slot(x)),
                JointSide::B => geometry.subtract(circle(
                    Point::new(x, self.thickness / 2.0),
                    self.hole_radius(),
                )),
            }
        }
        Ok(geometry)
    }
}
