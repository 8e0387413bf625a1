//! Parametric joint generators
//!
//! Every generator builds geometry in edge-local coordinates: origin at the
//! edge start, +x along the edge for its measured length, +y into the panel
//! interior. A generator returns the material to add to the face and the
//! material to remove from it, each as a path of closed sub-paths.
//!
//! Side A is the positive (tab) half and side B the negative (slot) half of
//! the same nominal edge length.

mod bolt;
mod box_joint;
mod flat;
mod interlocking;
mod tab_slot;

pub use bolt::BoltJoint;
pub use box_joint::BoxJoint;
pub use flat::FlatJoint;
pub use interlocking::InterlockingJoint;
pub use tab_slot::TabSlotJoint;

use crate::error::{CamToolResult, ParameterError};
use jointkit_core::{
    FastenerChart, FitClass, JointKind, JointParameters, JointSide, MaterialLibrary, Path, Point,
    Segment,
};

/// Local joint geometry for one side of a joint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JointGeometry {
    /// Material added to the face (tabs protruding past the edge)
    pub additive: Path,
    /// Material removed from the face (slots, notches, holes)
    pub subtractive: Path,
}

impl JointGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.additive.is_empty() && self.subtractive.is_empty()
    }

    pub fn add(&mut self, shape: Path) {
        self.additive.append(shape);
    }

    pub fn subtract(&mut self, shape: Path) {
        self.subtractive.append(shape);
    }
}

/// One joint family, with all parameters and lookups resolved.
pub trait JointTemplate {
    /// Family tag as it appears in joint parameter sets.
    fn family(&self) -> &'static str;

    /// Geometry for one side of an edge of the given length.
    fn generate(&self, length: f64, side: JointSide) -> CamToolResult<JointGeometry>;

    fn make_a(&self, length: f64) -> CamToolResult<JointGeometry> {
        self.generate(length, JointSide::A)
    }

    fn make_b(&self, length: f64) -> CamToolResult<JointGeometry> {
        self.generate(length, JointSide::B)
    }
}

/// Builds joint templates from parameter sets using injected lookup tables.
#[derive(Debug, Clone)]
pub struct JointFactory {
    materials: MaterialLibrary,
    fasteners: FastenerChart,
}

impl Default for JointFactory {
    fn default() -> Self {
        Self::new(MaterialLibrary::builtin(), FastenerChart::builtin())
    }
}

impl JointFactory {
    pub fn new(materials: MaterialLibrary, fasteners: FastenerChart) -> Self {
        Self {
            materials,
            fasteners,
        }
    }

    pub fn materials(&self) -> &MaterialLibrary {
        &self.materials
    }

    pub fn fasteners(&self) -> &FastenerChart {
        &self.fasteners
    }

    /// Resolves a parameter set into a generator. Unknown materials and
    /// fastener sizes are fatal.
    pub fn template(&self, params: &JointParameters) -> CamToolResult<Box<dyn JointTemplate>> {
        ParameterError::require_positive("thickness", params.thickness)?;
        let fits = self.materials.get(&params.material)?;
        let thickness = params.thickness;

        let template: Box<dyn JointTemplate> = match &params.kind {
            JointKind::Box { segments } => Box::new(BoxJoint::new(thickness, *segments)?),
            JointKind::TabAndSlot {
                tabsize,
                tabspace,
                tabnum,
                fit,
            } => Box::new(TabSlotJoint::new(
                thickness,
                *tabsize,
                *tabspace,
                *tabnum,
                fits.get(*fit),
            )?),
            JointKind::Interlocking { fit } => {
                Box::new(InterlockingJoint::new(thickness, fits.get(*fit))?)
            }
            JointKind::Bolt {
                boltsize,
                boltspace,
                boltnum,
                boltlength,
            } => Box::new(BoltJoint::new(
                thickness,
                *self.fasteners.get(boltsize)?,
                fits.get(FitClass::Clearance),
                *boltspace,
                *boltnum,
                *boltlength,
            )?),
            JointKind::Flat => Box::new(FlatJoint::new(thickness)),
        };

        tracing::debug!(
            "Resolved {} joint ({}, thickness {})",
            template.family(),
            params.material,
            thickness
        );
        Ok(template)
    }

    /// Geometry for one side of a joint on an edge of `length`.
    pub fn generate(
        &self,
        params: &JointParameters,
        length: f64,
        side: JointSide,
    ) -> CamToolResult<JointGeometry> {
        ParameterError::require_positive("edge length", length)?;
        self.template(params)?.generate(length, side)
    }
}

/// Closed axis-aligned rectangle starting at `(x0, y0)`, counter-clockwise
/// for `x0 < x1, y0 < y1`.
pub(crate) fn rectangle(x0: f64, y0: f64, x1: f64, y1: f64) -> Path {
    Path::polyline(
        &[
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ],
        true,
    )
}

/// Circle from two opposing semicircular arcs, starting at its leftmost point.
pub(crate) fn circle(center: Point, radius: f64) -> Path {
    let left = Point::new(center.x - radius, center.y);
    let right = Point::new(center.x + radius, center.y);
    let half = |start: Point, end: Point| Segment::Arc {
        start,
        radius_x: radius,
        radius_y: radius,
        rotation: 0.0,
        large_arc: false,
        sweep: true,
        end,
    };
    Path::from_segments(vec![half(left, right), half(right, left)])
}

/// Start offset that centres a pattern of `span` on an edge of `length`.
pub(crate) fn centred_start(family: &str, length: f64, span: f64) -> CamToolResult<f64> {
    if span > length {
        return Err(ParameterError::DoesNotFit {
            family: family.to_string(),
            required: span,
            available: length,
        }
        .into());
    }
    Ok((length - span) / 2.0)
}
