//! # JointKit CAM Tools
//!
//! Parametric joint geometry for laser-cut panels and the engine that places
//! it onto real perimeter edges.
//!
//! ## Joint Families
//!
//! - **Box**: alternating fingers at a fixed pitch
//! - **Tab-and-Slot**: explicit tabs and slots with a material fit
//! - **Interlocking**: one centred notch per edge
//! - **Bolt**: T-slot nut traps and clearance holes
//! - **Flat**: plain butt joint
//!
//! Generators are resolved from [`jointkit_core::JointParameters`] by the
//! [`JointFactory`], which owns the material and fastener tables.

pub mod error;
pub mod joints;
pub mod placement;

pub use error::{CamToolError, CamToolResult, ParameterError, ParameterResult};
pub use joints::{
    BoltJoint, BoxJoint, FlatJoint, InterlockingJoint, JointFactory, JointGeometry, JointTemplate,
    TabSlotJoint,
};
pub use placement::{interior_is_left, place, EdgeFrame};
