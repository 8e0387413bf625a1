//! # JointKit Core
//!
//! Core types for JointKit: the vector path model, the closed-loop form used
//! by every geometric stage, the panel [`Model`] with its append-only stage
//! buckets, joint parameter sets, and the read-only lookup tables (material
//! fits, fastener sizes).

pub mod data;
pub mod error;
pub mod joint;
pub mod model;
pub mod path;

pub use data::{FastenerChart, FastenerSpec, FitValues, MaterialLibrary};
pub use error::{Error, GeometryError, LookupError, ModelError, Result};
pub use joint::{EdgeRef, FitClass, Joint, JointKind, JointParameters, JointSide};
pub use model::{Bucket, Face, Model, Stage};
pub use path::{
    loop_to_path, path_to_loop, path_to_loops, sample, sample_path, Loop, Path, Point, Segment,
    DEFAULT_CURVE_SAMPLES,
};
