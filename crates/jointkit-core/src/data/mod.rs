//! Read-only lookup tables
//!
//! Both tables are built once at start-up and handed to the joint factory;
//! nothing writes to them afterwards.

pub mod fasteners;
pub mod materials;

pub use fasteners::{FastenerChart, FastenerSpec};
pub use materials::{FitValues, MaterialLibrary};
