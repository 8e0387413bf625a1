//! Material fit library
//!
//! Maps a material name and a [`FitClass`] to a signed fit value in mm.
//! Positive values open a gap between mating halves, negative values make
//! them interfere.

use crate::error::LookupError;
use crate::joint::FitClass;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fit values for one material, one per fit class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitValues {
    pub clearance: f64,
    pub friction: f64,
    pub press: f64,
}

impl FitValues {
    pub const fn new(clearance: f64, friction: f64, press: f64) -> Self {
        Self {
            clearance,
            friction,
            press,
        }
    }

    pub fn get(&self, class: FitClass) -> f64 {
        match class {
            FitClass::Clearance => self.clearance,
            FitClass::Friction => self.friction,
            FitClass::Press => self.press,
        }
    }
}

/// Material library keyed by lower-case material name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialLibrary {
    materials: BTreeMap<String, FitValues>,
}

impl MaterialLibrary {
    /// An empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in sheet materials.
    pub fn builtin() -> Self {
        Self::new()
            .with_material("plywood", FitValues::new(0.10, 0.00, -0.05))
            .with_material("mdf", FitValues::new(0.10, 0.00, -0.05))
            .with_material("acrylic", FitValues::new(0.15, 0.05, -0.02))
            .with_material("hardboard", FitValues::new(0.10, 0.02, -0.04))
            .with_material("cardboard", FitValues::new(0.20, 0.00, -0.10))
    }

    /// Returns the library with `name` added or replaced.
    pub fn with_material(mut self, name: &str, values: FitValues) -> Self {
        self.materials.insert(name.to_ascii_lowercase(), values);
        self
    }

    pub fn get(&self, material: &str) -> Result<&FitValues, LookupError> {
        self.materials
            .get(&material.to_ascii_lowercase())
            .ok_or_else(|| LookupError::UnknownMaterial(material.to_string()))
    }

    /// Signed fit value for `material` at `class`.
    pub fn fit(&self, material: &str, class: FitClass) -> Result<f64, LookupError> {
        Ok(self.get(material)?.get(class))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.materials.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
