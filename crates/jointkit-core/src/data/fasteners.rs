//! Metric nut and bolt chart

use crate::error::LookupError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Nut and bolt dimensions for one size code, in mm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FastenerSpec {
    /// Nut width across flats
    pub nut_width: f64,
    /// Nut thickness
    pub nut_height: f64,
    /// Bolt shank diameter
    pub bolt_diameter: f64,
}

impl FastenerSpec {
    pub const fn new(nut_width: f64, nut_height: f64, bolt_diameter: f64) -> Self {
        Self {
            nut_width,
            nut_height,
            bolt_diameter,
        }
    }
}

/// Fastener chart keyed by size code (`M2.5`, `M3`, ...).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FastenerChart {
    sizes: BTreeMap<String, FastenerSpec>,
}

impl FastenerChart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard ISO metric sizes M2 to M6.
    pub fn builtin() -> Self {
        Self::new()
            .with_size("M2", FastenerSpec::new(4.0, 1.6, 2.0))
            .with_size("M2.5", FastenerSpec::new(5.0, 2.0, 2.5))
            .with_size("M3", FastenerSpec::new(5.5, 2.4, 3.0))
            .with_size("M4", FastenerSpec::new(7.0, 3.2, 4.0))
            .with_size("M5", FastenerSpec::new(8.0, 4.0, 5.0))
            .with_size("M6", FastenerSpec::new(10.0, 5.0, 6.0))
    }

    pub fn with_size(mut self, code: &str, spec: FastenerSpec) -> Self {
        self.sizes.insert(code.to_ascii_uppercase(), spec);
        self
    }

    pub fn get(&self, code: &str) -> Result<&FastenerSpec, LookupError> {
        self.sizes
            .get(&code.to_ascii_uppercase())
            .ok_or_else(|| LookupError::UnknownFastenerSize(code.to_string()))
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.sizes.keys().map(String::as_str)
    }
}
