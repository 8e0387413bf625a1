//! Joint assignments and their parameter sets

use crate::error::LookupError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Addresses one perimeter segment of a face.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeRef {
    pub face: String,
    pub edge: usize,
}

impl EdgeRef {
    pub fn new(face: impl Into<String>, edge: usize) -> Self {
        Self {
            face: face.into(),
            edge,
        }
    }
}

impl fmt::Display for EdgeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.face, self.edge)
    }
}

/// Which half of a joint to build. A is the positive (tab) half, B the
/// negative (slot) half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JointSide {
    A,
    B,
}

impl fmt::Display for JointSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// How tightly two mating halves fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitClass {
    /// Parts slide together freely
    Clearance,
    /// Parts hold by friction
    Friction,
    /// Parts must be pressed together
    Press,
}

impl fmt::Display for FitClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clearance => write!(f, "clearance"),
            Self::Friction => write!(f, "friction"),
            Self::Press => write!(f, "press"),
        }
    }
}

impl FromStr for FitClass {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clearance" => Ok(Self::Clearance),
            "friction" => Ok(Self::Friction),
            "press" => Ok(Self::Press),
            _ => Err(LookupError::UnknownFitClass(s.to_string())),
        }
    }
}

/// Family-specific joint parameters, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JointKind {
    /// Alternating fingers at pitch `length / segments`
    Box { segments: u32 },
    /// Explicit tabs on A mating with slots on B
    TabAndSlot {
        tabsize: f64,
        tabspace: f64,
        tabnum: u32,
        fit: FitClass,
    },
    /// One centred notch on each edge
    Interlocking { fit: FitClass },
    /// T-slot nut traps on A, clearance holes on B
    Bolt {
        boltsize: String,
        boltspace: f64,
        boltnum: u32,
        boltlength: f64,
    },
    /// Plain butt joint
    Flat,
}

impl JointKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Box { .. } => "box",
            Self::TabAndSlot { .. } => "tab_and_slot",
            Self::Interlocking { .. } => "interlocking",
            Self::Bolt { .. } => "bolt",
            Self::Flat => "flat",
        }
    }
}

/// Parameters shared by every family plus the family-specific part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointParameters {
    pub thickness: f64,
    pub material: String,
    #[serde(flatten)]
    pub kind: JointKind,
}

/// Association of two edges through one joint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    pub edge_a: EdgeRef,
    pub edge_b: EdgeRef,
    #[serde(rename = "joint_parameters", alias = "parameters")]
    pub parameters: JointParameters,
}

impl Joint {
    pub fn new(edge_a: EdgeRef, edge_b: EdgeRef, parameters: JointParameters) -> Self {
        Self {
            edge_a,
            edge_b,
            parameters,
        }
    }

    pub fn edge(&self, side: JointSide) -> &EdgeRef {
        match side {
            JointSide::A => &self.edge_a,
            JointSide::B => &self.edge_b,
        }
    }
}
