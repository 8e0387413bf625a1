//! Panel model
//!
//! The [`Model`] is the unit of input and output of the whole pipeline: a
//! tree of faces, each face holding named stage buckets of paths, plus the
//! joint assignments between edges. Stages are append-only; a bucket is
//! never replaced once it has been produced.

use crate::error::{Error, ModelError, Result};
use crate::joint::{EdgeRef, Joint};
use crate::path::{Path, Segment};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Stage buckets, in derivation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Outer boundary of the face
    Perimeter,
    /// Holes inside the perimeter
    Cuts,
    /// Perimeter minus cuts
    Original,
    /// Original combined with joint geometry
    Processed,
    /// Kerf toolpaths that coincide with the original outline
    Visible,
    /// Remaining kerf toolpaths
    Hidden,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Perimeter,
        Stage::Cuts,
        Stage::Original,
        Stage::Processed,
        Stage::Visible,
        Stage::Hidden,
    ];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Perimeter => write!(f, "Perimeter"),
            Self::Cuts => write!(f, "Cuts"),
            Self::Original => write!(f, "Original"),
            Self::Processed => write!(f, "Processed"),
            Self::Visible => write!(f, "Visible"),
            Self::Hidden => write!(f, "Hidden"),
        }
    }
}

/// A list of paths plus an optional rendering style.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Bucket {
    #[serde(default)]
    pub paths: Vec<Path>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl Bucket {
    pub fn new(paths: Vec<Path>) -> Self {
        Self { paths, style: None }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }
}

/// A panel: perimeter, cuts and the stages derived from them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Face {
    stages: BTreeMap<Stage, Bucket>,
}

impl Face {
    pub fn new() -> Self {
        Self::default()
    }

    /// Face with a single perimeter and the given cuts.
    pub fn from_outline(perimeter: Path, cuts: Vec<Path>) -> Self {
        let mut stages = BTreeMap::new();
        stages.insert(Stage::Perimeter, Bucket::new(vec![perimeter]));
        if !cuts.is_empty() {
            stages.insert(Stage::Cuts, Bucket::new(cuts));
        }
        Self { stages }
    }

    /// Adds a stage bucket. Fails if the stage already exists.
    pub fn insert_stage(&mut self, stage: Stage, bucket: Bucket) -> std::result::Result<(), ModelError> {
        if self.stages.contains_key(&stage) {
            return Err(ModelError::StageAlreadyProduced {
                stage: stage.to_string(),
            });
        }
        self.stages.insert(stage, bucket);
        Ok(())
    }

    pub fn stage(&self, stage: Stage) -> Option<&Bucket> {
        self.stages.get(&stage)
    }

    pub fn has_stage(&self, stage: Stage) -> bool {
        self.stages.contains_key(&stage)
    }

    /// Paths of a stage; empty when the stage has not been produced.
    pub fn paths(&self, stage: Stage) -> &[Path] {
        self.stages
            .get(&stage)
            .map(|b| b.paths.as_slice())
            .unwrap_or(&[])
    }

    pub fn stages(&self) -> impl Iterator<Item = (&Stage, &Bucket)> {
        self.stages.iter()
    }

    /// The first perimeter path.
    pub fn perimeter(&self) -> Option<&Path> {
        self.paths(Stage::Perimeter).first()
    }

    /// Segments of the perimeter, in path order.
    pub fn edges(&self) -> &[Segment] {
        self.perimeter().map(Path::segments).unwrap_or(&[])
    }
}

/// Root aggregate: faces by name, global attributes and joints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Model {
    #[serde(default)]
    pub attrib: BTreeMap<String, String>,
    #[serde(default)]
    pub faces: BTreeMap<String, Face>,
    #[serde(default)]
    pub joints: BTreeMap<String, Joint>,
    /// Open paths and orphan cuts left over from import.
    #[serde(
        rename = "Unresolved",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub unresolved: Option<Bucket>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn face(&self, name: &str) -> std::result::Result<&Face, ModelError> {
        self.faces.get(name).ok_or_else(|| ModelError::UnknownFace {
            face: name.to_string(),
        })
    }

    pub fn add_face(&mut self, name: impl Into<String>, face: Face) {
        self.faces.insert(name.into(), face);
    }

    pub fn add_joint(&mut self, name: impl Into<String>, joint: Joint) {
        self.joints.insert(name.into(), joint);
    }

    /// Resolves an edge reference to its perimeter segment.
    pub fn edge(&self, edge: &EdgeRef) -> std::result::Result<Segment, ModelError> {
        let face = self.face(&edge.face)?;
        if face.perimeter().is_none() {
            return Err(ModelError::MissingPerimeter {
                face: edge.face.clone(),
            });
        }
        let edges = face.edges();
        edges
            .get(edge.edge)
            .copied()
            .ok_or_else(|| ModelError::UnknownEdge {
                face: edge.face.clone(),
                edge: edge.edge,
                count: edges.len(),
            })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::from)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::from)
    }

    pub fn load_from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn save_to_file(&self, path: &std::path::Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
