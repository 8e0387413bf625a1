//! # Design Processing
//!
//! Derives the cutting stages of every face from its perimeter, cuts and the
//! joints attached to its edges:
//!
//! 1. `Original`: perimeter minus cuts
//! 2. `Processed`: original plus additive joint geometry, minus subtractive
//!    joint geometry
//! 3. `Visible` / `Hidden`: kerf toolpaths split by whether they run along
//!    the original outline
//!
//! The input model is never modified; a processed copy is returned.

use crate::clipper::{difference, loops_of, merge, paths_of, union};
use crate::edges::edge_frame;
use crate::error::{DesignerError, DesignerResult};
use crate::kerf::KerfClassifier;
use jointkit_camtools::JointFactory;
use jointkit_core::{Bucket, Face, JointSide, Loop, Model, Path, Stage};
use jointkit_settings::Config;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Placed joint geometry collected for one face.
#[derive(Debug, Default)]
struct FaceJoints {
    additive: Vec<Loop>,
    subtractive: Vec<Loop>,
}

/// Runs the processing stages with a fixed configuration and lookup tables.
pub struct Pipeline<'a> {
    config: &'a Config,
    factory: &'a JointFactory,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a Config, factory: &'a JointFactory) -> Self {
        Self { config, factory }
    }

    /// Returns a copy of `model` with Original, Processed, Visible and Hidden
    /// added to every face. Fails up front on an invalid configuration.
    pub fn process(&self, model: &Model) -> DesignerResult<Model> {
        self.config.validate()?;
        let samples = self.config.sampling.curve_samples;
        let joints = self.place_joints(model)?;
        let kerf = KerfClassifier::new(
            self.config.kerf.slow_kerf,
            self.config.kerf.fast_kerf,
            self.config.sampling.offset_arc_segments,
        );

        let mut processed = model.clone();
        for (name, face) in processed.faces.iter_mut() {
            let original = difference(
                &loops_of(face.paths(Stage::Perimeter), samples),
                &loops_of(face.paths(Stage::Cuts), samples),
            );

            let shaped = match joints.get(name) {
                Some(geometry) => {
                    let grown = union(&original, &merge(&geometry.additive));
                    difference(&grown, &merge(&geometry.subtractive))
                }
                None => original.clone(),
            };

            let toolpaths = kerf.toolpaths(&original, &shaped)?;
            debug!(
                "Face {}: {} original loops, {} processed loops",
                name,
                original.len(),
                shaped.len()
            );

            self.insert(face, Stage::Original, paths_of(&original))?;
            self.insert(face, Stage::Processed, paths_of(&shaped))?;
            self.insert(face, Stage::Visible, toolpaths.visible)?;
            self.insert(face, Stage::Hidden, toolpaths.hidden)?;
        }

        info!(
            "Processed {} faces with {} joints",
            processed.faces.len(),
            processed.joints.len()
        );
        Ok(processed)
    }

    fn insert(&self, face: &mut Face, stage: Stage, paths: Vec<Path>) -> DesignerResult<()> {
        let bucket = Bucket::new(paths).with_style(self.config.styles.style_for(stage));
        face.insert_stage(stage, bucket)?;
        Ok(())
    }

    /// Generates both halves of every joint and places them on their edges.
    fn place_joints(&self, model: &Model) -> DesignerResult<BTreeMap<String, FaceJoints>> {
        let samples = self.config.sampling.curve_samples;
        let mut per_face: BTreeMap<String, FaceJoints> = BTreeMap::new();

        for (name, joint) in &model.joints {
            for side in [JointSide::A, JointSide::B] {
                let edge = joint.edge(side);
                let frame = edge_frame(model, edge, samples)?;
                let local = self
                    .factory
                    .generate(&joint.parameters, frame.length, side)
                    .map_err(|e| DesignerError::joint(name, e))?;
                let placed = frame.place_geometry(&local);
                debug!(
                    "Joint {} side {} ({}) placed on {}",
                    name,
                    side,
                    joint.parameters.kind.name(),
                    edge
                );

                let entry = per_face.entry(edge.face.clone()).or_default();
                entry
                    .additive
                    .extend(loops_of(std::slice::from_ref(&placed.additive), samples));
                entry
                    .subtractive
                    .extend(loops_of(std::slice::from_ref(&placed.subtractive), samples));
            }
        }
        Ok(per_face)
    }
}

/// Processes a model with the given configuration and lookup tables.
pub fn process_design(
    model: &Model,
    config: &Config,
    factory: &JointFactory,
) -> DesignerResult<Model> {
    Pipeline::new(config, factory).process(model)
}
