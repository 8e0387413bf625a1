//! Edge extraction
//!
//! Edges are the segments of a face's perimeter, numbered from 0 in path
//! order per face. Listing them across a model also hands out a global id
//! in face-name order, used by edge pickers.

use crate::error::DesignerResult;
use jointkit_camtools::EdgeFrame;
use jointkit_core::{EdgeRef, Model, Path, Point, Segment};
use serde::Serialize;

/// One perimeter edge and its measurements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeInfo {
    pub id: usize,
    pub face: String,
    pub edge: usize,
    pub start: Point,
    pub end: Point,
    pub length: f64,
    /// Degrees counter-clockwise from +x
    pub angle: f64,
}

impl EdgeInfo {
    pub fn edge_ref(&self) -> EdgeRef {
        EdgeRef::new(self.face.clone(), self.edge)
    }
}

fn segment_path(segment: &Segment) -> Path {
    Path::from_segments(vec![*segment])
}

/// All edges of all faces.
pub fn extract_edges(model: &Model) -> Vec<EdgeInfo> {
    let mut edges = Vec::new();
    for (name, face) in &model.faces {
        for (index, segment) in face.edges().iter().enumerate() {
            let path = segment_path(segment);
            edges.push(EdgeInfo {
                id: edges.len(),
                face: name.clone(),
                edge: index,
                start: segment.start(),
                end: segment.end(),
                length: path.length(),
                angle: path.direction_angle().unwrap_or(0.0),
            });
        }
    }
    tracing::debug!("Extracted {} edges from {} faces", edges.len(), model.faces.len());
    edges
}

/// Position and orientation of a referenced edge, with the interior side
/// taken from its face perimeter.
pub fn edge_frame(model: &Model, edge: &EdgeRef, samples: usize) -> DesignerResult<EdgeFrame> {
    let segment = model.edge(edge)?;
    let face = model.face(&edge.face)?;
    let perimeter = face.perimeter().ok_or_else(|| jointkit_core::ModelError::MissingPerimeter {
        face: edge.face.clone(),
    })?;
    Ok(EdgeFrame::for_segment(&segment, perimeter, samples)?)
}
