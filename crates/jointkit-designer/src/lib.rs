//! # JointKit Designer
//!
//! Turns raw contours into faces and faces into cut-ready toolpaths.
//!
//! ## Stages
//!
//! - **Stitching**: open fragments are joined end to end into closed loops
//! - **Topology**: closed loops are sorted into perimeters and cuts
//! - **Edges**: perimeter segments become joint attachment points
//! - **Boolean/Offset**: face outlines are combined with joint geometry and
//!   offset for the kerf
//! - **Kerf**: offset outlines are split into visible and hidden toolpaths

pub mod clipper;
pub mod edges;
pub mod error;
pub mod import;
pub mod kerf;
pub mod pipeline;
pub mod stitcher;
pub mod topology;

pub use clipper::{
    difference, intersection, merge, offset, point_in_loop, subtract_geometry, union, xor,
    Containment,
};
pub use edges::{edge_frame, extract_edges, EdgeInfo};
pub use error::{DesignerError, DesignerResult};
pub use import::{import_contours, import_file, parse_contours};
pub use kerf::{classify_overlap, split_toolpaths, KerfClassifier, KerfToolpaths, OverlapRuns};
pub use pipeline::{process_design, Pipeline};
pub use stitcher::{stitch, StitchResult, Stitcher};
pub use topology::{is_contained, Classification, FaceOutline, TopologyClassifier};
