//! Error handling for JointKit
//!
//! Provides error types for the lower layers of the pipeline:
//! - Geometry errors (path data syntax, degenerate paths)
//! - Model errors (face/edge addressing, stage bookkeeping)
//! - Lookup errors (material, fit class and fastener tables)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised while parsing path data or converting paths into loops.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Path data did not start with a move command
    #[error("Path data must start with a move command, found '{found}'")]
    MissingMoveTo {
        /// The token found where a move command was expected.
        found: String,
    },

    /// Unrecognised command letter
    #[error("Unknown path command '{command}'")]
    UnknownCommand {
        /// The offending command token.
        command: String,
    },

    /// A numeric argument was missing or malformed
    #[error("Expected a number for '{command}' command, found '{found}'")]
    ExpectedNumber {
        /// The command being parsed.
        command: char,
        /// The token that was found instead.
        found: String,
    },

    /// An arc flag was not 0 or 1
    #[error("Invalid arc flag '{found}'")]
    InvalidArcFlag {
        /// The token that was found.
        found: String,
    },

    /// The path has no segments
    #[error("Path is empty")]
    EmptyPath,

    /// The path is not closed where a closed path is required
    #[error("Path is not closed: starts at ({start_x}, {start_y}), ends at ({end_x}, {end_y})")]
    OpenPath {
        /// X coordinate of the start point.
        start_x: f64,
        /// Y coordinate of the start point.
        start_y: f64,
        /// X coordinate of the end point.
        end_x: f64,
        /// Y coordinate of the end point.
        end_y: f64,
    },

    /// Geometry too small or collapsed to be used
    #[error("Degenerate geometry: {reason}")]
    Degenerate {
        /// Why the geometry is unusable.
        reason: String,
    },
}

/// Model error type
///
/// Raised when addressing faces, edges and stages of a [`crate::model::Model`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// No face with the given name
    #[error("Unknown face: {face}")]
    UnknownFace {
        /// The requested face name.
        face: String,
    },

    /// Edge index past the end of the perimeter
    #[error("Face {face} has no edge {edge} (perimeter has {count} edges)")]
    UnknownEdge {
        /// The face name.
        face: String,
        /// The requested edge index.
        edge: usize,
        /// Number of edges on the perimeter.
        count: usize,
    },

    /// Face has no perimeter to take edges from
    #[error("Face {face} has no perimeter")]
    MissingPerimeter {
        /// The face name.
        face: String,
    },

    /// A stage bucket was written twice
    #[error("Stage {stage} has already been produced")]
    StageAlreadyProduced {
        /// The stage name.
        stage: String,
    },
}

/// Lookup error type
///
/// Unknown keys in the read-only lookup tables. Always fatal for the joint
/// that asked for them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Material not present in the material library
    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    /// Fit class name not recognised
    #[error("Unknown fit class: {0}")]
    UnknownFitClass(String),

    /// Fastener size code not present in the fastener chart
    #[error("Unknown fastener size: {0}")]
    UnknownFastenerSize(String),
}

/// Main error type for JointKit core
///
/// A unified error type that can represent any error from this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Model error
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Lookup error
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Model (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is a model error
    pub fn is_model_error(&self) -> bool {
        matches!(self, Error::Model(_))
    }

    /// Check if this is a lookup error
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, Error::Lookup(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
