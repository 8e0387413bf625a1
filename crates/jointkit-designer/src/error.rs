//! Error types for the designer crate.
//!
//! This module provides structured error types for contour import, face
//! processing and the boolean/offset stages.

use jointkit_camtools::CamToolError;
use jointkit_core::{GeometryError, ModelError};
use jointkit_settings::SettingsError;
use thiserror::Error;

/// Errors that can occur while importing or processing a model.
#[derive(Error, Debug)]
pub enum DesignerError {
    /// A path could not be turned into geometry.
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// The model did not contain a referenced face, edge or stage.
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// A joint could not be generated.
    #[error("Joint '{joint}' failed: {source}")]
    Joint {
        joint: String,
        #[source]
        source: CamToolError,
    },

    /// Invalid pipeline configuration.
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// The offset engine gave up on a loop.
    #[error("Offset failed: {0}")]
    OffsetFailed(String),

    /// Model serialization or file error.
    #[error(transparent)]
    Core(#[from] jointkit_core::Error),

    /// I/O error while reading contours.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DesignerError {
    pub fn joint(name: &str, source: impl Into<CamToolError>) -> Self {
        DesignerError::Joint {
            joint: name.to_string(),
            source: source.into(),
        }
    }

    pub fn is_joint_error(&self) -> bool {
        matches!(self, DesignerError::Joint { .. })
    }
}

/// Result type alias for designer operations.
pub type DesignerResult<T> = Result<T, DesignerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use jointkit_camtools::ParameterError;

    #[test]
    fn test_designer_error_display() {
        let err = DesignerError::joint(
            "lid",
            ParameterError::InvalidDimensions("depth 0".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "Joint 'lid' failed: Parameter error: Invalid dimensions: depth 0"
        );
        assert!(err.is_joint_error());

        let err = DesignerError::OffsetFailed("loop 3".to_string());
        assert_eq!(err.to_string(), "Offset failed: loop 3");
    }

    #[test]
    fn test_error_conversion() {
        let err: DesignerError = ModelError::UnknownFace {
            face: "face9".to_string(),
        }
        .into();
        assert!(matches!(err, DesignerError::Model(_)));
        assert_eq!(err.to_string(), "Model error: Unknown face: face9");
    }
}
