//! Error types for the CAM tools crate.
//!
//! This module provides structured error types for joint generation and
//! parameter validation.

use jointkit_core::{GeometryError, LookupError, ModelError};
use thiserror::Error;

/// Errors that can occur during joint generation and placement.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// A lookup table had no entry for the requested key.
    #[error("Unknown parameter value: {0}")]
    Lookup(#[from] LookupError),

    /// A geometry operation failed.
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// The model did not contain the referenced face or edge.
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

/// Errors related to joint parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// The joint pattern does not fit on the edge.
    #[error("{family} pattern needs {required} but the edge is {available} long")]
    DoesNotFit {
        family: String,
        required: f64,
        available: f64,
    },

    /// Dimensions are invalid (zero or negative).
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

impl ParameterError {
    /// Fails unless `value` is finite and strictly positive.
    pub fn require_positive(name: &str, value: f64) -> ParameterResult<()> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(ParameterError::InvalidValue {
                name: name.to_string(),
                reason: format!("{} must be positive", value),
            })
        }
    }

    /// Fails unless `count` is at least `min`.
    pub fn require_count(name: &str, count: u32, min: u32) -> ParameterResult<()> {
        if count >= min {
            Ok(())
        } else {
            Err(ParameterError::OutOfRange {
                name: name.to_string(),
                value: count as f64,
                min: min as f64,
                max: f64::INFINITY,
            })
        }
    }
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;
