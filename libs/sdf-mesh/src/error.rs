//! # Mesh Errors
//!
//! Error types for sampling, extraction and rendering.

use sdf_eval::FieldError;
use thiserror::Error;

/// Errors that can occur while turning a field into a mesh.
///
/// All errors are reported before any partial mesh is returned.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Field construction error from the eval layer
    #[error("Field error: {0}")]
    Field(#[from] FieldError),

    /// Bounding box or resolution is unusable
    #[error("Invalid grid: {message}")]
    InvalidGrid { message: String },

    /// Requested iso-level lies outside the sampled values
    #[error(
        "Iso-level not within sampled value range. Try enlarging the bounding box \
         or increasing the resolution. Range=({min}, {max}), iso_level={iso_level}"
    )]
    IsoLevelOutOfRange { min: f64, max: f64, iso_level: f64 },

    /// Per-field parameter list has the wrong length
    #[error("Dimension mismatch: expected {expected} {what}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A required capability (evaluator, extractor, renderer) is not installed
    #[error("Missing capability: {capability} is required but not available")]
    MissingCapability { capability: &'static str },

    /// Nothing to render
    #[error("Render request contains no fields")]
    EmptyScene,

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },

    /// Renderer output failed
    #[error("Render output failed: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates an invalid grid error.
    pub fn invalid_grid(message: impl Into<String>) -> Self {
        Self::InvalidGrid {
            message: message.into(),
        }
    }

    /// Creates a missing capability error.
    pub fn missing(capability: &'static str) -> Self {
        Self::MissingCapability { capability }
    }

    /// Creates a dimension mismatch error.
    pub fn dimension_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            what,
            expected,
            actual,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
