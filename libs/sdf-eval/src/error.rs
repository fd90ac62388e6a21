//! # Field Errors
//!
//! Error types for field construction.

use thiserror::Error;

/// Errors that can occur while building a field expression.
///
/// Parameters are validated eagerly, so a `Field` value that exists is
/// always evaluable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// A primitive or transform parameter is out of its valid domain.
    #[error("Invalid {shape} parameter `{parameter}` = {value}: {requirement}")]
    Construction {
        /// Constructor that rejected the parameter.
        shape: &'static str,
        /// Parameter name.
        parameter: &'static str,
        /// Offending value.
        value: f64,
        /// Human-readable constraint that was violated.
        requirement: &'static str,
    },
}

impl FieldError {
    /// Creates a construction error.
    pub fn construction(
        shape: &'static str,
        parameter: &'static str,
        value: f64,
        requirement: &'static str,
    ) -> Self {
        Self::Construction {
            shape,
            parameter,
            value,
            requirement,
        }
    }
}

/// Rejects NaN and infinities.
pub(crate) fn require_finite(
    shape: &'static str,
    parameter: &'static str,
    value: f64,
) -> Result<f64, FieldError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FieldError::construction(shape, parameter, value, "must be finite"))
    }
}

/// Rejects zero, negative and non-finite values.
pub(crate) fn require_positive(
    shape: &'static str,
    parameter: &'static str,
    value: f64,
) -> Result<f64, FieldError> {
    require_finite(shape, parameter, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(FieldError::construction(shape, parameter, value, "must be positive"))
    }
}

// =============================================================================
// TESTS
// =============================================================================
