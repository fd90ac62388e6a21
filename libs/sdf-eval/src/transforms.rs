//! # Transform Operators
//!
//! Rigid motions of fields. A moved field is evaluated by mapping the query
//! point back into the child's frame with the inverse motion, so exact
//! distance fields stay exact.
//!
//! Non-uniform scaling is deliberately absent: it would break the distance
//! metric and there is no closed-form correction.

use glam::{DMat3, DVec3};

use crate::error::FieldError;
use crate::field::{Field, FieldNode, Transform};
use crate::primitives::require_vec_finite;

// =============================================================================
// TRANSLATE
// =============================================================================

/// Moves `field` by `offset`.
///
/// The result satisfies `translate(f, o)(p) == f(p - o)`.
///
/// # Example
///
/// ```rust
/// use sdf_eval::{sphere, translate};
/// use glam::DVec3;
///
/// let moved = translate(&sphere(1.0).unwrap(), DVec3::new(1.0, 0.0, 0.0)).unwrap();
/// assert_eq!(moved.evaluate(DVec3::ZERO), 0.0);
/// ```
pub fn translate(field: &Field, offset: DVec3) -> Result<Field, FieldError> {
    Ok(Field::new(FieldNode::Transform {
        transform: Transform::translation(offset)?,
        child: field.clone(),
    }))
}

// =============================================================================
// ROTATE
// =============================================================================

/// Rotates `field` by Euler angles `(rx, ry, rz)` in radians.
///
/// `Rx` is applied first, then `Ry`, then `Rz`: `R = Rz·Ry·Rx`. The result
/// is evaluated at `Rᵀ·p`.
pub fn rotate(field: &Field, angles: DVec3) -> Result<Field, FieldError> {
    Ok(Field::new(FieldNode::Transform {
        transform: Transform::rotation(angles)?,
        child: field.clone(),
    }))
}

/// Builds `R = Rz·Ry·Rx` for angles `(rx, ry, rz)`.
pub fn rotation_matrix(angles: DVec3) -> DMat3 {
    DMat3::from_rotation_z(angles.z) * DMat3::from_rotation_y(angles.y) * DMat3::from_rotation_x(angles.x)
}

impl Transform {
    pub(crate) fn translation(offset: DVec3) -> Result<Self, FieldError> {
        require_vec_finite("translate", "offset", offset)?;
        Ok(Transform::Translate { offset })
    }

    /// Rotation by `angles` with its inverse derived here, never supplied.
    pub(crate) fn rotation(angles: DVec3) -> Result<Self, FieldError> {
        require_vec_finite("rotate", "angles", angles)?;
        Ok(Transform::Rotate {
            angles,
            inverse: rotation_matrix(angles).transpose(),
        })
    }

    /// Maps a world-space point into the child's local frame.
    #[inline]
    pub fn to_local(&self, p: DVec3) -> DVec3 {
        match self {
            Transform::Translate { offset } => p - *offset,
            Transform::Rotate { inverse, .. } => *inverse * p,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
