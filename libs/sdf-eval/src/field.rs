//! # Field Types
//!
//! Immutable signed-field expression trees.
//!
//! A [`Field`] is a cheap-to-clone handle to a [`FieldNode`]. Nodes are
//! shared through `Arc`, so the same sub-field can feed several combinators
//! without copying, and nothing is ever mutated after construction.
//!
//! ## Sign Convention
//!
//! For every field `d` and point `p`:
//!
//! - `d(p) < 0`: `p` is inside the solid
//! - `d(p) == 0`: `p` is on the boundary
//! - `d(p) > 0`: `p` is outside

use std::sync::{Arc, OnceLock};

use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};
use stacker::maybe_grow;

use crate::error::FieldError;

// =============================================================================
// FIELD
// =============================================================================

/// Handle to an immutable field expression.
///
/// # Example
///
/// ```rust
/// use sdf_eval::{sphere, translate};
/// use glam::DVec3;
///
/// let ball = sphere(1.0).unwrap();
/// let moved = translate(&ball, DVec3::X).unwrap();
/// assert_eq!(moved.evaluate(DVec3::X), -1.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Field(Arc<FieldNode>);

impl Field {
    pub(crate) fn new(node: FieldNode) -> Self {
        Self(Arc::new(node))
    }

    /// Returns the root node.
    #[inline]
    pub fn node(&self) -> &FieldNode {
        &self.0
    }

    /// Returns true if both handles point at the same shared node.
    #[inline]
    pub fn ptr_eq(&self, other: &Field) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Number of nodes in the expression tree.
    ///
    /// Shared sub-fields are counted once per use.
    pub fn node_count(&self) -> usize {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            match self.node() {
                FieldNode::Primitive(_) => 1,
                FieldNode::Transform { child, .. } => 1 + child.node_count(),
                FieldNode::Boolean { lhs, rhs, .. } => 1 + lhs.node_count() + rhs.node_count(),
            }
        })
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            match self.node() {
                FieldNode::Primitive(_) => 1,
                FieldNode::Transform { child, .. } => 1 + child.depth(),
                FieldNode::Boolean { lhs, rhs, .. } => 1 + lhs.depth().max(rhs.depth()),
            }
        })
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
            || maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
                self.node() == other.node()
            })
    }
}

/// Shared leaf swapped in for children while a tree is torn down.
fn detached() -> &'static Field {
    static DETACHED: OnceLock<Field> = OnceLock::new();
    DETACHED.get_or_init(|| {
        Field::new(FieldNode::Primitive(Primitive::Cuboid {
            half_extents: DVec3::ZERO,
        }))
    })
}

// =============================================================================
// FIELD NODE
// =============================================================================

/// A node in a field expression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldNode {
    /// Leaf shape.
    Primitive(Primitive),

    /// Rigid motion applied to a child field.
    Transform {
        /// Motion parameters.
        transform: Transform,
        /// Field being moved.
        child: Field,
    },

    /// Pointwise boolean combination of two fields.
    Boolean {
        /// Combination rule.
        op: BooleanOp,
        /// First operand (A).
        lhs: Field,
        /// Second operand (B).
        rhs: Field,
    },
}

impl FieldNode {
    /// Moves the children out onto `pending`, leaving [`detached`] behind.
    fn detach_children(&mut self, pending: &mut Vec<Field>) {
        match self {
            FieldNode::Primitive(_) => {}
            FieldNode::Transform { child, .. } => detach(child, pending),
            FieldNode::Boolean { lhs, rhs, .. } => {
                detach(lhs, pending);
                detach(rhs, pending);
            }
        }
    }
}

fn detach(child: &mut Field, pending: &mut Vec<Field>) {
    let leaf = detached();
    if !child.ptr_eq(leaf) {
        pending.push(std::mem::replace(child, leaf.clone()));
    }
}

// Tear trees down with a heap stack. Nodes this handle owns alone are
// unwrapped and emptied; shared ones only lose a reference.
impl Drop for FieldNode {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(field) = pending.pop() {
            if let Ok(mut node) = Arc::try_unwrap(field.0) {
                node.detach_children(&mut pending);
            }
        }
    }
}

// =============================================================================
// PRIMITIVES
// =============================================================================

/// Leaf shapes. All are centered at the origin unless noted.
///
/// Deserialization runs the same parameter checks as the constructors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PrimitiveRepr")]
pub enum Primitive {
    /// Ball of `radius` around `center`.
    Sphere {
        /// Radius (> 0).
        radius: f64,
        /// Center point.
        center: DVec3,
    },

    /// Axis-aligned box.
    Cuboid {
        /// Half-size along each axis.
        half_extents: DVec3,
    },

    /// Axis-aligned box with edges rounded by `radius`.
    RoundBox {
        /// Outer half-size along each axis.
        half_extents: DVec3,
        /// Edge rounding radius.
        radius: f64,
    },

    /// Hollow box made of its twelve edges.
    BoxFrame {
        /// Outer half-size along each axis.
        half_extents: DVec3,
        /// Wall thickness of each edge bar.
        thickness: f64,
    },

    /// Cylinder along the z axis, infinite when `height` is `None`.
    Cylinder {
        /// Radius (> 0).
        radius: f64,
        /// Total height, centered on z = 0.
        height: Option<f64>,
    },
}

// =============================================================================
// TRANSFORMS
// =============================================================================

/// Rigid motions. Only isometries are representable.
///
/// The cached inverse rotation is not serialized; it is rebuilt from the
/// angles on load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TransformRepr")]
pub enum Transform {
    /// Shift by `offset`.
    Translate {
        /// Displacement.
        offset: DVec3,
    },

    /// Euler rotation `R = Rz·Ry·Rx` (radians).
    Rotate {
        /// `(rx, ry, rz)` in radians.
        angles: DVec3,
        /// `Rᵀ`, the inverse rotation, cached at construction.
        #[serde(skip_serializing)]
        inverse: DMat3,
    },
}

// =============================================================================
// WIRE FORMS
// =============================================================================

/// Unchecked [`Primitive`] as read from a serialized tree.
#[derive(Deserialize)]
enum PrimitiveRepr {
    Sphere { radius: f64, center: DVec3 },
    Cuboid { half_extents: DVec3 },
    RoundBox { half_extents: DVec3, radius: f64 },
    BoxFrame { half_extents: DVec3, thickness: f64 },
    Cylinder { radius: f64, height: Option<f64> },
}

impl TryFrom<PrimitiveRepr> for Primitive {
    type Error = FieldError;

    fn try_from(repr: PrimitiveRepr) -> Result<Self, FieldError> {
        let primitive = match repr {
            PrimitiveRepr::Sphere { radius, center } => Primitive::Sphere { radius, center },
            PrimitiveRepr::Cuboid { half_extents } => Primitive::Cuboid { half_extents },
            PrimitiveRepr::RoundBox {
                half_extents,
                radius,
            } => Primitive::RoundBox {
                half_extents,
                radius,
            },
            PrimitiveRepr::BoxFrame {
                half_extents,
                thickness,
            } => Primitive::BoxFrame {
                half_extents,
                thickness,
            },
            PrimitiveRepr::Cylinder { radius, height } => Primitive::Cylinder { radius, height },
        };
        primitive.validated()
    }
}

/// Serialized [`Transform`]. Any stored inverse is ignored.
#[derive(Deserialize)]
enum TransformRepr {
    Translate { offset: DVec3 },
    Rotate { angles: DVec3 },
}

impl TryFrom<TransformRepr> for Transform {
    type Error = FieldError;

    fn try_from(repr: TransformRepr) -> Result<Self, FieldError> {
        match repr {
            TransformRepr::Translate { offset } => Transform::translation(offset),
            TransformRepr::Rotate { angles } => Transform::rotation(angles),
        }
    }
}

// =============================================================================
// BOOLEAN OPERATIONS
// =============================================================================

/// Pointwise min/max combination rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BooleanOp {
    /// `min(a, b)`
    Union,
    /// `max(a, b)`
    Intersection,
    /// `max(a, -b)`, A minus B.
    Subtraction,
    /// `max(min(a, b), -max(a, b))`
    Xor,
}
