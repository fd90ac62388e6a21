//! # Boolean Combinators
//!
//! Pointwise min/max algebra over two fields.
//!
//! | Operator | Formula |
//! |---|---|
//! | union | `min(a, b)` |
//! | intersection | `max(a, b)` |
//! | subtraction | `max(a, -b)` |
//! | xor | `max(min(a, b), -max(a, b))` |
//!
//! All four preserve the sign convention. None of them preserves exact
//! distance away from the zero level, so results are only fit for
//! iso-surface extraction at level zero, not for distance queries.
//!
//! The xor field is **positive** where both operands are inside and
//! **negative** where exactly one is. This is the supported behavior.

use crate::field::{BooleanOp, Field, FieldNode};

/// Union of `a` and `b`.
///
/// # Example
///
/// ```rust
/// use sdf_eval::{sphere, sphere_at, union};
/// use glam::DVec3;
///
/// let a = sphere(1.0).unwrap();
/// let b = sphere_at(1.0, DVec3::new(3.0, 0.0, 0.0)).unwrap();
/// let both = union(&a, &b);
/// assert!(both.evaluate(DVec3::new(3.0, 0.0, 0.0)) < 0.0);
/// ```
pub fn union(a: &Field, b: &Field) -> Field {
    combine(BooleanOp::Union, a, b)
}

/// Intersection of `a` and `b`.
pub fn intersection(a: &Field, b: &Field) -> Field {
    combine(BooleanOp::Intersection, a, b)
}

/// `a` minus `b`. Not symmetric.
pub fn subtraction(a: &Field, b: &Field) -> Field {
    combine(BooleanOp::Subtraction, a, b)
}

/// Alias for [`subtraction`].
pub fn difference(a: &Field, b: &Field) -> Field {
    subtraction(a, b)
}

/// Symmetric difference of `a` and `b`.
pub fn xor(a: &Field, b: &Field) -> Field {
    combine(BooleanOp::Xor, a, b)
}

/// Left fold of [`union`] over `fields`, `None` when empty.
///
/// Used when merging several solids that share a material.
pub fn union_all<'a, I>(fields: I) -> Option<Field>
where
    I: IntoIterator<Item = &'a Field>,
{
    let mut iter = fields.into_iter();
    let first = iter.next()?.clone();
    Some(iter.fold(first, |acc, field| union(&acc, field)))
}

fn combine(op: BooleanOp, a: &Field, b: &Field) -> Field {
    Field::new(FieldNode::Boolean {
        op,
        lhs: a.clone(),
        rhs: b.clone(),
    })
}

impl BooleanOp {
    /// Combines two field values.
    #[inline]
    pub fn combine(self, a: f64, b: f64) -> f64 {
        match self {
            BooleanOp::Union => a.min(b),
            BooleanOp::Intersection => a.max(b),
            BooleanOp::Subtraction => a.max(-b),
            BooleanOp::Xor => a.min(b).max(-a.max(b)),
        }
    }

    /// Whether swapping the operands leaves the result unchanged.
    pub fn is_commutative(self) -> bool {
        !matches!(self, BooleanOp::Subtraction)
    }
}

// =============================================================================
// TESTS
// =============================================================================
