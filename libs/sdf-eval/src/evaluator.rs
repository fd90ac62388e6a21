//! # Field Evaluation
//!
//! A single recursive evaluator pattern-matches on [`FieldNode`] variants.
//! Batch evaluation goes through the [`FieldEvaluator`] capability so that a
//! different numerical kernel can be substituted without touching the
//! composition layer.

use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use glam::DVec3;
use rayon::prelude::*;
use stacker::maybe_grow;
use tracing::trace;

use crate::field::{Field, FieldNode};

impl Field {
    /// Evaluates the field at `p`.
    pub fn evaluate(&self, p: DVec3) -> f64 {
        match self.node() {
            FieldNode::Primitive(primitive) => primitive.distance(p),
            FieldNode::Transform { transform, child } => {
                let local = transform.to_local(p);
                maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
                    child.evaluate(local)
                })
            }
            FieldNode::Boolean { op, lhs, rhs } => {
                maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
                    op.combine(lhs.evaluate(p), rhs.evaluate(p))
                })
            }
        }
    }

    /// Evaluates the field at `(x, y, z)`.
    #[inline]
    pub fn evaluate_xyz(&self, x: f64, y: f64, z: f64) -> f64 {
        self.evaluate(DVec3::new(x, y, z))
    }
}

// =============================================================================
// CAPABILITY
// =============================================================================

/// Batch evaluation capability.
///
/// Implementations must return exactly one value per input point, in input
/// order.
pub trait FieldEvaluator: Send + Sync {
    /// Short name used in logs and dependency errors.
    fn name(&self) -> &'static str;

    /// Evaluates `field` at every point of `points`.
    fn evaluate(&self, field: &Field, points: &[DVec3]) -> Vec<f64>;
}

/// Evaluates points one after another on the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialEvaluator;

impl FieldEvaluator for SequentialEvaluator {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn evaluate(&self, field: &Field, points: &[DVec3]) -> Vec<f64> {
        trace!(points = points.len(), "sequential evaluation");
        points.iter().map(|p| field.evaluate(*p)).collect()
    }
}

/// Evaluates points in parallel on the rayon thread pool.
///
/// Every point is independent, so the work splits freely across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParallelEvaluator;

impl FieldEvaluator for ParallelEvaluator {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn evaluate(&self, field: &Field, points: &[DVec3]) -> Vec<f64> {
        trace!(points = points.len(), threads = rayon::current_num_threads(), "parallel evaluation");
        points.par_iter().map(|p| field.evaluate(*p)).collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
