//! # SDF Eval
//!
//! Signed scalar fields over 3-D space and the algebra that composes them.
//!
//! ## Architecture
//!
//! ```text
//! primitives → transforms / booleans → Field → sdf-mesh (sample + extract)
//! ```
//!
//! A [`Field`] is an immutable expression tree. Leaves are primitive shapes,
//! interior nodes are rigid transforms or boolean combinations. Every
//! operator returns a new field; sub-fields are shared, never mutated.
//!
//! ## Example
//!
//! ```rust
//! use sdf_eval::{cuboid, rotate, sphere, subtraction, translate};
//! use glam::DVec3;
//!
//! let block = cuboid(DVec3::ONE).unwrap();
//! let hole = translate(&sphere(0.6).unwrap(), DVec3::new(0.0, 0.0, 1.0)).unwrap();
//! let part = rotate(&subtraction(&block, &hole), DVec3::new(0.0, 0.0, 0.3)).unwrap();
//!
//! assert!(part.evaluate(DVec3::ZERO) < 0.0);
//! ```

pub mod boolean;
pub mod error;
pub mod evaluator;
pub mod field;
pub mod primitives;
pub mod transforms;

// Re-export public API
pub use boolean::{difference, intersection, subtraction, union, union_all, xor};
pub use error::FieldError;
pub use evaluator::{FieldEvaluator, ParallelEvaluator, SequentialEvaluator};
pub use field::{BooleanOp, Field, FieldNode, Primitive, Transform};
pub use primitives::{box_frame, cuboid, cylinder, round_box, sphere, sphere_at};
pub use transforms::{rotate, rotation_matrix, translate};
