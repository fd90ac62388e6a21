//! # SDF Mesh
//!
//! Turns signed fields from `sdf-eval` into triangle meshes.
//!
//! ## Architecture
//!
//! ```text
//! Field → Grid sampler (SampleVolume) → marching cubes (Mesh) → Renderer
//! ```
//!
//! Each stage sits behind a capability trait ([`FieldEvaluator`],
//! [`IsoSurfaceExtractor`], [`Renderer`]) so a [`Pipeline`] can swap in
//! other kernels or consumers. [`sdf_to_mesh`] runs the default pipeline.
//!
//! ## Usage
//!
//! ```rust
//! use sdf_mesh::{sdf_to_mesh, MeshSettings};
//! use sdf_eval::{cuboid, sphere, subtraction};
//! use glam::DVec3;
//!
//! let part = subtraction(&cuboid(DVec3::splat(0.8)).unwrap(), &sphere(1.0).unwrap());
//! let settings = MeshSettings::default().with_cube_bounds(-1.0, 1.0).with_resolution(24);
//! let mesh = sdf_to_mesh(&part, &settings).unwrap();
//! assert!(mesh.vertex_count() > 0);
//! ```

pub mod error;
pub mod grid;
pub mod marching_cubes;
pub mod mesh;
pub mod pipeline;
pub mod render;
pub mod sampler;
pub mod settings;

pub use error::MeshError;
pub use grid::{Bounds, Grid};
pub use marching_cubes::{extract_iso_surface, IsoSurfaceExtractor, MarchingCubes};
pub use mesh::Mesh;
pub use pipeline::{sdf_to_mesh, Pipeline};
pub use render::{color_from_rgba8, ColorSpec, ColoredMesh, ObjRenderer, RenderRequest, Renderer, Rgba};
pub use sampler::{sample, SampleVolume};
pub use sdf_eval::FieldEvaluator;
pub use settings::MeshSettings;
