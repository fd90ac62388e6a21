//! # Sampling Grid
//!
//! Axis-aligned bounding box plus a uniform per-axis resolution.
//!
//! The lattice includes both bounds on every axis, so `N` points span
//! `N - 1` intervals. Lattice index `(i, j, k)` maps to the flat offset
//! `(i * N + j) * N + k`; the sampler and the extractor both go through
//! [`Grid::index`].

use config::constants::{lattice_spacing, MAX_RESOLUTION, MIN_RESOLUTION};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// Per-axis `(min, max)` bounds.
pub type Bounds = [(f64, f64); 3];

/// Regular sampling lattice.
///
/// # Example
///
/// ```rust
/// use sdf_mesh::Grid;
///
/// let grid = Grid::cube(-1.0, 1.0, 5).unwrap();
/// assert_eq!(grid.point_count(), 125);
/// assert_eq!(grid.spacing().x, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    bounds: Bounds,
    resolution: usize,
}

impl Grid {
    /// Creates a grid, validating bounds and resolution.
    pub fn new(bounds: Bounds, resolution: usize) -> Result<Self, MeshError> {
        if !(MIN_RESOLUTION..=MAX_RESOLUTION).contains(&resolution) {
            return Err(MeshError::invalid_grid(format!(
                "resolution must be between {} and {}, got {}",
                MIN_RESOLUTION, MAX_RESOLUTION, resolution
            )));
        }

        for (axis, (min, max)) in ["x", "y", "z"].iter().zip(bounds) {
            if !min.is_finite() || !max.is_finite() {
                return Err(MeshError::invalid_grid(format!(
                    "{} bounds must be finite, got ({}, {})",
                    axis, min, max
                )));
            }
            if min >= max {
                return Err(MeshError::invalid_grid(format!(
                    "{} bounds must satisfy min < max, got ({}, {})",
                    axis, min, max
                )));
            }
        }

        Ok(Self { bounds, resolution })
    }

    /// Creates a grid with the same `(min, max)` on every axis.
    pub fn cube(min: f64, max: f64, resolution: usize) -> Result<Self, MeshError> {
        Self::new([(min, max); 3], resolution)
    }

    /// Returns the per-axis bounds.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Returns the number of lattice points per axis.
    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Returns the total number of lattice points.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.resolution.pow(3)
    }

    /// Returns the minimum corner.
    pub fn min_corner(&self) -> DVec3 {
        DVec3::new(self.bounds[0].0, self.bounds[1].0, self.bounds[2].0)
    }

    /// Returns the maximum corner.
    pub fn max_corner(&self) -> DVec3 {
        DVec3::new(self.bounds[0].1, self.bounds[1].1, self.bounds[2].1)
    }

    /// Returns the lattice spacing along each axis.
    pub fn spacing(&self) -> DVec3 {
        let [x, y, z] = self.bounds.map(|(min, max)| lattice_spacing(min, max, self.resolution));
        DVec3::new(x, y, z)
    }

    /// Flat offset of lattice index `(i, j, k)`.
    #[inline]
    pub fn index(&self, i: usize, j: usize, k: usize) -> usize {
        (i * self.resolution + j) * self.resolution + k
    }

    /// World coordinate of lattice step `step` along `axis`.
    ///
    /// The last step lands exactly on the max bound.
    #[inline]
    fn coordinate(&self, axis: usize, step: usize) -> f64 {
        let (min, max) = self.bounds[axis];
        if step + 1 == self.resolution {
            max
        } else {
            min + step as f64 * lattice_spacing(min, max, self.resolution)
        }
    }

    /// World position of lattice point `(i, j, k)`.
    pub fn point(&self, i: usize, j: usize, k: usize) -> DVec3 {
        DVec3::new(self.coordinate(0, i), self.coordinate(1, j), self.coordinate(2, k))
    }

    /// All lattice points, in flat-offset order.
    pub fn points(&self) -> Vec<DVec3> {
        let n = self.resolution;
        let xs: Vec<f64> = (0..n).map(|s| self.coordinate(0, s)).collect();
        let ys: Vec<f64> = (0..n).map(|s| self.coordinate(1, s)).collect();
        let zs: Vec<f64> = (0..n).map(|s| self.coordinate(2, s)).collect();

        let mut points = Vec::with_capacity(self.point_count());
        for &x in &xs {
            for &y in &ys {
                for &z in &zs {
                    points.push(DVec3::new(x, y, z));
                }
            }
        }
        points
    }
}
