//! # Mesh Settings
//!
//! Runtime parameters of one field-to-mesh conversion.

use config::constants::{DEFAULT_BOUNDS, DEFAULT_ISO_LEVEL, DEFAULT_RESOLUTION};
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::grid::{Bounds, Grid};

/// Sampling box, lattice resolution and iso-level.
///
/// Values are checked when the grid is built, not when they are set.
///
/// # Example
///
/// ```rust
/// use sdf_mesh::MeshSettings;
///
/// let settings = MeshSettings::default()
///     .with_cube_bounds(-1.2, 1.2)
///     .with_resolution(32);
/// assert_eq!(settings.grid().unwrap().point_count(), 32 * 32 * 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshSettings {
    /// Per-axis `(min, max)` of the sampled box
    pub bounds: Bounds,
    /// Lattice points per axis
    pub resolution: usize,
    /// Field value at which the surface is extracted
    pub iso_level: f64,
}

impl Default for MeshSettings {
    fn default() -> Self {
        Self {
            bounds: DEFAULT_BOUNDS,
            resolution: DEFAULT_RESOLUTION,
            iso_level: DEFAULT_ISO_LEVEL,
        }
    }
}

impl MeshSettings {
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Uses the same `(min, max)` on every axis.
    pub fn with_cube_bounds(mut self, min: f64, max: f64) -> Self {
        self.bounds = [(min, max); 3];
        self
    }

    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_iso_level(mut self, iso_level: f64) -> Self {
        self.iso_level = iso_level;
        self
    }

    /// Builds the sampling grid.
    pub fn grid(&self) -> Result<Grid, MeshError> {
        Grid::new(self.bounds, self.resolution)
    }
}
