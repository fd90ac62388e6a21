//! # Grid Sampler
//!
//! Evaluates a field at every lattice point of a [`Grid`], producing a dense
//! [`SampleVolume`]. Evaluation is delegated to a [`FieldEvaluator`] so the
//! batch kernel (parallel, sequential, or something external) is pluggable.

use sdf_eval::{Field, FieldEvaluator};
use tracing::{debug, instrument};

use crate::error::MeshError;
use crate::grid::Grid;

/// Dense `N×N×N` field samples, indexed through [`Grid::index`].
#[derive(Debug, Clone, PartialEq)]
pub struct SampleVolume {
    grid: Grid,
    values: Vec<f64>,
}

impl SampleVolume {
    /// Wraps precomputed samples.
    ///
    /// Returns `None` unless `values` holds exactly one sample per lattice
    /// point.
    pub fn from_values(grid: Grid, values: Vec<f64>) -> Option<Self> {
        (values.len() == grid.point_count()).then_some(Self { grid, values })
    }

    /// Returns the grid the samples were taken on.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the samples in flat-offset order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Sample at lattice index `(i, j, k)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize) -> f64 {
        self.values[self.grid.index(i, j, k)]
    }

    /// Smallest and largest sample.
    pub fn value_range(&self) -> (f64, f64) {
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| (min.min(v), max.max(v)))
    }
}

/// Samples `field` over `grid` using `evaluator`.
///
/// # Errors
///
/// [`MeshError::DimensionMismatch`] if the evaluator does not return exactly
/// one value per lattice point.
#[instrument(skip_all, fields(resolution = grid.resolution(), evaluator = evaluator.name()))]
pub fn sample(
    field: &Field,
    grid: &Grid,
    evaluator: &dyn FieldEvaluator,
) -> Result<SampleVolume, MeshError> {
    let points = grid.points();
    let values = evaluator.evaluate(field, &points);
    if values.len() != points.len() {
        return Err(MeshError::dimension_mismatch("samples", points.len(), values.len()));
    }
    debug!(points = points.len(), nodes = field.node_count(), "field sampled");
    Ok(SampleVolume {
        grid: *grid,
        values,
    })
}
