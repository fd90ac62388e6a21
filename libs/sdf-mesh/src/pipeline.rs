//! # Field-to-Mesh Pipeline
//!
//! Wires the three capabilities together: a [`FieldEvaluator`] samples the
//! field, an [`IsoSurfaceExtractor`] triangulates it and an optional
//! [`Renderer`] consumes the result.
//!
//! Every capability an operation needs is looked up before any work starts,
//! so a missing one fails fast with [`MeshError::MissingCapability`].

use std::fmt;

use sdf_eval::{Field, FieldEvaluator, ParallelEvaluator};
use tracing::{debug, instrument};

use crate::error::MeshError;
use crate::marching_cubes::{IsoSurfaceExtractor, MarchingCubes};
use crate::mesh::Mesh;
use crate::render::{ColoredMesh, RenderRequest, Renderer};
use crate::sampler::{sample, SampleVolume};
use crate::settings::MeshSettings;

const EVALUATOR: &str = "field evaluator";
const EXTRACTOR: &str = "iso-surface extractor";
const RENDERER: &str = "renderer";

/// Samples `field` over `settings.bounds` and extracts the surface at
/// `settings.iso_level` with the default capabilities.
///
/// # Errors
///
/// - [`MeshError::InvalidGrid`] for bad bounds or resolution
/// - [`MeshError::IsoLevelOutOfRange`] if no sample reaches the iso-level
///
/// # Example
///
/// ```rust
/// use sdf_mesh::{sdf_to_mesh, MeshSettings};
/// use sdf_eval::sphere;
///
/// let settings = MeshSettings::default().with_cube_bounds(-1.2, 1.2).with_resolution(20);
/// let mesh = sdf_to_mesh(&sphere(1.0).unwrap(), &settings).unwrap();
/// assert!(mesh.triangle_count() > 0);
/// ```
pub fn sdf_to_mesh(field: &Field, settings: &MeshSettings) -> Result<Mesh, MeshError> {
    Pipeline::new().mesh(field, settings)
}

/// The capability set used to turn fields into meshes.
pub struct Pipeline<'r> {
    evaluator: Option<Box<dyn FieldEvaluator>>,
    extractor: Option<Box<dyn IsoSurfaceExtractor>>,
    renderer: Option<Box<dyn Renderer + 'r>>,
}

impl Default for Pipeline<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Pipeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("evaluator", &self.evaluator.as_ref().map(|e| e.name()))
            .field("extractor", &self.extractor.as_ref().map(|e| e.name()))
            .field("renderer", &self.renderer.as_ref().map(|r| r.name()))
            .finish()
    }
}

impl<'r> Pipeline<'r> {
    /// Parallel evaluation and marching cubes; no renderer.
    pub fn new() -> Self {
        Self {
            evaluator: Some(Box::new(ParallelEvaluator)),
            extractor: Some(Box::new(MarchingCubes)),
            renderer: None,
        }
    }

    /// No capabilities at all.
    pub fn empty() -> Self {
        Self {
            evaluator: None,
            extractor: None,
            renderer: None,
        }
    }

    pub fn with_evaluator(mut self, evaluator: impl FieldEvaluator + 'static) -> Self {
        self.evaluator = Some(Box::new(evaluator));
        self
    }

    pub fn with_extractor(mut self, extractor: impl IsoSurfaceExtractor + 'static) -> Self {
        self.extractor = Some(Box::new(extractor));
        self
    }

    pub fn with_renderer(mut self, renderer: impl Renderer + 'r) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    fn evaluator(&self) -> Result<&dyn FieldEvaluator, MeshError> {
        self.evaluator.as_deref().ok_or_else(|| MeshError::missing(EVALUATOR))
    }

    fn extractor(&self) -> Result<&dyn IsoSurfaceExtractor, MeshError> {
        self.extractor.as_deref().ok_or_else(|| MeshError::missing(EXTRACTOR))
    }

    /// Samples `field` on the grid described by `settings`.
    pub fn sample(&self, field: &Field, settings: &MeshSettings) -> Result<SampleVolume, MeshError> {
        let evaluator = self.evaluator()?;
        let grid = settings.grid()?;
        sample(field, &grid, evaluator)
    }

    /// Samples and triangulates `field`.
    pub fn mesh(&self, field: &Field, settings: &MeshSettings) -> Result<Mesh, MeshError> {
        let evaluator = self.evaluator()?;
        let extractor = self.extractor()?;
        let grid = settings.grid()?;

        let volume = sample(field, &grid, evaluator)?;
        extractor.extract(&volume, settings.iso_level)
    }

    /// Meshes every field of `request` and hands the colored meshes to the
    /// renderer.
    ///
    /// Nothing is sampled unless the renderer, evaluator and extractor are
    /// all installed. If any field fails to mesh, the renderer is not called.
    #[instrument(skip_all, fields(solids = request.fields().len()))]
    pub fn render(&mut self, request: &RenderRequest) -> Result<(), MeshError> {
        if self.renderer.is_none() {
            return Err(MeshError::missing(RENDERER));
        }
        self.evaluator()?;
        self.extractor()?;

        let settings = request.settings();
        let solids = request
            .solids()
            .map(|(field, color)| self.mesh(field, settings).map(|mesh| ColoredMesh { mesh, color }))
            .collect::<Result<Vec<_>, MeshError>>()?;

        let renderer = self.renderer.as_mut().ok_or_else(|| MeshError::missing(RENDERER))?;
        debug!(renderer = renderer.name(), "dispatching to renderer");
        renderer.render(&solids, &settings.bounds)
    }
}
