//! # Rendering
//!
//! Hands finished meshes to a [`Renderer`] collaborator.
//!
//! A [`RenderRequest`] pairs each field with a color. Colors are given once
//! for all fields or once per field; a per-field list whose length differs
//! from the field count is rejected when the request is built.

pub mod obj;

pub use obj::ObjRenderer;

use config::constants::DEFAULT_COLOR;
use sdf_eval::Field;

use crate::error::MeshError;
use crate::grid::Bounds;
use crate::mesh::Mesh;
use crate::settings::MeshSettings;

/// Linear RGBA, each channel in `[0, 1]`.
pub type Rgba = [f32; 4];

/// Converts 8-bit channels to [`Rgba`].
pub fn color_from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Rgba {
    [r, g, b, a].map(|c| f32::from(c) / 255.0)
}

/// How colors are assigned to the fields of a request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ColorSpec {
    /// [`DEFAULT_COLOR`] for every field
    #[default]
    Default,
    /// One color broadcast to every field
    Uniform(Rgba),
    /// One color per field, in field order
    PerField(Vec<Rgba>),
}

impl From<Rgba> for ColorSpec {
    fn from(color: Rgba) -> Self {
        Self::Uniform(color)
    }
}

impl From<Vec<Rgba>> for ColorSpec {
    fn from(colors: Vec<Rgba>) -> Self {
        Self::PerField(colors)
    }
}

/// A mesh with the color it should be drawn in.
#[derive(Debug, Clone, PartialEq)]
pub struct ColoredMesh {
    pub mesh: Mesh,
    pub color: Rgba,
}

/// Mesh consumer capability.
///
/// Receives every solid of one request at once, together with the sampled
/// bounding box so viewers can frame the scene.
pub trait Renderer {
    /// Short name used in logs and dependency errors.
    fn name(&self) -> &'static str;

    fn render(&mut self, solids: &[ColoredMesh], bounds: &Bounds) -> Result<(), MeshError>;
}

/// One or more fields to mesh and render with shared settings.
///
/// # Example
///
/// ```rust
/// use sdf_mesh::{ColorSpec, MeshSettings, RenderRequest};
/// use sdf_eval::sphere;
///
/// let fields = vec![sphere(0.5).unwrap(), sphere(0.8).unwrap()];
/// let red = ColorSpec::Uniform([1.0, 0.0, 0.0, 1.0]);
/// let request = RenderRequest::new(fields, red, MeshSettings::default()).unwrap();
/// assert_eq!(request.colors().len(), 2);
///
/// let mismatched = RenderRequest::new(
///     vec![sphere(0.5).unwrap()],
///     ColorSpec::PerField(vec![[1.0; 4], [0.5; 4]]),
///     MeshSettings::default(),
/// );
/// assert!(mismatched.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RenderRequest {
    fields: Vec<Field>,
    colors: Vec<Rgba>,
    settings: MeshSettings,
}

impl RenderRequest {
    /// Builds a request, resolving `colors` to one color per field.
    ///
    /// # Errors
    ///
    /// - [`MeshError::EmptyScene`] if `fields` is empty
    /// - [`MeshError::DimensionMismatch`] if a per-field color list has the
    ///   wrong length
    pub fn new(
        fields: impl IntoIterator<Item = Field>,
        colors: impl Into<ColorSpec>,
        settings: MeshSettings,
    ) -> Result<Self, MeshError> {
        let fields: Vec<Field> = fields.into_iter().collect();
        if fields.is_empty() {
            return Err(MeshError::EmptyScene);
        }

        let colors = match colors.into() {
            ColorSpec::Default => vec![DEFAULT_COLOR; fields.len()],
            ColorSpec::Uniform(color) => vec![color; fields.len()],
            ColorSpec::PerField(colors) if colors.len() == fields.len() => colors,
            ColorSpec::PerField(colors) => {
                return Err(MeshError::dimension_mismatch("colors", fields.len(), colors.len()));
            }
        };

        Ok(Self {
            fields,
            colors,
            settings,
        })
    }

    /// Single field in the default color.
    pub fn single(field: Field, settings: MeshSettings) -> Self {
        Self {
            fields: vec![field],
            colors: vec![DEFAULT_COLOR],
            settings,
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Resolved colors, one per field.
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    pub fn settings(&self) -> &MeshSettings {
        &self.settings
    }

    /// `(field, color)` pairs in request order.
    pub fn solids(&self) -> impl Iterator<Item = (&Field, Rgba)> + '_ {
        self.fields.iter().zip(self.colors.iter().copied())
    }
}
