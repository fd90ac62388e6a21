//! # Iso-Surface Extraction
//!
//! Marching cubes over a [`SampleVolume`].
//!
//! ## Algorithm
//!
//! 1. Check that the iso-level lies within the sampled value range
//! 2. For every lattice cell, classify its eight corners against the
//!    iso-level and look up the cell's triangles in [`tables::TRIANGLE_TABLE`]
//! 3. Place each triangle vertex on its cell edge by linear interpolation,
//!    scaled by the per-axis spacing
//! 4. Translate the mesh by the grid's minimum corner
//!
//! Vertices are shared between cells through their lattice edge, so a
//! surface that stays inside the bounding box comes out closed. No further
//! repair or de-duplication is attempted.

pub mod tables;

use std::collections::HashMap;

use config::constants::{MAX_TRIANGLES, MAX_VERTICES};
use glam::DVec3;
use tracing::{debug, instrument};

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::sampler::SampleVolume;
use tables::{CORNER_OFFSETS, EDGE_CORNERS, TRIANGLE_TABLE};

// =============================================================================
// CAPABILITY
// =============================================================================

/// Iso-surface triangulation capability.
pub trait IsoSurfaceExtractor: Send + Sync {
    /// Short name used in logs and dependency errors.
    fn name(&self) -> &'static str;

    /// Triangulates `volume` at `iso_level` into a world-space mesh.
    fn extract(&self, volume: &SampleVolume, iso_level: f64) -> Result<Mesh, MeshError>;
}

/// Built-in marching-cubes extractor.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarchingCubes;

impl IsoSurfaceExtractor for MarchingCubes {
    fn name(&self) -> &'static str {
        "marching-cubes"
    }

    fn extract(&self, volume: &SampleVolume, iso_level: f64) -> Result<Mesh, MeshError> {
        extract_iso_surface(volume, iso_level)
    }
}

// =============================================================================
// EXTRACTION
// =============================================================================

/// Validates the iso-level, triangulates and moves the mesh into world space.
///
/// # Errors
///
/// [`MeshError::IsoLevelOutOfRange`] when `iso_level` is outside
/// `[min(volume), max(volume)]`.
#[instrument(skip(volume), fields(resolution = volume.grid().resolution()))]
pub fn extract_iso_surface(volume: &SampleVolume, iso_level: f64) -> Result<Mesh, MeshError> {
    check_iso_level(volume, iso_level)?;

    let mut mesh = triangulate(volume, iso_level)?;
    mesh.translate(volume.grid().min_corner());

    debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "iso-surface extracted"
    );
    Ok(mesh)
}

/// Fails unless `min(volume) <= iso_level <= max(volume)`.
pub fn check_iso_level(volume: &SampleVolume, iso_level: f64) -> Result<(), MeshError> {
    let (min, max) = volume.value_range();
    debug!(min, max, iso_level, "sampled value range");
    if min <= iso_level && iso_level <= max {
        Ok(())
    } else {
        Err(MeshError::IsoLevelOutOfRange { min, max, iso_level })
    }
}

/// Runs marching cubes without range validation.
///
/// Vertices are relative to the grid's minimum corner, scaled by the
/// per-axis spacing. A corner counts as inside when its sample is strictly
/// below `iso_level`.
pub fn triangulate(volume: &SampleVolume, iso_level: f64) -> Result<Mesh, MeshError> {
    let grid = volume.grid();
    let n = grid.resolution();
    let spacing = grid.spacing();

    let mut mesh = Mesh::new();
    // Lattice edge (lower flat index, higher flat index) -> mesh vertex
    let mut edge_vertices: HashMap<(usize, usize), u32> = HashMap::new();

    for i in 0..n - 1 {
        for j in 0..n - 1 {
            for k in 0..n - 1 {
                let corners = CORNER_OFFSETS.map(|[di, dj, dk]| [i + di, j + dj, k + dk]);
                let values = corners.map(|[a, b, c]| volume.get(a, b, c));

                let case = values
                    .iter()
                    .enumerate()
                    .filter(|(_, &v)| v < iso_level)
                    .fold(0usize, |case, (bit, _)| case | (1 << bit));
                if case == 0 || case == 0xff {
                    continue;
                }

                for triangle in TRIANGLE_TABLE[case].chunks_exact(3) {
                    if triangle[0] < 0 {
                        break;
                    }

                    let mut indices = [0u32; 3];
                    for (slot, &edge) in indices.iter_mut().zip(triangle) {
                        let [ca, cb] = EDGE_CORNERS[edge as usize];
                        let [a, b] = [corners[ca], corners[cb]];
                        let ia = grid.index(a[0], a[1], a[2]);
                        let ib = grid.index(b[0], b[1], b[2]);
                        let key = (ia.min(ib), ia.max(ib));

                        *slot = match edge_vertices.get(&key) {
                            Some(&index) => index,
                            None => {
                                let position = interpolate(
                                    lattice_position(a, spacing),
                                    lattice_position(b, spacing),
                                    values[ca],
                                    values[cb],
                                    iso_level,
                                );
                                let index = mesh.add_vertex(position);
                                edge_vertices.insert(key, index);
                                index
                            }
                        };
                    }

                    mesh.add_triangle(indices[0], indices[1], indices[2]);
                }

                if mesh.vertex_count() > MAX_VERTICES {
                    return Err(MeshError::TooManyVertices {
                        count: mesh.vertex_count(),
                        max: MAX_VERTICES,
                    });
                }
                if mesh.triangle_count() > MAX_TRIANGLES {
                    return Err(MeshError::TooManyTriangles {
                        count: mesh.triangle_count(),
                        max: MAX_TRIANGLES,
                    });
                }
            }
        }
    }

    Ok(mesh)
}

#[inline]
fn lattice_position(index: [usize; 3], spacing: DVec3) -> DVec3 {
    DVec3::new(index[0] as f64, index[1] as f64, index[2] as f64) * spacing
}

/// Point on segment `pa..pb` where the linear interpolant of `va..vb`
/// crosses `iso_level`. Only called for edges with a sign change, so
/// `va != vb`.
#[inline]
fn interpolate(pa: DVec3, pb: DVec3, va: f64, vb: f64, iso_level: f64) -> DVec3 {
    let t = (iso_level - va) / (vb - va);
    pa + (pb - pa) * t
}

#[cfg(test)]
mod tests;
