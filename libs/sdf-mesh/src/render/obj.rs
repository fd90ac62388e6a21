//! Wavefront `.obj` writer.
//!
//! Each solid becomes an `o` object. Vertex lines carry the solid's color as
//! the common `v x y z r g b` extension; alpha goes into a comment since OBJ
//! has no slot for it. Face indices are 1-based and run across all solids of
//! one render call.

use std::io::Write;

use tracing::debug;

use super::{ColoredMesh, Renderer};
use crate::error::MeshError;
use crate::grid::Bounds;

/// Renderer that writes OBJ text into any [`Write`] sink.
#[derive(Debug)]
pub struct ObjRenderer<W: Write> {
    writer: W,
}

impl<W: Write> ObjRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consumes the renderer, returning the sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for ObjRenderer<W> {
    fn name(&self) -> &'static str {
        "obj"
    }

    fn render(&mut self, solids: &[ColoredMesh], bounds: &Bounds) -> Result<(), MeshError> {
        let w = &mut self.writer;
        let [(x0, x1), (y0, y1), (z0, z1)] = *bounds;
        writeln!(w, "# sdf-mesh export")?;
        writeln!(w, "# bounds {x0} {x1} {y0} {y1} {z0} {z1}")?;

        let mut offset = 1usize;
        for (n, solid) in solids.iter().enumerate() {
            let [r, g, b, a] = solid.color;
            writeln!(w, "o solid_{n}")?;
            writeln!(w, "# rgba {r} {g} {b} {a}")?;
            for v in solid.mesh.vertices() {
                writeln!(w, "v {} {} {} {r} {g} {b}", v.x, v.y, v.z)?;
            }
            for tri in solid.mesh.triangles() {
                let [i, j, k] = tri.map(|i| i as usize + offset);
                writeln!(w, "f {i} {j} {k}")?;
            }
            offset += solid.mesh.vertex_count();
        }
        w.flush()?;

        debug!(solids = solids.len(), vertices = offset - 1, "OBJ written");
        Ok(())
    }
}
