//! # Marching Cubes Tables
//!
//! Corner, edge and triangulation tables for one lattice cell.
//!
//! Corner `c` of a cell at lattice index `(i, j, k)` sits at
//! `(i, j, k) + CORNER_OFFSETS[c]`. A cell's case index sets bit `c` when
//! corner `c` is inside (below the iso-level). Each row of
//! [`TRIANGLE_TABLE`] lists up to five triangles as triples of edge indices,
//! terminated by `-1`.
//!
//! Ambiguous faces are split so that inside corners stay separated; both
//! cells sharing a face make the same choice, which keeps the surface
//! closed. No triangle edge runs across a cell face, other than the
//! surface's own crossing segment on that face, so neighbouring cells never
//! emit coincident triangles. Triangles are wound counter-clockwise seen
//! from outside.

/// Lattice offset of each cell corner.
pub const CORNER_OFFSETS: [[usize; 3]; 8] = [
    [0, 0, 0],
    [1, 0, 0],
    [1, 1, 0],
    [0, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [1, 1, 1],
    [0, 1, 1],
];

/// Corner pair joined by each cell edge.
pub const EDGE_CORNERS: [[usize; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// Edge triples per case index.
#[rustfmt::skip]
pub const TRIANGLE_TABLE: [[i8; 16]; 256] = [
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 9, 3, 8, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 10, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 1, 10, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 2, 9, 10, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [2, 3, 10, 3, 8, 10, 8, 9, 10, -1, -1, -1, -1, -1, -1, -1],
    [2, 11, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 2, 8, 2, 11, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 1, 2, 11, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 2, 9, 2, 11, 9, 11, 8, 9, -1, -1, -1, -1, -1, -1, -1],
    [1, 10, 3, 10, 11, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 8, 1, 10, 8, 10, 11, 8, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 3, 9, 10, 3, 10, 11, 3, -1, -1, -1, -1, -1, -1, -1],
    [8, 9, 11, 9, 10, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [4, 8, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 4, 3, 7, 4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 1, 4, 8, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 9, 3, 7, 9, 7, 4, 9, -1, -1, -1, -1, -1, -1, -1],
    [1, 10, 2, 4, 8, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 4, 3, 7, 4, 1, 10, 2, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 2, 9, 10, 2, 4, 8, 7, -1, -1, -1, -1, -1, -1, -1],
    [2, 3, 10, 3, 7, 10, 7, 4, 10, 4, 9, 10, -1, -1, -1, -1],
    [2, 11, 3, 4, 8, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 2, 4, 2, 11, 4, 11, 7, 4, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 1, 2, 11, 3, 4, 8, 7, -1, -1, -1, -1, -1, -1, -1],
    [1, 2, 9, 2, 11, 9, 11, 7, 9, 7, 4, 9, -1, -1, -1, -1],
    [1, 10, 3, 10, 11, 3, 4, 8, 7, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 4, 1, 10, 4, 10, 11, 4, 11, 7, 4, -1, -1, -1, -1],
    [0, 9, 3, 9, 10, 3, 10, 11, 3, 4, 8, 7, -1, -1, -1, -1],
    [4, 9, 7, 9, 10, 7, 10, 11, 7, -1, -1, -1, -1, -1, -1, -1],
    [4, 5, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 4, 5, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 4, 1, 4, 5, 1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 5, 3, 8, 5, 8, 4, 5, -1, -1, -1, -1, -1, -1, -1],
    [1, 10, 2, 4, 5, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 1, 10, 2, 4, 5, 9, -1, -1, -1, -1, -1, -1, -1],
    [0, 4, 2, 4, 5, 2, 5, 10, 2, -1, -1, -1, -1, -1, -1, -1],
    [2, 3, 10, 3, 8, 10, 8, 4, 10, 4, 5, 10, -1, -1, -1, -1],
    [2, 11, 3, 4, 5, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 2, 8, 2, 11, 8, 4, 5, 9, -1, -1, -1, -1, -1, -1, -1],
    [0, 4, 1, 4, 5, 1, 2, 11, 3, -1, -1, -1, -1, -1, -1, -1],
    [1, 2, 5, 2, 11, 5, 11, 8, 5, 8, 4, 5, -1, -1, -1, -1],
    [1, 10, 3, 10, 11, 3, 4, 5, 9, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 8, 1, 10, 8, 10, 11, 8, 4, 5, 9, -1, -1, -1, -1],
    [0, 4, 3, 4, 5, 3, 5, 10, 3, 10, 11, 3, -1, -1, -1, -1],
    [4, 5, 8, 5, 10, 8, 10, 11, 8, -1, -1, -1, -1, -1, -1, -1],
    [5, 9, 7, 9, 8, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 9, 3, 7, 9, 7, 5, 9, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 1, 8, 7, 1, 7, 5, 1, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 5, 3, 7, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 10, 2, 5, 9, 7, 9, 8, 7, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 9, 3, 7, 9, 7, 5, 9, 1, 10, 2, -1, -1, -1, -1],
    [0, 8, 2, 8, 7, 2, 7, 5, 2, 5, 10, 2, -1, -1, -1, -1],
    [2, 3, 10, 3, 7, 10, 7, 5, 10, -1, -1, -1, -1, -1, -1, -1],
    [2, 11, 3, 5, 9, 7, 9, 8, 7, -1, -1, -1, -1, -1, -1, -1],
    [0, 2, 9, 2, 11, 9, 11, 7, 9, 7, 5, 9, -1, -1, -1, -1],
    [0, 8, 1, 8, 7, 1, 7, 5, 1, 2, 11, 3, -1, -1, -1, -1],
    [1, 2, 5, 2, 11, 5, 11, 7, 5, -1, -1, -1, -1, -1, -1, -1],
    [1, 10, 3, 10, 11, 3, 5, 9, 7, 9, 8, 7, -1, -1, -1, -1],
    [0, 1, 11, 1, 10, 11, 0, 11, 9, 11, 7, 9, 7, 5, 9, -1],
    [0, 8, 5, 8, 7, 5, 0, 5, 3, 5, 10, 3, 10, 11, 3, -1],
    [5, 10, 7, 10, 11, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [5, 6, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 5, 6, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 1, 5, 6, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 9, 3, 8, 9, 5, 6, 10, -1, -1, -1, -1, -1, -1, -1],
    [1, 5, 2, 5, 6, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 1, 5, 2, 5, 6, 2, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 2, 9, 5, 2, 5, 6, 2, -1, -1, -1, -1, -1, -1, -1],
    [2, 3, 6, 3, 8, 6, 8, 9, 6, 9, 5, 6, -1, -1, -1, -1],
    [2, 11, 3, 5, 6, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 2, 8, 2, 11, 8, 5, 6, 10, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 1, 2, 11, 3, 5, 6, 10, -1, -1, -1, -1, -1, -1, -1],
    [1, 2, 9, 2, 11, 9, 11, 8, 9, 5, 6, 10, -1, -1, -1, -1],
    [1, 5, 3, 5, 6, 3, 6, 11, 3, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 8, 1, 5, 8, 5, 6, 8, 6, 11, 8, -1, -1, -1, -1],
    [0, 9, 3, 9, 5, 3, 5, 6, 3, 6, 11, 3, -1, -1, -1, -1],
    [5, 6, 9, 6, 11, 9, 11, 8, 9, -1, -1, -1, -1, -1, -1, -1],
    [4, 8, 7, 5, 6, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 4, 3, 7, 4, 5, 6, 10, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 1, 4, 8, 7, 5, 6, 10, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 9, 3, 7, 9, 7, 4, 9, 5, 6, 10, -1, -1, -1, -1],
    [1, 5, 2, 5, 6, 2, 4, 8, 7, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 4, 3, 7, 4, 1, 5, 2, 5, 6, 2, -1, -1, -1, -1],
    [0, 9, 2, 9, 5, 2, 5, 6, 2, 4, 8, 7, -1, -1, -1, -1],
    [2, 3, 6, 3, 7, 9, 7, 4, 9, 3, 9, 6, 9, 5, 6, -1],
    [2, 11, 3, 4, 8, 7, 5, 6, 10, -1, -1, -1, -1, -1, -1, -1],
    [0, 2, 4, 2, 11, 4, 11, 7, 4, 5, 6, 10, -1, -1, -1, -1],
    [0, 9, 1, 2, 11, 3, 4, 8, 7, 5, 6, 10, -1, -1, -1, -1],
    [1, 2, 9, 2, 11, 9, 11, 7, 9, 7, 4, 9, 5, 6, 10, -1],
    [1, 5, 3, 5, 6, 3, 6, 11, 3, 4, 8, 7, -1, -1, -1, -1],
    [0, 1, 4, 1, 5, 11, 5, 6, 11, 1, 11, 4, 11, 7, 4, -1],
    [0, 9, 3, 9, 5, 3, 5, 6, 3, 6, 11, 3, 4, 8, 7, -1],
    [4, 9, 7, 9, 5, 11, 5, 6, 11, 9, 11, 7, -1, -1, -1, -1],
    [4, 6, 9, 6, 10, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 4, 6, 9, 6, 10, 9, -1, -1, -1, -1, -1, -1, -1],
    [0, 4, 1, 4, 6, 1, 6, 10, 1, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 10, 3, 8, 10, 8, 4, 10, 4, 6, 10, -1, -1, -1, -1],
    [1, 9, 2, 9, 4, 2, 4, 6, 2, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 1, 9, 2, 9, 4, 2, 4, 6, 2, -1, -1, -1, -1],
    [0, 4, 2, 4, 6, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [2, 3, 6, 3, 8, 6, 8, 4, 6, -1, -1, -1, -1, -1, -1, -1],
    [2, 11, 3, 4, 6, 9, 6, 10, 9, -1, -1, -1, -1, -1, -1, -1],
    [0, 2, 8, 2, 11, 8, 4, 6, 9, 6, 10, 9, -1, -1, -1, -1],
    [0, 4, 1, 4, 6, 1, 6, 10, 1, 2, 11, 3, -1, -1, -1, -1],
    [1, 2, 8, 2, 11, 8, 1, 8, 10, 8, 4, 10, 4, 6, 10, -1],
    [1, 9, 3, 9, 4, 3, 4, 6, 3, 6, 11, 3, -1, -1, -1, -1],
    [0, 1, 8, 1, 9, 6, 9, 4, 6, 1, 6, 8, 6, 11, 8, -1],
    [0, 4, 3, 4, 6, 3, 6, 11, 3, -1, -1, -1, -1, -1, -1, -1],
    [4, 6, 8, 6, 11, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [6, 10, 7, 10, 9, 7, 9, 8, 7, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 9, 3, 7, 9, 7, 6, 9, 6, 10, 9, -1, -1, -1, -1],
    [0, 8, 1, 8, 7, 1, 7, 6, 1, 6, 10, 1, -1, -1, -1, -1],
    [1, 3, 10, 3, 7, 10, 7, 6, 10, -1, -1, -1, -1, -1, -1, -1],
    [1, 9, 2, 9, 8, 2, 8, 7, 2, 7, 6, 2, -1, -1, -1, -1],
    [0, 3, 9, 3, 7, 9, 7, 6, 9, 6, 2, 9, 2, 1, 9, -1],
    [0, 8, 2, 8, 7, 2, 7, 6, 2, -1, -1, -1, -1, -1, -1, -1],
    [2, 3, 6, 3, 7, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [2, 11, 3, 6, 10, 7, 10, 9, 7, 9, 8, 7, -1, -1, -1, -1],
    [0, 2, 9, 2, 11, 9, 11, 7, 9, 7, 6, 9, 6, 10, 9, -1],
    [0, 8, 1, 8, 7, 1, 7, 6, 1, 6, 10, 1, 2, 11, 3, -1],
    [1, 2, 7, 2, 11, 7, 1, 7, 10, 7, 6, 10, -1, -1, -1, -1],
    [1, 9, 3, 9, 8, 6, 8, 7, 6, 9, 6, 3, 6, 11, 3, -1],
    [0, 1, 9, 6, 11, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 6, 8, 7, 6, 0, 6, 3, 6, 11, 3, -1, -1, -1, -1],
    [6, 11, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [6, 7, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 6, 7, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 1, 6, 7, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 9, 3, 8, 9, 6, 7, 11, -1, -1, -1, -1, -1, -1, -1],
    [1, 10, 2, 6, 7, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 1, 10, 2, 6, 7, 11, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 2, 9, 10, 2, 6, 7, 11, -1, -1, -1, -1, -1, -1, -1],
    [2, 3, 10, 3, 8, 10, 8, 9, 10, 6, 7, 11, -1, -1, -1, -1],
    [2, 6, 3, 6, 7, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 2, 8, 2, 6, 8, 6, 7, 8, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 1, 2, 6, 3, 6, 7, 3, -1, -1, -1, -1, -1, -1, -1],
    [1, 2, 9, 2, 6, 9, 6, 7, 9, 7, 8, 9, -1, -1, -1, -1],
    [1, 10, 3, 10, 6, 3, 6, 7, 3, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 8, 1, 10, 8, 10, 6, 8, 6, 7, 8, -1, -1, -1, -1],
    [0, 9, 3, 9, 10, 3, 10, 6, 3, 6, 7, 3, -1, -1, -1, -1],
    [6, 7, 10, 7, 8, 10, 8, 9, 10, -1, -1, -1, -1, -1, -1, -1],
    [4, 8, 6, 8, 11, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 4, 3, 11, 4, 11, 6, 4, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 1, 4, 8, 6, 8, 11, 6, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 9, 3, 11, 9, 11, 6, 9, 6, 4, 9, -1, -1, -1, -1],
    [1, 10, 2, 4, 8, 6, 8, 11, 6, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 4, 3, 11, 4, 11, 6, 4, 1, 10, 2, -1, -1, -1, -1],
    [0, 9, 2, 9, 10, 2, 4, 8, 6, 8, 11, 6, -1, -1, -1, -1],
    [2, 3, 10, 3, 11, 4, 11, 6, 4, 3, 4, 10, 4, 9, 10, -1],
    [2, 6, 3, 6, 4, 3, 4, 8, 3, -1, -1, -1, -1, -1, -1, -1],
    [0, 2, 4, 2, 6, 4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 1, 2, 6, 3, 6, 4, 3, 4, 8, 3, -1, -1, -1, -1],
    [1, 2, 9, 2, 6, 9, 6, 4, 9, -1, -1, -1, -1, -1, -1, -1],
    [1, 10, 3, 10, 6, 3, 6, 4, 3, 4, 8, 3, -1, -1, -1, -1],
    [0, 1, 4, 1, 10, 4, 10, 6, 4, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 3, 9, 10, 3, 10, 6, 3, 6, 4, 3, 4, 8, 3, -1],
    [4, 9, 6, 9, 10, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [4, 5, 9, 6, 7, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 4, 5, 9, 6, 7, 11, -1, -1, -1, -1, -1, -1, -1],
    [0, 4, 1, 4, 5, 1, 6, 7, 11, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 5, 3, 8, 5, 8, 4, 5, 6, 7, 11, -1, -1, -1, -1],
    [1, 10, 2, 4, 5, 9, 6, 7, 11, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 1, 10, 2, 4, 5, 9, 6, 7, 11, -1, -1, -1, -1],
    [0, 4, 2, 4, 5, 2, 5, 10, 2, 6, 7, 11, -1, -1, -1, -1],
    [2, 3, 10, 3, 8, 10, 8, 4, 10, 4, 5, 10, 6, 7, 11, -1],
    [2, 6, 3, 6, 7, 3, 4, 5, 9, -1, -1, -1, -1, -1, -1, -1],
    [0, 2, 8, 2, 6, 8, 6, 7, 8, 4, 5, 9, -1, -1, -1, -1],
    [0, 4, 1, 4, 5, 1, 2, 6, 3, 6, 7, 3, -1, -1, -1, -1],
    [1, 2, 5, 2, 6, 8, 6, 7, 8, 2, 8, 5, 8, 4, 5, -1],
    [1, 10, 3, 10, 6, 3, 6, 7, 3, 4, 5, 9, -1, -1, -1, -1],
    [0, 1, 8, 1, 10, 8, 10, 6, 8, 6, 7, 8, 4, 5, 9, -1],
    [0, 4, 3, 4, 5, 3, 5, 10, 3, 10, 6, 3, 6, 7, 3, -1],
    [4, 5, 8, 5, 10, 8, 10, 6, 8, 6, 7, 8, -1, -1, -1, -1],
    [5, 9, 6, 9, 8, 6, 8, 11, 6, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 9, 3, 11, 9, 11, 6, 9, 6, 5, 9, -1, -1, -1, -1],
    [0, 8, 1, 8, 11, 1, 11, 6, 1, 6, 5, 1, -1, -1, -1, -1],
    [1, 3, 5, 3, 11, 5, 11, 6, 5, -1, -1, -1, -1, -1, -1, -1],
    [1, 10, 2, 5, 9, 6, 9, 8, 6, 8, 11, 6, -1, -1, -1, -1],
    [0, 3, 9, 3, 11, 9, 11, 6, 9, 6, 5, 9, 1, 10, 2, -1],
    [0, 8, 2, 8, 11, 5, 11, 6, 5, 8, 5, 2, 5, 10, 2, -1],
    [2, 3, 10, 3, 11, 5, 11, 6, 5, 3, 5, 10, -1, -1, -1, -1],
    [2, 6, 3, 6, 5, 3, 5, 9, 3, 9, 8, 3, -1, -1, -1, -1],
    [0, 2, 9, 2, 6, 9, 6, 5, 9, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 1, 8, 3, 6, 3, 2, 6, 8, 6, 1, 6, 5, 1, -1],
    [1, 2, 5, 2, 6, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 10, 3, 10, 6, 3, 6, 5, 3, 5, 9, 3, 9, 8, 3, -1],
    [0, 1, 6, 1, 10, 6, 0, 6, 9, 6, 5, 9, -1, -1, -1, -1],
    [0, 8, 3, 5, 10, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [5, 10, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [5, 7, 10, 7, 11, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 5, 7, 10, 7, 11, 10, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 1, 5, 7, 10, 7, 11, 10, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 9, 3, 8, 9, 5, 7, 10, 7, 11, 10, -1, -1, -1, -1],
    [1, 5, 2, 5, 7, 2, 7, 11, 2, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 1, 5, 2, 5, 7, 2, 7, 11, 2, -1, -1, -1, -1],
    [0, 9, 2, 9, 5, 2, 5, 7, 2, 7, 11, 2, -1, -1, -1, -1],
    [2, 3, 9, 3, 8, 9, 2, 9, 11, 9, 5, 11, 5, 7, 11, -1],
    [2, 10, 3, 10, 5, 3, 5, 7, 3, -1, -1, -1, -1, -1, -1, -1],
    [0, 2, 8, 2, 10, 8, 10, 5, 8, 5, 7, 8, -1, -1, -1, -1],
    [0, 9, 1, 2, 10, 3, 10, 5, 3, 5, 7, 3, -1, -1, -1, -1],
    [1, 2, 9, 2, 10, 7, 10, 5, 7, 2, 7, 9, 7, 8, 9, -1],
    [1, 5, 3, 5, 7, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 8, 1, 5, 8, 5, 7, 8, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 3, 9, 5, 3, 5, 7, 3, -1, -1, -1, -1, -1, -1, -1],
    [5, 7, 9, 7, 8, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [4, 8, 5, 8, 11, 5, 11, 10, 5, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 4, 3, 11, 4, 11, 10, 4, 10, 5, 4, -1, -1, -1, -1],
    [0, 9, 1, 4, 8, 5, 8, 11, 5, 11, 10, 5, -1, -1, -1, -1],
    [1, 3, 9, 3, 11, 9, 11, 10, 4, 10, 5, 4, 11, 4, 9, -1],
    [1, 5, 2, 5, 4, 2, 4, 8, 2, 8, 11, 2, -1, -1, -1, -1],
    [0, 3, 4, 3, 11, 4, 11, 2, 4, 2, 1, 4, 1, 5, 4, -1],
    [0, 9, 2, 9, 5, 2, 5, 4, 2, 4, 8, 2, 8, 11, 2, -1],
    [2, 3, 11, 4, 9, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [2, 10, 3, 10, 5, 3, 5, 4, 3, 4, 8, 3, -1, -1, -1, -1],
    [0, 2, 4, 2, 10, 4, 10, 5, 4, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 1, 2, 10, 3, 10, 5, 3, 5, 4, 3, 4, 8, 3, -1],
    [1, 2, 9, 2, 10, 4, 10, 5, 4, 2, 4, 9, -1, -1, -1, -1],
    [1, 5, 3, 5, 4, 3, 4, 8, 3, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 4, 1, 5, 4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 3, 9, 5, 3, 5, 4, 3, 4, 8, 3, -1, -1, -1, -1],
    [4, 9, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [4, 7, 9, 7, 11, 9, 11, 10, 9, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 4, 7, 9, 7, 11, 9, 11, 10, 9, -1, -1, -1, -1],
    [0, 4, 1, 4, 7, 1, 7, 11, 1, 11, 10, 1, -1, -1, -1, -1],
    [1, 3, 10, 3, 8, 10, 8, 4, 10, 4, 7, 10, 7, 11, 10, -1],
    [1, 9, 2, 9, 4, 2, 4, 7, 2, 7, 11, 2, -1, -1, -1, -1],
    [0, 3, 8, 1, 9, 2, 9, 4, 2, 4, 7, 2, 7, 11, 2, -1],
    [0, 4, 2, 4, 7, 2, 7, 11, 2, -1, -1, -1, -1, -1, -1, -1],
    [2, 3, 4, 3, 8, 4, 2, 4, 11, 4, 7, 11, -1, -1, -1, -1],
    [2, 10, 3, 10, 9, 3, 9, 4, 3, 4, 7, 3, -1, -1, -1, -1],
    [0, 2, 8, 2, 10, 8, 10, 9, 7, 9, 4, 7, 10, 7, 8, -1],
    [0, 4, 1, 4, 7, 1, 7, 3, 10, 3, 2, 10, 7, 10, 1, -1],
    [1, 2, 10, 4, 7, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 9, 3, 9, 4, 3, 4, 7, 3, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 8, 1, 9, 7, 9, 4, 7, 1, 7, 8, -1, -1, -1, -1],
    [0, 4, 3, 4, 7, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [4, 7, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [8, 11, 9, 11, 10, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 9, 3, 11, 9, 11, 10, 9, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 1, 8, 11, 1, 11, 10, 1, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 10, 3, 11, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 9, 2, 9, 8, 2, 8, 11, 2, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 9, 3, 11, 9, 11, 2, 9, 2, 1, 9, -1, -1, -1, -1],
    [0, 8, 2, 8, 11, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [2, 3, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [2, 10, 3, 10, 9, 3, 9, 8, 3, -1, -1, -1, -1, -1, -1, -1],
    [0, 2, 9, 2, 10, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 1, 8, 3, 10, 3, 2, 10, 8, 10, 1, -1, -1, -1, -1],
    [1, 2, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 9, 3, 9, 8, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
];
