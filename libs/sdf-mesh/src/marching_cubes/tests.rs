//! Tests for marching-cubes extraction.

use super::*;
use crate::grid::Grid;
use crate::sampler::sample;
use approx::assert_relative_eq;
use sdf_eval::{cuboid, sphere, subtraction, translate, xor, Field, ParallelEvaluator};
use std::f64::consts::PI;

fn extract(field: &Field, grid: &Grid) -> Mesh {
    let volume = sample(field, grid, &ParallelEvaluator).unwrap();
    extract_iso_surface(&volume, 0.0).unwrap()
}

/// Single cell spanning `bounds` with corner 0 at -1 and the rest at +1.
fn corner_cell(bounds: crate::grid::Bounds, inside_corner_value: f64) -> SampleVolume {
    let grid = Grid::new(bounds, 2).unwrap();
    let mut values = vec![-inside_corner_value; 8];
    values[grid.index(0, 0, 0)] = inside_corner_value;
    SampleVolume::from_values(grid, values).unwrap()
}

// =============================================================================
// Single cell
// =============================================================================

#[test]
fn test_single_corner_case() {
    let volume = corner_cell([(0.0, 1.0); 3], -1.0);
    let mesh = extract_iso_surface(&volume, 0.0).unwrap();

    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
    let mut vertices = mesh.vertices().to_vec();
    vertices.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    assert_eq!(
        vertices,
        vec![
            DVec3::new(0.0, 0.0, 0.5),
            DVec3::new(0.0, 0.5, 0.0),
            DVec3::new(0.5, 0.0, 0.0),
        ]
    );
}

#[test]
fn test_single_corner_faces_away_from_inside() {
    let volume = corner_cell([(0.0, 1.0); 3], -1.0);
    let mesh = extract_iso_surface(&volume, 0.0).unwrap();
    let [a, b, c] = mesh.triangle(0).map(|i| mesh.vertex(i));
    let normal = (b - a).cross(c - a);
    assert!(normal.dot(DVec3::ONE) > 0.0);
}

#[test]
fn test_complement_case_flips_winding() {
    let volume = corner_cell([(0.0, 1.0); 3], 1.0);
    let mesh = extract_iso_surface(&volume, 0.0).unwrap();
    assert_eq!(mesh.triangle_count(), 1);
    let [a, b, c] = mesh.triangle(0).map(|i| mesh.vertex(i));
    let normal = (b - a).cross(c - a);
    assert!(normal.dot(DVec3::ONE) < 0.0);
}

#[test]
fn test_interpolation_follows_sample_values() {
    let grid = Grid::cube(0.0, 1.0, 2).unwrap();
    let mut values = vec![3.0; 8];
    values[grid.index(0, 0, 0)] = -1.0;
    let volume = SampleVolume::from_values(grid, values).unwrap();

    let mesh = extract_iso_surface(&volume, 0.0).unwrap();
    for v in mesh.vertices() {
        // t = (0 - (-1)) / (3 - (-1)) along each edge leaving the origin
        assert_relative_eq!(v.length(), 0.25, epsilon = 1e-12);
    }
}

#[test]
fn test_per_axis_spacing_and_offset() {
    let volume = corner_cell([(1.0, 3.0), (-2.0, 2.0), (10.0, 16.0)], -1.0);
    let mesh = extract_iso_surface(&volume, 0.0).unwrap();

    let mut vertices = mesh.vertices().to_vec();
    vertices.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    assert_eq!(
        vertices,
        vec![
            DVec3::new(1.0, -2.0, 13.0),
            DVec3::new(1.0, 0.0, 10.0),
            DVec3::new(2.0, -2.0, 10.0),
        ]
    );
}

#[test]
fn test_uniform_cell_is_empty() {
    let grid = Grid::cube(0.0, 1.0, 2).unwrap();
    let volume = SampleVolume::from_values(grid, vec![0.5; 8]).unwrap();
    let mesh = extract_iso_surface(&volume, 0.5).unwrap();
    assert!(mesh.is_empty());
}

// =============================================================================
// Iso-level range
// =============================================================================

#[test]
fn test_iso_level_above_range() {
    let field = sphere(1.0).unwrap();
    let grid = Grid::cube(-1.2, 1.2, 10).unwrap();
    let volume = sample(&field, &grid, &ParallelEvaluator).unwrap();
    let (min, max) = volume.value_range();

    let err = extract_iso_surface(&volume, 5.0).unwrap_err();
    match err {
        MeshError::IsoLevelOutOfRange {
            min: err_min,
            max: err_max,
            iso_level,
        } => {
            assert_eq!(err_min, min);
            assert_eq!(err_max, max);
            assert_eq!(iso_level, 5.0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_iso_level_below_range() {
    let field = sphere(1.0).unwrap();
    let grid = Grid::cube(-1.2, 1.2, 10).unwrap();
    let volume = sample(&field, &grid, &ParallelEvaluator).unwrap();
    assert!(matches!(
        extract_iso_surface(&volume, -2.0),
        Err(MeshError::IsoLevelOutOfRange { .. })
    ));
}

#[test]
fn test_iso_level_range_is_inclusive() {
    let field = sphere(1.0).unwrap();
    let grid = Grid::cube(-1.0, 1.0, 5).unwrap();
    let volume = sample(&field, &grid, &ParallelEvaluator).unwrap();
    let (min, max) = volume.value_range();

    // Nothing is strictly below the minimum
    assert!(extract_iso_surface(&volume, min).unwrap().is_empty());
    assert!(extract_iso_surface(&volume, max).is_ok());
}

#[test]
fn test_field_entirely_outside_is_range_error() {
    let field = translate(&sphere(0.5).unwrap(), DVec3::new(10.0, 0.0, 0.0)).unwrap();
    let grid = Grid::cube(-1.0, 1.0, 8).unwrap();
    let volume = sample(&field, &grid, &ParallelEvaluator).unwrap();
    assert!(extract_iso_surface(&volume, 0.0).is_err());
}

// =============================================================================
// Whole surfaces
// =============================================================================

#[test]
fn test_unit_sphere() {
    let mesh = extract(&sphere(1.0).unwrap(), &Grid::cube(-1.2, 1.2, 50).unwrap());

    assert!(mesh.vertex_count() > 0);
    assert!(mesh.triangle_count() > 0);
    assert!(mesh.is_watertight());
    assert_relative_eq!(mesh.volume(), 4.0 / 3.0 * PI, max_relative = 0.01);
    for v in mesh.vertices() {
        assert!((v.length() - 1.0).abs() < 0.005, "vertex off surface: {v}");
    }
}

#[test]
fn test_coarse_sphere_is_closed() {
    let mesh = extract(&sphere(0.8).unwrap(), &Grid::cube(-1.0, 1.0, 24).unwrap());
    assert!(mesh.is_watertight());
    assert_relative_eq!(mesh.volume(), 4.0 / 3.0 * PI * 0.512, max_relative = 0.02);
    for v in mesh.vertices() {
        assert!((v.length() - 0.8).abs() < 0.005);
    }
}

#[test]
fn test_box_on_uneven_grid() {
    let field = cuboid(DVec3::new(0.5, 0.7, 0.3)).unwrap();
    let grid = Grid::new([(-1.0, 1.0), (-1.0, 1.5), (-0.5, 0.5)], 30).unwrap();
    let mesh = extract(&field, &grid);

    assert!(mesh.is_watertight());
    assert_relative_eq!(mesh.volume(), 0.84, max_relative = 0.03);
    let (min, max) = mesh.bounding_box();
    assert!(min.cmpge(DVec3::new(-0.5, -0.7, -0.3) - 1e-9).all());
    assert!(max.cmple(DVec3::new(0.5, 0.7, 0.3) + 1e-9).all());
}

#[test]
fn test_carved_block() {
    let block = cuboid(DVec3::new(1.0, 1.0, 0.5)).unwrap();
    let hole = translate(&sphere(0.6).unwrap(), DVec3::new(0.0, 0.0, 0.5)).unwrap();
    let mesh = extract(&subtraction(&block, &hole), &Grid::cube(-1.5, 1.5, 40).unwrap());

    assert!(mesh.is_watertight());
    let expected = 4.0 - 2.0 / 3.0 * PI * 0.6_f64.powi(3);
    assert_relative_eq!(mesh.volume(), expected, max_relative = 0.02);
}

#[test]
fn test_xor_surface_is_closed() {
    let field = xor(&sphere(1.0).unwrap(), &cuboid(DVec3::splat(0.8)).unwrap());
    let mesh = extract(&field, &Grid::cube(-1.2, 1.2, 40).unwrap());
    assert!(mesh.is_watertight());
    assert!(mesh.volume() > 0.0);
}

/// Deterministic xorshift noise in `[-1, 1)`.
fn noise(state: &mut u64) -> f64 {
    *state ^= *state << 13;
    *state ^= *state >> 7;
    *state ^= *state << 17;
    (*state >> 11) as f64 / (1u64 << 53) as f64 * 2.0 - 1.0
}

/// Random interior samples inside a shell of outside values.
fn noisy_volume(seed: u64) -> SampleVolume {
    let n = 12;
    let grid = Grid::cube(0.0, (n - 1) as f64, n).unwrap();
    let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1;
    let mut values = vec![1.0; grid.point_count()];
    for i in 1..n - 1 {
        for j in 1..n - 1 {
            for k in 1..n - 1 {
                values[grid.index(i, j, k)] = noise(&mut state);
            }
        }
    }
    SampleVolume::from_values(grid, values).unwrap()
}

#[test]
fn test_noise_volumes_are_closed() {
    for seed in 0..64 {
        let mesh = extract_iso_surface(&noisy_volume(seed), 0.0).unwrap();
        assert!(!mesh.is_empty(), "seed {seed}");
        assert!(mesh.is_watertight(), "seed {seed}");
        assert!(mesh.volume() > 0.0, "seed {seed}");
    }
}

#[test]
fn test_marching_cubes_capability() {
    let volume = corner_cell([(0.0, 1.0); 3], -1.0);
    let extractor: &dyn IsoSurfaceExtractor = &MarchingCubes;
    assert_eq!(extractor.name(), "marching-cubes");
    assert_eq!(
        extractor.extract(&volume, 0.0).unwrap(),
        extract_iso_surface(&volume, 0.0).unwrap()
    );
}

// =============================================================================
// Tables
// =============================================================================

#[test]
fn test_empty_and_full_cases_have_no_triangles() {
    assert_eq!(TRIANGLE_TABLE[0][0], -1);
    assert_eq!(TRIANGLE_TABLE[255][0], -1);
}

#[test]
fn test_table_rows_are_well_formed() {
    for (case, row) in TRIANGLE_TABLE.iter().enumerate() {
        let used = row.iter().take_while(|&&e| e >= 0).count();
        assert_eq!(used % 3, 0, "case {case}");
        assert!(used <= 15, "case {case}");
        assert!(row[used..].iter().all(|&e| e == -1), "case {case}");
        for &edge in &row[..used] {
            let [a, b] = EDGE_CORNERS[edge as usize];
            let inside = |c: usize| case & (1 << c) != 0;
            assert_ne!(inside(a), inside(b), "case {case} uses edge {edge} without a crossing");
        }
    }
}

/// Corners of each cell face.
const FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [1, 2, 6, 5],
    [2, 3, 7, 6],
    [3, 0, 4, 7],
];

fn edge_on_face(edge: i8, face: &[usize; 4]) -> bool {
    EDGE_CORNERS[edge as usize].iter().all(|c| face.contains(c))
}

#[test]
fn test_no_triangle_lies_in_a_cell_face() {
    for (case, row) in TRIANGLE_TABLE.iter().enumerate() {
        for tri in row.chunks(3).take_while(|t| t[0] >= 0) {
            for face in &FACES {
                assert!(
                    !tri.iter().all(|&e| edge_on_face(e, face)),
                    "case {case} has triangle {tri:?} in face {face:?}"
                );
            }
        }
    }
}
