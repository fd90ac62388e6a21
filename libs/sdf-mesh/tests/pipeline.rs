use std::f64::consts::{FRAC_PI_2, PI};

use approx::{assert_abs_diff_eq, assert_relative_eq};
use glam::DVec3;
use sdf_eval::{box_frame, cuboid, cylinder, rotate, round_box, sphere, translate, union, union_all, Field};
use sdf_mesh::{
    sdf_to_mesh, ColorSpec, MeshError, MeshSettings, ObjRenderer, Pipeline, RenderRequest, Rgba,
};

fn unit_sphere_settings() -> MeshSettings {
    MeshSettings::default().with_cube_bounds(-1.2, 1.2).with_resolution(50)
}

#[test]
fn meshes_unit_sphere() {
    let mesh = sdf_to_mesh(&sphere(1.0).unwrap(), &unit_sphere_settings()).unwrap();

    assert!(mesh.vertex_count() > 0);
    assert!(mesh.triangle_count() > 0);
    assert!(mesh.is_watertight());
    // Closed genus-0 surface
    assert_eq!(mesh.triangle_count(), 2 * mesh.vertex_count() - 4);
    assert_relative_eq!(mesh.volume(), 4.0 / 3.0 * PI, max_relative = 0.01);
}

#[test]
fn rejects_iso_level_outside_samples() {
    let err = sdf_to_mesh(&sphere(1.0).unwrap(), &unit_sphere_settings().with_iso_level(5.0)).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Range=("));
    assert!(message.contains("iso_level=5"));
    match err {
        MeshError::IsoLevelOutOfRange { min, max, .. } => {
            assert!(min < 0.0);
            assert!(max < 5.0);
        }
        other => panic!("expected range error, got {other}"),
    }
}

#[test]
fn rejects_bad_grid() {
    let settings = MeshSettings::default().with_resolution(1);
    assert!(matches!(
        sdf_to_mesh(&sphere(1.0).unwrap(), &settings),
        Err(MeshError::InvalidGrid { .. })
    ));
}

#[test]
fn orbiting_sphere_lands_on_rotated_center() {
    let moon = translate(&sphere(0.3).unwrap(), DVec3::new(0.6, 0.0, 0.0)).unwrap();
    let orbit = rotate(&moon, DVec3::new(0.0, 0.0, FRAC_PI_2)).unwrap();
    let mesh = sdf_to_mesh(&orbit, &MeshSettings::default().with_resolution(60)).unwrap();

    let (min, max) = mesh.bounding_box();
    let center = (min + max) / 2.0;
    assert_abs_diff_eq!(center.x, 0.0, epsilon = 0.02);
    assert_abs_diff_eq!(center.y, 0.6, epsilon = 0.02);
    assert_abs_diff_eq!(center.z, 0.0, epsilon = 0.02);
}

#[test]
fn iso_level_offsets_surface() {
    let settings = unit_sphere_settings().with_iso_level(-0.5);
    let mesh = sdf_to_mesh(&sphere(1.0).unwrap(), &settings).unwrap();
    for v in mesh.vertices() {
        assert_abs_diff_eq!(v.length(), 0.5, epsilon = 0.01);
    }
}

#[test]
fn meshes_every_primitive() {
    let shapes: Vec<Field> = vec![
        sphere(0.7).unwrap(),
        cuboid(DVec3::new(0.6, 0.4, 0.5)).unwrap(),
        round_box(DVec3::splat(0.6), 0.15).unwrap(),
        cylinder(0.5, Some(1.2)).unwrap(),
    ];
    let settings = MeshSettings::default().with_resolution(32);
    for shape in &shapes {
        let mesh = sdf_to_mesh(shape, &settings).unwrap();
        assert!(mesh.is_watertight());
        assert!(mesh.volume() > 0.0);
    }
}

#[test]
fn meshes_box_frame_with_five_handles() {
    let frame = box_frame(DVec3::splat(0.8), 0.1).unwrap();
    let mesh = sdf_to_mesh(&frame, &MeshSettings::default().with_resolution(64)).unwrap();

    assert!(mesh.is_watertight());
    assert!(mesh.volume() > 0.0);
    // Twelve bars around six windows: genus 5, so F = 2V + 16
    assert_eq!(mesh.triangle_count(), 2 * mesh.vertex_count() + 16);
}

#[test]
fn merged_materials_mesh_as_one_surface() {
    let parts = [
        translate(&sphere(0.4).unwrap(), DVec3::new(-0.5, 0.0, 0.0)).unwrap(),
        translate(&sphere(0.4).unwrap(), DVec3::new(0.5, 0.0, 0.0)).unwrap(),
    ];
    let merged = union_all(&parts).unwrap();
    assert_eq!(merged, union(&parts[0], &parts[1]));

    let mesh = sdf_to_mesh(&merged, &MeshSettings::default().with_resolution(40)).unwrap();
    assert!(mesh.is_watertight());
    // Two disjoint spheres
    assert_eq!(mesh.triangle_count(), 2 * mesh.vertex_count() - 8);
}

#[test]
fn renders_obj_for_each_field() {
    let fields = vec![
        translate(&sphere(0.3).unwrap(), DVec3::new(-0.5, 0.0, 0.0)).unwrap(),
        translate(&cuboid(DVec3::splat(0.3)).unwrap(), DVec3::new(0.5, 0.0, 0.0)).unwrap(),
    ];
    let colors: Vec<Rgba> = vec![[1.0, 0.0, 0.0, 1.0], [0.0, 0.0, 1.0, 1.0]];
    let settings = MeshSettings::default().with_resolution(24);
    let request = RenderRequest::new(fields.clone(), colors, settings).unwrap();

    let mut out = Vec::<u8>::new();
    Pipeline::new()
        .with_renderer(ObjRenderer::new(&mut out))
        .render(&request)
        .unwrap();
    let text = String::from_utf8(out).unwrap();

    let expected_vertices: usize = fields
        .iter()
        .map(|f| sdf_to_mesh(f, &settings).unwrap().vertex_count())
        .sum();
    let expected_faces: usize = fields
        .iter()
        .map(|f| sdf_to_mesh(f, &settings).unwrap().triangle_count())
        .sum();

    assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), expected_vertices);
    assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), expected_faces);
    assert!(text.contains("o solid_0"));
    assert!(text.contains("o solid_1"));

    // Every face index points at a written vertex
    let max_index = text
        .lines()
        .filter_map(|l| l.strip_prefix("f "))
        .flat_map(|l| l.split_whitespace().map(|i| i.parse::<usize>().unwrap()))
        .max()
        .unwrap();
    assert_eq!(max_index, expected_vertices);
}

#[test]
fn render_request_rejects_color_mismatch() {
    let fields = vec![sphere(0.5).unwrap(), sphere(0.6).unwrap(), sphere(0.7).unwrap()];
    let err = RenderRequest::new(fields, ColorSpec::PerField(vec![[1.0; 4]; 2]), MeshSettings::default())
        .unwrap_err();
    assert!(matches!(
        err,
        MeshError::DimensionMismatch {
            expected: 3,
            actual: 2,
            ..
        }
    ));
}

#[test]
fn render_without_renderer_names_capability() {
    let request = RenderRequest::single(sphere(1.0).unwrap(), MeshSettings::default());
    let err = Pipeline::new().render(&request).unwrap_err();
    assert!(err.to_string().contains("renderer"));
}
