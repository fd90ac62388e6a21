//! # Primitives
//!
//! Leaf field constructors and their distance formulas.
//!
//! The box family follows the usual construction: with `q = |p| - b`,
//! the signed distance is `‖max(q, 0)‖ + min(max(qx, qy, qz), 0)`. The
//! first term measures the outside, the second the inside.

use glam::DVec3;

use crate::error::{require_finite, require_positive, FieldError};
use crate::field::{Field, FieldNode, Primitive};

// =============================================================================
// CONSTRUCTORS
// =============================================================================

/// Sphere of `radius` centered at the origin.
///
/// # Example
///
/// ```rust
/// use sdf_eval::sphere;
/// use glam::DVec3;
///
/// let ball = sphere(2.0).unwrap();
/// assert_eq!(ball.evaluate(DVec3::ZERO), -2.0);
/// assert_eq!(ball.evaluate(DVec3::new(2.0, 0.0, 0.0)), 0.0);
/// ```
pub fn sphere(radius: f64) -> Result<Field, FieldError> {
    sphere_at(radius, DVec3::ZERO)
}

/// Sphere of `radius` centered at `center`.
pub fn sphere_at(radius: f64, center: DVec3) -> Result<Field, FieldError> {
    leaf(Primitive::Sphere { radius, center })
}

/// Axis-aligned box centered at the origin.
///
/// The distance is exact everywhere, inside and out.
pub fn cuboid(half_extents: DVec3) -> Result<Field, FieldError> {
    leaf(Primitive::Cuboid { half_extents })
}

/// Box with edges rounded by `radius`.
///
/// `half_extents` is the outer size; `radius` may not exceed the smallest
/// half-extent.
pub fn round_box(half_extents: DVec3, radius: f64) -> Result<Field, FieldError> {
    leaf(Primitive::RoundBox {
        half_extents,
        radius,
    })
}

/// Box frame: the twelve edges of a box, each a bar of wall `thickness`.
///
/// Sign-correct but not an exact distance.
pub fn box_frame(half_extents: DVec3, thickness: f64) -> Result<Field, FieldError> {
    leaf(Primitive::BoxFrame {
        half_extents,
        thickness,
    })
}

/// Cylinder along the z axis.
///
/// With `height = None` the cylinder is infinite; otherwise it is capped at
/// `z = ±height / 2`.
///
/// # Example
///
/// ```rust
/// use sdf_eval::cylinder;
/// use glam::DVec3;
///
/// let rod = cylinder(1.0, None).unwrap();
/// assert_eq!(rod.evaluate(DVec3::new(0.0, 0.0, 10.0)), -1.0);
/// ```
pub fn cylinder(radius: f64, height: Option<f64>) -> Result<Field, FieldError> {
    leaf(Primitive::Cylinder { radius, height })
}

fn leaf(primitive: Primitive) -> Result<Field, FieldError> {
    Ok(Field::new(FieldNode::Primitive(primitive.validated()?)))
}

impl Primitive {
    /// Checks every parameter against the shape's domain.
    ///
    /// Deserialized primitives go through here too.
    pub(crate) fn validated(self) -> Result<Self, FieldError> {
        match self {
            Primitive::Sphere { radius, center } => {
                require_positive("sphere", "radius", radius)?;
                require_vec_finite("sphere", "center", center)?;
            }
            Primitive::Cuboid { half_extents } => require_half_extents("box", half_extents)?,
            Primitive::RoundBox {
                half_extents,
                radius,
            } => {
                require_half_extents("round_box", half_extents)?;
                require_positive("round_box", "radius", radius)?;
                if radius > half_extents.min_element() {
                    return Err(FieldError::construction(
                        "round_box",
                        "radius",
                        radius,
                        "must not exceed the smallest half-extent",
                    ));
                }
            }
            Primitive::BoxFrame {
                half_extents,
                thickness,
            } => {
                require_half_extents("box_frame", half_extents)?;
                require_positive("box_frame", "thickness", thickness)?;
            }
            Primitive::Cylinder { radius, height } => {
                require_positive("cylinder", "radius", radius)?;
                if let Some(height) = height {
                    require_positive("cylinder", "height", height)?;
                }
            }
        }
        Ok(self)
    }
}

fn require_half_extents(shape: &'static str, half_extents: DVec3) -> Result<(), FieldError> {
    require_positive(shape, "half_extents.x", half_extents.x)?;
    require_positive(shape, "half_extents.y", half_extents.y)?;
    require_positive(shape, "half_extents.z", half_extents.z)?;
    Ok(())
}

pub(crate) fn require_vec_finite(
    shape: &'static str,
    parameter: &'static str,
    v: DVec3,
) -> Result<(), FieldError> {
    for component in v.to_array() {
        require_finite(shape, parameter, component)?;
    }
    Ok(())
}

// =============================================================================
// DISTANCE FORMULAS
// =============================================================================

impl Primitive {
    /// Signed distance from `p` to this shape.
    pub fn distance(&self, p: DVec3) -> f64 {
        match *self {
            Primitive::Sphere { radius, center } => (p - center).length() - radius,
            Primitive::Cuboid { half_extents } => box_distance(p.abs() - half_extents),
            Primitive::RoundBox {
                half_extents,
                radius,
            } => box_distance(p.abs() - half_extents + radius) - radius,
            Primitive::BoxFrame {
                half_extents,
                thickness,
            } => box_frame_distance(p, half_extents, thickness),
            Primitive::Cylinder { radius, height } => {
                let radial = p.x.hypot(p.y) - radius;
                match height {
                    None => radial,
                    Some(height) => {
                        let axial = p.z.abs() - height / 2.0;
                        let outside = radial.max(0.0).hypot(axial.max(0.0));
                        outside + radial.max(axial).min(0.0)
                    }
                }
            }
        }
    }
}

/// Box distance given `q = |p| - b`.
#[inline]
fn box_distance(q: DVec3) -> f64 {
    q.max(DVec3::ZERO).length() + q.max_element().min(0.0)
}

fn box_frame_distance(p: DVec3, half_extents: DVec3, thickness: f64) -> f64 {
    let p = p.abs() - half_extents;
    let q = (p + thickness).abs() - thickness;

    let bar_x = box_distance(DVec3::new(p.x, q.y, q.z));
    let bar_y = box_distance(DVec3::new(q.x, p.y, q.z));
    let bar_z = box_distance(DVec3::new(q.x, q.y, p.z));
    bar_x.min(bar_y).min(bar_z)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const TOLERANCE: f64 = 1e-12;

    // -------------------------------------------------------------------------
    // Sphere
    // -------------------------------------------------------------------------

    #[test]
    fn test_sphere_center_is_negative_radius() {
        let field = sphere(1.5).unwrap();
        assert_eq!(field.evaluate(DVec3::ZERO), -1.5);
    }

    #[test]
    fn test_sphere_surface_on_every_axis() {
        let field = sphere(1.0).unwrap();
        for axis in [DVec3::X, DVec3::Y, DVec3::Z, -DVec3::X, -DVec3::Y, -DVec3::Z] {
            assert_eq!(field.evaluate(axis), 0.0);
        }
    }

    #[test]
    fn test_sphere_outside_is_positive() {
        let field = sphere(1.0).unwrap();
        assert!(field.evaluate(DVec3::new(1.1, 0.0, 0.0)) > 0.0);
        assert!(field.evaluate(DVec3::splat(1.0)) > 0.0);
    }

    #[test]
    fn test_sphere_off_center() {
        let field = sphere_at(0.5, DVec3::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(field.evaluate(DVec3::new(1.0, 2.0, 3.0)), -0.5);
        assert_eq!(field.evaluate(DVec3::new(1.0, 2.5, 3.0)), 0.0);
    }

    #[test]
    fn test_sphere_invalid_radius() {
        assert!(sphere(0.0).is_err());
        assert!(sphere(-1.0).is_err());
        assert!(sphere(f64::NAN).is_err());
        assert!(sphere_at(1.0, DVec3::new(f64::INFINITY, 0.0, 0.0)).is_err());
    }

    // -------------------------------------------------------------------------
    // Box
    // -------------------------------------------------------------------------

    #[test]
    fn test_box_center_is_negative_min_half_extent() {
        let field = cuboid(DVec3::ONE).unwrap();
        assert_eq!(field.evaluate(DVec3::ZERO), -1.0);

        let field = cuboid(DVec3::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(field.evaluate(DVec3::ZERO), -1.0);
    }

    #[test]
    fn test_box_surface() {
        let field = cuboid(DVec3::ONE).unwrap();
        assert_eq!(field.evaluate(DVec3::new(1.0, 0.0, 0.0)), 0.0);
        assert_eq!(field.evaluate(DVec3::new(0.3, -1.0, 0.2)), 0.0);
    }

    #[test]
    fn test_box_outside() {
        let field = cuboid(DVec3::ONE).unwrap();
        assert_eq!(field.evaluate(DVec3::new(2.0, 0.0, 0.0)), 1.0);
        // Beyond a corner the distance is Euclidean to that corner
        assert_abs_diff_eq!(field.evaluate(DVec3::splat(2.0)), 3.0_f64.sqrt(), epsilon = TOLERANCE);
    }

    #[test]
    fn test_box_invalid_half_extents() {
        assert!(cuboid(DVec3::new(1.0, 0.0, 1.0)).is_err());
        assert!(cuboid(DVec3::new(1.0, 1.0, -2.0)).is_err());
    }

    // -------------------------------------------------------------------------
    // Round box
    // -------------------------------------------------------------------------

    #[test]
    fn test_round_box_center() {
        let field = round_box(DVec3::ONE, 0.1).unwrap();
        assert_abs_diff_eq!(field.evaluate(DVec3::ZERO), -1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn test_round_box_flat_face() {
        let field = round_box(DVec3::ONE, 0.1).unwrap();
        assert_abs_diff_eq!(field.evaluate(DVec3::new(1.0, 0.0, 0.0)), 0.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(field.evaluate(DVec3::new(0.0, 0.0, -1.0)), 0.0, epsilon = TOLERANCE);
    }

    #[test]
    fn test_round_box_corner_is_cut() {
        // The sharp corner of the unrounded box lies outside the rounded one
        let sharp = cuboid(DVec3::ONE).unwrap();
        let rounded = round_box(DVec3::ONE, 0.25).unwrap();
        let corner = DVec3::splat(0.99);
        assert!(sharp.evaluate(corner) < 0.0);
        assert!(rounded.evaluate(corner) > 0.0);
    }

    #[test]
    fn test_round_box_invalid_radius() {
        assert!(round_box(DVec3::ONE, 0.0).is_err());
        assert!(round_box(DVec3::ONE, -0.1).is_err());
        assert!(round_box(DVec3::new(1.0, 0.5, 1.0), 0.6).is_err());
    }

    // -------------------------------------------------------------------------
    // Box frame
    // -------------------------------------------------------------------------

    #[test]
    fn test_box_frame_surface() {
        let field = box_frame(DVec3::ONE, 0.1).unwrap();
        assert_abs_diff_eq!(field.evaluate(DVec3::new(1.0, 0.95, 0.0)), 0.0, epsilon = TOLERANCE);
    }

    #[test]
    fn test_box_frame_outside() {
        let field = box_frame(DVec3::ONE, 0.1).unwrap();
        assert!(field.evaluate(DVec3::new(2.0, 0.0, 0.0)) > 0.0);
    }

    #[test]
    fn test_box_frame_is_hollow() {
        let field = box_frame(DVec3::ONE, 0.1).unwrap();
        // Center and face centers are empty
        assert!(field.evaluate(DVec3::ZERO) > 0.0);
        assert!(field.evaluate(DVec3::new(1.0, 0.0, 0.0)) > 0.0);
        // Inside an edge bar
        assert!(field.evaluate(DVec3::new(0.95, 0.95, 0.0)) < 0.0);
    }

    #[test]
    fn test_box_frame_invalid_thickness() {
        assert!(box_frame(DVec3::ONE, 0.0).is_err());
    }

    // -------------------------------------------------------------------------
    // Cylinder
    // -------------------------------------------------------------------------

    #[test]
    fn test_infinite_cylinder_axis() {
        let field = cylinder(1.0, None).unwrap();
        assert_eq!(field.evaluate(DVec3::new(0.0, 0.0, 10.0)), -1.0);
        assert_eq!(field.evaluate(DVec3::new(0.0, 0.0, -1e6)), -1.0);
    }

    #[test]
    fn test_infinite_cylinder_surface() {
        let field = cylinder(1.0, None).unwrap();
        assert_eq!(field.evaluate(DVec3::new(0.0, 1.0, 42.0)), 0.0);
    }

    #[test]
    fn test_finite_cylinder_lateral_surface() {
        let field = cylinder(1.0, Some(2.0)).unwrap();
        assert_eq!(field.evaluate(DVec3::new(1.0, 0.0, 0.0)), 0.0);
    }

    #[test]
    fn test_finite_cylinder_top_cap() {
        let field = cylinder(0.5, Some(2.0)).unwrap();
        assert_eq!(field.evaluate(DVec3::new(0.0, 0.0, 1.0)), 0.0);
        assert!(field.evaluate(DVec3::new(0.0, 0.0, 1.5)) > 0.0);
    }

    #[test]
    fn test_finite_cylinder_rim_distance() {
        let field = cylinder(1.0, Some(2.0)).unwrap();
        // Diagonally beyond the rim edge at (1, 0, 1)
        assert_abs_diff_eq!(
            field.evaluate(DVec3::new(2.0, 0.0, 2.0)),
            2.0_f64.sqrt(),
            epsilon = TOLERANCE
        );
    }

    #[test]
    fn test_cylinder_invalid_parameters() {
        assert!(cylinder(0.0, None).is_err());
        assert!(cylinder(1.0, Some(0.0)).is_err());
        assert!(cylinder(1.0, Some(-2.0)).is_err());
    }
}
