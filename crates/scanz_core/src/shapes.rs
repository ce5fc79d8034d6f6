//! Built-in model-space shapes.
//!
//! Both shapes fit in the `[-1, 1]` cube; a `Placement` sizes and
//! positions them in the world.

use scanz_math::{Triangle, Vec3};
use serde::{Deserialize, Serialize};

use crate::Object;

/// Selects one of the built-in shapes from a config file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Cube,
    Cross,
}

impl Shape {
    /// Build the model-space object for this shape.
    pub fn build(self) -> Object {
        match self {
            Shape::Cube => cube(),
            Shape::Cross => cross(),
        }
    }
}

fn tri(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Triangle {
    Triangle::new(Vec3::from(a), Vec3::from(b), Vec3::from(c))
}

/// Axis-aligned cube with half-extent 1, two triangles per face.
pub fn cube() -> Object {
    let triangles = vec![
        // Back (z = +1)
        tri([1.0, -1.0, 1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0]),
        tri([1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]),
        // Front (z = -1)
        tri([1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0]),
        tri([1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0]),
        // Right (x = +1)
        tri([1.0, -1.0, 1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0]),
        tri([1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0]),
        // Left (x = -1)
        tri([-1.0, -1.0, 1.0], [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0]),
        tri([-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]),
        // Bottom (y = -1)
        tri([1.0, -1.0, 1.0], [-1.0, -1.0, 1.0], [-1.0, -1.0, -1.0]),
        tri([1.0, -1.0, 1.0], [1.0, -1.0, -1.0], [-1.0, -1.0, -1.0]),
        // Top (y = +1)
        tri([1.0, 1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]),
        tri([1.0, 1.0, 1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0]),
    ];

    Object::new("cube", triangles)
}

/// Two square panels crossing along the y axis, in the planes `x = z`
/// and `x = -z`.
pub fn cross() -> Object {
    let triangles = vec![
        // x = z
        tri([-1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0]),
        tri([-1.0, -1.0, -1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]),
        // x = -z
        tri([-1.0, -1.0, 1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0]),
        tri([-1.0, -1.0, 1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, 1.0]),
    ];

    Object::new("cross", triangles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_shape() {
        let cube = cube();
        assert_eq!(cube.triangle_count(), 12);
        assert_eq!(cube.bounds(), Some((Vec3::splat(-1.0), Vec3::ONE)));

        for t in &cube.triangles {
            assert!(t.normal().is_ok(), "degenerate cube face {:?}", t);
        }
    }

    #[test]
    fn test_cross_panels_lie_in_diagonal_planes() {
        let cross = cross();
        assert_eq!(cross.triangle_count(), 4);

        for t in &cross.triangles[..2] {
            for v in t.vertices() {
                assert_eq!(v.x, v.z);
            }
        }
        for t in &cross.triangles[2..] {
            for v in t.vertices() {
                assert_eq!(v.x, -v.z);
            }
        }
    }

    #[test]
    fn test_shape_build_and_serde_name() {
        assert_eq!(Shape::Cube.build().name, "cube");
        assert_eq!(Shape::Cross.build().name, "cross");

        let parsed: Shape = serde_json::from_str("\"cross\"").unwrap();
        assert_eq!(parsed, Shape::Cross);
    }
}
