use glam::Vec3;

use crate::{GeometryError, GeometryResult, Triangle};

/// Supporting plane of a triangle: an anchor vertex plus a unit normal.
///
/// Used to reconstruct depth at any pixel inside a projected triangle
/// without interpolating per-vertex attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl Plane {
    /// Build the plane through `triangle`, anchored at its first vertex.
    ///
    /// Fails with `Degenerate` for zero-area triangles and `EdgeOn` when the
    /// normal has no z component, since depth cannot be solved for either.
    pub fn from_triangle(triangle: &Triangle) -> GeometryResult<Self> {
        let normal = triangle.normal()?;
        if normal.z.abs() <= f32::EPSILON {
            return Err(GeometryError::EdgeOn);
        }

        Ok(Self {
            point: triangle.a,
            normal,
        })
    }

    /// Depth of the plane above pixel `(x, y)`.
    pub fn depth_at(&self, x: i32, y: i32) -> f32 {
        let dx = x as f32 - self.point.x;
        let dy = y as f32 - self.point.y;
        (-self.normal.x * dx - self.normal.y * dy) / self.normal.z + self.point.z
    }
}
