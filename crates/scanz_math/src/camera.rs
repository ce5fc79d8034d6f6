use glam::{Vec2, Vec3};

use crate::{GeometryError, GeometryResult, Triangle};

/// Distance from the eye to the image plane along +z.
pub const DEFAULT_FOCAL_DISTANCE: f32 = 64.0;

/// Pinhole camera at the origin looking down +z.
///
/// Projects view-space points onto the image plane and keeps a depth
/// value (`z - focal_distance`) for the depth buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub focal_distance: f32,
    pub principal_point: Vec2,
}

impl Camera {
    /// Create a camera with the default focal distance, centered on the axis.
    pub fn new() -> Self {
        Self {
            focal_distance: DEFAULT_FOCAL_DISTANCE,
            principal_point: Vec2::ZERO,
        }
    }

    pub fn with_focal_distance(mut self, focal_distance: f32) -> Self {
        self.focal_distance = focal_distance;
        self
    }

    pub fn with_principal_point(mut self, principal_point: Vec2) -> Self {
        self.principal_point = principal_point;
        self
    }

    /// Project a point to image-plane `(x, y)` with retained depth in `z`.
    ///
    /// No clipping is done; only a point exactly on the camera plane is
    /// rejected, because it would divide by zero.
    pub fn project(&self, point: Vec3) -> GeometryResult<Vec3> {
        if point.z == 0.0 {
            return Err(GeometryError::ZeroDepth);
        }

        let scale = self.focal_distance / point.z;
        Ok(Vec3::new(
            scale * point.x + self.principal_point.x,
            scale * point.y + self.principal_point.y,
            point.z - self.focal_distance,
        ))
    }

    /// Project all three vertices, keeping winding order.
    pub fn project_triangle(&self, triangle: &Triangle) -> GeometryResult<Triangle> {
        Ok(Triangle::new(
            self.project(triangle.a)?,
            self.project(triangle.b)?,
            self.project(triangle.c)?,
        ))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_on_image_plane_is_unscaled() {
        let camera = Camera::new();
        let p = camera.project(Vec3::new(10.0, -5.0, 64.0)).unwrap();

        assert_eq!(p, Vec3::new(10.0, -5.0, 0.0));
    }

    #[test]
    fn test_farther_points_shrink() {
        let camera = Camera::new();
        let p = camera.project(Vec3::new(32.0, 16.0, 128.0)).unwrap();

        assert!((p.x - 16.0).abs() < 1e-5);
        assert!((p.y - 8.0).abs() < 1e-5);
        assert!((p.z - 64.0).abs() < 1e-5);
    }

    #[test]
    fn test_principal_point_offset() {
        let camera = Camera::new()
            .with_focal_distance(10.0)
            .with_principal_point(Vec2::new(3.0, -2.0));
        let p = camera.project(Vec3::new(0.0, 0.0, 20.0)).unwrap();

        assert_eq!(p, Vec3::new(3.0, -2.0, 10.0));
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        let camera = Camera::new();
        assert_eq!(
            camera.project(Vec3::new(1.0, 1.0, 0.0)),
            Err(GeometryError::ZeroDepth)
        );

        let tri = Triangle::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(1.0, 0.0, 0.0), Vec3::Z);
        assert!(camera.project_triangle(&tri).is_err());
    }
}
