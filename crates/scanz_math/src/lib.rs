//! Scanz Math - Geometry primitives for the scan-line rasterizer.
//!
//! Vectors come straight from `glam`; everything else here is a small
//! value type built on top of them:
//!
//! - **Edge**: a 2D segment ordered bottom-to-top
//! - **Span**: a horizontal pixel interval on one scan line
//! - **Triangle**: three ordered 3D vertices
//! - **Plane**: the supporting plane of a triangle, used for depth queries
//! - **Camera**: pinhole projection onto the image plane

// Re-export glam for convenience
pub use glam::*;

mod camera;
mod edge;
mod error;
mod plane;
mod span;
mod triangle;

pub use camera::{Camera, DEFAULT_FOCAL_DISTANCE};
pub use edge::Edge;
pub use error::{GeometryError, GeometryResult};
pub use plane::Plane;
pub use span::Span;
pub use triangle::Triangle;
