//! Scanz Core - Scene definition for the scan-line rasterizer.
//!
//! This crate provides:
//!
//! - **Objects**: named, ordered triangle lists in model space
//! - **Placement**: the scale-then-translate transform into world space
//! - **Scene**: world-space objects flattened into one triangle list
//! - **Shapes**: the built-in cube and cross models
//!
//! # Example
//!
//! ```ignore
//! use scanz_core::{shapes, Placement, Scene};
//!
//! let mut scene = Scene::new("demo");
//! scene.add(&shapes::cube(), &Placement::new(Vec3::splat(32.0), Vec3::new(0.0, 0.0, 100.0)));
//! println!("{} triangles", scene.total_triangle_count());
//! ```

pub mod object;
pub mod scene;
pub mod shapes;

// Re-export commonly used types
pub use object::{Object, Placement};
pub use scene::{ObjectConfig, Scene};
pub use shapes::Shape;
