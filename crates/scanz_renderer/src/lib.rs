//! Scanz Renderer - CPU scan-line rasterization
//!
//! Takes world-space triangles through a pinhole projection, fills them
//! row by row against a per-pixel depth buffer, and flat-shades each face
//! from a single point light.
//!
//! Pipeline: `Camera` → `rasterize_triangle` → `Framebuffer` → `output`.

mod config;
mod framebuffer;
mod rasterizer;
mod renderer;
mod shading;

pub mod output;

pub use config::{ConfigError, ConfigFile, ConfigResult, RenderConfig};
pub use framebuffer::{BoundsPolicy, Fragment, FragmentSink, Framebuffer, DEFAULT_CLIP_FAR};
pub use rasterizer::{find_long_edge, rasterize_triangle, FragmentCounts};
pub use renderer::{RenderOutput, RenderStats, Renderer};
pub use shading::{PointLight, Rgb, ShadingModel};

/// Re-export common math and scene types
pub use scanz_core::{Object, Placement, Scene};
pub use scanz_math::{Camera, Triangle, Vec2, Vec3};
