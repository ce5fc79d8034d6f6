//! Core rasterization driver.
//!
//! Runs each triangle through the whole pipeline in submission order:
//! - Flat shading in world space
//! - Projection to the image plane
//! - Scan-line fill against the depth buffer

use std::fmt;

use scanz_core::Scene;
use scanz_math::{Camera, Triangle};

use crate::framebuffer::{FragmentSink, Framebuffer};
use crate::rasterizer::{rasterize_triangle, FragmentCounts};
use crate::RenderConfig;

/// Counters collected during one render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Triangles submitted
    pub triangles: usize,
    /// Triangles that reached the rasterizer
    pub rasterized: usize,
    /// Triangles skipped as degenerate after projection
    pub skipped: usize,
    /// Per-fragment depth test outcomes
    pub fragments: FragmentCounts,
}

impl fmt::Display for RenderStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} triangles ({} rasterized, {} skipped), {} fragments ({} written, {} occluded, {} discarded)",
            self.triangles,
            self.rasterized,
            self.skipped,
            self.fragments.total(),
            self.fragments.written,
            self.fragments.occluded,
            self.fragments.discarded,
        )
    }
}

/// Result of a render: the filled buffers plus counters.
pub struct RenderOutput {
    pub framebuffer: Framebuffer,
    pub stats: RenderStats,
}

/// Single-threaded software renderer.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: RenderConfig,
    camera: Camera,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        let camera = config.camera();
        Self { config, camera }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Render every object in the scene into a fresh framebuffer.
    pub fn render(&self, scene: &Scene) -> RenderOutput {
        log::info!(
            "Rendering '{}': {} objects, {} triangles at {}x{}",
            scene.name,
            scene.object_count(),
            scene.total_triangle_count(),
            self.config.width,
            self.config.height
        );
        self.render_triangles(&scene.world_triangles())
    }

    /// Render world-space triangles into a fresh framebuffer.
    pub fn render_triangles(&self, triangles: &[Triangle]) -> RenderOutput {
        let mut framebuffer = self.config.framebuffer();
        let mut stats = RenderStats::default();

        for triangle in triangles {
            self.draw_triangle(triangle, &mut framebuffer, &mut stats);
        }

        log::info!("Render finished: {}", stats);
        RenderOutput { framebuffer, stats }
    }

    /// Shade, project and rasterize one world-space triangle into `sink`.
    ///
    /// Triangles with a vertex on the camera plane, or whose projection has
    /// no usable depth plane, are skipped and counted.
    pub fn draw_triangle<S: FragmentSink + ?Sized>(
        &self,
        triangle: &Triangle,
        sink: &mut S,
        stats: &mut RenderStats,
    ) {
        stats.triangles += 1;
        let color = self.config.shading.shade(triangle);

        let drawn = self
            .camera
            .project_triangle(triangle)
            .and_then(|screen| rasterize_triangle(&screen, color, sink));

        match drawn {
            Ok(counts) => {
                stats.rasterized += 1;
                stats.fragments += counts;
            }
            Err(err) => {
                log::debug!("Skipping triangle {:?}: {}", triangle, err);
                stats.skipped += 1;
            }
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}
