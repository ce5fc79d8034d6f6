//! Color and depth buffers with the closest-wins depth test.
//!
//! Pixels are submitted in centered coordinates (origin in the middle of
//! the image, +y up) and shifted by half the image size to get buffer
//! indices. Buffer row 0 is the bottom of the image.

use scanz_math::IVec2;
use serde::{Deserialize, Serialize};

use crate::shading::Rgb;

/// Depth written into every cell before rendering ("far clip").
pub const DEFAULT_CLIP_FAR: i32 = 1000;

/// Which buffer indices accept writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsPolicy {
    /// `0 < ix < width` and `0 < iy < height`: column 0 and row 0 are
    /// never written.
    #[default]
    SkipOrigin,
    /// The whole grid.
    Full,
}

/// Outcome of submitting one fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    /// Passed the depth test; color and depth were stored.
    Written,
    /// A nearer (or equally near) fragment is already stored.
    Occluded,
    /// Outside the writable area.
    Discarded,
}

/// Destination for rasterized fragments.
pub trait FragmentSink {
    /// Offer a fragment at centered pixel `(x, y)`.
    fn submit(&mut self, x: i32, y: i32, depth: f32, color: Rgb) -> Fragment;
}

/// Fixed-size color grid plus depth grid, allocated once per render.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    shift: IVec2,
    clip_far: i32,
    background: Rgb,
    bounds: BoundsPolicy,
    colors: Vec<Rgb>,
    depths: Vec<i32>,
}

impl Framebuffer {
    /// Create a cleared framebuffer with a black background.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            shift: IVec2::new((width / 2) as i32, (height / 2) as i32),
            clip_far: DEFAULT_CLIP_FAR,
            background: [0; 3],
            bounds: BoundsPolicy::default(),
            colors: vec![[0; 3]; width * height],
            depths: vec![DEFAULT_CLIP_FAR; width * height],
        }
    }

    /// Set the far clip depth (clears the buffer).
    pub fn with_clip_far(mut self, clip_far: i32) -> Self {
        self.clip_far = clip_far;
        self.clear();
        self
    }

    /// Set the background color (clears the buffer).
    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self.clear();
        self
    }

    pub fn with_bounds(mut self, bounds: BoundsPolicy) -> Self {
        self.bounds = bounds;
        self
    }

    /// Reset every cell to the background color and far clip depth.
    pub fn clear(&mut self) {
        self.colors.fill(self.background);
        self.depths.fill(self.clip_far);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clip_far(&self) -> i32 {
        self.clip_far
    }

    pub fn bounds(&self) -> BoundsPolicy {
        self.bounds
    }

    /// Offset from centered pixel coordinates to buffer indices.
    pub fn shift(&self) -> IVec2 {
        self.shift
    }

    /// Buffer offset for centered `(x, y)`, or `None` if not writable.
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let ix = x as i64 + self.shift.x as i64;
        let iy = y as i64 + self.shift.y as i64;
        let min = match self.bounds {
            BoundsPolicy::SkipOrigin => 1,
            BoundsPolicy::Full => 0,
        };

        if ix < min || iy < min || ix >= self.width as i64 || iy >= self.height as i64 {
            return None;
        }
        Some(iy as usize * self.width + ix as usize)
    }

    /// Stored color at buffer indices `(ix, iy)`.
    pub fn color(&self, ix: usize, iy: usize) -> Option<Rgb> {
        if ix >= self.width || iy >= self.height {
            return None;
        }
        Some(self.colors[iy * self.width + ix])
    }

    /// Stored depth at buffer indices `(ix, iy)`.
    pub fn depth(&self, ix: usize, iy: usize) -> Option<i32> {
        if ix >= self.width || iy >= self.height {
            return None;
        }
        Some(self.depths[iy * self.width + ix])
    }

    /// Color rows from the top of the image down.
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[Rgb]> {
        self.colors.chunks(self.width.max(1)).rev()
    }

    /// Depth rows from the top of the image down.
    pub fn depth_rows_top_down(&self) -> impl Iterator<Item = &[i32]> {
        self.depths.chunks(self.width.max(1)).rev()
    }

    /// Number of cells holding a fragment nearer than the far clip.
    pub fn covered_pixels(&self) -> usize {
        self.depths.iter().filter(|&&d| d < self.clip_far).count()
    }
}

impl FragmentSink for Framebuffer {
    /// Depth is truncated toward zero before testing, so fragments within
    /// the same integer depth unit resolve in submission order.
    fn submit(&mut self, x: i32, y: i32, depth: f32, color: Rgb) -> Fragment {
        let Some(idx) = self.index(x, y) else {
            return Fragment::Discarded;
        };

        let depth = depth as i32;
        if self.depths[idx] > depth {
            self.depths[idx] = depth;
            self.colors[idx] = color;
            Fragment::Written
        } else {
            Fragment::Occluded
        }
    }
}
