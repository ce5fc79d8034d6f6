//! Scan-line triangle rasterization.
//!
//! Based on the long-edge/short-edge walk: the edge with the greatest
//! vertical extent spans every row of the triangle, so pairing it with
//! each of the two shorter edges in turn fills the lower and upper halves
//! without sorting vertices by y.

use std::ops::AddAssign;

use scanz_math::{Edge, GeometryResult, Plane, Span, Triangle};

use crate::framebuffer::{Fragment, FragmentSink};
use crate::shading::Rgb;

/// Tally of fragment outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FragmentCounts {
    pub written: usize,
    pub occluded: usize,
    pub discarded: usize,
}

impl FragmentCounts {
    pub fn record(&mut self, fragment: Fragment) {
        match fragment {
            Fragment::Written => self.written += 1,
            Fragment::Occluded => self.occluded += 1,
            Fragment::Discarded => self.discarded += 1,
        }
    }

    /// Total fragments generated.
    pub fn total(&self) -> usize {
        self.written + self.occluded + self.discarded
    }
}

impl AddAssign for FragmentCounts {
    fn add_assign(&mut self, other: Self) {
        self.written += other.written;
        self.occluded += other.occluded;
        self.discarded += other.discarded;
    }
}

/// Index of the edge with the largest vertical extent.
///
/// Ties go to the earliest edge.
pub fn find_long_edge(edges: &[Edge; 3]) -> usize {
    let mut long = 0;
    let mut max_dy = 0.0;

    for (i, edge) in edges.iter().enumerate() {
        if edge.dy() > max_dy {
            max_dy = edge.dy();
            long = i;
        }
    }

    long
}

/// Fill a screen-space triangle, submitting every covered pixel with its
/// depth on the triangle's supporting plane.
///
/// `triangle` holds image-plane `x, y` and view depth in `z`. Fails without
/// touching the sink if no depth plane exists for it.
pub fn rasterize_triangle<S: FragmentSink + ?Sized>(
    triangle: &Triangle,
    color: Rgb,
    sink: &mut S,
) -> GeometryResult<FragmentCounts> {
    let plane = Plane::from_triangle(triangle)?;
    let edges = triangle.edges();

    let long = find_long_edge(&edges);
    let mut counts = FragmentCounts::default();

    for short in [(long + 1) % 3, (long + 2) % 3] {
        draw_spans_between(&edges[long], &edges[short], &plane, color, sink, &mut counts);
    }

    Ok(counts)
}

/// Emit one span per scan line covered by `short`, bounded by `long`.
fn draw_spans_between<S: FragmentSink + ?Sized>(
    long: &Edge,
    short: &Edge,
    plane: &Plane,
    color: Rgb,
    sink: &mut S,
    counts: &mut FragmentCounts,
) {
    // Horizontal edges cover no rows
    if long.is_horizontal() || short.is_horizontal() {
        return;
    }

    let mut y = short.a.y.ceil() as i32;
    while (y as f32) < short.b.y {
        let row = y as f32;
        let span = Span::new(
            long.x_at(row).floor() as i32,
            short.x_at(row).floor() as i32,
        );

        for x in span.iter() {
            let depth = plane.depth_at(x, y);
            counts.record(sink.submit(x, y, depth, color));
        }

        y += 1;
    }
}
