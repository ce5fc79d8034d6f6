use glam::Vec2;

/// A 2D triangle edge in screen space.
///
/// The endpoint with the smaller y is always stored in `a`, so an edge
/// can be walked upward from `a.y` to `b.y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: Vec2,
    pub b: Vec2,
}

impl Edge {
    /// Create an edge, swapping endpoints so that `a.y <= b.y`.
    pub fn new(p: Vec2, q: Vec2) -> Self {
        if p.y < q.y {
            Self { a: p, b: q }
        } else {
            Self { a: q, b: p }
        }
    }

    /// Vertical extent (never negative).
    pub fn dy(&self) -> f32 {
        self.b.y - self.a.y
    }

    /// Horizontal change from `a` to `b`.
    pub fn dx(&self) -> f32 {
        self.b.x - self.a.x
    }

    /// True if the edge spans no scan lines.
    pub fn is_horizontal(&self) -> bool {
        self.dy() == 0.0
    }

    /// X-intercept at height `y`, by linear interpolation on the fraction
    /// of vertical progress along the edge.
    ///
    /// Only meaningful for non-horizontal edges.
    pub fn x_at(&self, y: f32) -> f32 {
        self.a.x + self.dx() * (y - self.a.y) / self.dy()
    }
}
