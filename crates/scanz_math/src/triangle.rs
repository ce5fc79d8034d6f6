use std::ops::{Add, Mul};

use glam::Vec3;

use crate::{Edge, GeometryError, GeometryResult};

/// Three ordered vertices.
///
/// Winding matters: the face normal is `(b - a) × (c - a)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl Triangle {
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Move every vertex by `offset`.
    pub fn translated(&self, offset: Vec3) -> Triangle {
        *self + offset
    }

    /// Scale every vertex componentwise by `scale`.
    pub fn scaled(&self, scale: Vec3) -> Triangle {
        *self * scale
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.a, self.b, self.c]
    }

    /// Apply `f` to each vertex, keeping winding order.
    pub fn map(&self, mut f: impl FnMut(Vec3) -> Vec3) -> Triangle {
        Triangle::new(f(self.a), f(self.b), f(self.c))
    }

    /// The three screen-space edges `a→b`, `b→c`, `c→a`, with z dropped.
    pub fn edges(&self) -> [Edge; 3] {
        let (a, b, c) = (self.a.truncate(), self.b.truncate(), self.c.truncate());
        [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)]
    }

    /// Unit face normal, or `Degenerate` if the vertices are collinear.
    pub fn normal(&self) -> GeometryResult<Vec3> {
        (self.b - self.a)
            .cross(self.c - self.a)
            .try_normalize()
            .ok_or(GeometryError::Degenerate)
    }
}

impl Add<Vec3> for Triangle {
    type Output = Triangle;

    fn add(self, offset: Vec3) -> Triangle {
        self.map(|v| v + offset)
    }
}

impl Mul<Vec3> for Triangle {
    type Output = Triangle;

    fn mul(self, scale: Vec3) -> Triangle {
        self.map(|v| v * scale)
    }
}
