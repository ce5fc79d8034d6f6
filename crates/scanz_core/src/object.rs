//! Rigid triangle objects and their placement into world space.

use scanz_math::{Triangle, Vec3};
use serde::{Deserialize, Serialize};

/// Scale-then-translate transform applied uniformly to every vertex.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placement {
    /// Componentwise scale
    pub scale: Vec3,

    /// Translation, applied after scaling
    pub translation: Vec3,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            scale: Vec3::ONE,
            translation: Vec3::ZERO,
        }
    }
}

impl Placement {
    pub fn new(scale: Vec3, translation: Vec3) -> Self {
        Self { scale, translation }
    }

    /// Create a placement with only a translation.
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Place a single model-space triangle into world space.
    pub fn apply(&self, triangle: &Triangle) -> Triangle {
        triangle.scaled(self.scale).translated(self.translation)
    }
}

/// An ordered list of triangles forming one rigid body.
///
/// Triangle order is preserved through every transform, since it decides
/// rasterization order downstream.
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    /// Object name (for logging)
    pub name: String,

    /// Triangles, in model or world space depending on context
    pub triangles: Vec<Triangle>,
}

impl Object {
    pub fn new(name: impl Into<String>, triangles: Vec<Triangle>) -> Self {
        Self {
            name: name.into(),
            triangles,
        }
    }

    /// Return a new object with `placement` applied to every triangle.
    ///
    /// The source object is left untouched.
    pub fn transformed(&self, placement: &Placement) -> Object {
        Object {
            name: self.name.clone(),
            triangles: self.triangles.iter().map(|t| placement.apply(t)).collect(),
        }
    }

    /// Get the number of triangles in the object.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Componentwise min/max over all vertices, or `None` for an empty object.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut vertices = self.triangles.iter().flat_map(|t| t.vertices());
        let first = vertices.next()?;

        Some(vertices.fold((first, first), |(min, max), v| (min.min(v), max.max(v))))
    }
}
