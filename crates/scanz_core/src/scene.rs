//! Scene types for Scanz.
//!
//! A scene is built by value: each model-space object is placed into world
//! space once, and the renderer consumes the flattened triangle list.

use scanz_math::{Triangle, Vec3};
use serde::{Deserialize, Serialize};

use crate::object::{Object, Placement};
use crate::shapes::Shape;

/// One built-in shape and where to put it, as read from a config file.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectConfig {
    pub shape: Shape,

    #[serde(default)]
    pub placement: Placement,
}

impl ObjectConfig {
    pub fn new(shape: Shape, placement: Placement) -> Self {
        Self { shape, placement }
    }
}

/// An ordered collection of world-space objects.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Objects already transformed into world space
    pub objects: Vec<Object>,

    /// Scene name (for logging)
    pub name: String,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The default demo scene: the cube with a cross floating in front of it.
    pub fn sample() -> Self {
        Self::from_configs("sample", &Self::sample_configs())
    }

    /// Object list behind `Scene::sample`.
    pub fn sample_configs() -> Vec<ObjectConfig> {
        vec![
            ObjectConfig::new(
                Shape::Cube,
                Placement::new(Vec3::splat(32.0), Vec3::new(60.0, -60.0, 100.0)),
            ),
            ObjectConfig::new(
                Shape::Cross,
                Placement::new(Vec3::splat(24.0), Vec3::new(30.0, -30.0, 60.0)),
            ),
        ]
    }

    /// Build a scene from config entries, in order.
    pub fn from_configs(name: impl Into<String>, configs: &[ObjectConfig]) -> Self {
        let mut scene = Self::new(name);
        for config in configs {
            scene.add(&config.shape.build(), &config.placement);
        }
        scene
    }

    /// Place a model-space object into the scene.
    pub fn add(&mut self, model: &Object, placement: &Placement) {
        let world = model.transformed(placement);
        log::debug!(
            "Placed '{}' ({} triangles) at {:?}, scale {:?}",
            world.name,
            world.triangle_count(),
            placement.translation,
            placement.scale
        );
        self.objects.push(world);
    }

    /// All world-space triangles, object by object in insertion order.
    pub fn world_triangles(&self) -> Vec<Triangle> {
        self.objects
            .iter()
            .flat_map(|o| o.triangles.iter().copied())
            .collect()
    }

    /// Get total triangle count across all objects.
    pub fn total_triangle_count(&self) -> usize {
        self.objects.iter().map(Object::triangle_count).sum()
    }

    /// Get object count.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes;

    #[test]
    fn test_scene_creation() {
        let mut scene = Scene::new("test");
        scene.add(&shapes::cube(), &Placement::default());
        scene.add(&shapes::cross(), &Placement::from_translation(Vec3::Z));

        assert_eq!(scene.object_count(), 2);
        assert_eq!(scene.total_triangle_count(), 16);
        assert_eq!(scene.world_triangles().len(), 16);
    }

    #[test]
    fn test_world_triangles_keep_order() {
        let mut scene = Scene::new("order");
        let cube = shapes::cube();
        let cross = shapes::cross();
        scene.add(&cube, &Placement::default());
        scene.add(&cross, &Placement::default());

        let tris = scene.world_triangles();
        assert_eq!(tris[0], cube.triangles[0]);
        assert_eq!(tris[11], cube.triangles[11]);
        assert_eq!(tris[12], cross.triangles[0]);
    }

    #[test]
    fn test_sample_scene_is_in_front_of_camera() {
        let scene = Scene::sample();
        assert_eq!(scene.object_count(), 2);

        for t in scene.world_triangles() {
            for v in t.vertices() {
                assert!(v.z > 0.0);
            }
        }
    }

    #[test]
    fn test_object_config_from_json() {
        let json = r#"{ "shape": "cube", "placement": { "scale": [2.0, 2.0, 2.0] } }"#;
        let config: ObjectConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.shape, Shape::Cube);
        assert_eq!(config.placement.scale, Vec3::splat(2.0));
        assert_eq!(config.placement.translation, Vec3::ZERO);
    }
}
