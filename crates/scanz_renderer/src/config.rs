//! Render settings and the JSON config file.

use std::path::Path;

use scanz_core::{ObjectConfig, Scene};
use scanz_math::{Camera, Vec2, DEFAULT_FOCAL_DISTANCE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::framebuffer::{BoundsPolicy, Framebuffer, DEFAULT_CLIP_FAR};
use crate::shading::{Rgb, ShadingModel};

/// Errors that can occur while loading a config.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
    /// Initial depth of every cell; fragments at or beyond it are dropped
    pub clip_far: i32,
    /// Image-plane distance along the view axis
    pub focal_distance: f32,
    /// Image-plane offset added after projection
    pub principal_point: Vec2,
    /// Color of pixels no triangle covers
    pub background: Rgb,
    /// Which border cells accept writes
    pub bounds: BoundsPolicy,
    /// Per-face color model
    pub shading: ShadingModel,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            clip_far: DEFAULT_CLIP_FAR,
            focal_distance: DEFAULT_FOCAL_DISTANCE,
            principal_point: Vec2::ZERO,
            background: [0, 0, 0],
            bounds: BoundsPolicy::default(),
            shading: ShadingModel::default(),
        }
    }
}

impl RenderConfig {
    /// Parse a render config from JSON; missing fields take defaults.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that cannot produce an image.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.focal_distance.is_finite() || self.focal_distance == 0.0 {
            return Err(ConfigError::Invalid(format!(
                "focal_distance must be finite and non-zero, got {}",
                self.focal_distance
            )));
        }
        if self.clip_far <= 0 {
            return Err(ConfigError::Invalid(format!(
                "clip_far must be positive, got {}",
                self.clip_far
            )));
        }
        Ok(())
    }

    /// The projection camera described by this config.
    pub fn camera(&self) -> Camera {
        Camera::new()
            .with_focal_distance(self.focal_distance)
            .with_principal_point(self.principal_point)
    }

    /// A fresh framebuffer sized and cleared for this config.
    pub fn framebuffer(&self) -> Framebuffer {
        Framebuffer::new(self.width, self.height)
            .with_bounds(self.bounds)
            .with_clip_far(self.clip_far)
            .with_background(self.background)
    }
}

/// Top-level config file: render settings plus the objects to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default = "Scene::sample_configs")]
    pub objects: Vec<ObjectConfig>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            objects: Scene::sample_configs(),
        }
    }
}

impl ConfigFile {
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let file: Self = serde_json::from_str(json)?;
        file.render.validate()?;
        if file.objects.is_empty() {
            log::warn!("Config lists no objects, the image will be empty");
        }
        Ok(file)
    }

    /// Load a config file from disk.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        log::debug!("Loading config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Build the world-space scene named by this config.
    pub fn scene(&self, name: impl Into<String>) -> Scene {
        Scene::from_configs(name, &self.objects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanz_core::Shape;

    #[test]
    fn test_default_config_is_valid() {
        let config = RenderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.width, 256);
        assert_eq!(config.clip_far, 1000);
        assert_eq!(config.camera().focal_distance, 64.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = RenderConfig::from_json_str(r#"{ "width": 64, "bounds": "full" }"#).unwrap();

        assert_eq!(config.width, 64);
        assert_eq!(config.height, 256);
        assert_eq!(config.bounds, BoundsPolicy::Full);
        assert_eq!(config.shading, ShadingModel::default());
    }

    #[test]
    fn test_shading_model_from_json() {
        let json = r#"{ "shading": { "model": "solid", "color": [255, 0, 255] } }"#;
        let config = RenderConfig::from_json_str(json).unwrap();
        assert_eq!(
            config.shading,
            ShadingModel::Solid {
                color: [255, 0, 255]
            }
        );

        let json = r#"{ "shading": { "model": "normal_color" } }"#;
        let config = RenderConfig::from_json_str(json).unwrap();
        assert_eq!(config.shading, ShadingModel::NormalColor);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            RenderConfig::from_json_str(r#"{ "width": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            RenderConfig::from_json_str(r#"{ "focal_distance": 0.0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            RenderConfig::from_json_str(r#"{ "clip_far": -5 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            RenderConfig::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_config_file_objects() {
        let json = r#"{
            "render": { "width": 128, "height": 128 },
            "objects": [
                { "shape": "cross", "placement": { "scale": [10, 10, 10], "translation": [0, 0, 50] } }
            ]
        }"#;
        let file = ConfigFile::from_json_str(json).unwrap();

        assert_eq!(file.render.width, 128);
        assert_eq!(file.objects.len(), 1);
        assert_eq!(file.objects[0].shape, Shape::Cross);
        assert_eq!(file.scene("test").total_triangle_count(), 4);
    }

    #[test]
    fn test_empty_config_file_renders_sample() {
        let file = ConfigFile::from_json_str("{}").unwrap();
        assert_eq!(file, ConfigFile::default());
        assert_eq!(file.scene("sample").object_count(), 2);
    }

    #[test]
    fn test_framebuffer_from_config() {
        let config = RenderConfig {
            width: 32,
            height: 16,
            clip_far: 77,
            background: [1, 2, 3],
            ..Default::default()
        };
        let fb = config.framebuffer();

        assert_eq!(fb.width(), 32);
        assert_eq!(fb.height(), 16);
        assert_eq!(fb.depth(0, 0), Some(77));
        assert_eq!(fb.color(31, 15), Some([1, 2, 3]));
    }
}
