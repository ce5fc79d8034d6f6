//! Flat per-face shading.

use scanz_math::{Triangle, Vec3};
use serde::{Deserialize, Serialize};

/// Integer RGB color, one byte per channel.
pub type Rgb = [u8; 3];

/// A point light with scalar intensity (1.0 = full white).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: f32,
}

impl PointLight {
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self::new(Vec3::new(-40.0, 80.0, 0.0), 0.8)
    }
}

/// How a triangle's single color is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ShadingModel {
    /// Grayscale diffuse from a point light plus a constant ambient term.
    Lambert {
        light: PointLight,
        ambient: f32,
        /// Light back faces as if they faced the light
        #[serde(default)]
        two_sided: bool,
    },
    /// Face normal mapped to RGB (debug view).
    NormalColor,
    /// The same color for every face.
    Solid { color: Rgb },
}

impl Default for ShadingModel {
    fn default() -> Self {
        ShadingModel::Lambert {
            light: PointLight::default(),
            ambient: 0.2,
            two_sided: false,
        }
    }
}

impl ShadingModel {
    /// Compute the flat color for `triangle` (world space).
    ///
    /// Degenerate triangles have no normal: Lambert falls back to the
    /// ambient term and `NormalColor` to black.
    pub fn shade(&self, triangle: &Triangle) -> Rgb {
        match *self {
            ShadingModel::Lambert {
                light,
                ambient,
                two_sided,
            } => {
                let diffuse = match triangle.normal() {
                    Ok(normal) => lambert(normal, triangle.a, &light, two_sided),
                    Err(_) => 0.0,
                };
                let value = channel(diffuse * light.intensity + ambient);
                [value; 3]
            }
            ShadingModel::NormalColor => match triangle.normal() {
                Ok(n) => [channel(n.x), channel(n.y), channel(n.z)],
                Err(_) => [0; 3],
            },
            ShadingModel::Solid { color } => color,
        }
    }
}

/// Cosine term between the face normal and the direction to the light,
/// measured from the triangle's first vertex.
fn lambert(normal: Vec3, vertex: Vec3, light: &PointLight, two_sided: bool) -> f32 {
    let Some(to_light) = (light.position - vertex).try_normalize() else {
        return 0.0;
    };

    let cos = normal.dot(to_light);
    if two_sided {
        cos.abs()
    } else {
        cos.max(0.0)
    }
}

/// Map a [0, 1] intensity to a byte, clamping out-of-range values.
#[inline]
fn channel(x: f32) -> u8 {
    (255.0 * x.clamp(0.0, 1.0)) as u8
}
