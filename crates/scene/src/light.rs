//! Light definitions for the scene.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// A directional light (sun-like).
///
/// Laid out as a uniform block for the rendering backend.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct DirectionalLight {
    /// Light direction (normalized)
    pub direction: Vec3,
    pub _pad0: f32,
    /// Light color
    pub color: Vec3,
    /// Light intensity
    pub intensity: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vec3::new(0.0, -1.0, 0.0),
            _pad0: 0.0,
            color: Vec3::ONE,
            intensity: 1.0,
        }
    }
}

/// A point light (omnidirectional).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct PointLight {
    /// Light position in world space
    pub position: Vec3,
    /// Attenuation radius
    pub radius: f32,
    /// Light color
    pub color: Vec3,
    /// Light intensity
    pub intensity: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            radius: 10.0,
            color: Vec3::ONE,
            intensity: 1.0,
        }
    }
}

/// A light source attachable to a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    Directional(DirectionalLight),
    Point(PointLight),
}

impl Light {
    /// The light's color.
    pub fn color(&self) -> Vec3 {
        match self {
            Light::Directional(l) => l.color,
            Light::Point(l) => l.color,
        }
    }

    /// The light's intensity.
    pub fn intensity(&self) -> f32 {
        match self {
            Light::Directional(l) => l.intensity,
            Light::Point(l) => l.intensity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_block_sizes() {
        // vec3 + pad/scalar pairs, 16-byte aligned for std140.
        assert_eq!(std::mem::size_of::<DirectionalLight>(), 32);
        assert_eq!(std::mem::size_of::<PointLight>(), 32);
    }

    #[test]
    fn test_light_accessors() {
        let light = Light::Point(PointLight::default());
        assert_eq!(light.color(), Vec3::ONE);
        assert_eq!(light.intensity(), 1.0);
    }
}
