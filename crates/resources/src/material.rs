//! Material definitions.

use glam::Vec3;
use vantage_shader::ShaderId;

use crate::texture::TextureHandle;

/// Surface description for a render payload: which shader variant draws it
/// and the inputs that variant samples.
#[derive(Debug, Clone)]
pub struct Material {
    /// Shader variant used to draw surfaces with this material.
    pub shader: ShaderId,
    /// Main texture, sampled as `u_texture` when present.
    pub main_texture: Option<TextureHandle>,
    /// Blend color (`u_color`)
    pub color: Vec3,
    /// Color blend factor (`u_factor`), 0 = texture only, 1 = color only
    pub blend_factor: f32,
}

impl Material {
    /// Create a material for the given shader variant with default inputs:
    /// white color, zero blend factor, no texture.
    pub fn new(shader: ShaderId) -> Self {
        Self {
            shader,
            main_texture: None,
            color: Vec3::ONE,
            blend_factor: 0.0,
        }
    }

    /// Set the main texture.
    pub fn with_texture(mut self, texture: TextureHandle) -> Self {
        self.main_texture = Some(texture);
        self
    }

    /// Set the blend color.
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }
}
