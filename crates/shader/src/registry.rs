//! Shader variant registry.
//!
//! The registry assigns each distinct shader *signature* one [`ShaderId`]
//! and hands the same id back for repeated registrations. It also memoizes
//! the built-in templates per kind: only one variant of each template kind
//! exists per registry, created lazily on first request.
//!
//! The registry is an ordinary value with no hidden global state; its
//! lifetime is tied to the engine context that owns it.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{ShaderError, ShaderResult};
use crate::template::{ShaderTemplate, TemplateKind};

/// Identifies one registered shader variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShaderId(u32);

impl ShaderId {
    /// The raw id the renderer uses to select the compiled variant.
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// A registered shader variant: descriptors, sources, and signature.
#[derive(Clone, Debug)]
pub struct ShaderVariant {
    pub signature: String,
    pub uniform_descriptor: String,
    pub texture_descriptor: String,
    pub vertex_descriptor: String,
    pub vertex_source: String,
    pub fragment_source: String,
}

/// Deduplicating registry of shader variants.
#[derive(Default)]
pub struct ShaderRegistry {
    variants: Vec<ShaderVariant>,
    by_signature: HashMap<String, ShaderId>,
    templates: HashMap<TemplateKind, ShaderId>,
}

impl ShaderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a shader variant, returning its id.
    ///
    /// Registration is idempotent per signature: a signature seen before
    /// returns the id of the existing variant and the new descriptors and
    /// sources are ignored. Distinct signatures always get distinct ids.
    pub fn register_shader(
        &mut self,
        signature: &str,
        uniform_descriptor: &str,
        texture_descriptor: &str,
        vertex_descriptor: &str,
        vertex_source: &str,
        fragment_source: &str,
    ) -> ShaderId {
        if let Some(&id) = self.by_signature.get(signature) {
            return id;
        }

        let id = ShaderId(self.variants.len() as u32);
        self.variants.push(ShaderVariant {
            signature: signature.to_string(),
            uniform_descriptor: uniform_descriptor.to_string(),
            texture_descriptor: texture_descriptor.to_string(),
            vertex_descriptor: vertex_descriptor.to_string(),
            vertex_source: vertex_source.to_string(),
            fragment_source: fragment_source.to_string(),
        });
        self.by_signature.insert(signature.to_string(), id);
        debug!(signature, id = id.raw(), "registered shader variant");
        id
    }

    /// Register a template as a shader variant.
    pub fn register_template(&mut self, template: &ShaderTemplate) -> ShaderId {
        self.register_shader(
            template.signature(),
            &template.uniform_descriptor,
            &template.texture_descriptor,
            &template.vertex_descriptor,
            &template.vertex_source,
            &template.fragment_source,
        )
    }

    /// Look up a previously registered signature.
    pub fn lookup_shader(&self, signature: &str) -> Option<ShaderId> {
        self.by_signature.get(signature).copied()
    }

    /// Get the variant behind an id.
    ///
    /// # Errors
    ///
    /// Returns [`ShaderError::UnknownShader`] for ids this registry never
    /// produced.
    pub fn variant(&self, id: ShaderId) -> ShaderResult<&ShaderVariant> {
        self.variants
            .get(id.0 as usize)
            .ok_or(ShaderError::UnknownShader(id.0))
    }

    /// Get the id of the built-in template of `kind`, creating and
    /// registering it on first request.
    ///
    /// Each kind is created at most once per registry; later requests
    /// return the cached id.
    pub fn template_shader(&mut self, kind: TemplateKind) -> ShaderId {
        if let Some(&id) = self.templates.get(&kind) {
            return id;
        }
        let template = ShaderTemplate::builtin(kind);
        let id = self.register_template(&template);
        self.templates.insert(kind, id);
        debug!(%kind, id = id.raw(), "instantiated shader template");
        id
    }

    /// Number of distinct variants registered.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// True when no variant has been registered.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
