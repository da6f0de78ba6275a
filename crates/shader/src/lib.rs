//! Shader variant registry for the vantage engine.
//!
//! This crate manages compiled shader variants by signature:
//! - Descriptor string parsing and uniform block layout generation
//! - Shader templates (unlit, color blend) that describe variant inputs
//! - A registry that deduplicates variants and caches per-kind templates
//!
//! Shader *sources* here are inputs handed to the renderer; no compilation
//! happens in this crate.

mod descriptor;
mod error;
mod registry;
mod template;

pub use descriptor::{make_layout, parse_descriptor, Field, UniformType};
pub use error::{ShaderError, ShaderResult};
pub use registry::{ShaderId, ShaderRegistry, ShaderVariant};
pub use template::{ShaderTemplate, TemplateKind};
