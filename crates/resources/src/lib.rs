//! Resource types for the vantage engine.
//!
//! This crate holds the CPU-side assets a scene references:
//! - Meshes, including the generated quad
//! - Material definitions
//! - Image/texture loading

mod error;
mod material;
mod mesh;
mod texture;

pub use error::{ResourceError, ResourceResult};
pub use material::Material;
pub use mesh::{Mesh, MeshHandle};
pub use texture::{Texture, TextureHandle};
