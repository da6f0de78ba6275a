//! Descriptor string parsing and shader layout generation.
//!
//! Shader inputs are declared with *descriptor strings*: a space-separated
//! list of `type name` pairs, for example:
//!
//! ```text
//! float3 u_color float u_factor
//! ```
//!
//! The same format describes uniforms, textures, and vertex attributes.
//! [`parse_descriptor`] turns a descriptor into typed [`Field`]s, and
//! [`make_layout`] renders a descriptor as a GLSL uniform block or
//! push-constant block for the renderer to splice into generated sources.

use crate::error::{ShaderError, ShaderResult};

/// Data type of a single descriptor field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UniformType {
    Float,
    Float2,
    Float3,
    Float4,
    Int,
    Int2,
    Int3,
    Int4,
    Mat3,
    Mat4,
    Sampler2D,
    SamplerCube,
}

impl UniformType {
    /// Parse a descriptor type token.
    fn parse(token: &str) -> Option<Self> {
        Some(match token {
            "float" => UniformType::Float,
            "float2" => UniformType::Float2,
            "float3" => UniformType::Float3,
            "float4" => UniformType::Float4,
            "int" => UniformType::Int,
            "int2" => UniformType::Int2,
            "int3" => UniformType::Int3,
            "int4" => UniformType::Int4,
            "mat3" => UniformType::Mat3,
            "mat4" => UniformType::Mat4,
            "sampler2D" => UniformType::Sampler2D,
            "samplerCube" => UniformType::SamplerCube,
            _ => return None,
        })
    }

    /// The GLSL spelling of this type.
    pub fn glsl_name(self) -> &'static str {
        match self {
            UniformType::Float => "float",
            UniformType::Float2 => "vec2",
            UniformType::Float3 => "vec3",
            UniformType::Float4 => "vec4",
            UniformType::Int => "int",
            UniformType::Int2 => "ivec2",
            UniformType::Int3 => "ivec3",
            UniformType::Int4 => "ivec4",
            UniformType::Mat3 => "mat3",
            UniformType::Mat4 => "mat4",
            UniformType::Sampler2D => "sampler2D",
            UniformType::SamplerCube => "samplerCube",
        }
    }

    /// True for opaque sampler types, which cannot live in uniform blocks.
    pub fn is_sampler(self) -> bool {
        matches!(self, UniformType::Sampler2D | UniformType::SamplerCube)
    }
}

impl std::fmt::Display for UniformType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glsl_name())
    }
}

/// One `type name` pair from a descriptor string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub ty: UniformType,
    pub name: String,
}

/// Parse a descriptor string into its fields.
///
/// An empty (or all-whitespace) descriptor parses to no fields.
///
/// # Errors
///
/// Returns [`ShaderError::InvalidDescriptor`] for an unknown type token and
/// [`ShaderError::UnterminatedField`] when a type has no following name.
pub fn parse_descriptor(descriptor: &str) -> ShaderResult<Vec<Field>> {
    let mut fields = Vec::new();
    let mut tokens = descriptor.split_whitespace();

    while let Some(token) = tokens.next() {
        let ty = UniformType::parse(token).ok_or_else(|| ShaderError::InvalidDescriptor {
            token: token.to_string(),
            descriptor: descriptor.to_string(),
        })?;
        let name = tokens
            .next()
            .ok_or_else(|| ShaderError::UnterminatedField(descriptor.to_string()))?;
        fields.push(Field {
            ty,
            name: name.to_string(),
        });
    }

    Ok(fields)
}

/// Render a descriptor as a GLSL block declaration.
///
/// With `use_ubo` the block is a std140 uniform buffer; otherwise it is a
/// push-constant block. Sampler fields are skipped: samplers bind outside
/// uniform blocks.
///
/// # Example
///
/// ```
/// use vantage_shader::make_layout;
///
/// let layout = make_layout("float3 u_color float u_factor", "Material", true).unwrap();
/// assert!(layout.contains("vec3 u_color;"));
/// assert!(layout.contains("uniform Material"));
/// ```
pub fn make_layout(descriptor: &str, block_name: &str, use_ubo: bool) -> ShaderResult<String> {
    let fields = parse_descriptor(descriptor)?;

    let mut out = String::new();
    if use_ubo {
        out.push_str("layout (std140) uniform ");
    } else {
        out.push_str("layout (push_constant) uniform ");
    }
    out.push_str(block_name);
    out.push_str(" {\n");
    for field in fields.iter().filter(|f| !f.ty.is_sampler()) {
        out.push_str("    ");
        out.push_str(field.ty.glsl_name());
        out.push(' ');
        out.push_str(&field.name);
        out.push_str(";\n");
    }
    out.push_str("};\n");
    Ok(out)
}
