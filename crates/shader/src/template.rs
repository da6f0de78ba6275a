//! Shader templates.
//!
//! A template bundles the descriptor strings and source text for one family
//! of shader variants. The engine ships two built-in kinds; applications
//! register their own variants directly through the registry.

/// Built-in template kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Textured, ignores light sources. The standard shader used by the
    /// convenience node constructors.
    Unlit,
    /// Blends between a flat color and a texture; ignores light sources.
    ColorBlend,
}

impl TemplateKind {
    /// A human-readable name for the template kind.
    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::Unlit => "unlit",
            TemplateKind::ColorBlend => "color_blend",
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Descriptors and sources for one shader variant family.
///
/// The *signature* uniquely identifies the variant for deduplication: two
/// templates with identical descriptors produce the same compiled shader, so
/// they share one registry entry.
#[derive(Clone, Debug)]
pub struct ShaderTemplate {
    /// Uniform block fields, `type name` pairs.
    pub uniform_descriptor: String,
    /// Texture bindings, `type name` pairs.
    pub texture_descriptor: String,
    /// Vertex attributes, `type name` pairs.
    pub vertex_descriptor: String,
    /// Vertex stage source text.
    pub vertex_source: String,
    /// Fragment stage source text.
    pub fragment_source: String,
    signature: String,
}

impl ShaderTemplate {
    /// Create a template from its descriptors and sources.
    ///
    /// The signature is derived from the three descriptors, so templates
    /// with the same input interface deduplicate regardless of source text.
    pub fn new(
        uniform_descriptor: &str,
        texture_descriptor: &str,
        vertex_descriptor: &str,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Self {
        let signature = format!(
            "u[{}] t[{}] v[{}]",
            uniform_descriptor.trim(),
            texture_descriptor.trim(),
            vertex_descriptor.trim()
        );
        Self {
            uniform_descriptor: uniform_descriptor.to_string(),
            texture_descriptor: texture_descriptor.to_string(),
            vertex_descriptor: vertex_descriptor.to_string(),
            vertex_source: vertex_source.to_string(),
            fragment_source: fragment_source.to_string(),
            signature,
        }
    }

    /// The deduplication key for this template.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Build the built-in template of the given kind.
    pub fn builtin(kind: TemplateKind) -> Self {
        match kind {
            TemplateKind::Unlit => Self::new(
                "float4 u_color",
                "sampler2D u_texture",
                "float3 a_position float2 a_texcoord",
                UNLIT_VERT,
                UNLIT_FRAG,
            ),
            TemplateKind::ColorBlend => Self::new(
                "float3 u_color float u_factor",
                "sampler2D u_texture",
                "float3 a_position float2 a_texcoord",
                COLOR_BLEND_VERT,
                COLOR_BLEND_FRAG,
            ),
        }
    }
}

// Minimal stand-in sources; the real text is assembled by the renderer from
// the descriptors plus generated layout blocks.
const UNLIT_VERT: &str = "void main() { gl_Position = u_mvp * vec4(a_position, 1.0); }\n";
const UNLIT_FRAG: &str = "void main() { frag = texture(u_texture, v_texcoord) * u_color; }\n";
const COLOR_BLEND_VERT: &str = "void main() { gl_Position = u_mvp * vec4(a_position, 1.0); }\n";
const COLOR_BLEND_FRAG: &str =
    "void main() { frag = mix(texture(u_texture, v_texcoord), vec4(u_color, 1.0), u_factor); }\n";
