//! Shader-specific error types.

use thiserror::Error;

/// Shader-specific error type.
#[derive(Error, Debug)]
pub enum ShaderError {
    /// A descriptor string could not be parsed.
    #[error("Invalid descriptor token '{token}' in \"{descriptor}\"")]
    InvalidDescriptor {
        /// The token that failed to parse.
        token: String,
        /// The full descriptor string.
        descriptor: String,
    },

    /// A descriptor ended mid-field (a type with no name).
    #[error("Descriptor \"{0}\" has a trailing type with no field name")]
    UnterminatedField(String),

    /// Lookup of an unregistered shader id.
    #[error("Unknown shader id {0}")]
    UnknownShader(u32),
}

/// Result type alias for shader operations.
pub type ShaderResult<T> = std::result::Result<T, ShaderError>;

impl From<ShaderError> for vantage_core::Error {
    fn from(err: ShaderError) -> Self {
        vantage_core::Error::Shader(err.to_string())
    }
}
