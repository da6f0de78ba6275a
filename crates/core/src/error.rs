//! Error types for the engine.

use thiserror::Error;

/// Engine-wide error type.
///
/// The scene, shader, and resource crates define their own error enums and
/// convert into this aggregate, so code spanning several subsystems (like
/// the demo application) can use a single `Result` type.
#[derive(Error, Debug)]
pub enum Error {
    /// Scene-graph errors
    #[error("Scene error: {0}")]
    Scene(String),

    /// Shader registry errors
    #[error("Shader error: {0}")]
    Shader(String),

    /// Resource loading errors
    #[error("Resource error: {0}")]
    Resource(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using the engine's Error type.
pub type Result<T> = std::result::Result<T, Error>;
