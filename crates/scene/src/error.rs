//! Scene-graph error types.

use thiserror::Error;

/// Scene-graph error type.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SceneError {
    /// Child index outside `[0, child_count)`.
    #[error("Child index {index} out of bounds, children count: {count}")]
    ChildIndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The node's current child count.
        count: usize,
    },

    /// A node handle whose node has been freed.
    #[error("Stale node handle: the node has been freed")]
    StaleHandle,

    /// Attempt to add a node as a child of itself.
    #[error("A node cannot be its own child")]
    SelfParent,
}

/// Result type alias for scene operations.
pub type SceneResult<T> = std::result::Result<T, SceneError>;

impl From<SceneError> for vantage_core::Error {
    fn from(err: SceneError) -> Self {
        vantage_core::Error::Scene(err.to_string())
    }
}
