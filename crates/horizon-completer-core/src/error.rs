//! Error types for Horizon Completer core primitives.

/// Errors that can occur during node tree operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    /// The node ID is invalid or the node has been destroyed.
    #[error("Invalid or destroyed node ID")]
    InvalidNodeId,
    /// Attempted to append a node to itself or to one of its descendants.
    #[error("Cannot append a node to itself or to one of its descendants")]
    CircularParentage,
    /// The document root cannot be reparented or destroyed.
    #[error("The document root cannot be moved or destroyed")]
    RootImmutable,
}

/// Result type for node tree operations.
pub type NodeResult<T> = std::result::Result<T, NodeError>;
