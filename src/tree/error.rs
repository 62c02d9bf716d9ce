//! Error types for layout deserialization and tree edits.

use super::types::NodeId;
use thiserror::Error;

/// Errors raised while building a tree from its JSON form.
///
/// Any of these invalidates the whole load; no partial tree is returned.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// A node was given as a JSON array
    #[error("expected a layout node object, found an array")]
    UnexpectedArray,

    /// A node was a JSON scalar or null
    #[error("expected a layout node object, found {0}")]
    NotAnObject(&'static str),

    #[error("layout node has no type")]
    MissingType,

    #[error("unknown layout node type {0}")]
    UnknownType(String),

    #[error("invalid split direction {0}")]
    InvalidDirection(String),

    /// A branch `id` that is missing or not a string
    #[error("branch id must be a string")]
    InvalidBranchId,

    /// A branch `nodes` field that is missing or not an array
    #[error("branch nodes must be an array")]
    InvalidNodes,

    #[error("branch {0} not found")]
    BranchNotFound(NodeId),

    /// Invalid JSON, or a leaf field of the wrong shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
