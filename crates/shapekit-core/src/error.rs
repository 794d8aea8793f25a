//! Error handling for ShapeKit
//!
//! Provides error types for every layer of the editing core:
//! - Math errors (non-invertible transforms)
//! - Structure errors (tree edits that would break the hierarchy)
//! - Interaction errors (drag state machine misuse)
//!
//! All error types use `thiserror` for ergonomic error handling.

use crate::types::NodeId;
use thiserror::Error;

/// Math error type
///
/// Raised by the affine algebra when a requested operation has no
/// well-defined result. Callers decide on a fallback; nothing in the core
/// substitutes identity on their behalf.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Matrix inversion was requested on a matrix with a zero determinant
    #[error("Singular matrix cannot be inverted (determinant {determinant})")]
    SingularMatrix {
        /// The determinant that was found to be zero.
        determinant: f64,
    },
}

/// Structure error type
///
/// Represents rejected structural edits of the scene tree. Every variant is
/// detected before the tree is touched, so a returned error means the scene
/// is exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// The root node cannot be detached or moved under another node
    #[error("The root node cannot be reparented or detached")]
    RootNode,

    /// The root has no parent to ungroup its children into
    #[error("Cannot ungroup the children of the root node")]
    UngroupRoot,

    /// The requested parent lies inside the subtree being moved
    #[error("Moving {node} under {target} would create a cycle")]
    CycleDetected {
        /// The node being moved.
        node: NodeId,
        /// The requested new parent.
        target: NodeId,
    },

    /// No node with this id exists in the scene
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    /// The node has no parent to detach from
    #[error("{0} is not attached to a parent")]
    NotAttached(NodeId),

    /// The node must be detached before it can be attached elsewhere
    #[error("{0} is already attached to a parent")]
    AlreadyAttached(NodeId),
}

/// Interaction error type
///
/// Represents misuse of a drag interaction's idle/dragging state machine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InteractionError {
    /// A drag start arrived while the interaction was already dragging
    #[error("Interaction '{name}' is already dragging")]
    AlreadyDragging {
        /// Name of the interaction binding.
        name: String,
    },

    /// A move or end event arrived while the interaction was idle
    #[error("Interaction '{name}' is not dragging")]
    NotDragging {
        /// Name of the interaction binding.
        name: String,
    },
}

/// Main error type for ShapeKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Math error
    #[error(transparent)]
    Math(#[from] MathError),

    /// Structure error
    #[error(transparent)]
    Structure(#[from] StructureError),

    /// Interaction error
    #[error(transparent)]
    Interaction(#[from] InteractionError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a singular matrix error
    pub fn is_singular_matrix(&self) -> bool {
        matches!(self, Error::Math(MathError::SingularMatrix { .. }))
    }

    /// Check if this is a rejected structural edit
    pub fn is_structural(&self) -> bool {
        matches!(self, Error::Structure(_))
    }

    /// Check if this is an interaction state error
    pub fn is_interaction_error(&self) -> bool {
        matches!(self, Error::Interaction(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
