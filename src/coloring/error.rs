//! Error types for instance construction and assignment checking.
//!
//! An unsatisfiable instance is not an error: it is reported through
//! [`ColoringStatus::Unsatisfiable`](super::ColoringStatus::Unsatisfiable).

use thiserror::Error;

/// Raised when a [`ConstraintGraph`](super::ConstraintGraph) cannot be built
/// from the supplied input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColoringError {
    #[error("edge {edge} references unknown variable {variable}")]
    UnknownVariable { variable: String, edge: String },

    #[error("variable {variable} is listed more than once")]
    DuplicateVariable { variable: String },
}

/// Raised by [`ConstraintGraph::verify`](super::ConstraintGraph::verify)
/// when an assignment is not a valid coloring of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    #[error("assignment colors unknown variable {variable}")]
    UnknownVariable { variable: String },

    #[error("variable {variable} is given color {color}, which is not in the palette")]
    UnknownColor { variable: String, color: String },

    #[error("variable {missing} has no color")]
    Incomplete { missing: String },

    #[error("adjacent variables {u} and {v} share color {color}")]
    Conflict { u: String, v: String, color: String },
}
