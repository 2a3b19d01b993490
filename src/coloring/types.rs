//! Shared types for the coloring search.

use indexmap::IndexMap;

/// A partial or complete mapping from variables to colors.
///
/// Insertion ordered: the search inserts variables in construction order,
/// so the most recent entry is always the deepest choice point and undoing
/// it is a plain `pop`.
pub type Assignment<V, C> = IndexMap<V, C>;

/// How the backtracking traversal is driven.
///
/// Both strategies visit variables and colors in the same order and
/// report identical assignments and attempt counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStrategy {
    /// Function-call recursion. Depth equals the number of variables.
    #[default]
    Recursive,

    /// Explicit frame stack on the heap, for instances deep enough to
    /// exhaust the thread stack.
    Iterative,
}

/// Outcome of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColoringStatus {
    /// A complete, consistent assignment was found.
    Solved,
    /// The search space was exhausted: no coloring exists with this palette.
    Unsatisfiable,
    /// The configured attempt budget ran out before the search finished.
    LimitReached,
    /// The search was stopped through its cancellation flag.
    Cancelled,
}

impl ColoringStatus {
    /// Whether the search ran to a definitive answer.
    pub fn is_conclusive(self) -> bool {
        matches!(self, ColoringStatus::Solved | ColoringStatus::Unsatisfiable)
    }
}
