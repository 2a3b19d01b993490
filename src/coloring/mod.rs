//! Graph coloring by chronological backtracking.
//!
//! Assigns one color from a fixed palette to each variable so that no two
//! variables joined by an edge share a color, or proves that no such
//! assignment exists.
//!
//! # Key Components
//!
//! - [`ConstraintGraph`] — the instance: variables, adjacency, palette
//! - [`BacktrackRunner`] — the search engine, recursive or iterative
//! - [`BacktrackConfig`] — strategy, attempt budget, batch parallelism
//! - [`ColoringResult`] — status, coloring and attempt count of a run
//!
//! # Design
//!
//! Plain depth-first search with static variable order and static value
//! order. The only pruning is the consistency check against neighbors that
//! are already assigned. There is no forward checking, no arc consistency
//! and no MRV/degree/LCV ordering, so results are fully determined by the
//! order of variables and colors given at construction.
//!
//! Worst-case time is `O(|colors|^|variables|)`.
//!
//! # References
//!
//! Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach",
//! 4th ed., ch. 6 (Constraint Satisfaction Problems).

mod config;
mod error;
mod graph;
mod runner;
mod types;

pub use config::BacktrackConfig;
pub use error::{AssignmentError, ColoringError};
pub use graph::ConstraintGraph;
pub use runner::{BacktrackRunner, ColoringResult};
pub use types::{Assignment, ColoringStatus, SearchStrategy};
