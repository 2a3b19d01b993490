//! Graph coloring constraint satisfaction.
//!
//! Given variables, pairwise "must differ" edges and a color palette, finds
//! an assignment of one color per variable that satisfies every edge, or
//! reports that none exists.
//!
//! - **Coloring**: [`coloring::ConstraintGraph`] holds the instance and
//!   solves it by exhaustive chronological backtracking with incremental
//!   consistency checks. Search order is static, so results are
//!   reproducible.
//! - **Fixtures**: the Australia map-coloring instance and seeded graph
//!   generators for tests and benchmarks.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for configs, statuses and results.
//! - `parallel`: solve batches of independent instances on rayon.
//!
//! # Example
//!
//! ```
//! use u_coloring::coloring::{ColoringStatus, ConstraintGraph};
//!
//! let graph = ConstraintGraph::new(
//!     ["x", "y", "z"],
//!     [("x", "y"), ("y", "z"), ("x", "z")],
//!     ["red", "green"],
//! )
//! .unwrap();
//!
//! let result = graph.solve();
//! assert_eq!(result.status, ColoringStatus::Unsatisfiable);
//! assert!(result.assignment.is_none());
//! ```

pub mod coloring;
pub mod fixtures;
