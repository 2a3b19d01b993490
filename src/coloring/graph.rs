//! The coloring problem instance.

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};

use indexmap::IndexMap;

use super::config::BacktrackConfig;
use super::error::{AssignmentError, ColoringError};
use super::runner::{BacktrackRunner, ColoringResult};
use super::types::Assignment;

/// A graph coloring CSP: variables, pairwise inequality edges and a palette.
///
/// Variables, edges and palette are fixed at construction. The adjacency
/// map is built once and is read-only during search, so one instance can be
/// solved any number of times.
///
/// # Examples
///
/// ```
/// use u_coloring::coloring::{ColoringStatus, ConstraintGraph};
///
/// let graph = ConstraintGraph::new(
///     ["a", "b", "c"],
///     [("a", "b"), ("b", "c")],
///     ["red", "green"],
/// )
/// .unwrap();
///
/// let result = graph.solve();
/// assert_eq!(result.status, ColoringStatus::Solved);
/// let coloring = result.assignment.unwrap();
/// assert_eq!(coloring["a"], "red");
/// assert_eq!(coloring["b"], "green");
/// assert_eq!(coloring["c"], "red");
/// assert_eq!(graph.attempts(), 3);
/// ```
#[derive(Debug)]
pub struct ConstraintGraph<V, C> {
    variables: Vec<V>,
    colors: Vec<C>,
    edges: Vec<(V, V)>,
    neighbors: IndexMap<V, Vec<V>>,
    /// Attempt counter of the most recent `solve` on this instance.
    last_attempts: AtomicUsize,
}

impl<V, C> ConstraintGraph<V, C>
where
    V: Clone + Eq + Hash + Debug,
    C: Clone + PartialEq + Debug,
{
    /// Builds an instance and its adjacency map.
    ///
    /// Each edge `(u, v)` appends `v` to the neighbors of `u` and `u` to the
    /// neighbors of `v`. Duplicate edges and self-loops are kept as given.
    ///
    /// # Errors
    ///
    /// - [`ColoringError::DuplicateVariable`] if a variable is listed twice.
    /// - [`ColoringError::UnknownVariable`] if an edge names a variable that
    ///   is not in `variables`.
    pub fn new(
        variables: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = (V, V)>,
        colors: impl IntoIterator<Item = C>,
    ) -> Result<Self, ColoringError> {
        let variables: Vec<V> = variables.into_iter().collect();
        let colors: Vec<C> = colors.into_iter().collect();
        let edges: Vec<(V, V)> = edges.into_iter().collect();

        let mut neighbors: IndexMap<V, Vec<V>> = IndexMap::with_capacity(variables.len());
        for var in &variables {
            if neighbors.insert(var.clone(), Vec::new()).is_some() {
                return Err(ColoringError::DuplicateVariable {
                    variable: format!("{var:?}"),
                });
            }
        }

        for (u, v) in &edges {
            for endpoint in [u, v] {
                if !neighbors.contains_key(endpoint) {
                    return Err(ColoringError::UnknownVariable {
                        variable: format!("{endpoint:?}"),
                        edge: format!("({u:?}, {v:?})"),
                    });
                }
            }
            if let Some(list) = neighbors.get_mut(u) {
                list.push(v.clone());
            }
            if let Some(list) = neighbors.get_mut(v) {
                list.push(u.clone());
            }
        }

        log::debug!(
            "built constraint graph: {} variables, {} edges, {} colors",
            variables.len(),
            edges.len(),
            colors.len()
        );

        Ok(Self {
            variables,
            colors,
            edges,
            neighbors,
            last_attempts: AtomicUsize::new(0),
        })
    }

    /// Returns `false` iff a neighbor of `var` already holds `value` in
    /// `assignment`.
    ///
    /// Only assigned neighbors are compared. A self-loop therefore never
    /// rejects: `var` itself is not yet assigned while its own candidate is
    /// being tested. A `var` unknown to the graph has no neighbors and is
    /// consistent with anything.
    pub fn is_consistent(&self, var: &V, value: &C, assignment: &Assignment<V, C>) -> bool {
        match self.neighbors.get(var) {
            Some(adjacent) => !adjacent
                .iter()
                .any(|n| assignment.get(n).is_some_and(|c| c == value)),
            None => true,
        }
    }

    /// Solves with the default configuration.
    ///
    /// See [`solve_with`](Self::solve_with).
    pub fn solve(&self) -> ColoringResult<V, C> {
        self.solve_with(&BacktrackConfig::default())
    }

    /// Runs backtracking search from an empty assignment.
    ///
    /// The instance counter reported by [`attempts`](Self::attempts) is
    /// reset to 0 first and holds this run's count afterwards. The search
    /// state itself is owned by the call, so concurrent calls on a shared
    /// instance are sound; the instance counter then reflects whichever
    /// call finished last.
    pub fn solve_with(&self, config: &BacktrackConfig) -> ColoringResult<V, C> {
        self.last_attempts.store(0, Ordering::Relaxed);
        let result = BacktrackRunner::run(self, config);
        self.last_attempts.store(result.attempts, Ordering::Relaxed);
        result
    }

    /// Checks that `assignment` is a complete, valid coloring of this graph.
    ///
    /// Self-loops are skipped, matching the search.
    pub fn verify(&self, assignment: &Assignment<V, C>) -> Result<(), AssignmentError> {
        for (var, color) in assignment {
            if !self.neighbors.contains_key(var) {
                return Err(AssignmentError::UnknownVariable {
                    variable: format!("{var:?}"),
                });
            }
            if !self.colors.contains(color) {
                return Err(AssignmentError::UnknownColor {
                    variable: format!("{var:?}"),
                    color: format!("{color:?}"),
                });
            }
        }

        if let Some(missing) = self.variables.iter().find(|v| !assignment.contains_key(*v)) {
            return Err(AssignmentError::Incomplete {
                missing: format!("{missing:?}"),
            });
        }

        for (u, v) in &self.edges {
            if u == v {
                continue;
            }
            if let (Some(cu), Some(cv)) = (assignment.get(u), assignment.get(v)) {
                if cu == cv {
                    return Err(AssignmentError::Conflict {
                        u: format!("{u:?}"),
                        v: format!("{v:?}"),
                        color: format!("{cu:?}"),
                    });
                }
            }
        }

        Ok(())
    }

    /// Position of the first variable, in construction order, that is not
    /// in `assignment`.
    pub(crate) fn first_unassigned(&self, assignment: &Assignment<V, C>) -> Option<usize> {
        self.variables
            .iter()
            .position(|v| !assignment.contains_key(v))
    }

    /// Neighbors of `var`, with repeats for duplicate edges.
    pub fn neighbors(&self, var: &V) -> Option<&[V]> {
        self.neighbors.get(var).map(Vec::as_slice)
    }
}

impl<V, C> ConstraintGraph<V, C> {
    /// Variables in construction order.
    pub fn variables(&self) -> &[V] {
        &self.variables
    }

    /// Palette in construction order.
    pub fn colors(&self) -> &[C] {
        &self.colors
    }

    /// Edges as supplied.
    pub fn edges(&self) -> &[(V, V)] {
        &self.edges
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Tentative assignments made by the most recent `solve`.
    ///
    /// 0 on a freshly built instance.
    pub fn attempts(&self) -> usize {
        self.last_attempts.load(Ordering::Relaxed)
    }
}

impl<V: Clone, C: Clone> Clone for ConstraintGraph<V, C> {
    fn clone(&self) -> Self {
        Self {
            variables: self.variables.clone(),
            colors: self.colors.clone(),
            edges: self.edges.clone(),
            neighbors: self.neighbors.clone(),
            last_attempts: AtomicUsize::new(self.attempts()),
        }
    }
}
