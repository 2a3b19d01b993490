//! Backtracking execution engine.
//!
//! # Algorithm
//!
//! 1. If every variable is assigned, succeed
//! 2. Select the first unassigned variable in construction order
//! 3. For each color in palette order that is consistent with the
//!    already assigned neighbors:
//!    a. Assign it and count one attempt
//!    b. Recurse; a solution is propagated immediately
//!    c. Otherwise undo the assignment and try the next color
//! 4. If no color works, report exhaustion to the parent
//!
//! There is no propagation and no reordering: dead ends are only found at
//! the variable where they occur.

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::BacktrackConfig;
use super::graph::ConstraintGraph;
use super::types::{Assignment, ColoringStatus, SearchStrategy};

/// Result of a backtracking run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "V: serde::Serialize, C: serde::Serialize",
        deserialize = "V: serde::Deserialize<'de> + Eq + Hash, C: serde::Deserialize<'de>"
    ))
)]
pub struct ColoringResult<V, C> {
    /// How the search ended.
    pub status: ColoringStatus,

    /// The complete coloring. `Some` iff `status` is `Solved`.
    pub assignment: Option<Assignment<V, C>>,

    /// Tentative assignments made, including ones later undone.
    pub attempts: usize,
}

impl<V: Eq + Hash, C: PartialEq> PartialEq for ColoringResult<V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.status == other.status
            && self.attempts == other.attempts
            && self.assignment == other.assignment
    }
}

impl<V, C> ColoringResult<V, C> {
    /// Whether a complete coloring was found.
    pub fn is_solution_found(&self) -> bool {
        self.status == ColoringStatus::Solved
    }

    /// Consumes the result, returning the coloring if one was found.
    pub fn into_assignment(self) -> Option<Assignment<V, C>> {
        self.assignment
    }
}

/// Executes chronological backtracking on a [`ConstraintGraph`].
///
/// The runner never touches the graph's own attempt counter; use
/// [`ConstraintGraph::solve`] for that.
pub struct BacktrackRunner;

impl BacktrackRunner {
    /// Runs the search to completion, exhaustion or budget.
    pub fn run<V, C>(graph: &ConstraintGraph<V, C>, config: &BacktrackConfig) -> ColoringResult<V, C>
    where
        V: Clone + Eq + Hash + Debug,
        C: Clone + PartialEq + Debug,
    {
        Self::run_with_cancel(graph, config, None)
    }

    /// Runs the search with an optional cancellation flag.
    ///
    /// The flag is polled before every tentative assignment.
    pub fn run_with_cancel<V, C>(
        graph: &ConstraintGraph<V, C>,
        config: &BacktrackConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> ColoringResult<V, C>
    where
        V: Clone + Eq + Hash + Debug,
        C: Clone + PartialEq + Debug,
    {
        log::debug!(
            "backtracking over {} variables, {} colors ({:?})",
            graph.variable_count(),
            graph.colors().len(),
            config.strategy
        );

        let mut search = Search {
            graph,
            config,
            cancel: cancel.as_deref(),
            assignment: Assignment::with_capacity(graph.variable_count()),
            attempts: 0,
        };

        let step = match config.strategy {
            SearchStrategy::Recursive => search.recursive(),
            SearchStrategy::Iterative => search.iterative(),
        };

        let (status, assignment) = match step {
            Step::Found => (ColoringStatus::Solved, Some(search.assignment)),
            Step::Exhausted => (ColoringStatus::Unsatisfiable, None),
            Step::Stopped(status) => (status, None),
        };

        log::debug!("search finished: {status:?} after {} attempts", search.attempts);

        ColoringResult {
            status,
            assignment,
            attempts: search.attempts,
        }
    }

    /// Solves independent instances, returning results in input order.
    ///
    /// Each instance is solved through [`ConstraintGraph::solve_with`], so
    /// every graph's own attempt counter is updated. With the `parallel`
    /// feature and `config.parallel` set, instances run on the rayon pool.
    pub fn run_batch<V, C>(
        graphs: &[ConstraintGraph<V, C>],
        config: &BacktrackConfig,
    ) -> Vec<ColoringResult<V, C>>
    where
        V: Clone + Eq + Hash + Debug + Send + Sync,
        C: Clone + PartialEq + Debug + Send + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            if config.parallel {
                return graphs.par_iter().map(|g| g.solve_with(config)).collect();
            }
        }

        graphs.iter().map(|g| g.solve_with(config)).collect()
    }
}

/// How one level of the search ended.
enum Step {
    Found,
    Exhausted,
    Stopped(ColoringStatus),
}

/// One level of the explicit stack: a variable and the next palette index
/// to try for it.
struct Frame {
    var: usize,
    next_color: usize,
}

/// Mutable state of a single search invocation.
struct Search<'a, V, C> {
    graph: &'a ConstraintGraph<V, C>,
    config: &'a BacktrackConfig,
    cancel: Option<&'a AtomicBool>,
    assignment: Assignment<V, C>,
    attempts: usize,
}

impl<V, C> Search<'_, V, C>
where
    V: Clone + Eq + Hash + Debug,
    C: Clone + PartialEq + Debug,
{
    /// Checked before every tentative assignment.
    fn interrupted(&self) -> Option<ColoringStatus> {
        if self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            return Some(ColoringStatus::Cancelled);
        }
        if self.config.budget_exhausted(self.attempts) {
            return Some(ColoringStatus::LimitReached);
        }
        None
    }

    fn assign(&mut self, var: &V, color: &C) {
        self.assignment.insert(var.clone(), color.clone());
        self.attempts += 1;
    }

    /// Removes the most recent assignment, which must belong to `var`.
    fn undo(&mut self, var: &V) {
        let popped = self.assignment.pop();
        debug_assert!(popped.is_some_and(|(k, _)| &k == var));
        log::trace!("backtrack: unassign {var:?}");
    }

    fn recursive(&mut self) -> Step {
        let graph = self.graph;
        if self.assignment.len() == graph.variable_count() {
            return Step::Found;
        }
        let Some(pos) = graph.first_unassigned(&self.assignment) else {
            return Step::Found;
        };
        let var = &graph.variables()[pos];

        for color in graph.colors() {
            if !graph.is_consistent(var, color, &self.assignment) {
                continue;
            }
            if let Some(status) = self.interrupted() {
                return Step::Stopped(status);
            }
            self.assign(var, color);

            match self.recursive() {
                Step::Exhausted => self.undo(var),
                done => return done,
            }
        }

        Step::Exhausted
    }

    /// Same traversal as [`recursive`](Self::recursive), with the call
    /// stack replaced by a vector of frames.
    fn iterative(&mut self) -> Step {
        let graph = self.graph;
        let mut stack: Vec<Frame> = Vec::with_capacity(graph.variable_count());

        loop {
            if self.assignment.len() == graph.variable_count() {
                return Step::Found;
            }
            let Some(pos) = graph.first_unassigned(&self.assignment) else {
                return Step::Found;
            };
            stack.push(Frame {
                var: pos,
                next_color: 0,
            });

            // Advance the deepest frame, unwinding exhausted ones.
            loop {
                let Some(frame) = stack.last_mut() else {
                    return Step::Exhausted;
                };
                let var = &graph.variables()[frame.var];
                let candidate = graph.colors()[frame.next_color..]
                    .iter()
                    .position(|c| graph.is_consistent(var, c, &self.assignment))
                    .map(|offset| frame.next_color + offset);

                match candidate {
                    Some(index) => {
                        if let Some(status) = self.interrupted() {
                            return Step::Stopped(status);
                        }
                        frame.next_color = index + 1;
                        self.assign(var, &graph.colors()[index]);
                        break;
                    }
                    None => {
                        stack.pop();
                        if let Some(parent) = stack.last() {
                            self.undo(&graph.variables()[parent.var]);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Path a - c - d - b. With order [a, b, c, d] and two colors, b first
    /// takes the wrong color and the search has to back up to it.
    fn zigzag() -> ConstraintGraph<&'static str, u8> {
        ConstraintGraph::new(
            ["a", "b", "c", "d"],
            [("a", "c"), ("c", "d"), ("d", "b")],
            [1, 2],
        )
        .unwrap()
    }

    fn triangle(colors: &[u8]) -> ConstraintGraph<u32, u8> {
        ConstraintGraph::new(0..3, [(0, 1), (1, 2), (0, 2)], colors.iter().copied()).unwrap()
    }

    fn both_strategies() -> [BacktrackConfig; 2] {
        [
            BacktrackConfig::default(),
            BacktrackConfig::default().with_strategy(SearchStrategy::Iterative),
        ]
    }

    #[test]
    fn test_backtracks_to_earlier_variable() {
        for config in both_strategies() {
            let result = BacktrackRunner::run(&zigzag(), &config);
            assert_eq!(result.status, ColoringStatus::Solved);
            assert_eq!(result.attempts, 6);

            let coloring = result.assignment.unwrap();
            assert_eq!(coloring["a"], 1);
            assert_eq!(coloring["b"], 2);
            assert_eq!(coloring["c"], 2);
            assert_eq!(coloring["d"], 1);
            // keys stay in variable order after undo
            let keys: Vec<_> = coloring.keys().copied().collect();
            assert_eq!(keys, ["a", "b", "c", "d"]);
        }
    }

    #[test]
    fn test_triangle_two_colors_unsatisfiable() {
        for config in both_strategies() {
            let result = BacktrackRunner::run(&triangle(&[1, 2]), &config);
            assert_eq!(result.status, ColoringStatus::Unsatisfiable);
            assert!(result.assignment.is_none());
            assert_eq!(result.attempts, 4);
        }
    }

    #[test]
    fn test_triangle_three_colors() {
        let graph = triangle(&[1, 2, 3]);
        for config in both_strategies() {
            let result = BacktrackRunner::run(&graph, &config);
            assert!(result.is_solution_found());
            assert_eq!(result.attempts, 3);
            assert!(graph.verify(result.assignment.as_ref().unwrap()).is_ok());
        }
    }

    #[test]
    fn test_empty_variables() {
        let graph = ConstraintGraph::<u32, u8>::new([], [], [1, 2]).unwrap();
        for config in both_strategies() {
            let result = BacktrackRunner::run(&graph, &config);
            assert_eq!(result.status, ColoringStatus::Solved);
            assert!(result.assignment.unwrap().is_empty());
            assert_eq!(result.attempts, 0);
        }
    }

    #[test]
    fn test_empty_palette() {
        let graph = ConstraintGraph::<u32, u8>::new([0, 1], [(0, 1)], []).unwrap();
        for config in both_strategies() {
            let result = BacktrackRunner::run(&graph, &config);
            assert_eq!(result.status, ColoringStatus::Unsatisfiable);
            assert_eq!(result.attempts, 0);
        }
    }

    #[test]
    fn test_single_variable() {
        let graph = ConstraintGraph::<_, _>::new(["x"], [], ["r", "g"]).unwrap();
        for config in both_strategies() {
            let result = BacktrackRunner::run(&graph, &config);
            assert_eq!(result.attempts, 1);
            assert_eq!(result.into_assignment().unwrap()["x"], "r");
        }
    }

    #[test]
    fn test_self_loop_is_noop() {
        let graph = ConstraintGraph::new(["x", "y"], [("x", "x"), ("x", "y")], ["r", "g"]).unwrap();
        for config in both_strategies() {
            let result = BacktrackRunner::run(&graph, &config);
            assert_eq!(result.status, ColoringStatus::Solved);
            assert_eq!(result.attempts, 2);
            let coloring = result.assignment.unwrap();
            assert_eq!(coloring["x"], "r");
            assert_eq!(coloring["y"], "g");
        }
    }

    #[test]
    fn test_limit_reached() {
        for config in both_strategies() {
            let config = config.with_max_attempts(3);
            let result = BacktrackRunner::run(&zigzag(), &config);
            assert_eq!(result.status, ColoringStatus::LimitReached);
            assert_eq!(result.attempts, 3);
            assert!(result.assignment.is_none());
        }
    }

    #[test]
    fn test_limit_equal_to_needed_attempts() {
        let config = BacktrackConfig::default().with_max_attempts(6);
        let result = BacktrackRunner::run(&zigzag(), &config);
        assert_eq!(result.status, ColoringStatus::Solved);
        assert_eq!(result.attempts, 6);
    }

    #[test]
    fn test_cancelled_before_start() {
        let flag = Arc::new(AtomicBool::new(true));
        for config in both_strategies() {
            let result = BacktrackRunner::run_with_cancel(&zigzag(), &config, Some(flag.clone()));
            assert_eq!(result.status, ColoringStatus::Cancelled);
            assert_eq!(result.attempts, 0);
        }
    }

    #[test]
    fn test_runner_leaves_graph_counter() {
        let graph = zigzag();
        BacktrackRunner::run(&graph, &BacktrackConfig::default());
        assert_eq!(graph.attempts(), 0);
        graph.solve();
        assert_eq!(graph.attempts(), 6);
    }

    #[test]
    fn test_repeated_solve_is_deterministic() {
        let graph = zigzag();
        let first = graph.solve();
        let second = graph.solve();
        assert_eq!(first, second);
        assert_eq!(graph.attempts(), 6);
    }

    #[test]
    fn test_batch_in_input_order() {
        let graphs = vec![triangle(&[1, 2]), triangle(&[1, 2, 3])];
        let results = BacktrackRunner::run_batch(&graphs, &BacktrackConfig::default());
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].status, ColoringStatus::Unsatisfiable);
        assert_eq!(results[1].status, ColoringStatus::Solved);
        assert_eq!(graphs[0].attempts(), 4);
        assert_eq!(graphs[1].attempts(), 3);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_batch_parallel_matches_sequential() {
        let graphs: Vec<_> = (1..=4u8)
            .map(|k| triangle(&(1..=k).collect::<Vec<_>>()))
            .collect();
        let sequential = BacktrackRunner::run_batch(&graphs, &BacktrackConfig::default());
        let parallel =
            BacktrackRunner::run_batch(&graphs, &BacktrackConfig::default().with_parallel(true));
        assert_eq!(sequential, parallel);
    }
}
