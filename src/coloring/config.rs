//! Backtracking configuration.

use super::types::SearchStrategy;

/// Configuration for [`BacktrackRunner`](super::BacktrackRunner).
///
/// The default reproduces plain exhaustive search: recursive traversal,
/// no attempt budget, sequential batches.
///
/// # Examples
///
/// ```
/// use u_coloring::coloring::{BacktrackConfig, SearchStrategy};
///
/// let config = BacktrackConfig::default()
///     .with_strategy(SearchStrategy::Iterative)
///     .with_max_attempts(10_000);
/// assert_eq!(config.max_attempts, 10_000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BacktrackConfig {
    /// How the traversal is driven.
    pub strategy: SearchStrategy,

    /// Maximum number of tentative assignments. 0 = no limit.
    ///
    /// The budget is checked before each attempt, so a search that stops
    /// on the limit reports exactly `max_attempts` attempts.
    pub max_attempts: usize,

    /// Whether [`BacktrackRunner::run_batch`](super::BacktrackRunner::run_batch)
    /// solves instances in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for BacktrackConfig {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::default(),
            max_attempts: 0,
            parallel: false,
        }
    }
}

impl BacktrackConfig {
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_max_attempts(mut self, n: usize) -> Self {
        self.max_attempts = n;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Whether `attempts` has used up the budget.
    pub(crate) fn budget_exhausted(&self, attempts: usize) -> bool {
        self.max_attempts > 0 && attempts >= self.max_attempts
    }
}
