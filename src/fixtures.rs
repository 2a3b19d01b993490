//! Ready-made instances for demos, tests and benchmarks.
//!
//! [`australia`] is the classic map-coloring example. The generators build
//! graphs over `usize` variables `0..n` with a caller-supplied palette.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::coloring::{ColoringError, ConstraintGraph};

/// Mainland states and territories of Australia, plus Tasmania.
pub const AUSTRALIA_REGIONS: [&str; 7] = ["WA", "NT", "SA", "Q", "NSW", "V", "T"];

/// Shared land borders between [`AUSTRALIA_REGIONS`]. Tasmania has none.
pub const AUSTRALIA_BORDERS: [(&str, &str); 9] = [
    ("WA", "NT"),
    ("WA", "SA"),
    ("NT", "SA"),
    ("NT", "Q"),
    ("SA", "Q"),
    ("SA", "NSW"),
    ("SA", "V"),
    ("Q", "NSW"),
    ("NSW", "V"),
];

pub const RGB: [&str; 3] = ["Red", "Green", "Blue"];

/// The Australia map-coloring instance with a red/green/blue palette.
///
/// # Examples
///
/// ```
/// use u_coloring::fixtures;
///
/// let graph = fixtures::australia().unwrap();
/// let coloring = graph.solve().into_assignment().unwrap();
/// assert_eq!(coloring["T"], "Red");
/// assert_eq!(graph.attempts(), 7);
/// ```
pub fn australia() -> Result<ConstraintGraph<&'static str, &'static str>, ColoringError> {
    ConstraintGraph::new(AUSTRALIA_REGIONS, AUSTRALIA_BORDERS, RGB)
}

/// Complete graph on `k` vertices: every pair is an edge.
///
/// Colorable iff the palette has at least `k` colors.
pub fn complete_graph<C>(
    k: usize,
    colors: impl IntoIterator<Item = C>,
) -> Result<ConstraintGraph<usize, C>, ColoringError>
where
    C: Clone + PartialEq + std::fmt::Debug,
{
    let edges = (0..k).flat_map(|u| (u + 1..k).map(move |v| (u, v)));
    ConstraintGraph::new(0..k, edges, colors)
}

/// Cycle on `n` vertices, `0 - 1 - ... - (n-1) - 0`.
///
/// Needs three colors when `n` is odd, two when even. For `n < 3` the
/// result is a path (or a single vertex), not a cycle.
pub fn cycle_graph<C>(
    n: usize,
    colors: impl IntoIterator<Item = C>,
) -> Result<ConstraintGraph<usize, C>, ColoringError>
where
    C: Clone + PartialEq + std::fmt::Debug,
{
    let mut edges: Vec<(usize, usize)> = (1..n).map(|v| (v - 1, v)).collect();
    if n >= 3 {
        edges.push((n - 1, 0));
    }
    ConstraintGraph::new(0..n, edges, colors)
}

/// Erdős–Rényi graph G(n, p): each pair becomes an edge with probability
/// `density`, using a seeded RNG so the same seed gives the same graph.
///
/// `density` is clamped to `[0, 1]`.
pub fn random_graph<C>(
    n: usize,
    density: f64,
    colors: impl IntoIterator<Item = C>,
    seed: u64,
) -> Result<ConstraintGraph<usize, C>, ColoringError>
where
    C: Clone + PartialEq + std::fmt::Debug,
{
    let p = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let mut rng = StdRng::seed_from_u64(seed);

    let mut edges = Vec::new();
    for u in 0..n {
        for v in u + 1..n {
            if rng.random_bool(p) {
                edges.push((u, v));
            }
        }
    }
    ConstraintGraph::new(0..n, edges, colors)
}
