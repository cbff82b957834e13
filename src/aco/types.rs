//! Core trait for Ant Colony Optimization.

/// Defines an ACO assignment problem over `N` items.
///
/// A solution is a permutation of `0..size()`; slot `i` receives item
/// `assignment[i]`. The framework handles pheromone learning, construction,
/// and best-so-far tracking.
///
/// # Minimization
///
/// ACO minimizes [`cost`](AcoProblem::cost). Costs of constructed solutions
/// must be strictly positive for the `1 / cost` deposit to be defined.
///
/// # Examples
///
/// ```ignore
/// struct Sorting { n: usize }
///
/// impl AcoProblem for Sorting {
///     fn size(&self) -> usize { self.n }
///     fn desirability(&self) -> Vec<f64> { vec![1.0; self.n] }
///     fn cost(&self, a: &[usize]) -> f64 {
///         1.0 + a.iter().enumerate().filter(|&(i, &v)| i != v).count() as f64
///     }
/// }
/// ```
pub trait AcoProblem: Send + Sync {
    /// Number of items to place.
    fn size(&self) -> usize;

    /// Raw, non-negative desirability per item (e.g. pick frequency).
    ///
    /// Normalized once into the static heuristic vector
    /// `eta[j] = value[j] / max(value) + epsilon`.
    fn desirability(&self) -> Vec<f64>;

    /// Cost of a complete assignment. Lower is better.
    fn cost(&self, assignment: &[usize]) -> f64;

    /// Called at the end of each iteration with the best cost so far.
    ///
    /// The default implementation is a no-op.
    fn on_iteration(&self, _iteration: usize, _best_cost: f64) {}
}
