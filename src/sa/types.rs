//! Core trait for Simulated Annealing.

use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The user implements neighbor generation and cost evaluation; the
/// runner owns temperature management, the acceptance criterion, and
/// cooling. The initial solution is supplied by the caller when the
/// runner is invoked, so one problem definition can be annealed from
/// many starting points.
///
/// # Minimization
///
/// SA minimizes the cost function. For maximization, negate the cost.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_search::sa::SaProblem;
///
/// /// f(x) = x^2, minimized at 0.
/// struct Quadratic;
///
/// impl SaProblem for Quadratic {
///     type Solution = f64;
///
///     fn cost(&self, x: &f64) -> f64 {
///         x * x
///     }
///
///     fn neighbor<R: Rng>(&self, x: &f64, rng: &mut R) -> f64 {
///         x + rng.random_range(-1.0..1.0)
///     }
/// }
/// ```
///
/// # References
///
/// Kirkpatrick et al. (1983), Cerny (1985)
pub trait SaProblem {
    /// The solution representation type.
    type Solution: Clone;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a neighbor of the current solution.
    ///
    /// The neighbor should be "close" to the current solution
    /// (small perturbation) but the neighborhood must be connected
    /// (any solution reachable from any other via a sequence of moves).
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
