//! SA execution loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SaConfig;
use super::types::SaProblem;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature after the last cooling step.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA minimization from the caller-supplied `initial` solution.
    ///
    /// Each iteration draws one neighbor, applies the Metropolis rule
    /// (improvements always accepted, worsenings with probability
    /// `exp(-delta / T)`), then cools geometrically. The best solution
    /// is updated on accepted improvements, which equals the best over
    /// all trials because an improving trial is always accepted.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`SaConfig::validate`].
    pub fn run<P: SaProblem>(
        problem: &P,
        initial: P::Solution,
        config: &SaConfig,
    ) -> SaResult<P::Solution> {
        config.validate().expect("invalid SaConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut current = initial;
        let mut current_cost = problem.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        for _ in 0..config.max_iterations {
            let candidate = problem.neighbor(&current, &mut rng);
            let candidate_cost = problem.cost(&candidate);
            let delta = candidate_cost - current_cost;

            // Metropolis acceptance criterion
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else if temperature > 0.0 {
                let probability = (-delta / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            } else {
                false
            };

            if accept {
                current = candidate;
                current_cost = candidate_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                }
            }

            // Cool every iteration, accepted or not.
            temperature *= config.cooling_rate;
        }

        SaResult {
            best,
            best_cost,
            iterations: config.max_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
        }
    }
}
