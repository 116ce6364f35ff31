//! Classical state-space search algorithms.
//!
//! Provides self-contained implementations of the standard search
//! exercises:
//!
//! - **A\***: Informed best-first search over the 8-puzzle with
//!   interchangeable admissible heuristics and deterministic
//!   insertion-order tie-breaking.
//! - **Bounded DFS**: Explicit-stack depth-first search over the
//!   8-puzzle with a depth cutoff and a run-global visited set.
//! - **IDDFS**: Iterative-deepening reachability over an abstract
//!   directed graph with path-scoped revisiting.
//! - **Simulated Annealing (SA)**: Single-solution trajectory
//!   minimization with Metropolis acceptance and geometric cooling.
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem and
//! depends only on `rand`. The algorithms are independent: nothing is
//! shared across them except the `puzzle` state space used by both
//! puzzle searches. All search state lives inside each `run` call, and
//! results are plain data.

pub mod astar;
pub mod dfs;
pub mod iddfs;
pub mod puzzle;
pub mod sa;
