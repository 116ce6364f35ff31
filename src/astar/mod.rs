//! A* best-first search over the 8-puzzle.
//!
//! Orders the frontier by `depth + heuristic` and expands each distinct
//! board at most once. With an admissible heuristic the first goal pop
//! is a shortest solution; ties are broken by insertion order, so the
//! search is deterministic end to end.
//!
//! # References
//!
//! - Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//!   Determination of Minimum Cost Paths"
//! - Russell & Norvig, "Artificial Intelligence: A Modern Approach", ch. 3

mod frontier;
mod runner;

pub use frontier::OpenList;
pub use runner::{AstarConfig, AstarResult, AstarRunner};
