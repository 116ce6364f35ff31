//! The 8-puzzle state space.
//!
//! A 3x3 board of tiles `1..=8` plus one blank, rearranged by sliding a
//! neighboring tile into the blank. This module owns the board
//! representation, deterministic move generation, the admissible
//! heuristics, the inversion-parity solvability test, and the node arena
//! the puzzle searches allocate from.
//!
//! # References
//!
//! - Johnson & Story (1879), "Notes on the '15' Puzzle"
//! - Russell & Norvig, "Artificial Intelligence: A Modern Approach", ch. 3

mod grid;
mod heuristic;
mod node;

pub use grid::{Grid, InvalidGridError, Move};
pub use heuristic::{manhattan_distance, misplaced_tiles, GoalPositions, Heuristic};
pub use node::{NodeArena, NodeId, SearchNode, SolutionPath};
