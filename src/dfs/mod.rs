//! Depth-bounded depth-first search over the 8-puzzle.
//!
//! An explicit-stack DFS that refuses to expand nodes at the depth
//! bound. One visited set spans the whole run and is never unmarked, so
//! termination is guaranteed at the price of completeness within the
//! bound: a board consumed by one branch is closed to every other.
//!
//! # References
//!
//! - Russell & Norvig, "Artificial Intelligence: A Modern Approach", ch. 3

mod config;
mod runner;

pub use config::DfsConfig;
pub use runner::{DfsResult, DfsRunner};
