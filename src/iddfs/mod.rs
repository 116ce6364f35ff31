//! Iterative-deepening depth-first search (IDDFS) reachability.
//!
//! Repeats depth-limited DFS probes with growing limits, giving the
//! shallowest-first discovery of BFS at the memory cost of DFS. Only the
//! vertices on the current recursion path are marked visited, so
//! alternate routes may revisit a vertex within the same probe; each
//! probe is therefore exact, and re-exploration across probes is the
//! price paid.
//!
//! # References
//!
//! - Korf (1985), "Depth-First Iterative-Deepening: An Optimal
//!   Admissible Tree Search"

mod graph;
mod runner;

pub use graph::DiGraph;
pub use runner::{IddfsResult, IddfsRunner};
