//! Iterative-deepening execution loop.

use std::collections::HashSet;
use std::hash::Hash;

use super::graph::DiGraph;

/// Result of an IDDFS reachability run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IddfsResult {
    /// Whether the target was reached within the depth cap.
    pub reachable: bool,

    /// First depth limit that reached the target. Limits are tried in
    /// increasing order, so this is the shortest path length in edges;
    /// `None` when unreachable within the cap.
    pub found_depth: Option<usize>,
}

/// Executes iterative-deepening DFS reachability over a [`DiGraph`].
///
/// Limits `0..=max_depth` are probed in order, each with a fresh visited
/// set. Within one probe the visited set is path-scoped: a vertex is
/// marked on the way down and unmarked on backtrack, so an alternate
/// route may revisit it with a different remaining budget. Unlike the
/// run-global policy of the puzzle DFS, this keeps every probe exact, at
/// the cost of re-exploration.
pub struct IddfsRunner;

impl IddfsRunner {
    /// Reports whether `target` is reachable from `src` in at most
    /// `max_depth` edges.
    pub fn run<V: Eq + Hash>(
        graph: &DiGraph<V>,
        src: &V,
        target: &V,
        max_depth: usize,
    ) -> IddfsResult {
        for limit in 0..=max_depth {
            let mut visited = HashSet::new();
            if depth_limited(graph, src, target, limit, &mut visited) {
                return IddfsResult {
                    reachable: true,
                    found_depth: Some(limit),
                };
            }
        }
        IddfsResult {
            reachable: false,
            found_depth: None,
        }
    }
}

/// One depth-limited probe. `visited` holds the vertices on the current
/// recursion path only.
fn depth_limited<'g, V: Eq + Hash>(
    graph: &'g DiGraph<V>,
    src: &'g V,
    target: &V,
    limit: usize,
    visited: &mut HashSet<&'g V>,
) -> bool {
    // Equality is tested before the budget, so a zero limit still finds
    // src == target.
    if src == target {
        return true;
    }
    if limit == 0 {
        return false;
    }

    visited.insert(src);
    for next in graph.neighbors(src) {
        if !visited.contains(next) && depth_limited(graph, next, target, limit - 1, visited) {
            return true;
        }
    }
    visited.remove(src);
    false
}
