//! Bounded-DFS execution loop.

use std::collections::HashSet;

use crate::puzzle::{manhattan_distance, GoalPositions, Grid, NodeArena, SolutionPath};

use super::config::DfsConfig;

/// Result of a bounded-DFS run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DfsResult {
    /// First path found within the depth bound, or `None`. Not
    /// necessarily shortest: expansion order is pure stack order.
    pub path: Option<SolutionPath>,

    /// Expansion events (pops below the depth bound).
    pub expanded: usize,

    /// Nodes allocated, root included.
    pub generated: usize,

    /// Pops discarded at the depth bound. Nonzero means the bound was
    /// binding somewhere in the explored region.
    pub cutoff_hits: usize,
}

/// Executes depth-bounded DFS over the 8-puzzle state space.
///
/// One visited set spans the whole run and is never unmarked: a board
/// expanded once is closed to every later route, even a shorter one.
/// That guarantees termination at the price of completeness within the
/// bound, so a `None` path means "not found under this policy", not
/// "unreachable".
pub struct DfsRunner;

impl DfsRunner {
    /// Searches from `start` to `goal` under `config.max_depth`.
    ///
    /// Neighbors are generated in the fixed move order and pushed as
    /// generated, so the last-generated neighbor is explored first.
    /// Node heuristic values are recorded for diagnostics only and never
    /// affect the traversal.
    pub fn run(start: &Grid, goal: &Grid, config: &DfsConfig) -> DfsResult {
        let table = GoalPositions::new(goal);
        let mut arena = NodeArena::new();
        let mut visited: HashSet<Grid> = HashSet::new();
        let mut expanded = 0usize;
        let mut cutoff_hits = 0usize;

        let root = arena.insert_root(*start, manhattan_distance(start, &table));
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            let grid = arena.get(id).grid;
            let depth = arena.get(id).depth;

            if grid == *goal {
                return DfsResult {
                    path: Some(arena.path_to(id)),
                    expanded,
                    generated: arena.len(),
                    cutoff_hits,
                };
            }

            if depth >= config.max_depth {
                cutoff_hits += 1;
                continue;
            }

            visited.insert(grid);
            expanded += 1;

            for (next, step) in grid.neighbors() {
                if visited.contains(&next) {
                    continue;
                }
                let heuristic = manhattan_distance(&next, &table);
                let child = arena.insert_child(id, next, step, heuristic);
                stack.push(child);
            }
        }

        DfsResult {
            path: None,
            expanded,
            generated: arena.len(),
            cutoff_hits,
        }
    }
}
