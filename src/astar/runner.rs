//! A* execution loop.

use std::collections::HashSet;

use crate::puzzle::{GoalPositions, Grid, Heuristic, NodeArena, SolutionPath};

use super::frontier::OpenList;

/// Configuration for the A* search.
///
/// # Examples
///
/// ```
/// use u_search::astar::AstarConfig;
/// use u_search::puzzle::Heuristic;
///
/// let config = AstarConfig::default().with_heuristic(Heuristic::Misplaced);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AstarConfig {
    /// Heuristic that orders the frontier.
    pub heuristic: Heuristic,
}

impl Default for AstarConfig {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::Manhattan,
        }
    }
}

impl AstarConfig {
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }
}

/// Result of an A* run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AstarResult {
    /// Shortest move sequence to the goal, or `None` when the goal is
    /// not reachable from the start.
    pub path: Option<SolutionPath>,

    /// Distinct grids expanded.
    pub expanded: usize,

    /// Nodes allocated, root included.
    pub generated: usize,

    /// Largest open-list size reached.
    pub max_frontier: usize,
}

/// Executes A* over the 8-puzzle state space.
///
/// The frontier is ordered by `depth + heuristic`; equal priorities pop
/// in insertion order, so runs are fully deterministic. Each distinct
/// grid is expanded at most once. Both built-in heuristics are
/// admissible, so the first goal pop yields a shortest path.
pub struct AstarRunner;

impl AstarRunner {
    /// Searches from `start` to `goal`.
    ///
    /// A `None` path is the normal no-route outcome: an unsolvable
    /// pairing terminates after exhausting the reachable component.
    pub fn run(start: &Grid, goal: &Grid, config: &AstarConfig) -> AstarResult {
        let table = GoalPositions::new(goal);
        let mut arena = NodeArena::new();
        let mut open = OpenList::new();
        let mut closed: HashSet<Grid> = HashSet::new();

        let root = arena.insert_root(*start, config.heuristic.evaluate(start, &table));
        open.push(arena.get(root).priority(), root);

        while let Some(id) = open.pop() {
            let grid = arena.get(id).grid;

            if grid == *goal {
                return AstarResult {
                    path: Some(arena.path_to(id)),
                    expanded: closed.len(),
                    generated: arena.len(),
                    max_frontier: open.high_water(),
                };
            }

            // Stale duplicate of a grid expanded via an earlier pop.
            if !closed.insert(grid) {
                continue;
            }

            for (next, step) in grid.neighbors() {
                if closed.contains(&next) {
                    continue;
                }
                let heuristic = config.heuristic.evaluate(&next, &table);
                let child = arena.insert_child(id, next, step, heuristic);
                open.push(arena.get(child).priority(), child);
            }
        }

        AstarResult {
            path: None,
            expanded: closed.len(),
            generated: arena.len(),
            max_frontier: open.high_water(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Move;
    use proptest::prelude::*;
    use std::collections::{HashMap, VecDeque};

    fn grid(cells: [[u8; 3]; 3]) -> Grid {
        Grid::new(cells).unwrap()
    }

    /// Brute-force BFS distance, the independent optimality oracle.
    fn bfs_distance(start: &Grid, goal: &Grid) -> Option<u32> {
        let mut dist: HashMap<Grid, u32> = HashMap::new();
        let mut queue = VecDeque::new();
        dist.insert(*start, 0);
        queue.push_back(*start);
        while let Some(g) = queue.pop_front() {
            let d = dist[&g];
            if g == *goal {
                return Some(d);
            }
            for (next, _) in g.neighbors() {
                if !dist.contains_key(&next) {
                    dist.insert(next, d + 1);
                    queue.push_back(next);
                }
            }
        }
        None
    }

    /// Replays `path` from its start and checks every recorded board.
    fn assert_valid_path(path: &SolutionPath, start: &Grid, goal: &Grid) {
        assert_eq!(path.start(), start);
        let mut g = *start;
        for &(mv, expected) in path.steps() {
            g = g.apply(mv).expect("path contains an illegal move");
            assert_eq!(g, expected, "recorded board mismatch after {mv}");
        }
        assert_eq!(&g, goal, "path does not end at the goal");
    }

    #[test]
    fn test_start_equals_goal() {
        let result = AstarRunner::run(&Grid::solved(), &Grid::solved(), &AstarConfig::default());
        let path = result.path.expect("trivial instance must solve");
        assert!(path.is_empty());
        assert_eq!(result.generated, 1);
        assert_eq!(result.expanded, 0);
        assert_eq!(result.max_frontier, 1);
    }

    #[test]
    fn test_single_move_instance() {
        let start = grid([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        let result = AstarRunner::run(&start, &Grid::solved(), &AstarConfig::default());
        let path = result.path.expect("one slide away");
        assert_eq!(path.moves(), vec![Move::Right]);
        assert_valid_path(&path, &start, &Grid::solved());
    }

    #[test]
    fn test_three_move_scramble_exact_path() {
        // Scramble the goal by blank left, up, left. The way back
        // reverses it, and for scrambles this short the shortest path is
        // unique: two distinct routes of equal length would close a
        // cycle shorter than the puzzle graph allows.
        let goal = Grid::solved();
        let start = goal
            .apply(Move::Left)
            .and_then(|g| g.apply(Move::Up))
            .and_then(|g| g.apply(Move::Left))
            .expect("scramble stays on the board");

        let result = AstarRunner::run(&start, &goal, &AstarConfig::default());
        let path = result.path.expect("three slides away");
        assert_eq!(path.moves(), vec![Move::Right, Move::Down, Move::Right]);
        assert_valid_path(&path, &start, &goal);
    }

    #[test]
    fn test_both_heuristics_return_shortest_path() {
        let start = grid([[1, 2, 3], [5, 6, 0], [7, 8, 4]]);
        let goal = Grid::solved();
        let shortest = bfs_distance(&start, &goal).expect("instance is solvable");

        for heuristic in [Heuristic::Misplaced, Heuristic::Manhattan] {
            let config = AstarConfig::default().with_heuristic(heuristic);
            let result = AstarRunner::run(&start, &goal, &config);
            let path = result.path.expect("instance is solvable");
            assert_eq!(
                path.len() as u32,
                shortest,
                "{heuristic:?} returned a non-shortest path"
            );
            assert_valid_path(&path, &start, &goal);
            assert!(result.expanded <= result.generated);
            assert!(result.max_frontier >= 1);
        }
    }

    #[test]
    fn test_manhattan_expands_no_more_than_misplaced() {
        let start = grid([[1, 2, 3], [5, 6, 0], [7, 8, 4]]);
        let goal = Grid::solved();
        let weak = AstarRunner::run(
            &start,
            &goal,
            &AstarConfig::default().with_heuristic(Heuristic::Misplaced),
        );
        let strong = AstarRunner::run(
            &start,
            &goal,
            &AstarConfig::default().with_heuristic(Heuristic::Manhattan),
        );
        assert!(
            strong.expanded <= weak.expanded,
            "dominant heuristic expanded more nodes: {} > {}",
            strong.expanded,
            weak.expanded
        );
    }

    #[test]
    fn test_unsolvable_returns_none() {
        let start = grid([[2, 1, 3], [4, 5, 6], [7, 8, 0]]);
        let goal = Grid::solved();
        assert!(!start.is_solvable(&goal));

        let result = AstarRunner::run(&start, &goal, &AstarConfig::default());
        assert!(result.path.is_none());
        // The reachable component is one parity class: 9!/2 boards, all
        // expanded before the frontier drains.
        assert_eq!(result.expanded, 181_440);
    }

    fn arb_walk() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(0..4usize, 0..12)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_path_length_matches_bfs(walk in arb_walk()) {
            let goal = Grid::solved();
            let mut start = goal;
            for idx in walk {
                if let Some(next) = start.apply(Move::ALL[idx]) {
                    start = next;
                }
            }

            let shortest = bfs_distance(&start, &goal).expect("walk stays reachable");
            let result = AstarRunner::run(&start, &goal, &AstarConfig::default());
            let path = result.path.expect("walk stays reachable");
            prop_assert_eq!(path.len() as u32, shortest);
        }
    }
}
