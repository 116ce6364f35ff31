//! Admissible distance heuristics.

use super::grid::Grid;

/// Precomputed value-to-cell table for a goal board.
///
/// Built once per search so per-node Manhattan evaluation is a table
/// lookup instead of a board scan.
#[derive(Debug, Clone, Copy)]
pub struct GoalPositions {
    goal: Grid,
    by_value: [(u8, u8); 9],
}

impl GoalPositions {
    pub fn new(goal: &Grid) -> Self {
        let mut by_value = [(0u8, 0u8); 9];
        for row in 0..3 {
            for col in 0..3 {
                by_value[goal.get(row, col) as usize] = (row as u8, col as u8);
            }
        }
        GoalPositions {
            goal: *goal,
            by_value,
        }
    }

    /// The goal board this table was built from.
    pub fn goal(&self) -> &Grid {
        &self.goal
    }

    /// Goal cell of `value`.
    pub fn position_of(&self, value: u8) -> (usize, usize) {
        let (row, col) = self.by_value[value as usize];
        (row as usize, col as usize)
    }
}

/// Number of non-blank tiles off their goal cell.
///
/// Admissible: every misplaced tile needs at least one move.
pub fn misplaced_tiles(grid: &Grid, goal: &Grid) -> u32 {
    let mut count = 0;
    for row in 0..3 {
        for col in 0..3 {
            let value = grid.get(row, col);
            if value != 0 && value != goal.get(row, col) {
                count += 1;
            }
        }
    }
    count
}

/// Sum over non-blank tiles of the row-plus-column distance to their
/// goal cell.
///
/// Admissible, since one move slides one tile one cell, and never below
/// [`misplaced_tiles`], so it prunes at least as well.
pub fn manhattan_distance(grid: &Grid, goal: &GoalPositions) -> u32 {
    let mut total = 0u32;
    for row in 0..3 {
        for col in 0..3 {
            let value = grid.get(row, col);
            if value == 0 {
                continue;
            }
            let (goal_row, goal_col) = goal.position_of(value);
            total += (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32;
        }
    }
    total
}

/// Heuristic selector for the informed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// Misplaced-tile count. Weak but cheap.
    Misplaced,
    /// Manhattan distance. Dominates `Misplaced`; the usual choice.
    Manhattan,
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::Manhattan
    }
}

impl Heuristic {
    /// Evaluates this heuristic for `grid` against the goal table.
    pub fn evaluate(self, grid: &Grid, goal: &GoalPositions) -> u32 {
        match self {
            Heuristic::Misplaced => misplaced_tiles(grid, goal.goal()),
            Heuristic::Manhattan => manhattan_distance(grid, goal),
        }
    }
}
