//! Board representation and move generation.

use std::error::Error;
use std::fmt;

/// A blank-tile move.
///
/// Directions name where the blank travels: `Up` swaps the blank with
/// the tile above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All moves, in the fixed generation order.
    ///
    /// The order is part of the search contract: neighbor generation is
    /// deterministic, so traversal order is too.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Row and column displacement of the blank.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    /// The move that undoes this one.
    pub fn opposite(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        };
        write!(f, "{name}")
    }
}

/// Rejection reasons for [`Grid::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidGridError {
    /// A cell held a value outside `0..=8`.
    ValueOutOfRange {
        row: usize,
        col: usize,
        value: u8,
    },
    /// A value appeared more than once.
    DuplicateValue { value: u8 },
}

impl fmt::Display for InvalidGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidGridError::ValueOutOfRange { row, col, value } => {
                write!(f, "cell ({row}, {col}) holds {value}, outside 0..=8")
            }
            InvalidGridError::DuplicateValue { value } => {
                write!(f, "value {value} appears more than once")
            }
        }
    }
}

impl Error for InvalidGridError {}

/// An 8-puzzle board: a 3x3 permutation of `0..=8`, where 0 is the blank.
///
/// Grids are immutable values. The constructor enforces the permutation
/// invariant and [`Grid::apply`] only ever swaps two cells, so every
/// `Grid` in existence holds each of `0..=8` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[[u8; 3]; 3]", into = "[[u8; 3]; 3]"))]
pub struct Grid {
    cells: [[u8; 3]; 3],
}

impl Grid {
    /// Builds a grid from raw cells, checking the permutation invariant.
    pub fn new(cells: [[u8; 3]; 3]) -> Result<Self, InvalidGridError> {
        let mut seen = [false; 9];
        for (row, cells_row) in cells.iter().enumerate() {
            for (col, &value) in cells_row.iter().enumerate() {
                if value > 8 {
                    return Err(InvalidGridError::ValueOutOfRange { row, col, value });
                }
                if seen[value as usize] {
                    return Err(InvalidGridError::DuplicateValue { value });
                }
                seen[value as usize] = true;
            }
        }
        Ok(Grid { cells })
    }

    /// The canonical solved board: `1..=8` in reading order, blank last.
    pub fn solved() -> Self {
        Grid {
            cells: [[1, 2, 3], [4, 5, 6], [7, 8, 0]],
        }
    }

    /// Raw cell values, row-major.
    pub fn cells(&self) -> &[[u8; 3]; 3] {
        &self.cells
    }

    /// Value at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// Position of the blank (the unique 0 cell).
    pub fn blank_position(&self) -> (usize, usize) {
        for row in 0..3 {
            for col in 0..3 {
                if self.cells[row][col] == 0 {
                    return (row, col);
                }
            }
        }
        unreachable!("constructor guarantees exactly one blank")
    }

    /// Slides one tile into the blank, or `None` if the move would leave
    /// the board.
    pub fn apply(&self, mv: Move) -> Option<Grid> {
        let (row, col) = self.blank_position();
        let (dr, dc) = mv.delta();
        let new_row = row as isize + dr;
        let new_col = col as isize + dc;
        if !(0..3).contains(&new_row) || !(0..3).contains(&new_col) {
            return None;
        }
        let mut cells = self.cells;
        cells[row][col] = cells[new_row as usize][new_col as usize];
        cells[new_row as usize][new_col as usize] = 0;
        Some(Grid { cells })
    }

    /// Every board one move away, paired with the move that produced it,
    /// in [`Move::ALL`] order.
    pub fn neighbors(&self) -> Vec<(Grid, Move)> {
        Move::ALL
            .iter()
            .filter_map(|&mv| self.apply(mv).map(|grid| (grid, mv)))
            .collect()
    }

    /// Whether `goal` is reachable from this board.
    ///
    /// Sliding moves preserve the inversion parity of the flattened
    /// non-blank sequence on an odd-width board, so `goal` is reachable
    /// exactly when both boards share that parity. For the canonical
    /// sorted goal this reduces to "even inversion count".
    pub fn is_solvable(&self, goal: &Grid) -> bool {
        inversions(self) % 2 == inversions(goal) % 2
    }
}

impl TryFrom<[[u8; 3]; 3]> for Grid {
    type Error = InvalidGridError;

    fn try_from(cells: [[u8; 3]; 3]) -> Result<Self, Self::Error> {
        Grid::new(cells)
    }
}

impl From<Grid> for [[u8; 3]; 3] {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells_row) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, &value) in cells_row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                if value == 0 {
                    write!(f, ".")?;
                } else {
                    write!(f, "{value}")?;
                }
            }
        }
        Ok(())
    }
}

/// Pairs of non-blank tiles out of relative order in reading order.
fn inversions(grid: &Grid) -> usize {
    let tiles: Vec<u8> = grid
        .cells
        .iter()
        .flatten()
        .copied()
        .filter(|&v| v != 0)
        .collect();
    (0..tiles.len())
        .map(|i| (i + 1..tiles.len()).filter(|&j| tiles[i] > tiles[j]).count())
        .sum()
}
