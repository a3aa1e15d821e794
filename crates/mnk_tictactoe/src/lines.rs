//! Line generation for arbitrary R×C boards.
//!
//! A [`Line`] is a *maximal* straight run of cells, i.e. a whole row,
//! column, or diagonal, not a K-length window. The win scanner slides its
//! streak over each line, so the line set only has to contain every
//! maximal line once for every possible K-run to be found.
//!
//! Lines are produced in a fixed order: verticals, horizontals, falling
//! diagonals, rising diagonals. The order decides which win is reported
//! when several complete on the same move.

use super::position::Position;
use super::types::BoardSize;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Direction a line runs in, top to bottom and left to right where possible.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
    strum::EnumIter,
)]
pub enum Direction {
    /// Down a column (index step `C`).
    Vertical,
    /// Along a row (index step `1`).
    Horizontal,
    /// Down and to the left (index step `C - 1`).
    Falling,
    /// Down and to the right (index step `C + 1`).
    ///
    /// The name is only a label for the fourth group in line order. On
    /// screen this is the `\` diagonal, and [`Direction::Falling`] is `/`.
    Rising,
}

impl Direction {
    /// (row, column) delta of one step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Vertical => (1, 0),
            Direction::Horizontal => (0, 1),
            Direction::Falling => (1, -1),
            Direction::Rising => (1, 1),
        }
    }
}

/// One maximal straight line of cell indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Line {
    /// Direction the line runs in.
    direction: Direction,
    /// Flat cell indices in line order.
    cells: Vec<usize>,
}

impl Line {
    /// Number of cells on the line.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the line has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Walks from `start` in `direction` until the next step leaves the board.
    fn walk(start: Position, direction: Direction, size: BoardSize) -> Self {
        let (d_row, d_column) = direction.delta();
        let mut cells = Vec::new();
        let mut cursor = Some(start);
        while let Some(pos) = cursor {
            cells.push(pos.to_index(size));
            cursor = pos.offset(d_row, d_column, size);
        }
        Self { direction, cells }
    }
}

/// Generates every maximal line on a board of the given size.
///
/// Rows and columns are always emitted. Diagonals are seeded from the board
/// perimeter so that each one is produced exactly once, including the
/// corner-cut diagonals of non-square boards; single-cell diagonals are
/// skipped since their cell already lies on a row and a column.
#[instrument]
pub fn generate_lines(size: BoardSize) -> Vec<Line> {
    let rows = size.rows();
    let columns = size.columns();
    let mut lines = Vec::with_capacity(2 * (rows + columns) + rows + columns);

    for column in 0..columns {
        lines.push(Line::walk(
            Position::new(0, column),
            Direction::Vertical,
            size,
        ));
    }
    for row in 0..rows {
        lines.push(Line::walk(
            Position::new(row, 0),
            Direction::Horizontal,
            size,
        ));
    }

    // Rows strictly between the first and last.
    let side_rows = 1..rows.saturating_sub(1);

    // Falling: top row except top-left, then right column except its ends.
    let falling_starts = (1..columns)
        .map(|column| Position::new(0, column))
        .chain(side_rows.clone().map(|row| Position::new(row, columns - 1)));
    lines.extend(
        falling_starts
            .map(|start| Line::walk(start, Direction::Falling, size))
            .filter(|line| line.len() >= 2),
    );

    // Rising: top row except top-right, then left column except its ends.
    let rising_starts = (0..columns.saturating_sub(1))
        .map(|column| Position::new(0, column))
        .chain(side_rows.map(|row| Position::new(row, 0)));
    lines.extend(
        rising_starts
            .map(|start| Line::walk(start, Direction::Rising, size))
            .filter(|line| line.len() >= 2),
    );

    debug!(count = lines.len(), "Generated lines");
    lines
}

/// All lines for one board size.
///
/// Built once per dimension change and discarded when the size changes,
/// so a set never outlives the board it was generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSet {
    size: BoardSize,
    lines: Vec<Line>,
}

impl LineSet {
    /// Generates the line set for a board size.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            lines: generate_lines(size),
        }
    }

    /// Board size the lines were generated for.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// All lines in generation order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if there are no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines long enough to hold a run of `win_length` cells.
    pub fn winnable(&self, win_length: usize) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(move |line| line.len() >= win_length)
    }
}
