//! Core domain types for (m,n,k) tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark placed by a player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// Board dimensions. Both sides are at least one cell and the cell count
/// fits in a `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSize {
    rows: usize,
    columns: usize,
}

impl BoardSize {
    /// Creates a board size, or `None` if either side is zero or the cell
    /// count overflows.
    #[instrument]
    pub fn new(rows: usize, columns: usize) -> Option<Self> {
        if rows == 0 || columns == 0 {
            return None;
        }
        rows.checked_mul(columns)?;
        Some(Self { rows, columns })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Longest straight line that fits on the board.
    pub fn longest_side(&self) -> usize {
        self.rows.max(self.columns)
    }
}

/// Flat row-major board: cell `r * columns + c`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an all-empty board.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }

    /// Builds a board from existing cells, or `None` if the length does not
    /// match the size.
    pub fn from_cells(size: BoardSize, cells: Vec<Cell>) -> Option<Self> {
        (cells.len() == size.cell_count()).then_some(Self { size, cells })
    }

    /// Board dimensions.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Gets the cell at a flat index.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Writes a cell. Returns `false` if the index is off the board.
    pub fn set(&mut self, index: usize, cell: Cell) -> bool {
        match self.cells.get_mut(index) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Checks if the cell at `index` is on the board and empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(self.size.columns).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(Mark::X) => 'X',
                    Cell::Occupied(Mark::O) => 'O',
                };
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sized_board_rejected() {
        assert!(BoardSize::new(0, 3).is_none());
        assert!(BoardSize::new(3, 0).is_none());
        assert!(BoardSize::new(1, 1).is_some());
    }

    #[test]
    fn test_overflowing_size_rejected() {
        assert!(BoardSize::new(1 << 32, 1 << 32).is_none());
        assert!(BoardSize::new(usize::MAX, 2).is_none());
        assert_eq!(
            BoardSize::new(usize::MAX, 1).map(|s| s.cell_count()),
            Some(usize::MAX)
        );
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(BoardSize::new(2, 4).unwrap());
        assert_eq!(board.cells().len(), 8);
        assert!(board.cells().iter().all(|c| *c == Cell::Empty));
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::new(BoardSize::new(2, 2).unwrap());
        assert!(!board.set(4, Cell::Occupied(Mark::X)));
        assert!(board.set(3, Cell::Occupied(Mark::X)));
        assert!(!board.is_empty(3));
    }

    #[test]
    fn test_display_rows() {
        let size = BoardSize::new(2, 3).unwrap();
        let mut board = Board::new(size);
        board.set(0, Cell::Occupied(Mark::X));
        board.set(5, Cell::Occupied(Mark::O));
        assert_eq!(board.to_string(), "X..\n..O");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }
}
