//! Mapping between flat cell indices and (row, column) coordinates.

use super::types::BoardSize;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based row, counted from the top.
    pub row: usize,
    /// Zero-based column, counted from the left.
    pub column: usize,
}

impl Position {
    /// Creates a position.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Converts a flat index back to a coordinate.
    ///
    /// Returns `None` if the index is not on a board of this size.
    #[instrument]
    pub fn from_index(index: usize, size: BoardSize) -> Option<Self> {
        if index >= size.cell_count() {
            return None;
        }
        Some(Self {
            row: index / size.columns(),
            column: index % size.columns(),
        })
    }

    /// Converts the coordinate to a flat row-major index.
    pub fn to_index(self, size: BoardSize) -> usize {
        self.row * size.columns() + self.column
    }

    /// Checks whether the coordinate lies on a board of this size.
    pub fn is_on(self, size: BoardSize) -> bool {
        self.row < size.rows() && self.column < size.columns()
    }

    /// Moves by a (row, column) delta, staying on the board.
    pub fn offset(self, d_row: isize, d_column: isize, size: BoardSize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let column = self.column.checked_add_signed(d_column)?;
        let moved = Self { row, column };
        moved.is_on(size).then_some(moved)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip_on_wide_board() {
        let size = BoardSize::new(3, 5).unwrap();
        let pos = Position::from_index(13, size).unwrap();
        assert_eq!(pos, Position::new(2, 3));
        assert_eq!(pos.to_index(size), 13);
    }

    #[test]
    fn test_from_index_off_board() {
        let size = BoardSize::new(3, 3).unwrap();
        assert_eq!(Position::from_index(9, size), None);
    }

    #[test]
    fn test_offset_clamps_to_board() {
        let size = BoardSize::new(2, 2).unwrap();
        let origin = Position::new(0, 0);
        assert_eq!(origin.offset(-1, 0, size), None);
        assert_eq!(origin.offset(1, 1, size), Some(Position::new(1, 1)));
        assert_eq!(origin.offset(0, 2, size), None);
    }
}
