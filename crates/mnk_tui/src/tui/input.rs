//! Cursor movement and mouse hit-testing for the board grid.

use crossterm::event::KeyCode;
use mnk_tictactoe::{BoardSize, Position};
use ratatui::layout::Rect;

/// Terminal columns taken by one cell, including its separator.
pub const CELL_WIDTH: u16 = 4;

/// Moves the cursor with arrow keys or `hjkl`, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode, size: BoardSize) -> Position {
    let (d_row, d_column) = match key {
        KeyCode::Up | KeyCode::Char('k') => (-1, 0),
        KeyCode::Down | KeyCode::Char('j') => (1, 0),
        KeyCode::Left | KeyCode::Char('h') => (0, -1),
        KeyCode::Right | KeyCode::Char('l') => (0, 1),
        _ => return cursor,
    };
    cursor.offset(d_row, d_column, size).unwrap_or(cursor)
}

/// Keeps a cursor on the board after a resize.
pub fn clamp_cursor(cursor: Position, size: BoardSize) -> Position {
    Position::new(
        cursor.row.min(size.rows() - 1),
        cursor.column.min(size.columns() - 1),
    )
}

/// Maps a terminal cell inside the rendered grid to a board index.
///
/// `grid` is the inner area the cells were drawn into, one terminal row per
/// board row and [`CELL_WIDTH`] columns per board column.
pub fn cell_at(grid: Rect, size: BoardSize, column: u16, row: u16) -> Option<usize> {
    if column < grid.x || row < grid.y || column >= grid.right() || row >= grid.bottom() {
        return None;
    }
    let pos = Position::new(
        usize::from(row - grid.y),
        usize::from((column - grid.x) / CELL_WIDTH),
    );
    pos.is_on(size).then(|| pos.to_index(size))
}
