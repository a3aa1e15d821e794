//! Win detection over generated lines.

use super::lines::{Line, LineSet};
use super::types::{Board, Cell, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A completed run of `win_length` same-mark cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct WinResult {
    /// The winning mark.
    mark: Mark,
    /// Winning cell indices in line order.
    cells: Vec<usize>,
}

impl WinResult {
    /// True if `index` is one of the winning cells.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Scans every line for `win_length` consecutive cells with the same mark.
///
/// Lines are scanned in generation order and the first completed streak is
/// returned. Returns `None` when no streak reaches `win_length`, when
/// `win_length` is zero, or when the lines were generated for a different
/// board size.
#[instrument(skip(board, lines), fields(size = ?board.size()))]
pub fn find_winner(board: &Board, lines: &LineSet, win_length: usize) -> Option<WinResult> {
    if win_length == 0 {
        return None;
    }
    if lines.size() != board.size() {
        warn!(
            lines_size = ?lines.size(),
            "Line set does not match board size, ignoring"
        );
        return None;
    }

    let result = lines
        .winnable(win_length)
        .find_map(|line| scan_line(board, line, win_length));

    if let Some(win) = &result {
        debug!(mark = %win.mark, cells = ?win.cells, "Winner found");
    }
    result
}

/// Tracks the current streak along one line.
fn scan_line(board: &Board, line: &Line, win_length: usize) -> Option<WinResult> {
    let mut streak: Vec<usize> = Vec::with_capacity(win_length);
    let mut streak_mark: Option<Mark> = None;

    for &index in line.cells() {
        match board.get(index).unwrap_or(Cell::Empty) {
            Cell::Empty => {
                streak.clear();
                streak_mark = None;
            }
            Cell::Occupied(mark) => {
                if streak_mark != Some(mark) {
                    streak.clear();
                    streak_mark = Some(mark);
                }
                streak.push(index);
                if streak.len() == win_length {
                    return Some(WinResult {
                        mark,
                        cells: streak,
                    });
                }
            }
        }
    }

    None
}
