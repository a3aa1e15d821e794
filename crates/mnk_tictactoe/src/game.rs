//! Explicit game context: board, settings, lines, and turn order.
//!
//! A [`Game`] is created on start, mutated by [`Game::place`],
//! [`Game::restart`], and [`Game::set_field`], and dropped when the UI
//! exits. The winner is never stored; it is derived from the board on
//! every query.

use super::lines::LineSet;
use super::settings::{Field, GameSettings, SizeInput};
use super::types::{Board, Cell, Mark};
use super::win::{WinResult, find_winner};
use tracing::{debug, info, instrument, warn};

/// Errors that can occur when placing a mark.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),

    /// The index is not on the board.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(usize),

    /// A winner exists or the board is full.
    #[display("Game is already over")]
    GameOver,

    /// Rows or columns are cleared, so there is no board.
    #[display("No board: rows and columns must both be set")]
    NoBoard,
}

impl std::error::Error for MoveError {}

/// Current status of the game, derived from the board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameStatus {
    /// A run of the required length exists.
    #[display("Winner: {}", _0.mark())]
    Won(WinResult),
    /// Board full, no winner.
    #[display("Draw!")]
    Draw,
    /// Moves remain.
    #[display("Next player: {}", next)]
    InProgress {
        /// Mark to be placed next.
        next: Mark,
    },
    /// Rows or columns cleared.
    #[display("Set rows and columns to start")]
    NoBoard,
}

impl GameStatus {
    /// Winning cells to highlight, if any.
    pub fn highlighted(&self) -> &[usize] {
        match self {
            GameStatus::Won(win) => win.cells(),
            _ => &[],
        }
    }
}

/// Board together with the lines generated for its size.
#[derive(Debug, Clone)]
struct Playfield {
    board: Board,
    lines: LineSet,
}

/// The single mutable state object for one game.
#[derive(Debug, Clone)]
pub struct Game {
    settings: GameSettings,
    playfield: Option<Playfield>,
    next: Mark,
}

impl Game {
    /// Creates a game with an empty board, X to move.
    #[instrument]
    pub fn new(settings: GameSettings) -> Self {
        info!("Creating game");
        let game = Self {
            playfield: Self::build_playfield(&settings),
            settings,
            next: Mark::X,
        };
        game.note_unwinnable();
        game
    }

    /// Logs when the win length exceeds every line on the board.
    fn note_unwinnable(&self) {
        let size = self.settings.board_size();
        let win_length = self.settings.win_length();
        if let (Some(size), Some(win_length)) = (size, win_length)
            && win_length > size.longest_side()
        {
            warn!(win_length, ?size, "Win length exceeds board");
        }
    }

    fn build_playfield(settings: &GameSettings) -> Option<Playfield> {
        let size = settings.board_size()?;
        Some(Playfield {
            board: Board::new(size),
            lines: LineSet::new(size),
        })
    }

    /// Current settings.
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// The board, if rows and columns are set.
    pub fn board(&self) -> Option<&Board> {
        self.playfield.as_ref().map(|p| &p.board)
    }

    /// The lines for the current board size.
    pub fn lines(&self) -> Option<&LineSet> {
        self.playfield.as_ref().map(|p| &p.lines)
    }

    /// Mark that moves next.
    pub fn next_mark(&self) -> Mark {
        self.next
    }

    /// Scans the board for a winner.
    pub fn winner(&self) -> Option<WinResult> {
        let playfield = self.playfield.as_ref()?;
        let win_length = self.settings.win_length()?;
        find_winner(&playfield.board, &playfield.lines, win_length)
    }

    /// True if a board exists and every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.board().is_some_and(Board::is_full)
    }

    /// Derives the current status.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        if self.playfield.is_none() {
            return GameStatus::NoBoard;
        }
        if let Some(win) = self.winner() {
            return GameStatus::Won(win);
        }
        if self.is_full() {
            return GameStatus::Draw;
        }
        GameStatus::InProgress { next: self.next }
    }

    /// Places the next mark at a flat index and passes the turn.
    ///
    /// # Errors
    ///
    /// Rejects occupied or off-board cells, moves after a win or on a full
    /// board, and moves while no board exists.
    #[instrument(skip(self), fields(player = %self.next))]
    pub fn place(&mut self, index: usize) -> Result<Mark, MoveError> {
        if self.winner().is_some() || self.is_full() {
            return Err(MoveError::GameOver);
        }
        let playfield = self.playfield.as_mut().ok_or(MoveError::NoBoard)?;

        match playfield.board.get(index) {
            None => return Err(MoveError::OutOfBounds(index)),
            Some(Cell::Occupied(_)) => return Err(MoveError::Occupied(index)),
            Some(Cell::Empty) => {}
        }

        let mark = self.next;
        playfield.board.set(index, Cell::Occupied(mark));
        self.next = mark.opponent();
        debug!(index, %mark, "Mark placed");
        Ok(mark)
    }

    /// Clears the board and gives the first move back to X.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        if let Some(playfield) = self.playfield.as_mut() {
            playfield.board = Board::new(playfield.board.size());
        }
        self.next = Mark::X;
    }

    /// Applies a text edit to one setting.
    ///
    /// Invalid text is ignored and `false` is returned. An accepted change
    /// to rows or columns regenerates the lines and clears the board; the
    /// turn order carries over.
    #[instrument(skip(self))]
    pub fn set_field(&mut self, field: Field, text: &str) -> bool {
        let Some(input) = SizeInput::parse(text) else {
            debug!("Ignoring invalid input");
            return false;
        };

        let changed = self.settings.set(field, input);
        if changed && field != Field::WinLength {
            self.playfield = Self::build_playfield(&self.settings);
            info!(
                size = ?self.settings.board_size(),
                lines = self.lines().map_or(0, LineSet::len),
                "Board resized"
            );
        }
        if changed {
            self.note_unwinnable();
        }
        true
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::default();
        assert_eq!(game.place(0), Ok(Mark::X));
        assert_eq!(game.place(1), Ok(Mark::O));
        assert_eq!(game.next_mark(), Mark::X);
    }

    #[test]
    fn test_status_text() {
        let mut game = Game::default();
        assert_eq!(game.status().to_string(), "Next player: X");
        for index in [0, 3, 1, 4, 2] {
            game.place(index).unwrap();
        }
        assert_eq!(game.status().to_string(), "Winner: X");
        assert_eq!(game.status().highlighted(), &[0, 1, 2]);
    }

    #[test]
    fn test_win_length_edit_keeps_board() {
        let mut game = Game::default();
        game.place(4).unwrap();
        assert!(game.set_field(Field::WinLength, "2"));
        assert_eq!(game.board().unwrap().get(4), Some(Cell::Occupied(Mark::X)));
    }

    #[test]
    fn test_oversized_edit_ignored() {
        let mut game = Game::default();
        game.place(4).unwrap();
        assert!(!game.set_field(Field::Columns, "4294967296"));
        assert!(!game.set_field(Field::Rows, "101"));
        assert_eq!(game.settings(), &GameSettings::default());
        assert_eq!(game.board().unwrap().get(4), Some(Cell::Occupied(Mark::X)));
    }

    #[test]
    fn test_resize_keeps_turn() {
        let mut game = Game::default();
        game.place(4).unwrap();
        assert!(game.set_field(Field::Rows, "4"));
        assert_eq!(game.next_mark(), Mark::O);
        let board = game.board().unwrap();
        assert!(board.cells().iter().all(|c| *c == Cell::Empty));
    }
}
