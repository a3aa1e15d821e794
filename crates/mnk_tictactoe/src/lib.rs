//! Configurable (m,n,k) tic-tac-toe game logic.
//!
//! Players alternate placing marks on an R×C board and win by lining up K
//! consecutive marks in a row, column, or diagonal.
//!
//! # Architecture
//!
//! - **Lines**: every maximal row, column, and diagonal for a board size
//! - **Win**: scans the lines for a run of K same-mark cells
//! - **Game**: the explicit mutable context (board, settings, turn order)
//!
//! # Example
//!
//! ```
//! use mnk_tictactoe::{Game, GameSettings, GameStatus, Mark};
//!
//! let settings = GameSettings::new(3, 4, 3).unwrap();
//! let mut game = Game::new(settings);
//! for index in [0, 4, 1, 5, 2] {
//!     game.place(index).unwrap();
//! }
//! match game.status() {
//!     GameStatus::Won(win) => {
//!         assert_eq!(*win.mark(), Mark::X);
//!         assert_eq!(win.cells(), &vec![0, 1, 2]);
//!     }
//!     other => panic!("unexpected status: {other}"),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod lines;
mod position;
mod settings;
mod types;
mod win;

pub use game::{Game, GameStatus, MoveError};
pub use lines::{Direction, Line, LineSet, generate_lines};
pub use position::Position;
pub use settings::{Field, GameSettings, MAX_SETTING, MIN_SETTING, SizeInput};
pub use types::{Board, BoardSize, Cell, Mark};
pub use win::{WinResult, find_winner};
