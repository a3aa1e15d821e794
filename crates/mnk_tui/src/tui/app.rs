//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use mnk_tictactoe::{Field, Game, GameSettings, Position};
use ratatui::layout::Rect;
use tracing::{debug, info, instrument};

use super::input::{cell_at, clamp_cursor, move_cursor};

/// What the event loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    options_open: bool,
    focused: Field,
    grid_area: Option<Rect>,
}

impl App {
    /// Creates the application with a fresh game.
    #[instrument]
    pub fn new(settings: GameSettings) -> Self {
        Self {
            game: Game::new(settings),
            cursor: Position::default(),
            options_open: false,
            focused: Field::default(),
            grid_area: None,
        }
    }

    /// The current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Cursor cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the options panel is shown.
    pub fn options_open(&self) -> bool {
        self.options_open
    }

    /// Options field receiving edits.
    pub fn focused(&self) -> Field {
        self.focused
    }

    /// Records where the grid was drawn, for mouse hit-testing.
    pub fn set_grid_area(&mut self, area: Option<Rect>) {
        self.grid_area = area;
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppAction::Quit;
        }

        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Esc if !self.options_open => return AppAction::Quit,
            KeyCode::Esc | KeyCode::Char('o') => {
                self.options_open = !self.options_open;
                debug!(open = self.options_open, "Toggled options panel");
                return AppAction::Continue;
            }
            KeyCode::Char('r') => {
                self.game.restart();
                return AppAction::Continue;
            }
            _ => {}
        }

        if self.options_open {
            self.handle_options_key(key.code);
        } else {
            self.handle_board_key(key.code);
        }
        AppAction::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(size) = self.game.board().map(|b| b.size()) {
                    self.place(self.cursor.to_index(size));
                }
            }
            _ => {
                if let Some(size) = self.game.board().map(|b| b.size()) {
                    self.cursor = move_cursor(self.cursor, code, size);
                }
            }
        }
    }

    fn handle_options_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Tab | KeyCode::Down => self.focused = self.focused.next(),
            KeyCode::BackTab | KeyCode::Up => self.focused = self.focused.previous(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let mut text = self.game.settings().get(self.focused).to_string();
                text.push(c);
                self.edit_focused(&text);
            }
            KeyCode::Backspace => {
                let mut text = self.game.settings().get(self.focused).to_string();
                text.pop();
                self.edit_focused(&text);
            }
            _ => {}
        }
    }

    fn edit_focused(&mut self, text: &str) {
        if self.game.set_field(self.focused, text) {
            if let Some(size) = self.game.board().map(|b| b.size()) {
                self.cursor = clamp_cursor(self.cursor, size);
            }
        } else {
            debug!(field = %self.focused, text, "Edit rejected");
        }
    }

    /// Handles a mouse event; a left click places on the clicked cell.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let (Some(grid), Some(size)) = (self.grid_area, self.game.board().map(|b| b.size())) else {
            return;
        };
        if let Some(index) = cell_at(grid, size, mouse.column, mouse.row) {
            if let Some(pos) = Position::from_index(index, size) {
                self.cursor = pos;
            }
            self.place(index);
        }
    }

    fn place(&mut self, index: usize) {
        match self.game.place(index) {
            Ok(mark) => info!(index, %mark, status = %self.game.status(), "Move played"),
            Err(e) => debug!(index, error = %e, "Move ignored"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mnk_tictactoe::{Cell, GameStatus, Mark, SizeInput};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(GameSettings::default())
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = app();
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        let board = app.game().board().unwrap();
        assert_eq!(board.get(4), Some(Cell::Occupied(Mark::X)));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), AppAction::Quit);
        assert_eq!(app.handle_key(key(KeyCode::Esc)), AppAction::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            AppAction::Quit
        );
    }

    #[test]
    fn test_esc_closes_options_first() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('o')));
        assert!(app.options_open());
        assert_eq!(app.handle_key(key(KeyCode::Esc)), AppAction::Continue);
        assert!(!app.options_open());
    }

    #[test]
    fn test_options_edit_resizes_board() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('o')));
        app.handle_key(key(KeyCode::Char('5')));
        assert_eq!(app.game().settings().get(Field::Rows), SizeInput::Value(35));

        app.handle_key(key(KeyCode::Backspace));
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.game().settings().get(Field::Rows), SizeInput::Empty);
        assert_eq!(app.game().status(), GameStatus::NoBoard);

        // "1" alone is below the minimum and is dropped.
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.game().settings().get(Field::Rows), SizeInput::Empty);

        app.handle_key(key(KeyCode::Char('4')));
        assert_eq!(app.game().board().unwrap().cells().len(), 12);
    }

    #[test]
    fn test_held_digit_stops_at_maximum() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('o')));
        app.handle_key(key(KeyCode::Tab));
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Char('9')));
        }
        let columns = app.game().settings().get(Field::Columns);
        assert_eq!(columns, SizeInput::Value(39));
        assert_eq!(app.game().board().unwrap().cells().len(), 3 * 39);
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('o')));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focused(), Field::Columns);
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.focused(), Field::Rows);
    }

    #[test]
    fn test_cursor_clamped_on_shrink() {
        let mut app = app();
        for _ in 0..2 {
            app.handle_key(key(KeyCode::Down));
            app.handle_key(key(KeyCode::Right));
        }
        assert_eq!(app.cursor(), Position::new(2, 2));
        app.handle_key(key(KeyCode::Char('o')));
        app.handle_key(key(KeyCode::Backspace));
        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.cursor(), Position::new(1, 2));
    }

    #[test]
    fn test_mouse_click_places_mark() {
        let mut app = app();
        app.set_grid_area(Some(Rect::new(0, 0, 12, 3)));
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 9,
            row: 2,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click);
        let board = app.game().board().unwrap();
        assert_eq!(board.get(8), Some(Cell::Occupied(Mark::X)));
        assert_eq!(app.cursor(), Position::new(2, 2));
    }

    #[test]
    fn test_restart_key() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.game().next_mark(), Mark::X);
        let board = app.game().board().unwrap();
        assert!(board.cells().iter().all(|c| *c == Cell::Empty));
    }
}
