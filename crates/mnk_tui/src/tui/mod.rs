//! Terminal UI for the game.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mnk_tictactoe::GameSettings;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

use app::{App, AppAction};

/// Runs the terminal UI until the player quits.
///
/// The terminal is restored before any error is returned.
#[instrument]
pub fn run_tui(settings: GameSettings) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(settings);
    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "UI loop error");
    }
    info!("Terminal UI closed");
    res
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let mut grid = None;
        terminal.draw(|f| grid = ui::draw(f, app))?;
        app.set_grid_area(grid);

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            // Skip key release events (crossterm fires both press and release).
            Event::Key(key) if key.kind == KeyEventKind::Release => {}
            Event::Key(key) => {
                if app.handle_key(key) == AppAction::Quit {
                    info!("User quit");
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
}
