//! Stateless UI rendering for the board, options panel, and status line.

use mnk_tictactoe::{Board, Cell, Field, GameStatus, Mark, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

use super::app::App;
use super::input::CELL_WIDTH;

const OPTIONS_WIDTH: u16 = 26;
const HELP: &str = "←↑↓→ move | Enter/click: place | r: restart | o: options | q: quit";

/// Renders the whole screen. Returns the area the grid cells occupy, if a
/// board was drawn.
pub fn draw(frame: &mut Frame, app: &App) -> Option<Rect> {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Board + options
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let status = app.game().status();

    let board_area = if app.options_open() {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(OPTIONS_WIDTH)])
            .split(chunks[1]);
        draw_options(frame, body[1], app);
        body[0]
    } else {
        chunks[1]
    };

    let cursor = app.cursor();
    let grid = app
        .game()
        .board()
        .map(|board| draw_board(frame, board_area, board, &status, cursor));

    draw_status(frame, chunks[2], &status);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    grid
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    status: &GameStatus,
    cursor: Position,
) -> Rect {
    let size = board.size();
    let columns = u16::try_from(size.columns()).unwrap_or(u16::MAX);
    let rows = u16::try_from(size.rows()).unwrap_or(u16::MAX);
    let width = columns.saturating_mul(CELL_WIDTH).saturating_add(2);
    let height = rows.saturating_add(2);
    let outer = center_rect(area, width, height);

    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(outer);

    let highlighted = status.highlighted();
    let lines: Vec<Line> = board
        .cells()
        .chunks(size.columns())
        .enumerate()
        .map(|(row, cells)| {
            let spans = cells.iter().enumerate().flat_map(|(column, cell)| {
                let index = Position::new(row, column).to_index(size);
                let style = cell_style(
                    *cell,
                    highlighted.contains(&index),
                    cursor == Position::new(row, column),
                );
                [Span::styled(cell_symbol(*cell), style), Span::raw(" ")]
            });
            Line::from(spans.collect::<Vec<_>>())
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), outer);
    inner
}

fn cell_symbol(cell: Cell) -> &'static str {
    match cell {
        Cell::Empty => " · ",
        Cell::Occupied(Mark::X) => " X ",
        Cell::Occupied(Mark::O) => " O ",
    }
}

fn cell_style(cell: Cell, winning: bool, under_cursor: bool) -> Style {
    let base = match cell {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::Occupied(Mark::X) => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        Cell::Occupied(Mark::O) => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    };

    if winning {
        base.bg(Color::Red).fg(Color::White)
    } else if under_cursor {
        base.bg(Color::White).fg(Color::Black)
    } else {
        base
    }
}

fn draw_status(frame: &mut Frame, area: Rect, status: &GameStatus) {
    let color = match status {
        GameStatus::Won(_) => Color::Green,
        GameStatus::Draw => Color::Magenta,
        GameStatus::InProgress { .. } | GameStatus::NoBoard => Color::Yellow,
    };
    let status_text = Paragraph::new(status.to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, area);
}

fn draw_options(frame: &mut Frame, area: Rect, app: &App) {
    let settings = app.game().settings();
    let mut lines: Vec<Line> = Field::iter()
        .map(|field| {
            let label = format!("{field}:");
            let text = format!("{label:<11} [{:>3}]", settings.get(field).to_string());
            if field == app.focused() {
                Line::from(Span::styled(
                    format!("> {text}"),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("  {text}"))
            }
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Tab: next  ⌫: delete",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default().borders(Borders::ALL).title("Options");
    let panel = Paragraph::new(lines).block(block);
    frame.render_widget(panel, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
