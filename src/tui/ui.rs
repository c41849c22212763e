//! Frame layout and drawing for the terminal client.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::games::tictactoe::Position;

use super::app::{App, Focus, Intent};
use super::renderers::{CellRenderer, HistoryList, ListRenderer, MarkCells};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Screen regions from one draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panes {
    /// Title row.
    pub title: Rect,
    /// Board cells, index order.
    pub cells: [Rect; 9],
    /// Outer board block.
    pub board: Rect,
    /// Status block.
    pub status: Rect,
    /// History list block.
    pub history: Rect,
    /// Key help row.
    pub help: Rect,
}

impl Panes {
    /// Splits the frame into panes.
    pub fn compute(area: Rect) -> Self {
        let [title, body, help] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(BOARD_HEIGHT),
                Constraint::Length(1),
            ])
            .areas(area);

        let [board_column, info] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BOARD_WIDTH + 2), Constraint::Min(24)])
            .areas(body);

        let board = Rect {
            x: board_column.x + 1,
            y: board_column.y,
            width: BOARD_WIDTH.min(board_column.width.saturating_sub(1)),
            height: BOARD_HEIGHT.min(board_column.height),
        };

        let [status, history] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(3)])
            .areas(info);

        let inner = Block::default().borders(Borders::ALL).inner(board);
        let cells = std::array::from_fn(|idx| {
            let (row, col) = ((idx / 3) as u16, (idx % 3) as u16);
            Rect {
                x: inner.x + col * CELL_WIDTH,
                y: inner.y + row * CELL_HEIGHT,
                width: CELL_WIDTH,
                height: CELL_HEIGHT,
            }
            .intersection(inner)
        });

        Self {
            title,
            cells,
            board,
            status,
            history,
            help,
        }
    }

    /// Board cell under a screen coordinate.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ScreenPosition::new(column, row);
        self.cells
            .iter()
            .position(|cell| cell.contains(point))
            .and_then(Position::from_index)
    }

    /// History display row under a screen coordinate, accounting for scroll.
    pub fn history_row_at(&self, column: u16, row: u16, offset: usize) -> Option<usize> {
        let inner = Block::default().borders(Borders::ALL).inner(self.history);
        if !inner.contains(ScreenPosition::new(column, row)) {
            return None;
        }
        Some((row - inner.y) as usize + offset)
    }
}

/// Maps a left click to an intent using the last drawn layout.
pub fn click_intent(app: &App, column: u16, row: u16) -> Option<Intent> {
    let panes = app.view().panes.as_ref()?;
    if let Some(position) = panes.cell_at(column, row) {
        return Some(Intent::CellClicked(position));
    }
    let offset = app.view().list_state.offset();
    let display_row = panes.history_row_at(column, row, offset)?;
    app.entries()
        .get(display_row)
        .map(|entry| Intent::HistoryClicked(entry.step))
}

/// Draws the whole frame.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let panes = Panes::compute(frame.area());

    let title = Paragraph::new("Strictly Timetravel - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, panes.title);

    draw_board(frame, &panes, app, &MarkCells);
    draw_status(frame, &panes, app);
    draw_history(frame, &panes, app, &HistoryList);

    let help = Paragraph::new(
        "arrows move  enter/1-9 play  tab history  s sort  r restart  q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, panes.help);

    app.view_mut().panes = Some(panes);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_board(frame: &mut Frame, panes: &Panes, app: &App, cells: &impl CellRenderer) {
    let board_focused = app.view().focus == Focus::Board;
    let block = Block::default()
        .title("Board")
        .borders(Borders::ALL)
        .border_style(focus_style(board_focused));
    frame.render_widget(block, panes.board);

    let board = app.game().current_board();
    let winning_line = app.game().status().winning_line();

    for (idx, area) in panes.cells.iter().enumerate() {
        let Some(pos) = Position::from_index(idx) else {
            continue;
        };
        let highlighted = winning_line.is_some_and(|line| line.contains(pos));
        let span = cells.render(board.get(pos), highlighted);
        let border = if board_focused && pos == app.view().cursor {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let paragraph = Paragraph::new(Line::from(span))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(paragraph, *area);
    }
}

fn draw_status(frame: &mut Frame, panes: &Panes, app: &App) {
    let game = app.game();
    let lines = vec![
        Line::from(game.status().to_string()),
        Line::from(format!(
            "Step {} of {}   Sort: {}",
            game.current_step(),
            game.history().len() - 1,
            app.view().sort.label()
        )),
    ];
    let status = Paragraph::new(lines)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().title("Status").borders(Borders::ALL));
    frame.render_widget(status, panes.status);
}

fn draw_history(frame: &mut Frame, panes: &Panes, app: &mut App, list: &impl ListRenderer) {
    let entries = app.entries();
    let focused = app.view().focus == Focus::History;
    let selected = focused.then(|| app.selected_row());

    let widget = list.render(&entries).block(
        Block::default()
            .title("History")
            .borders(Borders::ALL)
            .border_style(focus_style(focused)),
    );

    let state = &mut app.view_mut().list_state;
    state.select(selected);
    frame.render_stateful_widget(widget, panes.history, state);
}
