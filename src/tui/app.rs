//! Application state and intent handling.
//!
//! The app owns exactly one [`GameState`] and replaces it wholesale when a
//! transition is accepted. Everything else here is view state.

use crate::games::tictactoe::{
    GameState, HistoryEntry, HistoryError, MoveOutcome, Position, SortOrder, project_history,
};
use ratatui::widgets::ListState;
use tracing::{debug, info, instrument};

use super::ui::Panes;

/// Which pane receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the history selection.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// Cursor direction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards row 2.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 2.
    Right,
}

/// A user intent forwarded from input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Place a mark on a cell.
    CellClicked(Position),
    /// Jump to a history step.
    HistoryClicked(usize),
    /// Flip the history sort order.
    ToggleSort,
    /// Move the board cursor.
    MoveCursor(Direction),
    /// Move the history selection by one row in display order.
    MoveSelection(Direction),
    /// Switch focus between board and history.
    ToggleFocus,
    /// Start a new game.
    Restart,
    /// Leave the application.
    Quit,
}

/// Presentation-only state, independent of the game.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// History sort order.
    pub sort: SortOrder,
    /// Board cursor for keyboard play.
    pub cursor: Position,
    /// Pane receiving arrow keys.
    pub focus: Focus,
    /// Selected history step (a step, not a display row).
    pub selected_step: usize,
    /// Scroll state of the history list.
    pub list_state: ListState,
    /// Layout from the last draw, used for mouse hit testing.
    pub panes: Option<Panes>,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    view: ViewState,
    should_quit: bool,
}

impl App {
    /// Creates a new application with the given history order.
    #[instrument]
    pub fn new(sort: SortOrder) -> Self {
        Self {
            game: GameState::new(),
            view: ViewState {
                sort,
                ..ViewState::default()
            },
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the view state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Gets the view state mutably (drawing updates scroll and layout).
    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// History rows in display order.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        project_history(&self.game, self.view.sort)
    }

    /// Display row of the selected step.
    pub fn selected_row(&self) -> usize {
        self.entries()
            .iter()
            .position(|entry| entry.step == self.view.selected_step)
            .unwrap_or(0)
    }

    /// Applies an intent.
    ///
    /// Rejected moves leave the game untouched and are not an error.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if a jump names a step that is not recorded.
    #[instrument(skip(self), fields(step = self.game.current_step()))]
    pub fn update(&mut self, intent: Intent) -> Result<(), HistoryError> {
        match intent {
            Intent::CellClicked(position) => {
                self.view.cursor = position;
                match self.game.apply_move(position) {
                    MoveOutcome::Accepted(next) => {
                        self.game = next;
                        self.view.selected_step = self.game.current_step();
                        debug!(status = %self.game.status(), "Move accepted");
                    }
                    MoveOutcome::Rejected(rejection) => {
                        debug!(%rejection, "Ignoring rejected move");
                    }
                }
            }
            Intent::HistoryClicked(step) => {
                self.game = self.game.jump_to(step)?;
                self.view.selected_step = step;
            }
            Intent::ToggleSort => {
                self.view.sort = self.view.sort.toggle();
                debug!(sort = ?self.view.sort, "Sort toggled");
            }
            Intent::MoveCursor(direction) => {
                self.view.cursor = super::input::move_cursor(self.view.cursor, direction);
            }
            Intent::MoveSelection(direction) => {
                let entries = self.entries();
                let row = self.selected_row();
                let row = match direction {
                    Direction::Up | Direction::Left => row.saturating_sub(1),
                    Direction::Down | Direction::Right => (row + 1).min(entries.len() - 1),
                };
                self.view.selected_step = entries[row].step;
            }
            Intent::ToggleFocus => {
                self.view.focus = self.view.focus.toggle();
                if self.view.focus == Focus::History {
                    self.view.selected_step = self.game.current_step();
                }
            }
            Intent::Restart => {
                info!("Restarting game");
                self.game = GameState::new();
                self.view.selected_step = 0;
            }
            Intent::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
        Ok(())
    }
}
