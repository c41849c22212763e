//! Non-interactive rendering of a game built from a move list.

use crate::games::tictactoe::{
    GameState, HistoryEntry, HistoryError, Player, Position, SortOrder, project_history,
};
use serde::Serialize;
use tracing::instrument;

/// Everything the `replay` command prints, in one serializable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Cursor the report was taken at.
    pub current_step: usize,
    /// Board at the cursor, row-major, `None` for empty squares.
    pub board: Vec<Option<Player>>,
    /// Status line text.
    pub status: String,
    /// Winning line as board indices, if any.
    pub winning_line: Option<[usize; 3]>,
    /// History rows in display order.
    pub history: Vec<HistoryEntry>,
    #[serde(skip)]
    grid: String,
}

impl ReplayReport {
    /// Captures the state at its cursor.
    #[instrument(skip(state), fields(step = state.current_step()))]
    pub fn capture(state: &GameState, order: SortOrder) -> Self {
        let status = state.status();
        Self {
            current_step: state.current_step(),
            board: state.current_board().squares().iter().map(|s| s.player()).collect(),
            status: status.to_string(),
            winning_line: status.winning_line().map(|line| line.indices()),
            history: project_history(state, order),
            grid: state.current_board().display(),
        }
    }

    /// Plays `moves`, optionally jumps to `jump`, and captures the result.
    ///
    /// # Errors
    ///
    /// Fails if a move is rejected or the jump target is not recorded.
    #[instrument]
    pub fn build(
        moves: &[Position],
        jump: Option<usize>,
        order: SortOrder,
    ) -> Result<Self, HistoryError> {
        let state = GameState::replay(moves)?;
        let state = match jump {
            Some(step) => state.jump_to(step)?,
            None => state,
        };
        Ok(Self::capture(&state, order))
    }

    /// Plain-text rendering: board, status, then the history list with the
    /// cursor marked.
    pub fn render_text(&self) -> String {
        let mut out = format!("{}\n\n{}\n\n", self.grid, self.status);
        for entry in &self.history {
            let marker = if entry.is_current { '>' } else { ' ' };
            out.push_str(&format!("{} {:>2}. {}\n", marker, entry.step, entry.label));
        }
        out
    }
}
