//! Game status derived from a single board snapshot.

use super::rules::{WinningLine, detect_winner, is_full};
use super::{Board, Player};
use serde::{Deserialize, Serialize};

/// Status of the game at one point in its history.
///
/// Status is never stored; it is recomputed from the board at the cursor,
/// so jumping back in time also rewinds a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress {
        /// Player to move.
        next_player: Player,
    },
    /// Game ended in a win.
    Won {
        /// The winning line.
        line: WinningLine,
    },
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Evaluates the board: winner first, then full board, else in progress.
    pub fn evaluate(board: &Board, next_player: Player) -> Self {
        if let Some(line) = detect_winner(board) {
            GameStatus::Won { line }
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress { next_player }
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        self.winning_line().map(|line| line.player())
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GameStatus::Won { line } => Some(*line),
            _ => None,
        }
    }

    /// Returns true once no further moves are possible.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next_player } => write!(f, "Next player: {}", next_player),
            GameStatus::Won { line } => write!(f, "Winner: {}", line.player()),
            GameStatus::Draw => write!(f, "No player win!"),
        }
    }
}
