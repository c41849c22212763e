//! Transition results and error types for the history state machine.
//!
//! A rejected move is an ordinary outcome, not an error: clicking an
//! occupied square is something players do all the time. Jumping outside
//! the recorded history is a caller bug and surfaces as [`HistoryError`].

use super::Position;
use super::history::GameState;
use derive_more::{Display, Error};
use tracing::instrument;

/// Why a move was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Rejection {
    /// The board at the cursor already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

/// Result of applying a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied; this is the new state.
    Accepted(GameState),
    /// The move was turned down; the caller keeps its old state.
    Rejected(Rejection),
}

impl MoveOutcome {
    /// Returns the new state if the move was accepted.
    pub fn accepted(self) -> Option<GameState> {
        match self {
            MoveOutcome::Accepted(state) => Some(state),
            MoveOutcome::Rejected(_) => None,
        }
    }

    /// Returns the rejection reason if the move was turned down.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveOutcome::Accepted(_) => None,
            MoveOutcome::Rejected(rejection) => Some(*rejection),
        }
    }
}

/// Specific history failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum HistoryErrorKind {
    /// Jump target outside `[0, len)`.
    #[display("step {} is outside history of length {}", step, len)]
    OutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// A move in a replayed sequence was rejected.
    #[display("move {} ({}) rejected: {}", number, position, rejection)]
    IllegalMove {
        /// One-based move number within the sequence.
        number: usize,
        /// Position that was played.
        position: Position,
        /// Why the move was rejected.
        rejection: Rejection,
    },
}

/// History error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("History error: {} at {}:{}", kind, file, line)]
pub struct HistoryError {
    /// What went wrong.
    pub kind: HistoryErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl HistoryError {
    /// Creates a new history error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: HistoryErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &HistoryErrorKind {
        &self.kind
    }
}
