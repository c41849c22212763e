//! Tic-tac-toe with a time-travelling move history.
//!
//! The state machine is purely functional: [`GameState::apply_move`] and
//! [`GameState::jump_to`] borrow a state and return a new one.

mod action;
pub mod contracts;
mod history;
pub mod invariants;
mod position;
mod projection;
pub mod rules;
mod status;
mod types;

pub use action::{HistoryError, HistoryErrorKind, MoveOutcome, Rejection};
pub use history::{GameState, HistoryRecord, initial_state};
pub use position::Position;
pub use projection::{HistoryEntry, SortOrder, project_history, step_label};
pub use rules::{WinningLine, detect_winner};
pub use status::GameStatus;
pub use types::{Board, Player, Square};
