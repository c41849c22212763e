//! Strictly Timetravel - tic-tac-toe with a rewindable history
//!
//! The core is a purely functional state machine: a [`GameState`] holds
//! every board snapshot, a cursor into them, and whose turn it is.
//! Moves and jumps borrow a state and return a new one.
//!
//! # Architecture
//!
//! - **Games**: the history state machine, win detection and history projection
//! - **TUI**: a ratatui client that forwards user intents into the core
//! - **Replay**: non-interactive rendering of a move list
//! - **Settings**: TOML configuration for the client
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{GameState, MoveOutcome, Position, SortOrder, project_history};
//!
//! let state = GameState::new();
//! let MoveOutcome::Accepted(state) = state.apply_move(Position::Center) else {
//!     unreachable!("center is empty");
//! };
//! let back = state.jump_to(0)?;
//! assert_eq!(back.history().len(), 2);
//! assert_eq!(project_history(&back, SortOrder::Ascending)[1].label, "Go to move: (1, 1)");
//! # Ok::<(), strictly_timetravel::HistoryError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod games;
mod replay;
mod settings;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Settings
pub use settings::{ConfigError, DEFAULT_CONFIG_FILE, Settings};

// Crate-level exports - Replay
pub use replay::ReplayReport;

// Crate-level exports - TUI
pub use tui::{
    App, CellRenderer, Direction, Focus, HistoryList, Intent, ListRenderer, MarkCells,
    ViewState, run_tui,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameState, GameStatus, HistoryEntry, HistoryError, HistoryErrorKind, HistoryRecord,
    MoveOutcome, Player, Position, Rejection, SortOrder, Square, WinningLine, detect_winner,
    initial_state, project_history, step_label,
};

// Crate-level exports - Contracts and invariants
pub use games::tictactoe::contracts;
pub use games::tictactoe::invariants;
