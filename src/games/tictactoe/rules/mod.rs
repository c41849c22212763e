//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from the
//! history log so both the state machine and the invariants can
//! use them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WinningLine, detect_winner};
