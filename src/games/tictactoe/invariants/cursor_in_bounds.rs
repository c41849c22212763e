//! Cursor invariant: the history is never empty and the cursor points into it.

use super::super::GameState;
use super::Invariant;

/// Invariant: `0 <= current_step < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.current_step < state.history.len()
    }

    fn description() -> &'static str {
        "Cursor points at a recorded step"
    }
}
