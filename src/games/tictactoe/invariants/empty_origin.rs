//! Empty origin invariant: every history starts from an empty board.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: `history[0]` is the empty board with no move.
pub struct EmptyOriginInvariant;

impl Invariant<GameState> for EmptyOriginInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .first()
            .is_some_and(|record| *record.board() == Board::new() && record.last_move().is_none())
    }

    fn description() -> &'static str {
        "History starts with an empty board and no move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{HistoryRecord, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(EmptyOriginInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_opening_with_move_violates() {
        let mut state = GameState::new();
        state.history[0] = HistoryRecord::new(Board::new(), Some(Position::TopLeft));
        assert!(!EmptyOriginInvariant::holds(&state));
    }
}
