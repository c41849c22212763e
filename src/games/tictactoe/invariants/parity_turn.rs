//! Parity turn invariant: X moves on even steps, O on odd ones.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: `next_player` follows the cursor's parity.
///
/// X always opens, so after an even number of moves it is X's turn.
/// This holds at every cursor position, including after a jump.
pub struct ParityTurnInvariant;

impl Invariant<GameState> for ParityTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state.next_player() == Player::for_move_count(state.current_step())
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_empty_game_holds() {
        assert!(ParityTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_after_jump() {
        use Position::*;
        let state = GameState::replay(&[Center, TopLeft, BottomRight]).expect("legal");
        for step in 0..state.history().len() {
            let jumped = state.jump_to(step).expect("in range");
            assert!(ParityTurnInvariant::holds(&jumped));
        }
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut state = GameState::replay(&[Position::Center]).expect("legal");
        state.next_player = Player::X;
        assert!(!ParityTurnInvariant::holds(&state));
    }
}
