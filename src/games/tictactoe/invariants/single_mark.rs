//! Single mark invariant: each record adds exactly one mark to its parent.

use super::super::{GameState, Player, Position, Square};
use super::Invariant;

/// Invariant: consecutive boards differ in exactly one square.
///
/// For `i > 0`, `history[i]` equals `history[i - 1]` except at
/// `history[i].last_move`, which went from empty to the mark of the player
/// whose turn it was (X on odd steps, O on even steps). Squares are never
/// overwritten.
pub struct SingleMarkInvariant;

impl Invariant<GameState> for SingleMarkInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().windows(2).enumerate().all(|(idx, pair)| {
            let [parent, child] = pair else {
                return false;
            };
            let Some(moved) = child.last_move() else {
                return false;
            };
            let mover = Player::for_move_count(idx);

            Position::ALL.iter().all(|&pos| {
                let (before, after) = (parent.board().get(pos), child.board().get(pos));
                if pos == moved {
                    before == Square::Empty && after == Square::Occupied(mover)
                } else {
                    before == after
                }
            })
        })
    }

    fn description() -> &'static str {
        "Each record adds exactly one mark, in turn order"
    }
}
