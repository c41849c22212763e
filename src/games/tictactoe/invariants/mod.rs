//! First-class invariants for the history log.
//!
//! Invariants are logical properties that must hold for every
//! [`GameState`](super::GameState) the state machine hands out. They are
//! checked by the contracts in debug builds and tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod cursor_in_bounds;
pub mod empty_origin;
pub mod parity_turn;
pub mod single_mark;

pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use empty_origin::EmptyOriginInvariant;
pub use parity_turn::ParityTurnInvariant;
pub use single_mark::SingleMarkInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    CursorInBoundsInvariant,
    EmptyOriginInvariant,
    SingleMarkInvariant,
    ParityTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameState, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(HistoryInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_jump_and_overwrite() {
        use Position::*;
        let state = GameState::replay(&[TopLeft, Center, TopRight, BottomLeft]).expect("legal");
        let state = state.jump_to(1).expect("in range");
        assert!(HistoryInvariants::check_all(&state).is_ok());
        let state = state.apply_move(BottomRight).accepted().expect("accepted");
        assert!(HistoryInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_every_violation() {
        let mut state = GameState::replay(&[Position::Center]).expect("legal");
        state.next_player = state.next_player.opponent();
        state.history[0] = state.history[1].clone();

        let violations = HistoryInvariants::check_all(&state).expect_err("corrupted");
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (EmptyOriginInvariant, ParityTurnInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
