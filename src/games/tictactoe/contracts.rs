//! Contract-based validation for the history state machine.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{HistoryError, HistoryErrorKind, Rejection};
use super::history::GameState;
use super::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use super::rules::detect_winner;
use super::Position;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// What a failed precondition reports.
    type Failure;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Failure>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The board at the cursor has no winner yet.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Rejects with [`Rejection::GameOver`] if the cursor's board is won.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), Rejection> {
        match detect_winner(state.current_board()) {
            Some(_) => Err(Rejection::GameOver),
            None => Ok(()),
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects with [`Rejection::SquareOccupied`] if the square is taken.
    #[instrument(skip(state))]
    pub fn check(position: Position, state: &GameState) -> Result<(), Rejection> {
        if state.current_board().is_empty(position) {
            Ok(())
        } else {
            Err(Rejection::SquareOccupied(position))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions (in order):
/// - No winner on the board at the cursor
/// - Square must be empty
///
/// Postconditions:
/// - All history invariants hold
/// - The new record sits directly after the old cursor
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    type Failure = Rejection;

    fn pre(state: &GameState, position: &Position) -> Result<(), Rejection> {
        NoWinnerYet::check(state)?;
        SquareIsEmpty::check(*position, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = HistoryInvariants::check_all(after).err().unwrap_or_default();
        if after.current_step != before.current_step + 1 || !after.is_latest() {
            violations.push(InvariantViolation::new(
                "New record follows the previous cursor and ends the history",
            ));
        }
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump Contract
// ─────────────────────────────────────────────────────────────

/// Contract for moving the cursor.
///
/// Precondition: the step is a recorded index.
/// Postconditions: invariants hold and the history is untouched.
pub struct JumpContract;

impl Contract<GameState, usize> for JumpContract {
    type Failure = HistoryError;

    #[track_caller]
    fn pre(state: &GameState, step: &usize) -> Result<(), HistoryError> {
        let len = state.history.len();
        if *step < len {
            Ok(())
        } else {
            Err(HistoryError::new(HistoryErrorKind::OutOfRange { step: *step, len }))
        }
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = HistoryInvariants::check_all(after).err().unwrap_or_default();
        if before.history != after.history {
            violations.push(InvariantViolation::new("Jumping leaves the history untouched"));
        }
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{HistoryRecord, Player, Square};

    #[test]
    fn test_precondition_empty_square() {
        let state = GameState::new();
        assert!(MoveContract::pre(&state, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let state = GameState::replay(&[Position::Center]).expect("legal");
        assert_eq!(
            MoveContract::pre(&state, &Position::Center),
            Err(Rejection::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_winner_checked_before_occupancy() {
        use Position::*;
        let state = GameState::replay(&[TopLeft, MiddleLeft, TopCenter, Center, TopRight])
            .expect("legal");
        // Occupied and game over: game over wins.
        assert_eq!(MoveContract::pre(&state, &TopLeft), Err(Rejection::GameOver));
    }

    #[test]
    fn test_jump_precondition_bounds() {
        let state = GameState::new();
        assert!(JumpContract::pre(&state, &0).is_ok());
        assert!(JumpContract::pre(&state, &1).is_err());
    }

    #[test]
    fn test_move_postcondition_detects_corruption() {
        let before = GameState::new();
        let after = before.apply_move(Position::Center).accepted().expect("accepted");
        assert!(MoveContract::post(&before, &after).is_ok());

        let mut wrong_turn = after.clone();
        wrong_turn.next_player = Player::X;
        assert!(MoveContract::post(&before, &wrong_turn).is_err());

        let mut overwritten = after;
        let mut board = overwritten.history[1].board().clone();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        overwritten.history[1] = HistoryRecord::new(board, Some(Position::Center));
        assert!(MoveContract::post(&before, &overwritten).is_err());
    }

    #[test]
    fn test_jump_postcondition_detects_rewritten_history() {
        let before = GameState::replay(&[Position::Center]).expect("legal");
        let mut after = before.jump_to(0).expect("in range");
        after.history.pop();
        assert!(JumpContract::post(&before, &after).is_err());
    }
}
