//! The history log and its transitions.
//!
//! [`GameState`] is an immutable value. Every transition borrows the old
//! state and returns a fresh one; the caller decides whether to keep it.

use super::action::{HistoryError, HistoryErrorKind, MoveOutcome};
use super::contracts::{Contract, JumpContract, MoveContract};
use super::status::GameStatus;
use super::{Board, Player, Position, Square};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One snapshot in the history: a board plus the move that produced it.
///
/// The opening record has no move. Its label is fixed and never derived
/// from `last_move`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct HistoryRecord {
    board: Board,
    last_move: Option<Position>,
}

impl HistoryRecord {
    /// The opening record: an empty board and no move.
    pub fn opening() -> Self {
        Self::new(Board::new(), None)
    }

    /// The board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cell filled to reach this board, `None` for the opening record.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }
}

/// Complete game state: the history log, the cursor and whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(super) history: Vec<HistoryRecord>,
    pub(super) current_step: usize,
    pub(super) next_player: Player,
}

/// Creates the state every game starts from.
pub fn initial_state() -> GameState {
    GameState::new()
}

impl GameState {
    /// Creates a new game: one empty record, X to move, cursor at 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryRecord::opening()],
            current_step: 0,
            next_player: Player::X,
        }
    }

    /// Returns the full history, oldest first.
    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    /// Returns the cursor into the history.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the player to move at the cursor.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Returns the record at the cursor.
    pub fn current_record(&self) -> &HistoryRecord {
        &self.history[self.current_step]
    }

    /// Returns the board at the cursor.
    pub fn current_board(&self) -> &Board {
        self.current_record().board()
    }

    /// Returns the status of the board at the cursor.
    pub fn status(&self) -> GameStatus {
        GameStatus::evaluate(self.current_board(), self.next_player)
    }

    /// Returns true if the cursor sits on the newest record.
    pub fn is_latest(&self) -> bool {
        self.current_step + 1 == self.history.len()
    }

    /// Returns the positions a move may be played on, empty once won.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().winner().is_some() {
            return Vec::new();
        }
        Position::valid_moves(self.current_board())
    }

    /// Places `next_player`'s mark at `position` on the board at the cursor.
    ///
    /// Records after the cursor are discarded before the new record is
    /// appended. A rejected move leaves `self` as the only valid state.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_player))]
    pub fn apply_move(&self, position: Position) -> MoveOutcome {
        if let Err(rejection) = MoveContract::pre(self, &position) {
            debug!(%rejection, "Move rejected");
            return MoveOutcome::Rejected(rejection);
        }

        let mut board = self.current_board().clone();
        board.set(position, Square::Occupied(self.next_player));

        let mut history = self.history[..=self.current_step].to_vec();
        let discarded = self.history.len() - history.len();
        history.push(HistoryRecord::new(board, Some(position)));

        let next = GameState {
            current_step: history.len() - 1,
            history,
            next_player: self.next_player.opponent(),
        };
        debug!(discarded, step = next.current_step, "Move applied");

        debug_assert_eq!(
            MoveContract::post(self, &next),
            Ok(()),
            "Move postcondition failed"
        );

        MoveOutcome::Accepted(next)
    }

    /// Moves the cursor to `step` without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryErrorKind::OutOfRange`] if `step` is not a recorded
    /// index.
    #[instrument(skip(self), fields(from = self.current_step, len = self.history.len()))]
    pub fn jump_to(&self, step: usize) -> Result<GameState, HistoryError> {
        JumpContract::pre(self, &step)?;

        let next = GameState {
            history: self.history.clone(),
            current_step: step,
            next_player: Player::for_move_count(step),
        };
        debug!(step, next_player = %next.next_player, "Jumped");

        debug_assert_eq!(
            JumpContract::post(self, &next),
            Ok(()),
            "Jump postcondition failed"
        );

        Ok(next)
    }

    /// Builds a state by playing `moves` in order from the opening.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryErrorKind::IllegalMove`] for the first move that is
    /// rejected.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<GameState, HistoryError> {
        moves
            .iter()
            .enumerate()
            .try_fold(GameState::new(), |state, (idx, &position)| {
                match state.apply_move(position) {
                    MoveOutcome::Accepted(next) => Ok(next),
                    MoveOutcome::Rejected(rejection) => {
                        Err(HistoryError::new(HistoryErrorKind::IllegalMove {
                            number: idx + 1,
                            position,
                            rejection,
                        }))
                    }
                }
            })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
