//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
///
/// The order is the tie-break when more than one line is complete.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed three-in-a-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    positions: [Position; 3],
    player: Player,
}

impl WinningLine {
    /// The three positions forming the line, in line order.
    pub fn positions(&self) -> [Position; 3] {
        self.positions
    }

    /// The line as board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.positions.map(Position::to_index)
    }

    /// The player owning the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Whether `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// Finds the first winning line on the board.
///
/// Returns `None` if no line holds three identical marks.
#[instrument(skip(board))]
pub fn detect_winner(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Square::Occupied(player)
            if board.get(b) == Square::Occupied(player)
                && board.get(c) == Square::Occupied(player) =>
        {
            Some(WinningLine {
                positions: [a, b, c],
                player,
            })
        }
        _ => None,
    })
}
