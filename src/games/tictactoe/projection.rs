//! Projection of the history log into display rows.

use super::history::{GameState, HistoryRecord};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Order in which history rows are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first.
    #[default]
    Ascending,
    /// Newest first.
    Descending,
}

impl SortOrder {
    /// Flips the order.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        }
    }
}

/// One row of the history list.
///
/// `step` always names the index into the history, whatever the display
/// order, so selecting a row jumps to the right snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Index into the history.
    pub step: usize,
    /// Button text.
    pub label: String,
    /// Whether this row is the cursor.
    pub is_current: bool,
}

/// Text for the record at `step`.
///
/// Step 0 is always "Go to beginning"; later steps report the move as
/// zero-based `(column, row)`.
pub fn step_label(step: usize, record: &HistoryRecord) -> String {
    match (step, record.last_move()) {
        (0, _) | (_, None) => "Go to beginning".to_string(),
        (_, Some(pos)) => format!("Go to move: ({}, {})", pos.column(), pos.row()),
    }
}

/// Projects the history into display rows in the requested order.
#[instrument(skip(state), fields(len = state.history().len(), current = state.current_step()))]
pub fn project_history(state: &GameState, order: SortOrder) -> Vec<HistoryEntry> {
    let entries = state.history().iter().enumerate().map(|(step, record)| HistoryEntry {
        step,
        label: step_label(step, record),
        is_current: step == state.current_step(),
    });

    match order {
        SortOrder::Ascending => entries.collect(),
        SortOrder::Descending => entries.rev().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    fn sample() -> GameState {
        use Position::*;
        GameState::replay(&[Center, TopRight, BottomLeft])
            .expect("legal")
            .jump_to(1)
            .expect("in range")
    }

    #[test]
    fn test_labels_use_column_then_row() {
        let entries = project_history(&sample(), SortOrder::Ascending);
        let labels: Vec<_> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Go to beginning",
                "Go to move: (1, 1)",
                "Go to move: (2, 0)",
                "Go to move: (0, 2)",
            ]
        );
    }

    #[test]
    fn test_move_at_cell_zero_is_labelled() {
        let state = GameState::replay(&[Position::TopLeft]).expect("legal");
        let entries = project_history(&state, SortOrder::Ascending);
        assert_eq!(entries[0].label, "Go to beginning");
        assert_eq!(entries[1].label, "Go to move: (0, 0)");
    }

    #[test]
    fn test_only_cursor_is_current() {
        let entries = project_history(&sample(), SortOrder::Ascending);
        let current: Vec<_> = entries.iter().filter(|e| e.is_current).map(|e| e.step).collect();
        assert_eq!(current, [1]);
    }

    #[test]
    fn test_descending_is_pure_reversal() {
        let state = sample();
        let mut ascending = project_history(&state, SortOrder::Ascending);
        let descending = project_history(&state, SortOrder::Descending);
        assert_eq!(descending.first().map(|e| e.step), Some(3));
        ascending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(SortOrder::default().toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle(), SortOrder::Ascending);
    }
}
