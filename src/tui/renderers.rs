//! Rendering capabilities for board cells and the history list.
//!
//! Widgets are parameterised by data: one implementation per capability,
//! no per-value widget types.

use crate::games::tictactoe::{HistoryEntry, Player, Square};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
};

/// Renders a single board cell.
pub trait CellRenderer {
    /// Renders `square`, emphasised when it belongs to the winning line.
    fn render(&self, square: Square, highlighted: bool) -> Span<'static>;
}

/// Renders the history list.
pub trait ListRenderer {
    /// Renders entries in the order given.
    fn render(&self, entries: &[HistoryEntry]) -> List<'static>;
}

/// Cell style: X blue, O red, winning line on green.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkCells;

impl CellRenderer for MarkCells {
    fn render(&self, square: Square, highlighted: bool) -> Span<'static> {
        let (symbol, style) = match square {
            Square::Empty => ("·", Style::default().fg(Color::DarkGray)),
            Square::Occupied(Player::X) => {
                ("X", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
            }
            Square::Occupied(Player::O) => {
                ("O", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            }
        };

        let style = if highlighted {
            style.bg(Color::Green).fg(Color::Black)
        } else {
            style
        };
        Span::styled(symbol, style)
    }
}

/// History style: the cursor's row in bold, selection reversed.
#[derive(Debug, Clone, Copy, Default)]
pub struct HistoryList;

impl ListRenderer for HistoryList {
    fn render(&self, entries: &[HistoryEntry]) -> List<'static> {
        let items: Vec<ListItem<'static>> = entries
            .iter()
            .map(|entry| {
                let style = if entry.is_current {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(Span::styled(
                    format!("{:>2}. {}", entry.step, entry.label),
                    style,
                )))
            })
            .collect();

        List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ")
    }
}
