//! Confirmation dialog for deleting a ledger row

use super::base::{key_hints, render_dialog, DialogConfig};
use crate::state::PendingDeleteAction;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

const MAX_WIDTH: u16 = 50;

/// Render a confirmation dialog for delete action
pub fn render_confirm_dialog(frame: &mut Frame, action: &PendingDeleteAction) {
    let max_display_len = (MAX_WIDTH - 6) as usize;
    let row_label = format!("{} row {}: ", action.target.form_type, action.target.index + 1);
    let summary = truncate_string(
        &action.summary,
        max_display_len.saturating_sub(row_label.chars().count()),
    );

    let mut body = vec![
        Line::from("Delete this submitted record?"),
        Line::from(vec![
            Span::styled(row_label, Style::default().fg(Color::Cyan)),
            Span::raw(summary),
        ]),
        Line::from(""),
    ];

    // Cancel first so the safe choice is the default
    for (is_delete, label, color) in [(false, "Cancel", Color::White), (true, "Delete", Color::Red)] {
        let is_selected = action.selected_option == is_delete;
        let prefix = if is_selected { "▸ " } else { "  " };
        let style = if is_selected {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        body.push(Line::from(Span::styled(format!("{prefix}{label}"), style)));
    }

    render_dialog(
        frame,
        DialogConfig {
            title: "Confirm Delete",
            accent: Color::Red,
            body,
            footer: Some(key_hints(&[
                ("↑↓", "select"),
                ("Enter", "confirm"),
                ("Esc", "cancel"),
            ])),
            max_width: MAX_WIDTH,
        },
    );
}

/// Truncate a string to a maximum number of characters with ellipsis
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_string("Ana", 10), "Ana");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_string("abcdefghij", 6), "abc...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_string("ñññññññ", 5), "ññ...");
    }
}
