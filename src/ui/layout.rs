//! Layout components (panes and status bar)

use crate::app::App;
use crate::platform::{LEDGER_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{AppState, Pane};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into form pane and ledger pane above the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[0]);

    (panes[0], panes[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let pane = match app.state.pane {
        Pane::Form => Span::styled(" FORM ", Style::default().fg(Color::Black).bg(Color::Cyan)),
        Pane::Ledger => {
            Span::styled(" LEDGER ", Style::default().fg(Color::Black).bg(Color::Yellow))
        }
    };
    let mut spans = vec![
        pane,
        Span::raw(" "),
        Span::styled(key_hints(&app.state), Style::default().fg(Color::Gray)),
    ];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for whatever currently receives keys
fn key_hints(state: &AppState) -> String {
    if state.has_errors() {
        return "Enter/Esc:dismiss".to_string();
    }
    if state.pending_delete.is_some() {
        return "←/→:choose  Enter:confirm  y:delete  n/Esc:cancel".to_string();
    }
    if state.popup.is_some() {
        return "j/k:nav  Enter:choose  Esc:close".to_string();
    }
    match state.pane {
        Pane::Form => {
            let esc = if state.session.form.editing().is_some() {
                "Esc:cancel edit"
            } else {
                "Esc:type"
            };
            format!("Tab:next  Enter:select  {SUBMIT_SHORTCUT}:submit  ^U:clear  {esc}  {LEDGER_SHORTCUT}:ledger")
        }
        Pane::Ledger => {
            format!("j/k:nav  e:edit  d:delete  y:copy  Esc/{LEDGER_SHORTCUT}:form  q:quit")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PendingDeleteAction, RecordRef, SubmitPolicy};

    #[test]
    fn test_layout_reserves_status_line() {
        let (form, ledger) = create_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(form.height, 29);
        assert_eq!(form.width + ledger.width, 100);
        assert!(ledger.width > form.width);
    }

    #[test]
    fn test_hints_follow_pane() {
        let mut state = AppState::new(SubmitPolicy::Strict);
        assert!(key_hints(&state).contains(SUBMIT_SHORTCUT));
        state.pane = Pane::Ledger;
        assert!(key_hints(&state).contains("d:delete"));
    }

    #[test]
    fn test_modal_hints_take_precedence() {
        let mut state = AppState::new(SubmitPolicy::Strict);
        state.pending_delete = Some(PendingDeleteAction {
            target: RecordRef::new("Contact", 0),
            summary: "Ana".to_string(),
            selected_option: false,
        });
        assert!(key_hints(&state).contains("y:delete"));
        state.push_error("boom".to_string());
        assert_eq!(key_hints(&state), "Enter/Esc:dismiss");
    }
}
