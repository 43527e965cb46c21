//! Field rendering utilities for forms

use crate::state::FieldDescriptor;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Inline warning shown under an empty required field
pub const REQUIRED_WARNING: &str = "This field is required.";

/// Rows a field box takes (excluding the warning line)
pub fn field_height(field: &FieldDescriptor) -> u16 {
    if field.kind.is_multiline() {
        5
    } else {
        3
    }
}

/// Title for a field box: label, required marker and input hint
fn field_title(field: &FieldDescriptor) -> String {
    let marker = if field.required { " *" } else { "" };
    match field.kind.hint() {
        Some(hint) => format!(" {}{} ({}) ", field.label, marker, hint),
        None => format!(" {}{} ", field.label, marker),
    }
}

/// Draw a catalog field with its current value
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FieldDescriptor,
    value: &str,
    is_active: bool,
) {
    let display = field.display_value(value);
    if field.is_dropdown() {
        draw_select_box(frame, area, &field_title(field), &display, value.is_empty(), is_active);
    } else {
        draw_input_box(
            frame,
            area,
            &field_title(field),
            &display,
            is_active,
            field.kind.is_multiline(),
        );
    }
}

/// Draw the "This field is required." line
pub fn draw_required_warning(frame: &mut Frame, area: Rect) {
    let warning = Paragraph::new(Span::styled(
        format!(" {REQUIRED_WARNING}"),
        Style::default().fg(Color::Red),
    ));
    frame.render_widget(warning, area);
}

/// Draw a selection box (dropdown or type selector)
pub fn draw_select_box(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    display: &str,
    is_placeholder: bool,
    is_active: bool,
) {
    let color = if is_active { Color::Cyan } else { Color::DarkGray };
    let text_style = if is_placeholder {
        Style::default().fg(Color::DarkGray)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display.to_string(), text_style),
        Span::styled(" ▾", Style::default().fg(color)),
    ]));
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(content.block(block), area);
}

/// Draw a free-text input box with a cursor when active
pub fn draw_input_box(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    is_active: bool,
    is_multiline: bool,
) {
    let color = if is_active { Color::Cyan } else { Color::DarkGray };
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let display = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };
    let cursor = Span::styled(if is_active { "▌" } else { "" }, Style::default().fg(Color::Cyan));

    let content = if is_multiline {
        let mut lines: Vec<Line> = display
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![Span::styled(display.to_string(), style), cursor]))
    };

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
