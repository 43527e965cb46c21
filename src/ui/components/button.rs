//! Form action button

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a bordered button
pub const BUTTON_HEIGHT: u16 = 3;

/// Draw a centered, bordered button; `accent` colors the label until it gains focus
pub fn render_action_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_focused: bool,
    accent: Color,
) {
    let (border, text) = if is_focused {
        (
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (Style::default().fg(Color::DarkGray), Style::default().fg(accent))
    };

    let button = Paragraph::new(format!("[ {label} ]"))
        .style(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(button, area);
}
