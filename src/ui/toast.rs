//! Success toast in the top-right corner

use crate::state::Toast;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MARGIN: u16 = 1;

/// Draw `toast` anchored to the top-right of the screen
pub fn draw(frame: &mut Frame, toast: &Toast) {
    let area = frame.area();
    let text = format!(" ✓ {} ", toast.message);
    let width = (text.chars().count() as u16 + 2).min(area.width);
    let toast_area = Rect {
        x: area.width.saturating_sub(width + MARGIN),
        y: area.y + MARGIN,
        width,
        height: 3,
    }
    .intersection(area);
    if toast_area.is_empty() {
        return;
    }

    frame.render_widget(Clear, toast_area);
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Green))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(paragraph, toast_area);
}
