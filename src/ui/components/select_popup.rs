//! Selection popup used by the form type selector and dropdown fields

use super::dialog::centered_rect;
use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

/// Render a centered list of `items` with `selected` highlighted.
///
/// The first item is the placeholder and is drawn dimmed.
pub fn render_select_popup(frame: &mut Frame, title: &str, items: &[String], selected: usize) {
    let longest = items
        .iter()
        .map(|i| i.chars().count())
        .max()
        .unwrap_or(0)
        .max(title.chars().count());
    // Highlight symbol, padding and borders
    let width = longest as u16 + 6;
    let height = (items.len() as u16 + 2).min(16);
    let area = centered_rect(frame.area(), width, height);

    frame.render_widget(Clear, area);

    let list_items: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == 0 {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(item.as_str()).style(style)
        })
        .collect();

    let list = List::new(list_items)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    // Stateful render scrolls long option lists to the highlighted entry
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}
