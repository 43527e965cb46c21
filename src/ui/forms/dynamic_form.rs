//! Dynamic form rendering: type selector, catalog fields, progress and submit

use super::field_renderer::{draw_field, draw_required_warning, draw_select_box, field_height};
use crate::app::App;
use crate::state::{ActiveForm, FormFocus, Pane};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use std::ops::Range;

const TYPE_PLACEHOLDER: &str = "Select Form Type";

/// Draw the dynamic form pane
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.session.form;
    let focused = app.state.pane == Pane::Form;

    let title = match form.editing() {
        Some(target) => format!(" Edit {} #{} ", target.form_type, target.index + 1),
        None => " Dynamic Form ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Progress and submit only exist once there are fields to fill
    let has_fields = form.can_submit();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Type selector
            Constraint::Min(0),    // Fields
            Constraint::Length(if has_fields { 2 } else { 0 }), // Progress
            Constraint::Length(if has_fields { BUTTON_HEIGHT } else { 0 }), // Submit
        ])
        .horizontal_margin(1)
        .split(inner);

    let selector_active = focused && form.focus == FormFocus::TypeSelector;
    draw_select_box(
        frame,
        chunks[0],
        " Form Type ",
        form.selected_type().unwrap_or(TYPE_PLACEHOLDER),
        form.selected_type().is_none(),
        selector_active,
    );

    if !has_fields {
        draw_empty_hint(frame, chunks[1], form);
        return;
    }

    draw_fields(frame, chunks[1], form, focused);
    draw_progress(frame, chunks[2], app);

    let label = if form.editing().is_some() {
        "Update"
    } else {
        "Submit"
    };
    render_action_button(
        frame,
        chunks[3],
        label,
        focused && form.focus == FormFocus::Submit,
        Color::Green,
    );
}

fn draw_empty_hint(frame: &mut Frame, area: Rect, form: &ActiveForm) {
    let text = match form.selected_type() {
        Some(form_type) => format!("No fields defined for \"{form_type}\"."),
        None => "Press Enter to choose a form type.".to_string(),
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(hint, area);
}

/// Rows a field takes including its warning line
fn row_height(form: &ActiveForm, index: usize) -> u16 {
    let field = &form.fields()[index];
    field_height(field) + u16::from(form.is_missing(field))
}

fn draw_fields(frame: &mut Frame, area: Rect, form: &ActiveForm, focused: bool) {
    let heights: Vec<u16> = (0..form.fields().len())
        .map(|i| row_height(form, i))
        .collect();
    let active = match form.focus {
        FormFocus::Field(i) => Some(i),
        FormFocus::Submit => Some(heights.len().saturating_sub(1)),
        FormFocus::TypeSelector => None,
    };
    let range = visible_fields(&heights, area.height, active);

    let mut constraints: Vec<Constraint> = range
        .clone()
        .map(|i| Constraint::Length(heights[i]))
        .collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (row, index) in range.enumerate() {
        let field = &form.fields()[index];
        let box_height = field_height(field);
        let row_area = rows[row];
        let box_area = Rect {
            height: box_height.min(row_area.height),
            ..row_area
        };
        let is_active = focused && form.focus == FormFocus::Field(index);
        draw_field(frame, box_area, field, form.value(&field.name), is_active);

        if form.is_missing(field) && row_area.height > box_height {
            let warning_area = Rect {
                y: row_area.y + box_height,
                height: 1,
                ..row_area
            };
            draw_required_warning(frame, warning_area);
        }
    }
}

fn draw_progress(frame: &mut Frame, area: Rect, app: &App) {
    let gauge_state = &app.state.gauge;
    let ratio = (gauge_state.value() / 100.0).clamp(0.0, 1.0);
    // Label shows the settled value while the bar eases toward it
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
        .ratio(ratio)
        .label(format!("{}% Complete", gauge_state.target().round() as u32));
    let gauge_area = Rect { height: 1, ..area };
    frame.render_widget(gauge, gauge_area);
}

/// Range of fields that fit in `capacity` rows while keeping `active` visible
pub(crate) fn visible_fields(heights: &[u16], capacity: u16, active: Option<usize>) -> Range<usize> {
    if heights.is_empty() {
        return 0..0;
    }
    let active = active.unwrap_or(0).min(heights.len() - 1);

    let mut start = 0;
    while start < active && heights[start..=active].iter().sum::<u16>() > capacity {
        start += 1;
    }

    let mut end = start;
    let mut used = 0u16;
    while end < heights.len() && used + heights[end] <= capacity {
        used += heights[end];
        end += 1;
    }
    // Always show the active field, clipped if it alone overflows
    start..end.max(start + 1)
}
