//! Submitted data pane: one table per form type

use crate::app::App;
use crate::state::{LedgerGroup, Pane};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

const ACTIONS_HEADER: &str = "Actions";
const ACTIONS_HINT: &str = "[e] Edit  [d] Delete";

/// Draw the ledger pane
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.state.pane == Pane::Ledger;
    let ledger = &app.state.session.ledger;

    let title = if ledger.is_empty() {
        " Submitted Data ".to_string()
    } else {
        format!(" Submitted Data ({}) ", ledger.len())
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if ledger.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No submissions yet.",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(empty, inner);
        return;
    }

    let selected = app
        .state
        .selected_record()
        .filter(|_| focused);
    let groups = ledger.groups();
    let heights: Vec<u16> = groups.iter().map(group_height).collect();
    let selected_group = selected
        .as_ref()
        .and_then(|target| groups.iter().position(|g| g.form_type == target.form_type))
        .unwrap_or(0);
    let first = first_visible_group(&heights, inner.height, selected_group);

    let mut constraints: Vec<Constraint> = heights[first..]
        .iter()
        .map(|h| Constraint::Length(*h))
        .collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (chunk, group) in chunks.iter().zip(&groups[first..]) {
        let selected_row = selected
            .as_ref()
            .filter(|target| target.form_type == group.form_type)
            .map(|target| target.index);
        draw_group(frame, *chunk, group, selected_row);
    }
}

/// Title, header, rows and a blank separator
fn group_height(group: &LedgerGroup) -> u16 {
    group.records.len() as u16 + 3
}

/// First group to draw so the selected group's table fits below it
fn first_visible_group(heights: &[u16], capacity: u16, selected: usize) -> usize {
    let mut first = 0;
    while first < selected && heights[first..=selected].iter().sum::<u16>() > capacity {
        first += 1;
    }
    first
}

fn draw_group(frame: &mut Frame, area: Rect, group: &LedgerGroup, selected_row: Option<usize>) {
    let title_area = Rect { height: 1, ..area };
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            group.form_type.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" ({})", group.records.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(title, title_area);

    let columns = group.columns();
    let header = Row::new(
        columns
            .iter()
            .map(|c| Cell::from(c.to_string()))
            .chain(std::iter::once(Cell::from(ACTIONS_HEADER))),
    )
    .style(Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED));

    let rows = table_rows(group)
        .into_iter()
        .enumerate()
        .map(|(index, cells)| {
            let is_selected = selected_row == Some(index);
            let actions = if is_selected { ACTIONS_HINT } else { "" };
            let row = Row::new(
                cells
                    .into_iter()
                    .map(Cell::from)
                    .chain(std::iter::once(Cell::from(actions))),
            );
            if is_selected {
                row.style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::REVERSED),
                )
            } else {
                row
            }
        });

    let widths: Vec<Constraint> = columns
        .iter()
        .map(|_| Constraint::Fill(1))
        .chain(std::iter::once(Constraint::Length(ACTIONS_HINT.len() as u16)))
        .collect();

    let table_area = Rect {
        y: area.y + 1,
        height: area.height.saturating_sub(2),
        ..area
    };
    frame.render_widget(Table::new(rows, widths).header(header), table_area);
}

/// Cell text for each record under the group's columns; missing keys are blank
pub(crate) fn table_rows(group: &LedgerGroup) -> Vec<Vec<String>> {
    let columns = group.columns();
    group
        .records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| record.get(column).unwrap_or("").replace('\n', " ⏎ "))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Record;
    use pretty_assertions::assert_eq;

    fn record(pairs: &[(&str, &str)]) -> Record {
        Record::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_rows_fill_missing_columns() {
        let group = LedgerGroup {
            form_type: "Contact".to_string(),
            records: vec![
                record(&[("name", "Ana"), ("email", "a@x.com")]),
                record(&[("name", "Ben"), ("phone", "555")]),
            ],
        };
        assert_eq!(
            table_rows(&group),
            vec![
                vec!["Ana".to_string(), "a@x.com".to_string(), String::new()],
                vec!["Ben".to_string(), String::new(), "555".to_string()],
            ]
        );
    }

    #[test]
    fn test_rows_flatten_newlines() {
        let group = LedgerGroup {
            form_type: "Contact".to_string(),
            records: vec![record(&[("message", "hi\nthere")])],
        };
        assert_eq!(table_rows(&group), vec![vec!["hi ⏎ there".to_string()]]);
    }

    #[test]
    fn test_first_visible_group_scrolls_to_selection() {
        assert_eq!(first_visible_group(&[5, 5, 5], 20, 2), 0);
        assert_eq!(first_visible_group(&[5, 5, 5], 10, 2), 1);
        assert_eq!(first_visible_group(&[5, 5, 5], 4, 2), 2);
    }
}
