//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod ledger;
mod toast;

use crate::app::App;
use crate::state::PopupKind;
use components::{render_confirm_dialog, render_error_dialog, render_select_popup};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, ledger_area) = layout::create_layout(frame.area());

    forms::draw_dynamic_form(frame, form_area, app);
    ledger::draw(frame, ledger_area, app);
    layout::draw_status_bar(frame, app);

    // Overlays, topmost last
    draw_popup(frame, app);

    if let Some(toast) = app.toasts.current() {
        toast::draw(frame, toast);
    }

    if let Some(pending) = &app.state.pending_delete {
        render_confirm_dialog(frame, pending);
    }

    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    }
}

/// Draw the open selection popup, if any
fn draw_popup(frame: &mut Frame, app: &App) {
    let Some(popup) = &app.state.popup else {
        return;
    };
    let Some((title, items)) = popup_items(app, popup.kind) else {
        return;
    };
    render_select_popup(frame, &title, &items, popup.selected);
}

/// Popup title and entries, placeholder first
fn popup_items(app: &App, kind: PopupKind) -> Option<(String, Vec<String>)> {
    match kind {
        PopupKind::FormType => {
            let mut items = vec!["Select Form Type".to_string()];
            items.extend(app.form_type_names());
            Some(("Form Type".to_string(), items))
        }
        PopupKind::FieldOptions(index) => {
            let field = app.state.session.form.fields().get(index)?;
            let mut items = vec![field.placeholder()];
            items.extend(field.options.iter().cloned());
            Some((field.label.clone(), items))
        }
    }
}
