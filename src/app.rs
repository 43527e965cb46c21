//! Application state and core logic

use crate::catalog::FormCatalog;
use crate::config::TuiConfig;
use crate::notify::NotificationSink;
use crate::state::{
    AppState, FormFocus, Pane, PendingDeleteAction, PopupKind, RecordRef, SelectPopup,
    SubmitOutcome, Toasts,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Source of form schemas
    pub catalog: Box<dyn FormCatalog>,
    /// Success notifications
    pub toasts: Toasts,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(catalog: Box<dyn FormCatalog>, config: &TuiConfig) -> Self {
        Self {
            state: AppState::new(config.policy()),
            catalog,
            toasts: Toasts::new(config.toast_ttl()),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Advance time-based state (toast expiry)
    pub fn tick(&mut self) {
        self.toasts.expire();
    }

    /// Whether something on screen is animating and needs fast redraws
    pub fn is_animating(&self) -> bool {
        self.state.gauge.is_running()
    }

    /// Form type names offered by the selector, in catalog order
    pub fn form_type_names(&self) -> Vec<String> {
        self.catalog.type_names()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Handle delete confirmation (modal)
        if self.state.pending_delete.is_some() {
            self.handle_delete_dialog_key(key);
            return Ok(());
        }

        if self.state.popup.is_some() {
            self.handle_popup_key(key);
            self.state.sync_gauge();
            return Ok(());
        }

        self.state.status_message = None;
        if key.code == KeyCode::Char('l')
            && key
                .modifiers
                .intersects(KeyModifiers::CONTROL | crate::platform::COPY_MODIFIER)
        {
            self.state.pane.toggle();
            return Ok(());
        }

        match self.state.pane {
            Pane::Form => self.handle_form_key(key),
            Pane::Ledger => self.handle_ledger_key(key)?,
        }
        self.state.sync_gauge();
        Ok(())
    }

    /// Handle keys while the form pane is focused
    fn handle_form_key(&mut self, key: KeyEvent) {
        let focus = self.state.session.form.focus;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.session.form.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.state.session.form.prev_focus(),
            // Submit shortcuts (work from anywhere)
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('w') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.submit()
            }
            KeyCode::Char('u') if ctrl => self.state.session.form.clear_active_field(),
            KeyCode::Esc => {
                if self.state.session.form.editing().is_some() {
                    self.state.session.cancel_edit();
                    self.state.status_message = Some("Edit cancelled".to_string());
                } else {
                    self.state.session.form.focus = FormFocus::TypeSelector;
                }
            }
            KeyCode::Enter => match focus {
                FormFocus::TypeSelector => self.open_type_popup(),
                FormFocus::Field(index) => {
                    let is_dropdown = self
                        .state
                        .session
                        .form
                        .fields()
                        .get(index)
                        .is_some_and(|f| f.is_dropdown());
                    if is_dropdown {
                        self.open_option_popup(index);
                    } else if !self.state.session.form.push_newline() {
                        self.state.session.form.next_focus();
                    }
                }
                FormFocus::Submit => self.submit(),
            },
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.state.session.form.push_char(c);
            }
            KeyCode::Backspace => self.state.session.form.pop_char(),
            _ => {}
        }
    }

    fn open_type_popup(&mut self) {
        let names = self.form_type_names();
        let current = self
            .state
            .session
            .form
            .selected_type()
            .and_then(|t| names.iter().position(|n| n == t))
            .map_or(0, |i| i + 1);
        self.state.popup = Some(SelectPopup::new(
            PopupKind::FormType,
            current,
            names.len() + 1,
        ));
    }

    fn open_option_popup(&mut self, field_index: usize) {
        let form = &self.state.session.form;
        let Some(field) = form.fields().get(field_index) else {
            return;
        };
        let current = field
            .option_index(form.value(&field.name))
            .map_or(0, |i| i + 1);
        let len = field.options.len() + 1;
        self.state.popup = Some(SelectPopup::new(
            PopupKind::FieldOptions(field_index),
            current,
            len,
        ));
    }

    /// Handle keys while a selection popup is open
    fn handle_popup_key(&mut self, key: KeyEvent) {
        let Some(popup) = self.state.popup.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => popup.move_up(),
            KeyCode::Down | KeyCode::Char('j') => popup.move_down(),
            KeyCode::Esc => self.state.popup = None,
            KeyCode::Enter => {
                if let Some(popup) = self.state.popup.take() {
                    self.apply_popup_choice(&popup);
                }
            }
            _ => {}
        }
    }

    fn apply_popup_choice(&mut self, popup: &SelectPopup) {
        match popup.kind {
            PopupKind::FormType => {
                let name = popup
                    .choice()
                    .and_then(|i| self.form_type_names().get(i).cloned())
                    .unwrap_or_default();
                // Re-confirming the current type keeps values and any record edit
                if self.state.session.form.selected_type().unwrap_or("") == name {
                    return;
                }
                self.state.session.select_type(self.catalog.as_ref(), &name);
            }
            PopupKind::FieldOptions(index) => {
                self.state.session.form.select_option(index, popup.choice());
            }
        }
    }

    /// Submit the active form into the ledger
    fn submit(&mut self) {
        match self.state.session.submit(&mut self.toasts) {
            // Keep the ledger cursor on the row that was just written
            Ok(SubmitOutcome::Appended(target) | SubmitOutcome::Updated(target)) => {
                if let Some(row) = self.row_of(&target) {
                    self.state.ledger_selected = row;
                }
            }
            Err(err) => self.push_error(err.to_string()),
        }
    }

    /// Row number of a record counted across all ledger tables
    fn row_of(&self, target: &RecordRef) -> Option<usize> {
        let mut offset = 0;
        for group in self.state.session.ledger.groups() {
            if group.form_type == target.form_type {
                return (target.index < group.records.len()).then_some(offset + target.index);
            }
            offset += group.records.len();
        }
        None
    }

    /// Handle keys while the ledger pane is focused
    fn handle_ledger_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.state.move_selection_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Char('e') | KeyCode::Enter => self.edit_selected_record(),
            KeyCode::Char('d') | KeyCode::Delete => self.start_delete(),
            KeyCode::Char('y') => self.copy_selected_record()?,
            KeyCode::Esc => self.state.pane = Pane::Form,
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    fn edit_selected_record(&mut self) {
        let Some(target) = self.state.selected_record() else {
            return;
        };
        match self
            .state
            .session
            .begin_edit(self.catalog.as_ref(), target.clone())
        {
            Ok(()) => {
                self.state.pane = Pane::Form;
                self.state.status_message = Some(format!(
                    "Editing {} row {}",
                    target.form_type,
                    target.index + 1
                ));
            }
            Err(err) => self.push_error(err.to_string()),
        }
    }

    fn start_delete(&mut self) {
        let Some(target) = self.state.selected_record() else {
            return;
        };
        let summary = self
            .state
            .session
            .ledger
            .get(&target)
            .and_then(|r| r.values.iter().map(|(_, v)| v).find(|v| !v.is_empty()))
            .cloned()
            .unwrap_or_else(|| "(empty record)".to_string());
        self.state.pending_delete = Some(PendingDeleteAction {
            target,
            summary,
            selected_option: false,
        });
    }

    /// Handle keys in the delete confirmation dialog
    fn handle_delete_dialog_key(&mut self, key: KeyEvent) {
        let Some(pending) = self.state.pending_delete.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::Char('j')
            | KeyCode::Char('k') => pending.selected_option = !pending.selected_option,
            KeyCode::Enter => {
                if pending.selected_option {
                    self.confirm_delete();
                } else {
                    self.state.pending_delete = None;
                }
            }
            KeyCode::Char('y') => self.confirm_delete(),
            KeyCode::Esc | KeyCode::Char('n') => self.state.pending_delete = None,
            _ => {}
        }
    }

    fn confirm_delete(&mut self) {
        let Some(pending) = self.state.pending_delete.take() else {
            return;
        };
        match self.state.session.remove_record(&pending.target) {
            Ok(_) => {
                self.state.clamp_selection();
                self.toasts.success("Record deleted");
            }
            Err(err) => self.push_error(err.to_string()),
        }
    }

    fn copy_selected_record(&mut self) -> Result<()> {
        let Some(target) = self.state.selected_record() else {
            return Ok(());
        };
        let Some(record) = self.state.session.ledger.get(&target) else {
            return Ok(());
        };
        let json = record.to_json()?;
        match self.copy_to_clipboard(&json) {
            Ok(()) => {
                self.state.status_message = Some(format!(
                    "Copied {} row {}",
                    target.form_type,
                    target.index + 1
                ));
            }
            Err(err) => self.push_error(format!("Failed to copy: {err}")),
        }
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
