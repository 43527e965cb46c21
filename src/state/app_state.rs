//! Application state definitions

use super::{FormSession, GaugeAnimation, RecordRef, SubmitPolicy};
use std::collections::VecDeque;

/// Which half of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Form,
    Ledger,
}

impl Pane {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Form => Self::Ledger,
            Self::Ledger => Self::Form,
        };
    }
}

/// What an open selection popup is choosing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    /// The form type selector
    FormType,
    /// Options of the dropdown field at this index
    FieldOptions(usize),
}

/// Open selection list; entry 0 is always the "Select ..." placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectPopup {
    pub kind: PopupKind,
    pub selected: usize,
    pub len: usize,
}

impl SelectPopup {
    pub fn new(kind: PopupKind, selected: usize, len: usize) -> Self {
        Self {
            kind,
            selected: selected.min(len.saturating_sub(1)),
            len,
        }
    }

    pub fn move_down(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Chosen entry with the placeholder mapped to `None`
    pub fn choice(&self) -> Option<usize> {
        self.selected.checked_sub(1)
    }
}

/// Pending ledger row deletion awaiting confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeleteAction {
    pub target: RecordRef,
    /// Short description of the row shown in the dialog
    pub summary: String,
    /// true = Delete, false = Cancel
    pub selected_option: bool,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub session: FormSession,
    pub pane: Pane,
    pub popup: Option<SelectPopup>,
    pub ledger_selected: usize,
    pub pending_delete: Option<PendingDeleteAction>,
    pub error_queue: VecDeque<String>,
    pub gauge: GaugeAnimation,
    /// Transient status bar message (e.g. clipboard feedback)
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(policy: SubmitPolicy) -> Self {
        Self {
            session: FormSession::new(policy),
            ..Default::default()
        }
    }

    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// Ledger row under the cursor
    pub fn selected_record(&self) -> Option<RecordRef> {
        self.session.ledger.row_at(self.ledger_selected)
    }

    /// Move ledger selection down
    pub fn move_selection_down(&mut self) {
        let max = self.session.ledger.len();
        if max > 0 && self.ledger_selected < max - 1 {
            self.ledger_selected += 1;
        }
    }

    /// Move ledger selection up
    pub fn move_selection_up(&mut self) {
        self.ledger_selected = self.ledger_selected.saturating_sub(1);
    }

    /// Keep the selection inside the ledger after rows disappear
    pub fn clamp_selection(&mut self) {
        let max = self.session.ledger.len();
        self.ledger_selected = self.ledger_selected.min(max.saturating_sub(1));
    }

    /// Point the gauge animation at the form's current completion
    pub fn sync_gauge(&mut self) {
        let target = self.session.form.completion_percent();
        self.gauge.retarget(target);
    }
}
