//! Form session: the active form plus the ledger it submits into

use crate::catalog::FormCatalog;
use crate::error::FormError;
use crate::notify::NotificationSink;
use crate::state::{ActiveForm, FieldDescriptor, Record, RecordRef, SubmissionLedger};
use serde::{Deserialize, Serialize};

pub const SUBMITTED_MESSAGE: &str = "Form submitted successfully!";
pub const UPDATED_MESSAGE: &str = "Record updated successfully!";

/// How missing required values are treated on submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitPolicy {
    /// Refuse to submit while a required field is empty
    #[default]
    Strict,
    /// Submit whatever has been entered
    Lenient,
}

/// Result of a successful submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Appended(RecordRef),
    Updated(RecordRef),
}

/// All form data for one run of the application
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    pub form: ActiveForm,
    pub ledger: SubmissionLedger,
    pub policy: SubmitPolicy,
}

impl FormSession {
    pub fn new(policy: SubmitPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn select_type(&mut self, catalog: &dyn FormCatalog, form_type: &str) {
        tracing::debug!("Selecting form type {form_type:?}");
        self.form.select_type(catalog, form_type);
    }

    /// Move the current values into the ledger and reset the form
    pub fn submit(
        &mut self,
        notifier: &mut dyn NotificationSink,
    ) -> Result<SubmitOutcome, FormError> {
        let form_type = match self.form.selected_type() {
            Some(t) if self.form.can_submit() => t.to_string(),
            _ => return Err(FormError::NoTypeSelected),
        };

        if self.policy == SubmitPolicy::Strict {
            let missing: Vec<String> = self
                .form
                .missing_required()
                .iter()
                .map(|f| f.label.clone())
                .collect();
            if !missing.is_empty() {
                tracing::warn!("Refusing {form_type} submit, missing {missing:?}");
                return Err(FormError::MissingRequired { fields: missing });
            }
        }

        let values = self.form.snapshot();
        let (outcome, message) = match self.form.editing().cloned() {
            Some(target) => {
                self.ledger.update(&target, values)?;
                tracing::info!("Updated {} record {}", target.form_type, target.index);
                (SubmitOutcome::Updated(target), UPDATED_MESSAGE)
            }
            None => {
                let at = self.ledger.append(&form_type, values);
                tracing::info!("Submitted {} record {}", at.form_type, at.index);
                (SubmitOutcome::Appended(at), SUBMITTED_MESSAGE)
            }
        };

        self.form.reset();
        notifier.success(message);
        Ok(outcome)
    }

    /// Load a ledger record into the form; the next submit overwrites it
    pub fn begin_edit(
        &mut self,
        catalog: &dyn FormCatalog,
        target: RecordRef,
    ) -> Result<(), FormError> {
        let record = self.ledger.get(&target).ok_or_else(|| FormError::RecordNotFound {
            form_type: target.form_type.clone(),
            index: target.index,
        })?;
        let fields = catalog
            .lookup(&target.form_type)
            .unwrap_or_else(|| fields_from_record(record));
        let values = record.values.clone();
        tracing::debug!("Editing {} record {}", target.form_type, target.index);
        self.form.load_record(target, fields, &values);
        Ok(())
    }

    /// Leave edit mode and clear the form
    pub fn cancel_edit(&mut self) {
        if self.form.editing().is_some() {
            self.form.reset();
        }
    }

    /// Delete a record and keep any in-progress edit pointing at the right row
    pub fn remove_record(&mut self, target: &RecordRef) -> Result<Record, FormError> {
        let removed = self.ledger.remove(target)?;
        self.form.record_removed(target);
        tracing::info!("Deleted {} record {}", target.form_type, target.index);
        Ok(removed)
    }
}

/// Plain text fields for a record whose type has left the catalog
fn fields_from_record(record: &Record) -> Vec<FieldDescriptor> {
    record
        .values
        .iter()
        .map(|(name, _)| FieldDescriptor::text(name, name, false))
        .collect()
}
