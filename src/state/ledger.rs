//! Submission ledger: submitted records grouped by form type

use crate::error::FormError;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use uuid::Uuid;

/// Field name/value pairs in catalog field order
pub type RecordValues = Vec<(String, String)>;

/// Location of a record within the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRef {
    pub form_type: String,
    pub index: usize,
}

impl RecordRef {
    pub fn new(form_type: &str, index: usize) -> Self {
        Self {
            form_type: form_type.to_string(),
            index,
        }
    }
}

/// A single submitted form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_ordered")]
    pub values: RecordValues,
}

impl Record {
    pub fn new(values: RecordValues) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            values,
        }
    }

    /// Value stored under `key`, if the record has that column
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Pretty JSON for the clipboard
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn serialize_ordered<S>(values: &RecordValues, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(values.iter().map(|(k, v)| (k, v)))
}

/// All records submitted for one form type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerGroup {
    pub form_type: String,
    pub records: Vec<Record>,
}

impl LedgerGroup {
    /// Union of keys across every record, in first-seen order
    pub fn columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = Vec::new();
        for record in &self.records {
            for (key, _) in &record.values {
                if !columns.contains(&key.as_str()) {
                    columns.push(key);
                }
            }
        }
        columns
    }
}

/// In-memory ledger; groups iterate in first-insertion order
#[derive(Debug, Clone, Default)]
pub struct SubmissionLedger {
    groups: Vec<LedgerGroup>,
}

impl SubmissionLedger {
    pub fn groups(&self) -> &[LedgerGroup] {
        &self.groups
    }

    pub fn group(&self, form_type: &str) -> Option<&LedgerGroup> {
        self.groups.iter().find(|g| g.form_type == form_type)
    }

    /// Records for a form type (empty when nothing was submitted)
    pub fn records(&self, form_type: &str) -> &[Record] {
        self.group(form_type)
            .map(|g| g.records.as_slice())
            .unwrap_or(&[])
    }

    pub fn get(&self, target: &RecordRef) -> Option<&Record> {
        self.records(&target.form_type).get(target.index)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total records across all groups
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }

    /// Append a record, creating the group on first use
    pub fn append(&mut self, form_type: &str, values: RecordValues) -> RecordRef {
        let record = Record::new(values);
        let group = match self.groups.iter().position(|g| g.form_type == form_type) {
            Some(pos) => &mut self.groups[pos],
            None => {
                self.groups.push(LedgerGroup {
                    form_type: form_type.to_string(),
                    records: Vec::new(),
                });
                let last = self.groups.len() - 1;
                &mut self.groups[last]
            }
        };
        group.records.push(record);
        RecordRef::new(form_type, group.records.len() - 1)
    }

    /// Replace a record's values in place, keeping its id
    pub fn update(&mut self, target: &RecordRef, values: RecordValues) -> Result<(), FormError> {
        let record = self
            .groups
            .iter_mut()
            .find(|g| g.form_type == target.form_type)
            .and_then(|g| g.records.get_mut(target.index))
            .ok_or_else(|| not_found(target))?;
        record.values = values;
        record.submitted_at = Utc::now();
        Ok(())
    }

    /// Remove a record; a group left empty is dropped
    pub fn remove(&mut self, target: &RecordRef) -> Result<Record, FormError> {
        let pos = self
            .groups
            .iter()
            .position(|g| g.form_type == target.form_type)
            .ok_or_else(|| not_found(target))?;
        let group = &mut self.groups[pos];
        if target.index >= group.records.len() {
            return Err(not_found(target));
        }
        let removed = group.records.remove(target.index);
        if group.records.is_empty() {
            self.groups.remove(pos);
        }
        Ok(removed)
    }

    /// Map a row number counted across all tables to a record
    pub fn row_at(&self, row: usize) -> Option<RecordRef> {
        let mut remaining = row;
        for group in &self.groups {
            if remaining < group.records.len() {
                return Some(RecordRef::new(&group.form_type, remaining));
            }
            remaining -= group.records.len();
        }
        None
    }
}

fn not_found(target: &RecordRef) -> FormError {
    FormError::RecordNotFound {
        form_type: target.form_type.clone(),
        index: target.index,
    }
}
