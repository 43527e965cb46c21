//! Active form state: selected type, fields, values and completion

use super::field::FieldDescriptor;
use crate::catalog::FormCatalog;
use crate::error::FormError;
use crate::state::{RecordRef, RecordValues};
use std::collections::HashMap;

/// Percentage of required fields holding a non-empty value.
///
/// Defined as 0 when the field set has no required fields.
pub fn completion_percent(fields: &[FieldDescriptor], values: &HashMap<String, String>) -> f64 {
    let total = fields.iter().filter(|f| f.required).count();
    if total == 0 {
        return 0.0;
    }
    let filled = fields
        .iter()
        .filter(|f| f.required && values.get(&f.name).is_some_and(|v| !v.is_empty()))
        .count();
    100.0 * filled as f64 / total as f64
}

/// Which control of the form has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    TypeSelector,
    Field(usize),
    Submit,
}

/// The form currently being filled in
#[derive(Debug, Clone, Default)]
pub struct ActiveForm {
    selected_type: Option<String>,
    fields: Vec<FieldDescriptor>,
    values: HashMap<String, String>,
    completion: f64,
    editing: Option<RecordRef>,
    pub focus: FormFocus,
}

impl ActiveForm {
    pub fn selected_type(&self) -> Option<&str> {
        self.selected_type.as_deref()
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn completion_percent(&self) -> f64 {
        self.completion
    }

    /// Ledger record this form will overwrite on submit
    pub fn editing(&self) -> Option<&RecordRef> {
        self.editing.as_ref()
    }

    /// Submit is only offered while there are fields to fill
    pub fn can_submit(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Switch to a form type. Always discards current values.
    ///
    /// An empty name clears the selection; an unknown name yields no fields.
    pub fn select_type(&mut self, catalog: &dyn FormCatalog, form_type: &str) {
        let fields = if form_type.is_empty() {
            Vec::new()
        } else {
            catalog.lookup(form_type).unwrap_or_default()
        };
        if !form_type.is_empty() && fields.is_empty() {
            tracing::debug!("Form type {form_type:?} has no fields in catalog");
        }

        self.selected_type = (!form_type.is_empty()).then(|| form_type.to_string());
        self.fields = fields;
        self.values.clear();
        self.completion = 0.0;
        self.editing = None;
        self.focus = if self.fields.is_empty() {
            FormFocus::TypeSelector
        } else {
            FormFocus::Field(0)
        };
    }

    /// Populate the form from an existing ledger record for editing
    pub fn load_record(
        &mut self,
        target: RecordRef,
        fields: Vec<FieldDescriptor>,
        values: &RecordValues,
    ) {
        self.selected_type = Some(target.form_type.clone());
        self.values = values
            .iter()
            .filter(|(k, _)| fields.iter().any(|f| &f.name == k))
            .cloned()
            .collect();
        self.fields = fields;
        self.recompute();
        self.focus = if self.fields.is_empty() {
            FormFocus::TypeSelector
        } else {
            FormFocus::Field(0)
        };
        self.editing = Some(target);
    }

    /// Adjust or drop the edit target after a ledger row was removed
    pub fn record_removed(&mut self, removed: &RecordRef) {
        let Some(target) = self.editing.as_mut() else {
            return;
        };
        if target.form_type != removed.form_type {
            return;
        }
        if target.index == removed.index {
            self.editing = None;
        } else if target.index > removed.index {
            target.index -= 1;
        }
    }

    /// Clear everything back to "no type selected"
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Write a field value and recompute completion in the same step
    pub fn set_value(&mut self, name: &str, value: String) -> Result<(), FormError> {
        if !self.fields.iter().any(|f| f.name == name) {
            return Err(FormError::UnknownField(name.to_string()));
        }
        self.values.insert(name.to_string(), value);
        self.recompute();
        Ok(())
    }

    fn recompute(&mut self) {
        self.completion = completion_percent(&self.fields, &self.values);
    }

    /// Whether a required field is still empty (drives the inline warning)
    pub fn is_missing(&self, field: &FieldDescriptor) -> bool {
        field.required && self.value(&field.name).is_empty()
    }

    /// Required fields without a value, in field order
    pub fn missing_required(&self) -> Vec<&FieldDescriptor> {
        self.fields.iter().filter(|f| self.is_missing(f)).collect()
    }

    /// Touched values in catalog field order
    pub fn snapshot(&self) -> RecordValues {
        self.fields
            .iter()
            .filter_map(|f| {
                self.values
                    .get(&f.name)
                    .map(|v| (f.name.clone(), v.clone()))
            })
            .collect()
    }

    pub fn active_field(&self) -> Option<&FieldDescriptor> {
        match self.focus {
            FormFocus::Field(i) => self.fields.get(i),
            _ => None,
        }
    }

    /// Type a character into the focused field; returns false when rejected
    pub fn push_char(&mut self, c: char) -> bool {
        let Some(field) = self.active_field() else {
            return false;
        };
        if !field.kind.accepts(c) {
            return false;
        }
        let name = field.name.clone();
        let mut value = self.value(&name).to_string();
        value.push(c);
        self.set_value(&name, value).is_ok()
    }

    /// Insert a line break into a multiline field
    pub fn push_newline(&mut self) -> bool {
        match self.active_field() {
            Some(field) if field.kind.is_multiline() => {
                let name = field.name.clone();
                let value = format!("{}\n", self.value(&name));
                self.set_value(&name, value).is_ok()
            }
            _ => false,
        }
    }

    /// Delete the last character of the focused field
    pub fn pop_char(&mut self) {
        let Some(field) = self.active_field() else {
            return;
        };
        if field.is_dropdown() {
            return;
        }
        let name = field.name.clone();
        let mut value = self.value(&name).to_string();
        if value.pop().is_some() {
            let _ = self.set_value(&name, value);
        }
    }

    /// Empty the focused field
    pub fn clear_active_field(&mut self) {
        if let Some(name) = self.active_field().map(|f| f.name.clone()) {
            let _ = self.set_value(&name, String::new());
        }
    }

    /// Choose a dropdown option for a field; `None` picks the placeholder
    pub fn select_option(&mut self, field_index: usize, option: Option<usize>) {
        let Some(field) = self.fields.get(field_index) else {
            return;
        };
        let value = option
            .and_then(|i| field.options.get(i))
            .cloned()
            .unwrap_or_default();
        let name = field.name.clone();
        let _ = self.set_value(&name, value);
    }

    /// Move focus forward: selector, each field, then the submit button
    pub fn next_focus(&mut self) {
        let count = self.fields.len();
        self.focus = match self.focus {
            _ if count == 0 => FormFocus::TypeSelector,
            FormFocus::TypeSelector => FormFocus::Field(0),
            FormFocus::Field(i) if i + 1 < count => FormFocus::Field(i + 1),
            FormFocus::Field(_) => FormFocus::Submit,
            FormFocus::Submit => FormFocus::TypeSelector,
        };
    }

    pub fn prev_focus(&mut self) {
        let count = self.fields.len();
        self.focus = match self.focus {
            _ if count == 0 => FormFocus::TypeSelector,
            FormFocus::TypeSelector => FormFocus::Submit,
            FormFocus::Field(0) => FormFocus::TypeSelector,
            FormFocus::Field(i) => FormFocus::Field(i - 1),
            FormFocus::Submit => FormFocus::Field(count - 1),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MockFormCatalog, StaticCatalog};
    use crate::state::FieldKind;

    fn contact_fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::text("name", "Name", true),
            FieldDescriptor::new("email", "Email", FieldKind::Email, true),
            FieldDescriptor::new("phone", "Phone", FieldKind::Tel, false),
            FieldDescriptor::dropdown("topic", "Topic", false, &["Sales", "Support"]),
        ]
    }

    fn contact_form() -> ActiveForm {
        let mut catalog = MockFormCatalog::new();
        catalog
            .expect_lookup()
            .returning(|_| Some(contact_fields()));
        let mut form = ActiveForm::default();
        form.select_type(&catalog, "Contact");
        form
    }

    mod completion {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_zero_required_fields_is_zero_not_nan() {
            let fields = vec![FieldDescriptor::text("nick", "Nickname", false)];
            let mut values = HashMap::new();
            values.insert("nick".to_string(), "ana".to_string());
            let pct = completion_percent(&fields, &values);
            assert_eq!(pct, 0.0);
            assert!(!pct.is_nan());
        }

        #[test]
        fn test_empty_field_list_is_zero() {
            assert_eq!(completion_percent(&[], &HashMap::new()), 0.0);
        }

        #[test]
        fn test_ratio_of_filled_required() {
            let mut form = contact_form();
            form.set_value("name", "Ana".into()).unwrap();
            assert_eq!(form.completion_percent(), 50.0);
            form.set_value("email", "a@x.com".into()).unwrap();
            assert_eq!(form.completion_percent(), 100.0);
        }

        #[test]
        fn test_optional_fields_do_not_count() {
            let mut form = contact_form();
            form.set_value("phone", "555".into()).unwrap();
            assert_eq!(form.completion_percent(), 0.0);
        }

        #[test]
        fn test_clearing_required_field_decreases() {
            let mut form = contact_form();
            form.set_value("name", "Ana".into()).unwrap();
            form.set_value("email", "a@x.com".into()).unwrap();
            form.set_value("email", String::new()).unwrap();
            assert_eq!(form.completion_percent(), 50.0);
        }

        #[test]
        fn test_tracks_every_edit() {
            let mut form = contact_form();
            for c in "Ana".chars() {
                assert!(form.push_char(c));
                assert_eq!(form.completion_percent(), 50.0);
            }
            for _ in 0..3 {
                form.pop_char();
            }
            assert_eq!(form.completion_percent(), 0.0);
        }
    }

    mod select_type {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_unknown_type_yields_no_fields() {
            let catalog = StaticCatalog::default();
            let mut form = ActiveForm::default();
            form.select_type(&catalog, "Nope");
            assert!(form.fields().is_empty());
            assert_eq!(form.completion_percent(), 0.0);
            assert!(!form.can_submit());
            assert_eq!(form.focus, FormFocus::TypeSelector);
        }

        #[test]
        fn test_empty_name_clears_selection() {
            let mut form = contact_form();
            form.select_type(&StaticCatalog::default(), "");
            assert_eq!(form.selected_type(), None);
        }

        #[test]
        fn test_switching_type_discards_values() {
            let mut form = contact_form();
            form.set_value("name", "Ana".into()).unwrap();
            let mut other = MockFormCatalog::new();
            other
                .expect_lookup()
                .returning(|_| Some(vec![FieldDescriptor::text("city", "City", true)]));
            form.select_type(&other, "Address");
            assert_eq!(form.selected_type(), Some("Address"));
            assert_eq!(form.value("name"), "");
            assert!(form.snapshot().is_empty());
            assert_eq!(form.completion_percent(), 0.0);
        }

        #[test]
        fn test_focuses_first_field() {
            let form = contact_form();
            assert_eq!(form.focus, FormFocus::Field(0));
            assert_eq!(form.active_field().unwrap().name, "name");
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_unknown_field_errors() {
            let mut form = contact_form();
            let err = form.set_value("age", "3".into()).unwrap_err();
            assert_eq!(err, FormError::UnknownField("age".to_string()));
        }

        #[test]
        fn test_push_char_respects_kind() {
            let mut form = contact_form();
            form.focus = FormFocus::Field(2);
            assert!(!form.push_char('x'));
            assert!(form.push_char('5'));
            assert_eq!(form.value("phone"), "5");
        }

        #[test]
        fn test_push_char_without_field_focus() {
            let mut form = contact_form();
            form.focus = FormFocus::Submit;
            assert!(!form.push_char('a'));
        }

        #[test]
        fn test_newline_only_in_multiline() {
            let mut form = contact_form();
            assert!(!form.push_newline());
        }

        #[test]
        fn test_clear_active_field() {
            let mut form = contact_form();
            form.push_char('A');
            form.clear_active_field();
            assert_eq!(form.value("name"), "");
            assert!(form.is_missing(&form.fields()[0].clone()));
        }

        #[test]
        fn test_select_option_and_placeholder() {
            let mut form = contact_form();
            form.select_option(3, Some(1));
            assert_eq!(form.value("topic"), "Support");
            form.select_option(3, None);
            assert_eq!(form.value("topic"), "");
        }

        #[test]
        fn test_missing_required_in_field_order() {
            let form = contact_form();
            let names: Vec<_> = form.missing_required().iter().map(|f| f.name.as_str()).collect();
            assert_eq!(names, vec!["name", "email"]);
        }

        #[test]
        fn test_snapshot_only_touched_in_field_order() {
            let mut form = contact_form();
            form.set_value("email", "a@x.com".into()).unwrap();
            form.set_value("name", "Ana".into()).unwrap();
            assert_eq!(
                form.snapshot(),
                vec![
                    ("name".to_string(), "Ana".to_string()),
                    ("email".to_string(), "a@x.com".to_string()),
                ]
            );
        }
    }

    mod records {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_load_record_sets_edit_target() {
            let mut form = ActiveForm::default();
            let values = vec![
                ("name".to_string(), "Ana".to_string()),
                ("stale".to_string(), "x".to_string()),
            ];
            form.load_record(RecordRef::new("Contact", 2), contact_fields(), &values);
            assert_eq!(form.selected_type(), Some("Contact"));
            assert_eq!(form.value("name"), "Ana");
            assert_eq!(form.value("stale"), "");
            assert_eq!(form.completion_percent(), 50.0);
            assert_eq!(form.editing(), Some(&RecordRef::new("Contact", 2)));
        }

        #[test]
        fn test_record_removed_before_target_shifts_index() {
            let mut form = ActiveForm::default();
            form.load_record(RecordRef::new("Contact", 2), contact_fields(), &vec![]);
            form.record_removed(&RecordRef::new("Contact", 0));
            assert_eq!(form.editing(), Some(&RecordRef::new("Contact", 1)));
        }

        #[test]
        fn test_record_removed_at_target_stops_editing() {
            let mut form = ActiveForm::default();
            form.load_record(RecordRef::new("Contact", 1), contact_fields(), &vec![]);
            form.record_removed(&RecordRef::new("Contact", 1));
            assert!(form.editing().is_none());
        }

        #[test]
        fn test_record_removed_other_type_ignored() {
            let mut form = ActiveForm::default();
            form.load_record(RecordRef::new("Contact", 1), contact_fields(), &vec![]);
            form.record_removed(&RecordRef::new("Survey", 0));
            assert_eq!(form.editing(), Some(&RecordRef::new("Contact", 1)));
        }
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_focus_cycles_through_submit() {
            let mut form = contact_form();
            for i in 1..4 {
                form.next_focus();
                assert_eq!(form.focus, FormFocus::Field(i));
            }
            form.next_focus();
            assert_eq!(form.focus, FormFocus::Submit);
            form.next_focus();
            assert_eq!(form.focus, FormFocus::TypeSelector);
        }

        #[test]
        fn test_prev_focus_wraps_to_submit() {
            let mut form = contact_form();
            form.focus = FormFocus::TypeSelector;
            form.prev_focus();
            assert_eq!(form.focus, FormFocus::Submit);
            form.prev_focus();
            assert_eq!(form.focus, FormFocus::Field(3));
        }

        #[test]
        fn test_focus_stays_on_selector_without_fields() {
            let mut form = ActiveForm::default();
            form.next_focus();
            assert_eq!(form.focus, FormFocus::TypeSelector);
            form.prev_focus();
            assert_eq!(form.focus, FormFocus::TypeSelector);
        }
    }
}
