//! Trait abstraction for the form catalog to enable mocking in tests

use crate::state::FieldDescriptor;

/// Read-only source of form schemas keyed by form type name
#[cfg_attr(test, mockall::automock)]
pub trait FormCatalog {
    /// Form type names in display order
    fn type_names(&self) -> Vec<String>;

    /// Field list for a form type, `None` when the type is unknown
    fn lookup(&self, form_type: &str) -> Option<Vec<FieldDescriptor>>;
}
