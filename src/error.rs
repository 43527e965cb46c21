//! Domain errors for form handling

use thiserror::Error;

/// Errors raised by form transitions and catalog loading
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("No form type selected")]
    NoTypeSelected,

    #[error("Missing required fields: {}", .fields.join(", "))]
    MissingRequired { fields: Vec<String> },

    #[error("No {form_type} record at row {}", .index + 1)]
    RecordNotFound { form_type: String, index: usize },

    #[error("Unknown field '{0}'")]
    UnknownField(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_lists_fields() {
        let err = FormError::MissingRequired {
            fields: vec!["Name".to_string(), "Email".to_string()],
        };
        assert_eq!(err.to_string(), "Missing required fields: Name, Email");
    }

    #[test]
    fn test_record_not_found_is_one_based() {
        let err = FormError::RecordNotFound {
            form_type: "Contact".to_string(),
            index: 0,
        };
        assert_eq!(err.to_string(), "No Contact record at row 1");
    }
}
