//! Built-in mock catalog shipped with the binary

use super::{FormTypeEntry, StaticCatalog};
use crate::state::{FieldDescriptor, FieldKind};

/// Mock form definitions used when no catalog file is configured
pub fn builtin_catalog() -> StaticCatalog {
    StaticCatalog::from_entries(vec![
        (
            "User Information".to_string(),
            FormTypeEntry {
                fields: vec![
                    FieldDescriptor::text("firstName", "First Name", true),
                    FieldDescriptor::text("lastName", "Last Name", true),
                    FieldDescriptor::new("age", "Age", FieldKind::Number, false),
                    FieldDescriptor::dropdown(
                        "gender",
                        "Gender",
                        false,
                        &["Male", "Female", "Other"],
                    ),
                ],
            },
        ),
        (
            "Address Information".to_string(),
            FormTypeEntry {
                fields: vec![
                    FieldDescriptor::text("street", "Street", true),
                    FieldDescriptor::text("city", "City", true),
                    FieldDescriptor::dropdown(
                        "state",
                        "State",
                        true,
                        &["California", "Texas", "New York"],
                    ),
                    FieldDescriptor::new("zipCode", "Zip Code", FieldKind::Number, false),
                ],
            },
        ),
        (
            "Payment Information".to_string(),
            FormTypeEntry {
                fields: vec![
                    FieldDescriptor::new("cardNumber", "Card Number", FieldKind::Number, true),
                    FieldDescriptor::new("expiryDate", "Expiry Date", FieldKind::Date, true),
                    FieldDescriptor::new("cvv", "CVV", FieldKind::Password, true),
                    FieldDescriptor::text("cardholderName", "Cardholder Name", true),
                ],
            },
        ),
        (
            "Contact".to_string(),
            FormTypeEntry {
                fields: vec![
                    FieldDescriptor::text("name", "Name", true),
                    FieldDescriptor::new("email", "Email", FieldKind::Email, true),
                    FieldDescriptor::new("phone", "Phone", FieldKind::Tel, false),
                    FieldDescriptor::new("message", "Message", FieldKind::Textarea, false),
                ],
            },
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FormCatalog;

    #[test]
    fn test_builtin_is_valid() {
        assert!(builtin_catalog().validate().is_ok());
    }

    #[test]
    fn test_builtin_contact_requires_name_and_email() {
        let fields = builtin_catalog().lookup("Contact").unwrap();
        let required: Vec<_> = fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(required, vec!["name", "email"]);
    }
}
