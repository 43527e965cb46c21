//! Form field descriptors

use serde::{Deserialize, Serialize};

/// Input kind for a catalog field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Number,
    Date,
    Tel,
    Password,
    Textarea,
    Dropdown,
}

impl FieldKind {
    /// Whether a typed character is accepted by this kind of input
    pub fn accepts(&self, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        match self {
            Self::Number => c.is_ascii_digit() || c == '-' || c == '.',
            Self::Date => c.is_ascii_digit() || c == '-',
            Self::Tel => c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'),
            // Dropdowns are only changed through their option list
            Self::Dropdown => false,
            Self::Text | Self::Email | Self::Password | Self::Textarea => true,
        }
    }

    /// Short hint shown in the field title
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Email => Some("email"),
            Self::Number => Some("number"),
            Self::Date => Some("YYYY-MM-DD"),
            Self::Tel => Some("phone"),
            _ => None,
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Textarea)
    }
}

/// Schema for a single input, sourced from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl FieldDescriptor {
    /// Create a free-text style field of the given kind
    pub fn new(name: &str, label: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required,
            options: Vec::new(),
        }
    }

    /// Create a plain text field
    pub fn text(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Text, required)
    }

    /// Create a dropdown field constrained to `options`
    pub fn dropdown(name: &str, label: &str, required: bool, options: &[&str]) -> Self {
        Self {
            options: options.iter().map(|o| o.to_string()).collect(),
            ..Self::new(name, label, FieldKind::Dropdown, required)
        }
    }

    pub fn is_dropdown(&self) -> bool {
        self.kind == FieldKind::Dropdown
    }

    /// Placeholder entry shown before the options of a dropdown
    pub fn placeholder(&self) -> String {
        format!("Select {}", self.label)
    }

    /// Position of `value` within the dropdown options
    pub fn option_index(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o == value)
    }

    /// Value as it should appear on screen
    pub fn display_value(&self, value: &str) -> String {
        match self.kind {
            FieldKind::Password => "•".repeat(value.chars().count()),
            FieldKind::Dropdown if value.is_empty() => self.placeholder(),
            _ => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_number_accepts_digits_only() {
        assert!(FieldKind::Number.accepts('7'));
        assert!(FieldKind::Number.accepts('.'));
        assert!(!FieldKind::Number.accepts('a'));
    }

    #[test]
    fn test_tel_accepts_phone_punctuation() {
        for c in ['+', '(', ')', '-', ' ', '5'] {
            assert!(FieldKind::Tel.accepts(c), "tel should accept {c:?}");
        }
        assert!(!FieldKind::Tel.accepts('x'));
    }

    #[test]
    fn test_dropdown_rejects_typing() {
        assert!(!FieldKind::Dropdown.accepts('a'));
    }

    #[test]
    fn test_control_chars_rejected() {
        assert!(!FieldKind::Text.accepts('\u{7}'));
    }

    #[test]
    fn test_password_is_masked() {
        let field = FieldDescriptor::new("pw", "Password", FieldKind::Password, true);
        assert_eq!(field.display_value("abc"), "•••");
    }

    #[test]
    fn test_empty_dropdown_shows_placeholder() {
        let field = FieldDescriptor::dropdown("country", "Country", true, &["USA", "India"]);
        assert_eq!(field.display_value(""), "Select Country");
        assert_eq!(field.display_value("India"), "India");
        assert_eq!(field.option_index("India"), Some(1));
        assert_eq!(field.option_index("Peru"), None);
    }

    #[test]
    fn test_deserialize_uses_type_key() {
        let json = r#"{"name":"age","label":"Age","type":"number","required":true}"#;
        let field: FieldDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(field.kind, FieldKind::Number);
        assert!(field.required);
        assert!(field.options.is_empty());
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{"name":"nick","label":"Nickname"}"#;
        let field: FieldDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(field.kind, FieldKind::Text);
        assert!(!field.required);
    }
}
