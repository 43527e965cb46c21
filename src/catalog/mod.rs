//! Form catalog: static mapping from form type to field schema

mod builtin;
mod traits;

pub use builtin::builtin_catalog;
#[cfg(test)]
pub use traits::MockFormCatalog;
pub use traits::FormCatalog;

use crate::error::FormError;
use crate::state::FieldDescriptor;
use anyhow::{Context, Result};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// Field list for one form type
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormTypeEntry {
    pub fields: Vec<FieldDescriptor>,
}

/// Catalog backed by an in-memory list, preserving declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticCatalog {
    entries: Vec<(String, FormTypeEntry)>,
}

impl StaticCatalog {
    pub fn from_entries(entries: Vec<(String, FormTypeEntry)>) -> Self {
        Self { entries }
    }

    /// Parse a catalog from JSON of the shape `{ "<type>": { "fields": [...] } }`
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: StaticCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a catalog file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("parsing catalog {}", path.display()))
    }

    /// Check that every type has uniquely named fields and every dropdown has options
    pub fn validate(&self) -> Result<(), FormError> {
        if self.is_empty() {
            return Err(FormError::InvalidCatalog(
                "catalog defines no form types".to_string(),
            ));
        }
        for (form_type, entry) in &self.entries {
            if form_type.trim().is_empty() {
                return Err(FormError::InvalidCatalog(
                    "form type name is empty".to_string(),
                ));
            }
            let mut seen = HashSet::new();
            for field in &entry.fields {
                if field.name.is_empty() {
                    return Err(FormError::InvalidCatalog(format!(
                        "{form_type}: field with empty name"
                    )));
                }
                if !seen.insert(field.name.as_str()) {
                    return Err(FormError::InvalidCatalog(format!(
                        "{form_type}: duplicate field '{}'",
                        field.name
                    )));
                }
                if field.is_dropdown() && field.options.is_empty() {
                    return Err(FormError::InvalidCatalog(format!(
                        "{form_type}: dropdown '{}' has no options",
                        field.name
                    )));
                }
                if !field.is_dropdown() && !field.options.is_empty() {
                    return Err(FormError::InvalidCatalog(format!(
                        "{form_type}: '{}' has options but is not a dropdown",
                        field.name
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FormCatalog for StaticCatalog {
    fn type_names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    fn lookup(&self, form_type: &str) -> Option<Vec<FieldDescriptor>> {
        self.entries
            .iter()
            .find(|(name, _)| name == form_type)
            .map(|(_, entry)| entry.fields.clone())
    }
}

impl<'de> Deserialize<'de> for StaticCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = StaticCatalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of form type names to field lists")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                // Keep document order so the type selector matches the file
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, entry)) = map.next_entry::<String, FormTypeEntry>()? {
                    entries.push((name, entry));
                }
                Ok(StaticCatalog { entries })
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// Resolve the catalog to use, falling back to the built-in mock data
pub fn load(path: Option<&Path>) -> Result<StaticCatalog> {
    match path {
        Some(path) => {
            let catalog = StaticCatalog::from_file(path)?;
            tracing::info!(
                "Loaded {} form types from {}",
                catalog.len(),
                path.display()
            );
            Ok(catalog)
        }
        None => Ok(builtin_catalog()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldKind;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"{
        "Survey": {
            "fields": [
                { "name": "score", "label": "Score", "type": "number", "required": true },
                { "name": "tier", "label": "Tier", "type": "dropdown", "options": ["Gold", "Silver"] }
            ]
        },
        "Feedback": {
            "fields": [
                { "name": "comment", "label": "Comment", "type": "textarea" }
            ]
        }
    }"#;

    #[test]
    fn test_from_json_preserves_document_order() {
        let catalog = StaticCatalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.type_names(), vec!["Survey", "Feedback"]);
    }

    #[test]
    fn test_lookup_known_type() {
        let catalog = StaticCatalog::from_json(SAMPLE).unwrap();
        let fields = catalog.lookup("Survey").unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].kind, FieldKind::Number);
        assert_eq!(fields[1].options, vec!["Gold", "Silver"]);
    }

    #[test]
    fn test_lookup_unknown_type_is_none() {
        let catalog = StaticCatalog::from_json(SAMPLE).unwrap();
        assert!(catalog.lookup("Missing").is_none());
    }

    #[test]
    fn test_rejects_duplicate_field_names() {
        let json = r#"{"A": {"fields": [
            {"name": "x", "label": "X"},
            {"name": "x", "label": "X again"}
        ]}}"#;
        let err = StaticCatalog::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate field 'x'"));
    }

    #[test]
    fn test_rejects_dropdown_without_options() {
        let json = r#"{"A": {"fields": [{"name": "x", "label": "X", "type": "dropdown"}]}}"#;
        assert!(StaticCatalog::from_json(json).is_err());
    }

    #[test]
    fn test_rejects_options_on_text_field() {
        let json = r#"{"A": {"fields": [{"name": "x", "label": "X", "options": ["a"]}]}}"#;
        assert!(StaticCatalog::from_json(json).is_err());
    }

    #[test]
    fn test_rejects_non_map_document() {
        assert!(StaticCatalog::from_json("[]").is_err());
    }

    #[test]
    fn test_rejects_empty_catalog() {
        let err = StaticCatalog::from_json("{}").unwrap_err();
        assert!(err.to_string().contains("no form types"));
    }

    #[test]
    fn test_load_without_path_uses_builtin() {
        let catalog = load(None).unwrap();
        assert!(catalog.type_names().contains(&"Contact".to_string()));
    }

    #[test]
    fn test_load_missing_file_errors() {
        let result = load(Some(Path::new("/nonexistent/dynform/catalog.json")));
        assert!(result.is_err());
    }
}
