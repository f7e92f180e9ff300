//! Schema type definitions
//!
//! Supported field kinds:
//! - text: free-form string
//! - email: string holding an email address
//! - url: social profile URL, shape-checked even when optional
//! - multiselect: set of options drawn from a fixed list
//!
//! A schema's field order is authoritative: it drives display order, CSV
//! column order, and the order required-field errors are reported in.

use serde::{Deserialize, Serialize};

use crate::roster::Record;

/// Supported field kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free-form string
    Text,
    /// Email address string
    Email,
    /// Social profile URL
    Url,
    /// Set of options from a fixed list
    Multiselect,
}

impl FieldKind {
    /// Returns the kind name for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Url => "url",
            FieldKind::Multiselect => "multiselect",
        }
    }
}

/// One field of a roster schema. Immutable after authoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Unique key within the schema
    pub key: String,
    /// Display label (also the CSV column header)
    pub label: String,
    /// Field kind
    pub kind: FieldKind,
    /// Whether the field must be non-empty
    pub required: bool,
    /// Option list (multiselect only, empty otherwise)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl FieldDef {
    /// Create a required text field
    pub fn required_text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: FieldKind::Text,
            required: true,
            options: Vec::new(),
        }
    }

    /// Create an optional email field
    pub fn optional_email(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: FieldKind::Email,
            required: false,
            options: Vec::new(),
        }
    }

    /// Create an optional url field
    pub fn optional_url(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: FieldKind::Url,
            required: false,
            options: Vec::new(),
        }
    }

    /// Create a required multiselect field over the given options
    pub fn required_multiselect(
        key: impl Into<String>,
        label: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: FieldKind::Multiselect,
            required: true,
            options,
        }
    }
}

/// A constraint evaluated across multiple fields of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RecordRule {
    /// At least one field of the target kind must be non-empty.
    #[serde(rename_all = "camelCase")]
    RequireAtLeastOneOfKind {
        /// Kind the rule ranges over
        target_kind: FieldKind,
        /// Row-level message reported when the rule is violated
        message: String,
    },
}

/// Complete roster schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Registry identifier (e.g. "talent")
    pub roster_id: String,
    /// Human-readable title
    pub title: String,
    /// Persistence key prefix for the gateway
    pub storage_key: String,
    /// Export filename stem; the dated default filename derives from it
    pub export_stem: String,
    /// Ordered field definitions
    pub fields: Vec<FieldDef>,
    /// Record-level rules, evaluated in order
    pub rules: Vec<RecordRule>,
    /// Records a freshly seeded roster starts from
    pub default_records: Vec<Record>,
}

impl Schema {
    /// Looks up a field definition by key.
    pub fn field(&self, key: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Iterates the fields of the given kind, in schema order.
    pub fn fields_of_kind(&self, kind: FieldKind) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(move |f| f.kind == kind)
    }

    /// Validates the schema structure itself (not a record).
    ///
    /// Checked at authoring time:
    /// - at least one field
    /// - field keys unique within the schema
    /// - multiselect fields declare a non-empty option list, others none
    /// - default records reference only declared keys, and multiselect
    ///   defaults stay within their option list
    pub fn validate_structure(&self) -> Result<(), String> {
        if self.fields.is_empty() {
            return Err("Schema must declare at least one field".into());
        }

        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.key == field.key) {
                return Err(format!("Duplicate field key '{}'", field.key));
            }

            match field.kind {
                FieldKind::Multiselect if field.options.is_empty() => {
                    return Err(format!(
                        "Multiselect field '{}' must declare options",
                        field.key
                    ));
                }
                FieldKind::Multiselect => {}
                _ if !field.options.is_empty() => {
                    return Err(format!(
                        "Field '{}' is {} and must not declare options",
                        field.key,
                        field.kind.kind_name()
                    ));
                }
                _ => {}
            }
        }

        for (i, record) in self.default_records.iter().enumerate() {
            for key in record.keys() {
                let field = self
                    .field(key)
                    .ok_or_else(|| format!("Default record {} references unknown key '{}'", i, key))?;

                if field.kind == FieldKind::Multiselect {
                    for option in record.selection(key) {
                        if !field.options.contains(option) {
                            return Err(format!(
                                "Default record {} selects unknown option '{}' for '{}'",
                                i, option, key
                            ));
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> Schema {
        Schema {
            roster_id: "crew".into(),
            title: "Crew Roster".into(),
            storage_key: "crew-roster".into(),
            export_stem: "crew-submission".into(),
            fields: vec![
                FieldDef::required_text("name", "Name"),
                FieldDef::optional_url("social", "Social"),
            ],
            rules: vec![],
            default_records: vec![],
        }
    }

    #[test]
    fn test_valid_structure() {
        assert!(sample_schema().validate_structure().is_ok());
    }

    #[test]
    fn test_empty_field_list_rejected() {
        let mut schema = sample_schema();
        schema.fields.clear();
        assert!(schema.validate_structure().is_err());
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut schema = sample_schema();
        schema.fields.push(FieldDef::required_text("name", "Name Again"));
        let err = schema.validate_structure().unwrap_err();
        assert!(err.contains("Duplicate"));
    }

    #[test]
    fn test_multiselect_needs_options() {
        let mut schema = sample_schema();
        schema
            .fields
            .push(FieldDef::required_multiselect("tags", "Tags", vec![]));
        let err = schema.validate_structure().unwrap_err();
        assert!(err.contains("options"));
    }

    #[test]
    fn test_text_field_must_not_declare_options() {
        let mut schema = sample_schema();
        schema.fields[0].options = vec!["A".into()];
        assert!(schema.validate_structure().is_err());
    }

    #[test]
    fn test_default_record_with_unknown_key_rejected() {
        let mut schema = sample_schema();
        schema.default_records = vec![Record::default().with_text("nickname", "JD")];
        let err = schema.validate_structure().unwrap_err();
        assert!(err.contains("nickname"));
    }

    #[test]
    fn test_default_record_with_unknown_option_rejected() {
        let mut schema = sample_schema();
        schema.fields.push(FieldDef::required_multiselect(
            "tags",
            "Tags",
            vec!["A".into(), "B".into()],
        ));
        schema.default_records =
            vec![Record::default().with_selection("tags", ["C"])];
        let err = schema.validate_structure().unwrap_err();
        assert!(err.contains("'C'"));
    }

    #[test]
    fn test_field_lookup() {
        let schema = sample_schema();
        assert_eq!(schema.field("name").unwrap().label, "Name");
        assert!(schema.field("missing").is_none());
    }

    #[test]
    fn test_fields_of_kind_preserves_order() {
        let schema = sample_schema();
        let urls: Vec<_> = schema.fields_of_kind(FieldKind::Url).map(|f| &f.key).collect();
        assert_eq!(urls, ["social"]);
    }
}
