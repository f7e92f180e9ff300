//! CSV rendering with escaping
//!
//! Layout:
//! - header row: schema field labels in field order, comma-joined
//! - one data row per surviving record, fields in schema field order
//! - rows joined with `\n`, no trailing newline
//!
//! Records whose identity-field value trims empty are dropped before
//! rendering. The identity field is the first required text field in schema
//! field order, else the schema's first field; this positional convention is
//! load-bearing and must not be replaced with an explicit flag.

use crate::roster::{Record, Value};
use crate::schema::{FieldDef, FieldKind, Schema};

/// Returns the field used to decide whether a record is blank.
pub fn identity_field(schema: &Schema) -> &FieldDef {
    schema
        .fields
        .iter()
        .find(|f| f.required && f.kind == FieldKind::Text)
        // Structure validation guarantees at least one field.
        .unwrap_or(&schema.fields[0])
}

/// Escapes one field value.
///
/// Values containing a comma, double quote, or newline are wrapped in double
/// quotes with internal quotes doubled; everything else passes through.
pub fn escape_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Renders records to the full CSV payload.
pub fn render(schema: &Schema, records: &[Record]) -> String {
    let identity = identity_field(schema);

    let header = schema
        .fields
        .iter()
        .map(|f| f.label.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(header);

    for record in records {
        if record.is_blank(&identity.key) {
            continue;
        }

        let row = schema
            .fields
            .iter()
            .map(|field| escape_field(&render_value(record, field)))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(row);
    }

    lines.join("\n")
}

fn render_value(record: &Record, field: &FieldDef) -> String {
    match record.get(&field.key) {
        None => String::new(),
        Some(Value::Text(s)) => s.clone(),
        Some(Value::Selection(options)) => options.join(", "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Registry;

    #[test]
    fn test_identity_field_is_first_required_text() {
        let registry = Registry::builtin();
        let schema = registry.get("talent").unwrap();
        assert_eq!(identity_field(schema).key, "talentName");
    }

    #[test]
    fn test_identity_field_falls_back_to_first_field() {
        let registry = Registry::builtin();
        let mut schema = registry.get("talent").unwrap().clone();
        for field in &mut schema.fields {
            field.required = false;
        }
        assert_eq!(identity_field(&schema).key, "talentName");
    }

    #[test]
    fn test_escape_plain_value_passes_through() {
        assert_eq!(escape_field("Jane Doe"), "Jane Doe");
        assert_eq!(escape_field(""), "");
    }

    #[test]
    fn test_escape_comma_quotes_value() {
        assert_eq!(escape_field("Doe, Jane"), "\"Doe, Jane\"");
    }

    #[test]
    fn test_escape_doubles_internal_quotes() {
        assert_eq!(escape_field("a,b\"c"), "\"a,b\"\"c\"");
    }

    #[test]
    fn test_escape_newline_quotes_value() {
        assert_eq!(escape_field("line1\nline2"), "\"line1\nline2\"");
    }

    #[test]
    fn test_render_drops_blank_identity_rows() {
        let registry = Registry::builtin();
        let schema = registry.get("talent").unwrap();
        let records = vec![
            Record::empty(schema).with_text("talentName", "Jane Doe"),
            Record::empty(schema).with_text("talentName", "   "),
        ];

        let output = render(schema, &records);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2); // header + one surviving row
        assert!(lines[1].starts_with("Jane Doe"));
    }

    #[test]
    fn test_render_header_uses_labels_in_order() {
        let registry = Registry::builtin();
        let schema = registry.get("talent").unwrap();
        let output = render(schema, &[]);
        assert_eq!(
            output,
            "Talent Name,Primary Social,Social 2,Social 3,Social 4"
        );
    }

    #[test]
    fn test_render_joins_multiselect_with_comma_space() {
        let registry = Registry::builtin();
        let schema = registry.get("athlete").unwrap();
        let record = Record::empty(schema)
            .with_text("talentName", "Jane")
            .with_selection("sports", ["Basketball", "Track & Field"]);

        let output = render(schema, &[record]);
        let row = output.lines().nth(1).unwrap();
        // The joined selection contains a comma, so it gets quoted.
        assert!(row.contains("\"Basketball, Track & Field\""));
    }

    #[test]
    fn test_render_missing_value_is_empty() {
        let registry = Registry::builtin();
        let schema = registry.get("talent").unwrap();
        let record = Record::default().with_text("talentName", "Jane");

        let output = render(schema, &[record]);
        assert_eq!(output.lines().nth(1).unwrap(), "Jane,,,,");
    }

    #[test]
    fn test_render_has_no_trailing_newline() {
        let registry = Registry::builtin();
        let schema = registry.get("talent").unwrap();
        let output = render(schema, &schema.default_records);
        assert!(!output.ends_with('\n'));
    }
}
