//! Field and record-set validation
//!
//! Dispatch is by field kind, via the schema's declarative `kind` value:
//! - text / email: required-text check, only when the field is required
//! - url: social-URL shape check regardless of required-ness (an optional
//!   URL must still be well-formed when filled), plus the required check
//! - multiselect: non-empty selection check when required
//!
//! The record-set pass mirrors what export enforces: required fields and
//! record rules. Field-shape errors surface inline during editing via
//! `validate_field` / `validate_record` and never block further edits.

use thiserror::Error;

use super::report::{FieldOutcome, ValidationReport};
use crate::roster::Record;
use crate::schema::{FieldDef, FieldKind, RecordRule, Schema};
use crate::validators::{is_blank, validate_required_text, validate_social_url};

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine precondition violations. These indicate caller bugs, not bad user
/// input; user-facing failures are always returned as data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Field key not declared by the schema
    #[error("Field '{field}' is not defined by schema '{roster_id}'")]
    UnknownField { roster_id: String, field: String },
}

impl EngineError {
    /// Returns the stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::UnknownField { .. } => "ROSTER_ENGINE_UNKNOWN_FIELD",
        }
    }
}

/// One failing field of a record, keyed for inline display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Schema field key
    pub field_key: String,
    /// User-facing message
    pub error: String,
}

/// Validates a single field of a record.
///
/// # Errors
///
/// Returns `EngineError::UnknownField` when the key is not declared by the
/// schema. All user-facing failures land in the returned `FieldOutcome`.
pub fn validate_field(
    schema: &Schema,
    record: &Record,
    field_key: &str,
) -> EngineResult<FieldOutcome> {
    let field = schema
        .field(field_key)
        .ok_or_else(|| EngineError::UnknownField {
            roster_id: schema.roster_id.clone(),
            field: field_key.to_string(),
        })?;

    Ok(check_field(field, record))
}

/// Validates every field of one record, in schema field order.
///
/// Returns the failing fields only; an empty vector means the record is
/// clean. This is the per-keystroke pass a presentation layer runs.
pub fn validate_record(schema: &Schema, record: &Record) -> Vec<FieldError> {
    schema
        .fields
        .iter()
        .filter_map(|field| {
            check_field(field, record).error.map(|error| FieldError {
                field_key: field.key.clone(),
                error,
            })
        })
        .collect()
}

/// Validates a whole record set for export.
///
/// For every record (rows reported 1-based): every required field in schema
/// field order, then every record rule in schema rule order. The report's
/// error ordering is exact and reproducible.
pub fn validate_record_set(schema: &Schema, records: &[Record]) -> ValidationReport {
    let mut errors = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let row = index + 1;

        for field in schema.fields.iter().filter(|f| f.required) {
            if record.is_blank(&field.key) {
                errors.push(format!("Row {}: {} is required", row, field.label));
            }
        }

        for rule in &schema.rules {
            match rule {
                RecordRule::RequireAtLeastOneOfKind {
                    target_kind,
                    message,
                } => {
                    let satisfied = schema
                        .fields_of_kind(*target_kind)
                        .any(|f| !record.is_blank(&f.key));
                    if !satisfied {
                        errors.push(format!("Row {}: {}", row, message));
                    }
                }
            }
        }
    }

    ValidationReport::from_errors(errors)
}

fn check_field(field: &FieldDef, record: &Record) -> FieldOutcome {
    match field.kind {
        FieldKind::Text | FieldKind::Email => {
            if field.required && !validate_required_text(record.text(&field.key)).valid {
                FieldOutcome::invalid(format!("{} is required", field.label))
            } else {
                FieldOutcome::valid()
            }
        }
        FieldKind::Url => {
            let raw = record.text(&field.key);
            if field.required && is_blank(raw) {
                return FieldOutcome::invalid(format!("{} is required", field.label));
            }
            match validate_social_url(raw).error {
                Some(error) => FieldOutcome::invalid(error),
                None => FieldOutcome::valid(),
            }
        }
        FieldKind::Multiselect => {
            if field.required && record.selection(&field.key).is_empty() {
                FieldOutcome::invalid(format!("{} is required", field.label))
            } else {
                FieldOutcome::valid()
            }
        }
    }
}
