//! Validation result types

use serde::Serialize;

/// Outcome of validating a single field of a single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOutcome {
    /// Whether the field passed
    pub valid: bool,
    /// User-facing error when it did not
    pub error: Option<String>,
}

impl FieldOutcome {
    /// A passing outcome
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    /// A failing outcome with the given user-facing message
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }
}

/// Result of a full record-set validation pass.
///
/// `errors` holds row-prefixed messages in deterministic order: record order
/// outer, required-field checks in schema field order, then record-rule
/// checks in schema rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// True iff no errors were collected
    pub valid: bool,
    /// All errors across all records, surfaced at once
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// Builds a report from collected errors.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_valid() {
        let report = ValidationReport::from_errors(vec![]);
        assert!(report.valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_report_with_errors_is_invalid() {
        let report = ValidationReport::from_errors(vec!["Row 1: x".into()]);
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
    }
}
