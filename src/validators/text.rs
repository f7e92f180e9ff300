//! Required-text validation
//!
//! The outcome carries a canonical "value is empty" error; callers that know
//! the field's label are responsible for user-facing phrasing.

/// Outcome of a single-value check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Whether the value passed the check
    pub valid: bool,
    /// Canonical error description when invalid
    pub error: Option<String>,
}

impl CheckOutcome {
    /// A passing outcome
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    /// A failing outcome with the given canonical description
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }
}

/// Returns true when the value is empty after trimming.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates that a text value is non-empty after trimming.
pub fn validate_required_text(value: &str) -> CheckOutcome {
    if is_blank(value) {
        CheckOutcome::invalid("value is empty")
    } else {
        CheckOutcome::valid()
    }
}
