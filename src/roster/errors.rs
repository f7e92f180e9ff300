//! Working-list error types
//!
//! Error codes:
//! - ROSTER_LAST_RECORD (removing the sole remaining record)
//! - ROSTER_INDEX_OUT_OF_BOUNDS
//! - ROSTER_UNKNOWN_FIELD
//! - ROSTER_KIND_MISMATCH (text value for a multiselect field or vice versa)
//! - ROSTER_UNKNOWN_OPTION (selection outside the declared option list)

use thiserror::Error;

/// Result type for working-list operations
pub type RosterResult<T> = Result<T, RosterError>;

/// Errors raised by working-list mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The list must always hold at least one record
    #[error("Cannot remove the last remaining record")]
    LastRecord,

    /// Record index outside the list
    #[error("Record index {0} is out of bounds")]
    IndexOutOfBounds(usize),

    /// Field key not declared by the schema
    #[error("Field '{0}' is not defined by this roster's schema")]
    UnknownField(String),

    /// Value shape does not match the field kind
    #[error("Field '{field}' expects a {expected} value")]
    KindMismatch {
        field: String,
        expected: &'static str,
    },

    /// Selected option not in the field's option list
    #[error("Option '{option}' is not declared for field '{field}'")]
    UnknownOption { field: String, option: String },
}

impl RosterError {
    /// Returns the stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            RosterError::LastRecord => "ROSTER_LAST_RECORD",
            RosterError::IndexOutOfBounds(_) => "ROSTER_INDEX_OUT_OF_BOUNDS",
            RosterError::UnknownField(_) => "ROSTER_UNKNOWN_FIELD",
            RosterError::KindMismatch { .. } => "ROSTER_KIND_MISMATCH",
            RosterError::UnknownOption { .. } => "ROSTER_UNKNOWN_OPTION",
        }
    }
}
