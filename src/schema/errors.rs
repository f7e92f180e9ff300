//! Schema error types
//!
//! Error codes:
//! - ROSTER_UNKNOWN_ROSTER (lookup of an unregistered roster id)
//! - ROSTER_DUPLICATE_ROSTER (registering an id twice)
//! - ROSTER_MALFORMED_SCHEMA (structural validation failure)

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema and registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Roster id not present in the registry
    #[error("Roster '{0}' is not registered")]
    UnknownRoster(String),

    /// Roster id already present in the registry
    #[error("Roster '{0}' is already registered")]
    DuplicateRoster(String),

    /// Schema failed structural validation
    #[error("Schema '{roster_id}' is malformed: {reason}")]
    MalformedSchema { roster_id: String, reason: String },
}

impl SchemaError {
    /// Returns the stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::UnknownRoster(_) => "ROSTER_UNKNOWN_ROSTER",
            SchemaError::DuplicateRoster(_) => "ROSTER_DUPLICATE_ROSTER",
            SchemaError::MalformedSchema { .. } => "ROSTER_MALFORMED_SCHEMA",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(
            SchemaError::UnknownRoster("x".into()).code(),
            "ROSTER_UNKNOWN_ROSTER"
        );
        assert_eq!(
            SchemaError::DuplicateRoster("x".into()).code(),
            "ROSTER_DUPLICATE_ROSTER"
        );
        assert_eq!(
            SchemaError::MalformedSchema {
                roster_id: "x".into(),
                reason: "r".into()
            }
            .code(),
            "ROSTER_MALFORMED_SCHEMA"
        );
    }

    #[test]
    fn test_display_includes_roster_id() {
        let err = SchemaError::UnknownRoster("talent".into());
        assert!(err.to_string().contains("talent"));
    }
}
