//! CLI-specific error types
//!
//! Any error surfaced here terminates the process with a non-zero exit.

use thiserror::Error;

use crate::schema::SchemaError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Roster lookup or schema registration failure
    #[error("{0}")]
    Schema(#[from] SchemaError),

    /// Nothing saved yet for the requested roster
    #[error("Roster '{0}' has no saved data. Run 'rosterkit seed --roster {0}' first.")]
    NoSavedData(String),

    /// The record set failed validation
    #[error("Roster '{roster}' failed validation with {count} error(s)")]
    ValidationFailed { roster: String, count: usize },

    /// The store rejected a write or clear
    #[error("Store operation failed for roster '{0}'")]
    StoreRejected(String),

    /// I/O failure writing CLI output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
