//! CLI module for rosterkit
//!
//! Commands:
//! - seed: write a roster's default records to the store
//! - show: print the stored records as JSON
//! - validate: run the full record-set pass and print the report
//! - export: render the CSV payload (blocked while the roster is invalid)
//! - clear: remove the stored roster

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{clear, export, run, run_command, seed, show, validate};
pub use errors::{CliError, CliResult};
