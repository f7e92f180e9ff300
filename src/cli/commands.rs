//! CLI command implementations
//!
//! Each command binds a roster schema from the built-in registry, opens the
//! file-backed store under the data directory, and delegates to the core.
//! Export is all-or-nothing: while the record set fails validation, every
//! error is printed and no CSV is written.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::engine::validate_record_set;
use crate::export::{default_filename, render};
use crate::observability::Logger;
use crate::roster::{Record, RecordList};
use crate::schema::{Registry, Schema};
use crate::store::{FileStore, RosterStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parses arguments and dispatches the command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatches an already-parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Seed { roster, data } => seed(&data, &roster),
        Command::Show { roster, data } => show(&data, &roster),
        Command::Validate { roster, data } => validate(&data, &roster),
        Command::Export { roster, data, out } => export(&data, &roster, out),
        Command::Clear { roster, data } => clear(&data, &roster),
    }
}

fn open_store(data: &Path) -> RosterStore<FileStore> {
    RosterStore::new(FileStore::new(data))
}

fn load_records(
    store: &RosterStore<FileStore>,
    schema: &Schema,
    roster: &str,
) -> CliResult<Vec<Record>> {
    let saved = store
        .load(&schema.storage_key)
        .ok_or_else(|| CliError::NoSavedData(roster.to_string()))?;
    Ok(RecordList::from_records(schema, saved).into_records())
}

/// Writes the roster's default records to the store.
pub fn seed(data: &Path, roster: &str) -> CliResult<()> {
    let registry = Registry::builtin();
    let schema = registry.get(roster)?;
    let mut store = open_store(data);

    if !store.save(&schema.storage_key, &schema.default_records) {
        return Err(CliError::StoreRejected(roster.to_string()));
    }

    Logger::info(
        "ROSTER_SEEDED",
        &[
            ("roster", roster),
            ("records", &schema.default_records.len().to_string()),
        ],
    );
    Ok(())
}

/// Prints the stored records as pretty JSON.
pub fn show(data: &Path, roster: &str) -> CliResult<()> {
    let registry = Registry::builtin();
    let schema = registry.get(roster)?;
    let store = open_store(data);

    let records = load_records(&store, schema, roster)?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

/// Runs the full record-set pass and prints the report.
pub fn validate(data: &Path, roster: &str) -> CliResult<()> {
    let registry = Registry::builtin();
    let schema = registry.get(roster)?;
    let store = open_store(data);

    let records = load_records(&store, schema, roster)?;
    let report = validate_record_set(schema, &records);

    if report.valid {
        println!("{}: {} record(s), no errors", schema.title, records.len());
        return Ok(());
    }

    for error in &report.errors {
        println!("{error}");
    }
    Err(CliError::ValidationFailed {
        roster: roster.to_string(),
        count: report.errors.len(),
    })
}

/// Renders the stored roster to a CSV file.
///
/// Blocked entirely while any record fails validation; the full error list
/// is printed before the command exits non-zero.
pub fn export(data: &Path, roster: &str, out: Option<PathBuf>) -> CliResult<()> {
    let registry = Registry::builtin();
    let schema = registry.get(roster)?;
    let store = open_store(data);

    let records = load_records(&store, schema, roster)?;
    let report = validate_record_set(schema, &records);

    if !report.valid {
        for error in &report.errors {
            eprintln!("{error}");
        }
        return Err(CliError::ValidationFailed {
            roster: roster.to_string(),
            count: report.errors.len(),
        });
    }

    let payload = render(schema, &records);
    let path = out.unwrap_or_else(|| {
        PathBuf::from(default_filename(schema, Local::now().date_naive()))
    });
    fs::write(&path, &payload)?;

    Logger::info(
        "ROSTER_EXPORTED",
        &[
            ("roster", roster),
            ("path", &path.display().to_string()),
            ("rows", &payload.lines().count().saturating_sub(1).to_string()),
        ],
    );
    println!("{}", path.display());
    Ok(())
}

/// Removes the stored roster.
pub fn clear(data: &Path, roster: &str) -> CliResult<()> {
    let registry = Registry::builtin();
    let schema = registry.get(roster)?;
    let mut store = open_store(data);

    if !store.clear(&schema.storage_key) {
        return Err(CliError::StoreRejected(roster.to_string()));
    }

    Logger::info("ROSTER_CLEARED", &[("roster", roster)]);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_seed_then_show_roundtrip() {
        let tmp = TempDir::new().unwrap();
        seed(tmp.path(), "talent").unwrap();

        let registry = Registry::builtin();
        let schema = registry.get("talent").unwrap();
        let store = open_store(tmp.path());
        let records = load_records(&store, schema, "talent").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text("talentName"), "Jane Doe");
    }

    #[test]
    fn test_unknown_roster_rejected() {
        let tmp = TempDir::new().unwrap();
        let err = seed(tmp.path(), "coach").unwrap_err();
        assert!(matches!(err, CliError::Schema(_)));
    }

    #[test]
    fn test_show_without_seed_fails() {
        let tmp = TempDir::new().unwrap();
        let err = show(tmp.path(), "talent").unwrap_err();
        assert!(matches!(err, CliError::NoSavedData(_)));
    }

    #[test]
    fn test_validate_seeded_roster_passes() {
        let tmp = TempDir::new().unwrap();
        seed(tmp.path(), "athlete").unwrap();
        validate(tmp.path(), "athlete").unwrap();
    }

    #[test]
    fn test_export_writes_csv_file() {
        let tmp = TempDir::new().unwrap();
        seed(tmp.path(), "talent").unwrap();

        let out = tmp.path().join("export.csv");
        export(tmp.path(), "talent", Some(out.clone())).unwrap();

        let payload = fs::read_to_string(out).unwrap();
        assert!(payload.starts_with("Talent Name,Primary Social"));
        assert_eq!(payload.lines().count(), 3);
    }

    #[test]
    fn test_export_blocked_on_invalid_roster() {
        let tmp = TempDir::new().unwrap();

        // Save a record with no name and no socials.
        let registry = Registry::builtin();
        let schema = registry.get("talent").unwrap();
        let mut store = open_store(tmp.path());
        store.save(&schema.storage_key, &[Record::empty(schema)]);

        let out = tmp.path().join("export.csv");
        let err = export(tmp.path(), "talent", Some(out.clone())).unwrap_err();
        assert!(matches!(err, CliError::ValidationFailed { count: 2, .. }));
        assert!(!out.exists());
    }

    #[test]
    fn test_clear_removes_saved_data() {
        let tmp = TempDir::new().unwrap();
        seed(tmp.path(), "talent").unwrap();
        clear(tmp.path(), "talent").unwrap();

        let err = show(tmp.path(), "talent").unwrap_err();
        assert!(matches!(err, CliError::NoSavedData(_)));
    }
}
