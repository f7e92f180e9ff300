//! Dated default export filename

use chrono::NaiveDate;

use crate::schema::Schema;

/// Returns the default export filename, `{stem}-{YYYY-MM-DD}.csv`.
///
/// The date is supplied by the caller so rendering stays deterministic.
pub fn default_filename(schema: &Schema, date: NaiveDate) -> String {
    format!("{}-{}.csv", schema.export_stem, date.format("%Y-%m-%d"))
}
