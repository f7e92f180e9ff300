//! CSV export
//!
//! Pure rendering: the codec turns a validated record snapshot into CSV
//! text. Writing the payload to disk (or handing it to a download) is the
//! caller's responsibility.

mod csv;
mod filename;

pub use self::csv::{escape_field, identity_field, render};
pub use filename::default_filename;

/// MIME type of the rendered payload.
pub const CSV_MIME: &str = "text/csv;charset=utf-8";
