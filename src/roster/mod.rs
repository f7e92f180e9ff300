//! Roster records and the working record list
//!
//! A record maps schema field keys to values. The working list owns the
//! in-memory roster a caller edits; it enforces the lifecycle invariants
//! (never empty, multiselect values stay within their option list) while the
//! validation engine only ever reads records.

mod errors;
mod list;
mod record;

pub use errors::{RosterError, RosterResult};
pub use list::RecordList;
pub use record::{Record, Value};
