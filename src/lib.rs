//! rosterkit - a strict, deterministic roster validation and CSV export engine
//!
//! Rosters are ordered lists of records conforming to a declarative schema.
//! The engine validates fields against pattern rules and whole record sets
//! with deterministic error ordering, persists rosters through a narrow
//! key-value gateway, and renders validated snapshots as CSV.

pub mod autosave;
pub mod cli;
pub mod engine;
pub mod export;
pub mod observability;
pub mod roster;
pub mod schema;
pub mod store;
pub mod validators;
