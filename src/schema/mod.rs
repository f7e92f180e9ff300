//! Roster schema subsystem
//!
//! Schemas are declarative data: an ordered field list (display order equals
//! CSV column order), record-level rules, and the default records a roster
//! starts from. Schemas are constants, never mutated at runtime; structural
//! correctness is asserted at authoring time via `validate_structure`.

mod errors;
mod registry;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use registry::{Registry, SPORTS};
pub use types::{FieldDef, FieldKind, RecordRule, Schema};
