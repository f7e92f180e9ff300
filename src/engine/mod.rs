//! Row validation engine
//!
//! Applies the pattern validators per field according to the schema and
//! aggregates per-row and per-record-set results. The engine only reads
//! records and returns derived error info as data; `Err` is reserved for
//! precondition violations (a field key the schema does not declare).
//!
//! # Design principles
//!
//! - Validation is deterministic: the same inputs yield the same errors in
//!   the same order, every time
//! - Error ordering is record order, then schema field order, then schema
//!   rule order
//! - No mutation of records, no I/O

mod report;
mod validator;

pub use report::{FieldOutcome, ValidationReport};
pub use validator::{
    validate_field, validate_record, validate_record_set, EngineError, EngineResult, FieldError,
};
