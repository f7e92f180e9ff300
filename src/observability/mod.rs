//! Structured logging
//!
//! One JSON object per line, deterministic key ordering, synchronous writes.

mod logger;

pub use logger::{Logger, Severity};
