//! Deterministic structured JSON logger
//!
//! - One log line = one event, rendered as a single JSON object
//! - Keys emitted in lexicographic order so identical events produce
//!   byte-identical lines
//! - Synchronous, unbuffered writes; Trace/Info/Warn to stdout,
//!   Error/Fatal to stderr
//! - Logging must never fail the operation being logged: write errors are
//!   swallowed

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Trace,
    /// Normal operations
    Info,
    /// Recoverable issues
    Warn,
    /// Operation failures
    Error,
    /// Unrecoverable failures
    Fatal,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured logger emitting one JSON line per event.
pub struct Logger;

impl Logger {
    /// Renders an event to its JSON line, including the trailing newline.
    pub fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut map: BTreeMap<&str, &str> = fields.iter().copied().collect();
        map.insert("event", event);
        map.insert("severity", severity.as_str());

        // BTreeMap serialization gives the lexicographic key order;
        // serde_json handles string escaping.
        let mut line = serde_json::to_string(&map).unwrap_or_default();
        line.push('\n');
        line
    }

    /// Logs an event, routing by severity.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::render(severity, event, fields);
        if severity >= Severity::Error {
            Self::write_line(&mut io::stderr(), &line);
        } else {
            Self::write_line(&mut io::stdout(), &line);
        }
    }

    fn write_line<W: Write>(writer: &mut W, line: &str) {
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    /// Log at TRACE level
    pub fn trace(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Trace, event, fields);
    }

    /// Log at INFO level
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    /// Log at WARN level
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }

    /// Log at ERROR level
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Error, event, fields);
    }

    /// Log at FATAL level
    pub fn fatal(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Fatal, event, fields);
    }
}
