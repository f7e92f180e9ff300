//! Versioned roster persistence over a key-value store
//!
//! Payload shape, stored under `{storage_key}-data`:
//!
//! ```json
//! { "data": [ ... records ... ], "timestamp": "<ISO-8601>", "version": "1.0" }
//! ```
//!
//! A second key, `{storage_key}-last-saved`, holds the save instant for the
//! human-readable "last saved" display.
//!
//! Failure semantics: save/clear report booleans, load reports `Option`.
//! Every failure is logged; none propagates as an error. Unsaved data stays
//! in the caller's memory.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::kv::KeyValue;
use crate::observability::Logger;
use crate::roster::Record;

/// Stored payload format tag.
pub const STORAGE_FORMAT_VERSION: &str = "1.0";

/// The stored roster payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedPayload {
    /// The roster records
    pub data: Vec<Record>,
    /// Save instant, ISO-8601
    pub timestamp: String,
    /// Format tag, always "1.0"
    pub version: String,
}

/// Roster persistence gateway over any `KeyValue` store.
#[derive(Debug)]
pub struct RosterStore<S: KeyValue> {
    store: S,
}

impl<S: KeyValue> RosterStore<S> {
    /// Wraps a key-value store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access to the underlying store.
    pub fn inner(&self) -> &S {
        &self.store
    }

    fn data_key(storage_key: &str) -> String {
        format!("{storage_key}-data")
    }

    fn last_saved_key(storage_key: &str) -> String {
        format!("{storage_key}-last-saved")
    }

    /// Saves records under the schema's storage key.
    ///
    /// Returns false (after logging) when the store rejects the write.
    pub fn save(&mut self, storage_key: &str, records: &[Record]) -> bool {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let payload = SavedPayload {
            data: records.to_vec(),
            timestamp: now.clone(),
            version: STORAGE_FORMAT_VERSION.to_string(),
        };

        let json = match serde_json::to_string(&payload) {
            Ok(json) => json,
            Err(e) => {
                Logger::error(
                    "ROSTER_SAVE_FAILED",
                    &[("storage_key", storage_key), ("reason", &e.to_string())],
                );
                return false;
            }
        };

        if let Err(e) = self.store.set(&Self::data_key(storage_key), &json) {
            Logger::error(
                "ROSTER_SAVE_FAILED",
                &[
                    ("code", e.code()),
                    ("storage_key", storage_key),
                    ("reason", &e.to_string()),
                ],
            );
            return false;
        }

        if let Err(e) = self.store.set(&Self::last_saved_key(storage_key), &now) {
            // Data is saved; only the display timestamp is stale.
            Logger::warn(
                "ROSTER_TIMESTAMP_NOT_SAVED",
                &[("storage_key", storage_key), ("reason", &e.to_string())],
            );
        }

        true
    }

    /// Loads the records saved under the storage key.
    ///
    /// Missing, unreadable, or malformed payloads all load as `None`.
    pub fn load(&self, storage_key: &str) -> Option<Vec<Record>> {
        let raw = match self.store.get(&Self::data_key(storage_key)) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                Logger::warn(
                    "ROSTER_LOAD_FAILED",
                    &[("storage_key", storage_key), ("reason", &e.to_string())],
                );
                return None;
            }
        };

        match serde_json::from_str::<SavedPayload>(&raw) {
            Ok(payload) => Some(payload.data),
            Err(e) => {
                Logger::warn(
                    "ROSTER_PAYLOAD_MALFORMED",
                    &[("storage_key", storage_key), ("reason", &e.to_string())],
                );
                None
            }
        }
    }

    /// Removes both keys for the storage key. Returns false on failure.
    pub fn clear(&mut self, storage_key: &str) -> bool {
        let data = self.store.remove(&Self::data_key(storage_key));
        let stamp = self.store.remove(&Self::last_saved_key(storage_key));

        for result in [&data, &stamp] {
            if let Err(e) = result {
                Logger::error(
                    "ROSTER_CLEAR_FAILED",
                    &[("storage_key", storage_key), ("reason", &e.to_string())],
                );
            }
        }

        data.is_ok() && stamp.is_ok()
    }

    /// Human-readable "last saved" display relative to `now`.
    pub fn last_saved_display(&self, storage_key: &str, now: DateTime<Utc>) -> String {
        let raw = match self.store.get(&Self::last_saved_key(storage_key)) {
            Ok(Some(raw)) => raw,
            _ => return "Never".to_string(),
        };

        let saved = match DateTime::parse_from_rfc3339(&raw) {
            Ok(saved) => saved.with_timezone(&Utc),
            Err(_) => return "Unknown".to_string(),
        };

        let minutes = now.signed_duration_since(saved).num_minutes();
        if minutes < 1 {
            return "Just now".to_string();
        }
        if minutes < 60 {
            let unit = if minutes == 1 { "minute" } else { "minutes" };
            return format!("{minutes} {unit} ago");
        }

        let hours = minutes / 60;
        if hours < 24 {
            let unit = if hours == 1 { "hour" } else { "hours" };
            return format!("{hours} {unit} ago");
        }

        saved.format("%Y-%m-%d at %H:%M").to_string()
    }
}
