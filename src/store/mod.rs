//! Persistence gateway
//!
//! The core never touches storage directly: everything goes through the
//! narrow `KeyValue` interface, keyed by strings derived from a schema's
//! `storage_key`. A file-backed store serves real use; the in-memory store
//! substitutes in tests. `RosterStore` speaks the versioned payload format
//! and converts every failure into a boolean or `None`; store trouble never
//! propagates as an error into callers.

mod errors;
mod file;
mod kv;
mod roster_store;

pub use errors::{StoreError, StoreResult};
pub use file::FileStore;
pub use kv::{KeyValue, MemoryStore};
pub use roster_store::{RosterStore, SavedPayload, STORAGE_FORMAT_VERSION};
