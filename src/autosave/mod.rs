//! Debounced auto-save scheduling
//!
//! The scheduler is a pure state machine over a monotonic clock: callers
//! feed it `Instant`s, it answers whether a save is due. Each edit cancels
//! and restarts the idle window; an explicit flush covers manual save and
//! shutdown, so no pending state is lost at teardown. The scheduler itself
//! never spawns threads or timers and never performs the save.

use std::time::{Duration, Instant};

/// Idle delay before an edit is persisted.
pub const DEFAULT_AUTOSAVE_DELAY: Duration = Duration::from_secs(10);

/// Debounced save scheduler.
#[derive(Debug)]
pub struct AutoSaver {
    delay: Duration,
    deadline: Option<Instant>,
}

impl AutoSaver {
    /// Creates a scheduler with the given idle delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Creates a scheduler with the default 10 second delay.
    pub fn with_default_delay() -> Self {
        Self::new(DEFAULT_AUTOSAVE_DELAY)
    }

    /// Records an edit at `now`, restarting the idle window.
    pub fn note_edit(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Whether an edit is waiting to be persisted.
    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Whether the idle window has elapsed at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(deadline) if now >= deadline)
    }

    /// Consumes a due deadline. Returns true when the caller should save.
    pub fn take_due(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }

    /// Consumes any pending deadline regardless of the clock. Returns true
    /// when unsaved state was pending; used on manual save and shutdown.
    pub fn flush(&mut self) -> bool {
        self.deadline.take().is_some()
    }
}
