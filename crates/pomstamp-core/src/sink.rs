//! Run-log event sink
//!
//! The run log is the sole diagnostic surface of the tool, so the pipeline
//! records to an explicitly passed sink instead of a process-wide logger.
//! The CLI supplies a file-backed sink; tests use [`MemorySink`].

use parking_lot::Mutex;
use std::fmt;

/// Severity of a recorded event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Normal progress (pre- and post-mutation versions)
    Info,
    /// Fatal diagnostic
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.write_str("INFO"),
            Self::Error => f.write_str("ERROR"),
        }
    }
}

/// Destination for run-log events
pub trait EventSink {
    /// Record one event
    fn record(&self, level: Level, message: &str);
}

/// In-memory sink for tests
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<(Level, String)>>,
}

impl MemorySink {
    /// Create an empty sink
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    #[must_use]
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.lock().clone()
    }

    /// Whether any recorded message contains `needle`
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.lock().iter().any(|(_, m)| m.contains(needle))
    }
}

impl EventSink for MemorySink {
    fn record(&self, level: Level, message: &str) {
        self.entries.lock().push((level, message.to_string()));
    }
}
