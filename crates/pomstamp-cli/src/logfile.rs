//! File-backed run log
//!
//! One file named `log` in the working directory, truncated at the start of
//! each run, one `{timestamp} {message}` line per event. This file is the
//! tool's sole diagnostic surface; the exit status alone signals success or
//! failure to an automated caller.

use chrono::Local;
use parking_lot::Mutex;
use pomstamp_core::sink::{EventSink, Level};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Run-log file name, relative to the working directory
pub(crate) const LOG_FILE: &str = "log";

/// [`EventSink`] writing `{timestamp} {message}` lines to a file
#[derive(Debug)]
pub(crate) struct FileSink {
    file: Mutex<File>,
}

impl FileSink {
    /// Create the sink, truncating any log left by a previous run
    pub(crate) fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self {
            file: Mutex::new(File::create(path)?),
        })
    }
}

impl EventSink for FileSink {
    fn record(&self, _level: Level, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        // A log write failure has nowhere else to be reported.
        let _ = writeln!(self.file.lock(), "{timestamp} {message}");
    }
}
