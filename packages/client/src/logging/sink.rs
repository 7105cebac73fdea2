//! Log sinks
//!
//! Any `Write + Send` value can back a [`Logger`](super::Logger). This module
//! adds the file and in-memory sinks the engine needs.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use crate::config::LogTarget;
use crate::error::{self, Result};

/// Boxed sink as stored by the logger
pub type BoxedSink = Box<dyn Write + Send>;

/// Open `path` for appending, creating it if needed
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be opened.
pub fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| error::io_at(path, "open log file", e))
}

/// Resolve a configured target into a sink; `Disabled` yields `None`
///
/// # Errors
///
/// Returns `Error::Io` if a file target cannot be opened.
pub fn open_target(target: &LogTarget) -> Result<Option<BoxedSink>> {
    Ok(match target {
        LogTarget::Disabled => None,
        LogTarget::Stdout => Some(Box::new(io::stdout())),
        LogTarget::Stderr => Some(Box::new(io::stderr())),
        LogTarget::File(path) => Some(Box::new(open_append(path)?)),
    })
}

/// Cloneable in-memory sink; every clone appends to the same buffer
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, as UTF-8 (lossy)
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock().unwrap_or_else(PoisonError::into_inner))
            .into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
