//! The event logger
//!
//! Logging is off until a sink is bound with one of the `start*` methods.
//! Writes are serialized by a mutex so concurrent sessions never interleave
//! partial lines, and each line is flushed before the write returns.

use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use http::Method;

use super::event::LogEvent;
use super::format::format_line;
use super::sink::{self, BoxedSink};
use crate::cache::CacheKey;
use crate::config::LogTarget;
use crate::error::{self, Error, Result};

/// Append-only event sink binding
#[derive(Default)]
pub struct Logger {
    sink: Mutex<Option<BoxedSink>>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("active", &self.is_active())
            .finish()
    }
}

impl Logger {
    /// A logger with no sink bound
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `sink`, replacing any previous one
    pub fn start<W>(&self, sink: W)
    where
        W: Write + Send + 'static,
    {
        self.bind(Some(Box::new(sink)));
    }

    pub fn start_stdout(&self) {
        self.start(io::stdout());
    }

    pub fn start_stderr(&self) {
        self.start(io::stderr());
    }

    /// Bind a file sink, appending to `path`
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be opened; the previous sink
    /// stays bound in that case.
    pub fn start_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = sink::open_append(path.as_ref())?;
        self.start(file);
        Ok(())
    }

    /// Bind the sink described by `target`; `Disabled` unbinds
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if a file target cannot be opened.
    pub fn start_target(&self, target: &LogTarget) -> Result<()> {
        let sink = sink::open_target(target)?;
        self.bind(sink);
        Ok(())
    }

    /// Unbind the sink; returns whether one was bound
    pub fn stop(&self) -> bool {
        self.lock().take().is_some()
    }

    pub fn is_active(&self) -> bool {
        self.lock().is_some()
    }

    fn bind(&self, sink: Option<BoxedSink>) {
        let mut guard = self.lock();
        if let Some(previous) = guard.as_mut() {
            if let Err(e) = previous.flush() {
                tracing::warn!(target: "cachet::log", error = %e, "Failed to flush previous log sink");
            }
        }
        *guard = sink;
    }

    fn lock(&self) -> MutexGuard<'_, Option<BoxedSink>> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write one event to the bound sink; a no-op when none is bound
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the sink rejects the write. Events are never
    /// dropped silently.
    pub fn write(&self, event: &LogEvent) -> Result<()> {
        tracing::debug!(
            target: "cachet::log",
            category = %event.category,
            verb = event.verb.as_deref(),
            url = event.url.as_deref(),
            elapsed = event.elapsed,
            "{}",
            event.message
        );

        let mut guard = self.lock();
        let Some(sink) = guard.as_mut() else {
            return Ok(());
        };

        let mut line = format_line(event);
        line.push('\n');
        sink.write_all(line.as_bytes())
            .and_then(|()| sink.flush())
            .map_err(|e| error::io("write log event", e))
    }

    /// Write a MESSAGE event
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the sink rejects the write.
    pub fn message(&self, text: impl Into<String>) -> Result<()> {
        self.write(&LogEvent::message(text))
    }

    /// Record an ERROR event and return the matching `Error::Halt`.
    ///
    /// Never fails itself: with no sink, or a broken one, the error is still
    /// returned for the caller to propagate.
    pub fn halt(&self, text: impl Into<String>) -> Error {
        let text = text.into();
        if let Err(e) = self.write(&LogEvent::error(text.clone())) {
            tracing::warn!(target: "cachet::log", error = %e, "Failed to record halt event");
        }
        Error::Halt(text)
    }

    /// Write an HTTP event for a completed transport call
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the sink rejects the write.
    pub fn http(&self, method: &Method, key: &CacheKey, elapsed: Duration, status: u16) -> Result<()> {
        self.write(&LogEvent::http(method, key, elapsed, status))
    }

    /// # Errors
    ///
    /// Returns `Error::Io` if the sink rejects the write.
    pub fn cache_set(&self, key: &CacheKey) -> Result<()> {
        self.write(&LogEvent::cache_set(key))
    }

    /// # Errors
    ///
    /// Returns `Error::Io` if the sink rejects the write.
    pub fn cache_hit(&self, method: &Method, key: &CacheKey) -> Result<()> {
        self.write(&LogEvent::cache_hit(method, key))
    }

    /// # Errors
    ///
    /// Returns `Error::Io` if the sink rejects the write.
    pub fn cache_drop(&self, key: &CacheKey) -> Result<()> {
        self.write(&LogEvent::cache_drop(key))
    }
}
