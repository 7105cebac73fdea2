//! Process-default cache and logger
//!
//! Sessions built with [`crate::Cachet::with_transport`] share these two
//! instances, so the free functions below act on the same entries and the
//! same log those sessions use.

use std::io::Write;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use cachet_client::invalidation::{self, Directive};
use cachet_client::{CacheKey, Error, HttpResponse, Logger, ResponseCache, Result};

/// Global cache instance
pub static GLOBAL_CACHE: LazyLock<Arc<ResponseCache>> =
    LazyLock::new(|| Arc::new(ResponseCache::new()));

/// Global logger instance, unbound until [`start_log`] or a sibling is called
pub static GLOBAL_LOGGER: LazyLock<Arc<Logger>> = LazyLock::new(|| Arc::new(Logger::new()));

/// Handle to the process-default cache
pub fn default_cache() -> Arc<ResponseCache> {
    Arc::clone(&GLOBAL_CACHE)
}

/// Handle to the process-default logger
pub fn default_logger() -> Arc<Logger> {
    Arc::clone(&GLOBAL_LOGGER)
}

fn invalidate(directive: &Directive) -> Result<Vec<CacheKey>> {
    invalidation::apply_logged(&GLOBAL_CACHE, &GLOBAL_LOGGER, directive)
}

/// Drop every entry of the default cache
///
/// # Errors
///
/// Returns `Error::Io` if the log sink rejects an event.
pub fn clear_cache() -> Result<Vec<CacheKey>> {
    invalidate(&Directive::All)
}

/// Drop exactly `url` from the default cache
///
/// # Errors
///
/// Returns `Error::Io` if the log sink rejects an event.
pub fn drop_only(url: &str) -> Result<Vec<CacheKey>> {
    invalidate(&Directive::exact(url))
}

/// Drop `url` and everything below it from the default cache
///
/// # Errors
///
/// Returns `Error::Io` if the log sink rejects an event.
pub fn drop_cache(url: &str) -> Result<Vec<CacheKey>> {
    invalidate(&Directive::prefix(url))
}

/// Drop every key of the default cache that `pattern` matches
///
/// # Errors
///
/// Returns `Error::InvalidPattern` before anything is dropped if the regex
/// does not compile, or `Error::Io` if the log sink rejects an event.
pub fn drop_pattern(pattern: &str) -> Result<Vec<CacheKey>> {
    invalidate(&Directive::pattern(pattern)?)
}

pub fn cache_on() {
    GLOBAL_CACHE.enable();
}

/// Turn the default cache off, clearing it; returns the entries removed
pub fn cache_off() -> usize {
    let cleared = GLOBAL_CACHE.disable();
    tracing::debug!(target: "cachet::global", cleared, "Default cache disabled");
    cleared
}

pub fn cache_keys() -> Vec<CacheKey> {
    GLOBAL_CACHE.keys()
}

/// Stored response for `url`, without logging
pub fn hit_cache(url: &str) -> Option<HttpResponse> {
    GLOBAL_CACHE.peek(CacheKey::lenient(url).as_str())
}

/// # Errors
///
/// Returns `Error::Io` if the snapshot cannot be written.
pub fn save_cache(path: impl AsRef<Path>) -> Result<usize> {
    GLOBAL_CACHE.save(path)
}

/// Replace the default cache with the snapshot at `path`
///
/// # Errors
///
/// `Error::Io`, `Error::Snapshot` or `Error::UnsupportedSnapshot`; the cache
/// is unchanged on error.
pub fn load_cache(path: impl AsRef<Path>) -> Result<usize> {
    GLOBAL_CACHE.load(path)
}

/// Bind the default logger to `sink`, replacing any previous sink
pub fn start_log<W>(sink: W)
where
    W: Write + Send + 'static,
{
    GLOBAL_LOGGER.start(sink);
}

pub fn start_log_stdout() {
    GLOBAL_LOGGER.start_stdout();
}

/// Bind the default logger to `path`, appending
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be opened.
pub fn start_log_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    GLOBAL_LOGGER.start_file(path)?;
    tracing::debug!(target: "cachet::global", path = %path.display(), "Default log bound to file");
    Ok(())
}

/// Unbind the default logger; returns whether a sink was bound
pub fn stop_log() -> bool {
    GLOBAL_LOGGER.stop()
}

/// # Errors
///
/// Returns `Error::Io` if the log sink rejects the event.
pub fn log_message(text: impl Into<String>) -> Result<()> {
    GLOBAL_LOGGER.message(text)
}

/// Log an ERROR event to the default log and return `Error::Halt`
pub fn halt(text: impl Into<String>) -> Error {
    GLOBAL_LOGGER.halt(text)
}
