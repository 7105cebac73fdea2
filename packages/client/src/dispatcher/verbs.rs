//! One-call verb helpers and explicit cache control

use std::path::Path;

use bytes::Bytes;
use http::Method;

use super::core::Dispatcher;
use crate::cache::CacheKey;
use crate::error::{Error, Result};
use crate::invalidation::{self, Directive};
use crate::transport::{HttpResponse, Transport};

impl<T: Transport> Dispatcher<T> {
    /// GET `url`, served from the cache when possible
    ///
    /// # Errors
    ///
    /// `Error::InvalidUrl`, `Error::Transport` (unchanged) or `Error::Io` from the log sink.
    pub fn get(&self, url: &str) -> Result<HttpResponse> {
        self.request(Method::GET, url).send()
    }

    /// POST `body` to `url`; drops exactly `url` on success
    ///
    /// # Errors
    ///
    /// `Error::InvalidUrl`, `Error::Transport` (unchanged) or `Error::Io` from the log sink.
    pub fn post(&self, url: &str, body: impl Into<Bytes>) -> Result<HttpResponse> {
        self.request(Method::POST, url).body(body).send()
    }

    /// POST with an explicit invalidation directive
    ///
    /// # Errors
    ///
    /// `Error::InvalidUrl`, `Error::Transport` (unchanged) or `Error::Io` from the log sink.
    pub fn post_with_drop(
        &self,
        url: &str,
        body: impl Into<Bytes>,
        directive: Directive,
    ) -> Result<HttpResponse> {
        self.request(Method::POST, url)
            .body(body)
            .drop_with(directive)
            .send()
    }

    /// POST whose response is cached like a GET; never invalidates
    ///
    /// # Errors
    ///
    /// `Error::InvalidUrl`, `Error::Transport` (unchanged) or `Error::Io` from the log sink.
    pub fn cached_post(&self, url: &str, body: impl Into<Bytes>) -> Result<HttpResponse> {
        self.request(Method::POST, url).body(body).cached().send()
    }

    /// PUT `body` to `url`; drops `url` and everything below it on success
    ///
    /// # Errors
    ///
    /// `Error::InvalidUrl`, `Error::Transport` (unchanged) or `Error::Io` from the log sink.
    pub fn put(&self, url: &str, body: impl Into<Bytes>) -> Result<HttpResponse> {
        self.request(Method::PUT, url).body(body).send()
    }

    /// PUT with an explicit invalidation directive
    ///
    /// # Errors
    ///
    /// `Error::InvalidUrl`, `Error::Transport` (unchanged) or `Error::Io` from the log sink.
    pub fn put_with_drop(
        &self,
        url: &str,
        body: impl Into<Bytes>,
        directive: Directive,
    ) -> Result<HttpResponse> {
        self.request(Method::PUT, url)
            .body(body)
            .drop_with(directive)
            .send()
    }

    /// PATCH `body` to `url`; drops `url` and everything below it on success
    ///
    /// # Errors
    ///
    /// `Error::InvalidUrl`, `Error::Transport` (unchanged) or `Error::Io` from the log sink.
    pub fn patch(&self, url: &str, body: impl Into<Bytes>) -> Result<HttpResponse> {
        self.request(Method::PATCH, url).body(body).send()
    }

    /// PATCH with an explicit invalidation directive
    ///
    /// # Errors
    ///
    /// `Error::InvalidUrl`, `Error::Transport` (unchanged) or `Error::Io` from the log sink.
    pub fn patch_with_drop(
        &self,
        url: &str,
        body: impl Into<Bytes>,
        directive: Directive,
    ) -> Result<HttpResponse> {
        self.request(Method::PATCH, url)
            .body(body)
            .drop_with(directive)
            .send()
    }

    /// DELETE `url`; drops `url` and everything below it on success
    ///
    /// # Errors
    ///
    /// `Error::InvalidUrl`, `Error::Transport` (unchanged) or `Error::Io` from the log sink.
    pub fn delete(&self, url: &str) -> Result<HttpResponse> {
        self.request(Method::DELETE, url).send()
    }

    /// DELETE with an explicit invalidation directive
    ///
    /// # Errors
    ///
    /// `Error::InvalidUrl`, `Error::Transport` (unchanged) or `Error::Io` from the log sink.
    pub fn delete_with_drop(&self, url: &str, directive: Directive) -> Result<HttpResponse> {
        self.request(Method::DELETE, url).drop_with(directive).send()
    }

    /// Apply `directive` now, logging a CACHE DROP per removed key
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the log sink rejects an event.
    pub fn invalidate(&self, directive: &Directive) -> Result<Vec<CacheKey>> {
        invalidation::apply_logged(&self.cache, &self.logger, directive)
    }

    /// Drop every entry
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the log sink rejects an event.
    pub fn clear_cache(&self) -> Result<Vec<CacheKey>> {
        self.invalidate(&Directive::All)
    }

    /// Drop exactly `url`
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the log sink rejects an event.
    pub fn drop_only(&self, url: &str) -> Result<Vec<CacheKey>> {
        self.invalidate(&Directive::Exact(self.lenient_key(url)))
    }

    /// Drop `url` and everything hierarchically below it
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the log sink rejects an event.
    pub fn drop_cache(&self, url: &str) -> Result<Vec<CacheKey>> {
        self.invalidate(&Directive::Prefix(self.lenient_key(url)))
    }

    /// Drop every key `pattern` matches
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPattern` before anything is dropped if the regex
    /// does not compile, or `Error::Io` if the log sink rejects an event.
    pub fn drop_pattern(&self, pattern: &str) -> Result<Vec<CacheKey>> {
        let directive = Directive::pattern(pattern)?;
        self.invalidate(&directive)
    }

    /// Stored response for `url`, without logging or touching the transport
    pub fn hit_cache(&self, url: &str) -> Option<HttpResponse> {
        self.cache.peek(self.lenient_key(url).as_str())
    }

    /// Sorted list of cached keys
    pub fn cache_keys(&self) -> Vec<CacheKey> {
        self.cache.keys()
    }

    pub fn cache_on(&self) {
        self.cache.enable();
    }

    /// Turn the cache off; clears every entry
    pub fn cache_off(&self) -> usize {
        self.cache.disable()
    }

    /// Write the cache to `path`
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the snapshot cannot be written.
    pub fn save_cache(&self, path: impl AsRef<Path>) -> Result<usize> {
        self.cache.save(path)
    }

    /// Replace the cache with the snapshot at `path`
    ///
    /// # Errors
    ///
    /// `Error::Io`, `Error::Snapshot` or `Error::UnsupportedSnapshot`; the
    /// cache is unchanged on error.
    pub fn load_cache(&self, path: impl AsRef<Path>) -> Result<usize> {
        self.cache.load(path)
    }

    /// Write a MESSAGE event to this dispatcher's log
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the log sink rejects the event.
    pub fn log_message(&self, text: impl Into<String>) -> Result<()> {
        self.logger.message(text)
    }

    /// Log an ERROR event and return the matching `Error::Halt`
    pub fn halt(&self, text: impl Into<String>) -> Error {
        self.logger.halt(text)
    }
}
