//! Dispatcher state and the per-call state machines
//!
//! Reads consult the cache before the transport; writes always reach the
//! transport and then invalidate. The HTTP event of a call is always logged
//! before any CACHE event of the same call.

use std::sync::Arc;
use std::time::Instant;

use super::builder::Mode;
use crate::cache::{CacheKey, ResponseCache};
use crate::config::{ClientConfig, ConfigurationValidator, KeyConfig};
use crate::error::{Error, Result};
use crate::invalidation::{self, Directive, default_directive};
use crate::logging::Logger;
use crate::transport::{HttpRequest, HttpResponse, Transport};

/// Cache-aware front for a [`Transport`]
///
/// The cache and logger are held behind `Arc`s so several dispatchers (for
/// example one per transport) can share one cache and one log.
#[derive(Debug)]
pub struct Dispatcher<T> {
    pub(crate) transport: T,
    pub(crate) cache: Arc<ResponseCache>,
    pub(crate) logger: Arc<Logger>,
    pub(crate) keys: KeyConfig,
}

impl<T: Transport> Dispatcher<T> {
    /// Dispatcher with its own empty cache and an unbound logger
    pub fn new(transport: T) -> Self {
        Self::with_shared(
            transport,
            Arc::new(ResponseCache::new()),
            Arc::new(Logger::new()),
        )
    }

    /// Dispatcher over an existing cache and logger
    pub fn with_shared(transport: T, cache: Arc<ResponseCache>, logger: Arc<Logger>) -> Self {
        Self {
            transport,
            cache,
            logger,
            keys: KeyConfig::default(),
        }
    }

    /// Dispatcher built from `config`: fresh cache (restored from the
    /// configured snapshot if that file exists) and a logger bound to the
    /// configured target.
    ///
    /// # Errors
    ///
    /// - `Error::Config` if the configuration does not validate
    /// - `Error::Io` if the log file cannot be opened or the snapshot read
    /// - `Error::Snapshot` if the snapshot is corrupt
    pub fn from_config(transport: T, config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let cache = ResponseCache::with_enabled(config.cache_enabled);
        if let Some(path) = &config.snapshot_path {
            if path.exists() {
                cache.load(path)?;
            }
        }

        let logger = Logger::new();
        logger.start_target(&config.log_target)?;

        Ok(Self::with_shared(transport, Arc::new(cache), Arc::new(logger)).with_key_config(config.keys))
    }

    #[must_use]
    pub fn with_key_config(mut self, keys: KeyConfig) -> Self {
        self.keys = keys;
        self
    }

    pub fn cache(&self) -> &Arc<ResponseCache> {
        &self.cache
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn key_config(&self) -> &KeyConfig {
        &self.keys
    }

    /// Cache key for `url`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidUrl` if `url` is not an absolute URL.
    pub fn key_for(&self, url: &str) -> Result<CacheKey> {
        CacheKey::parse_with(url, &self.keys)
    }

    /// Cache key for `url`, or `url` verbatim if it does not parse
    pub(crate) fn lenient_key(&self, url: &str) -> CacheKey {
        self.key_for(url).unwrap_or_else(|_| CacheKey::from_raw(url))
    }

    pub(crate) fn execute(&self, request: HttpRequest, mode: Mode) -> Result<HttpResponse> {
        let key = self.key_for(&request.url)?;
        match mode {
            Mode::Read => self.read_through(&key, &request),
            Mode::CachedWrite => self.store_through(&key, &request),
            Mode::Write(directive) => self.write_through(&key, &request, directive),
        }
    }

    /// GET: hit → return the stored entry; miss → transport, then store
    fn read_through(&self, key: &CacheKey, request: &HttpRequest) -> Result<HttpResponse> {
        if self.cache.is_enabled() {
            if let Some(hit) = self.cache.get(key.as_str()) {
                self.logger.cache_hit(&request.method, key)?;
                return Ok(hit);
            }
        }
        self.store_through(key, request)
    }

    /// Transport, then store a successful response; never invalidates
    fn store_through(&self, key: &CacheKey, request: &HttpRequest) -> Result<HttpResponse> {
        let response = self.call(key, request)?;
        if self.cache.is_enabled() && response.is_success() {
            self.cache.set(key.clone(), response.clone());
            self.logger.cache_set(key)?;
        }
        Ok(response)
    }

    /// Transport, then invalidate per `directive` or the verb default
    fn write_through(
        &self,
        key: &CacheKey,
        request: &HttpRequest,
        directive: Option<Directive>,
    ) -> Result<HttpResponse> {
        let response = self.call(key, request)?;
        if response.is_success() {
            let directive = directive.unwrap_or_else(|| default_directive(&request.method, key));
            invalidation::apply_logged(&self.cache, &self.logger, &directive)?;
        }
        Ok(response)
    }

    /// One timed transport call; logs the HTTP event on return
    fn call(&self, key: &CacheKey, request: &HttpRequest) -> Result<HttpResponse> {
        let started = Instant::now();
        let response = self.transport.send(request).map_err(|e| {
            tracing::debug!(
                target: "cachet::dispatcher",
                method = %request.method,
                url = %request.url,
                error = %e,
                "Transport failed"
            );
            Error::Transport(e)
        })?;
        self.logger
            .http(&request.method, key, started.elapsed(), response.status)?;
        Ok(response)
    }
}
