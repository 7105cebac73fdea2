//! Session constructors

use std::sync::Arc;

use cachet_client::{ClientConfig, Dispatcher, Logger, ResponseCache, Result, Transport};

use crate::global::{default_cache, default_logger};

/// A transport bound to a cache and a logger
pub type Session<T> = Dispatcher<T>;

/// Main entry point providing session constructors
pub struct Cachet;

impl Cachet {
    /// Session over the process-default cache and logger.
    ///
    /// Every session created this way, and every free function in
    /// [`crate::global`], sees the same entries and writes to the same log.
    pub fn with_transport<T: Transport>(transport: T) -> Session<T> {
        Dispatcher::with_shared(transport, default_cache(), default_logger())
    }

    /// Session with its own empty cache and an unbound logger
    pub fn isolated<T: Transport>(transport: T) -> Session<T> {
        Dispatcher::new(transport)
    }

    /// Session with a fresh cache and logger built from `config`
    ///
    /// # Errors
    ///
    /// See [`Dispatcher::from_config`].
    pub fn from_config<T: Transport>(transport: T, config: &ClientConfig) -> Result<Session<T>> {
        Dispatcher::from_config(transport, config)
    }

    /// Session over a caller-provided cache and logger
    pub fn shared<T: Transport>(
        transport: T,
        cache: Arc<ResponseCache>,
        logger: Arc<Logger>,
    ) -> Session<T> {
        Dispatcher::with_shared(transport, cache, logger)
    }
}
