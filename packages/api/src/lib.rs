//! Cachet public API
//!
//! Client-side HTTP response cache with verb-driven invalidation and a
//! structured request log. The engine lives in `cachet_client`; this crate
//! adds the process-default cache and logger shared by every session that
//! opts into them, plus free functions that act on those defaults.
//!
//! ```
//! use cachet::{Cachet, MockTransport};
//!
//! let session = Cachet::isolated(MockTransport::echo());
//! let response = session.get("https://api.example.com/projects/")?;
//! assert_eq!(response.text(), "GET https://api.example.com/projects/");
//! assert_eq!(session.cache_keys().len(), 1);
//! # Ok::<(), cachet::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod global;
mod session;

pub use global::{
    cache_keys, cache_off, cache_on, clear_cache, default_cache, default_logger, drop_cache,
    drop_only, drop_pattern, halt, hit_cache, load_cache, log_message, save_cache, start_log,
    start_log_file, start_log_stdout, stop_log,
};
pub use session::{Cachet, Session};

// Re-export the engine surface
pub use cachet_client::logging::{
    CacheLogSummary, Category, RequestLogSummary, SharedBuffer, TimingSummary,
    cache_log_summary, load_log, load_log_file, parse_log, request_log_summary,
};
pub use cachet_client::{
    CacheKey, ClientConfig, Directive, Error, HttpRequest, HttpResponse, KeyConfig, LogEvent,
    LogTarget, Logger, MockTransport, RequestBuilder, ResponseCache, Result, Transport,
    TransportError,
};
pub use cachet_client::transport::FnTransport;

/// Engine modules for callers that need more than the facade
pub use cachet_client as engine;
pub use http;
