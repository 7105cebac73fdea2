//! Canonical types for everyday use

pub use crate::cache::{CacheKey, ResponseCache};
pub use crate::config::{ClientConfig, KeyConfig, LogTarget};
pub use crate::dispatcher::{Dispatcher, RequestBuilder};
pub use crate::error::{Error, Result, TransportError};
pub use crate::invalidation::Directive;
pub use crate::logging::{
    CacheLogSummary, Category, LogEvent, Logger, RequestLogSummary, SharedBuffer,
    TimingSummary, cache_log_summary, load_log, load_log_file, request_log_summary,
};
pub use crate::transport::{FnTransport, HttpRequest, HttpResponse, MockTransport, Transport};
