//! Structured request/cache event log
//!
//! The [`Logger`] writes one tab-separated line per [`LogEvent`] to whatever
//! sink it is bound to. Logs can be read back with [`load_log`] and
//! summarized with [`request_log_summary`] and [`cache_log_summary`].

pub mod event;
pub mod format;
pub mod loader;
pub mod logger;
pub mod sink;
pub mod summary;

pub use event::{Category, LogEvent};
pub use format::{format_line, parse_line};
pub use loader::{load_log, load_log_file, parse_log};
pub use logger::Logger;
pub use sink::SharedBuffer;
pub use summary::{
    CacheLogSummary, RequestLogSummary, TimingSummary, cache_log_summary, request_log_summary,
};
