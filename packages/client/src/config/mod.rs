//! Session configuration
//!
//! A [`ClientConfig`] describes how a session is assembled: whether the cache
//! starts enabled, how request URLs are canonicalized into cache keys, and
//! where the event log goes.

use std::path::PathBuf;

pub mod client;
pub mod validation;

pub use validation::ConfigurationValidator;

/// Destination for the structured event log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LogTarget {
    /// No sink is bound; events are discarded until logging is started.
    #[default]
    Disabled,
    Stdout,
    Stderr,
    /// Append to a file, creating it if missing.
    File(PathBuf),
}

/// Cache key canonicalization options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyConfig {
    /// Sort query pairs by name so `?b=1&a=2` and `?a=2&b=1` share an entry
    pub sort_query: bool,
    /// Strip `#fragment` components
    pub strip_fragment: bool,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            sort_query: true,
            strip_fragment: true,
        }
    }
}

/// Configuration for a cache session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Whether reads are served from and stored into the cache
    pub cache_enabled: bool,
    pub keys: KeyConfig,
    pub log_target: LogTarget,
    /// Snapshot to restore when the session is built
    pub snapshot_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            cache_enabled: true,
            keys: KeyConfig::default(),
            log_target: LogTarget::Disabled,
            snapshot_path: None,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid log target: {0}")]
    LogTarget(String),
    #[error("Invalid snapshot path: {0}")]
    Snapshot(String),
}
