use std::path::PathBuf;

use crate::config::ConfigurationError;

/// A Result alias where the Err case is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the cache engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The transport failed; the inner error is exactly what it reported.
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("invalid url `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid invalidation pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("{operation} failed{}: {source}", display_path(.path))]
    Io {
        path: Option<PathBuf>,
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt cache snapshot {}: {source}", path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported cache snapshot format version {0}")]
    UnsupportedSnapshot(u32),

    #[error("malformed log line {line}: {reason}")]
    LogParse { line: usize, reason: String },

    /// Raised by `halt`; the same text is written to the log as an ERROR event.
    #[error("{0}")]
    Halt(String),

    #[error(transparent)]
    Config(#[from] ConfigurationError),
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" for {}", p.display()))
        .unwrap_or_default()
}

/// Failures reported by a [`Transport`](crate::transport::Transport).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Wrap any displayable error as [`TransportError::Other`].
    pub fn other<E: std::fmt::Display>(error: E) -> Self {
        Self::Other(error.to_string())
    }
}
