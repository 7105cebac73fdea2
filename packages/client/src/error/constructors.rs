use std::path::{Path, PathBuf};

use super::types::Error;

/// Creates an `Error` for a URL that cannot be canonicalized.
pub fn invalid_url(url: &str, source: url::ParseError) -> Error {
    Error::InvalidUrl {
        url: url.to_string(),
        source,
    }
}

/// Creates an `Error` for an I/O failure not tied to a file path (e.g. a log sink).
pub fn io(operation: &'static str, source: std::io::Error) -> Error {
    Error::Io {
        path: None,
        operation,
        source,
    }
}

/// Creates an `Error` for an I/O failure on `path`.
pub fn io_at(path: &Path, operation: &'static str, source: std::io::Error) -> Error {
    Error::Io {
        path: Some(path.to_path_buf()),
        operation,
        source,
    }
}

/// Creates an `Error` for a snapshot that could not be decoded.
pub fn snapshot(path: impl Into<PathBuf>, source: serde_json::Error) -> Error {
    Error::Snapshot {
        path: path.into(),
        source,
    }
}

/// Creates an `Error` for a log line that could not be parsed.
pub fn log_parse(line: usize, reason: impl Into<String>) -> Error {
    Error::LogParse {
        line,
        reason: reason.into(),
    }
}
