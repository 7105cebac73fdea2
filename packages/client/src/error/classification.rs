use super::types::{Error, TransportError};

impl Error {
    /// Returns true if the error came from the transport.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Returns true if the error was raised by `halt`.
    #[must_use]
    pub fn is_halt(&self) -> bool {
        matches!(self, Error::Halt(_))
    }

    /// Returns true if the error is an I/O failure (sink, snapshot or log file).
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io { .. })
    }

    /// Returns true for snapshot decoding failures of any kind.
    #[must_use]
    pub fn is_snapshot(&self) -> bool {
        matches!(self, Error::Snapshot { .. } | Error::UnsupportedSnapshot(_))
    }

    /// Borrow the transport error, if this is one.
    #[must_use]
    pub fn as_transport(&self) -> Option<&TransportError> {
        match self {
            Error::Transport(e) => Some(e),
            _ => None,
        }
    }

    /// Recover the transport error unchanged, if this is one.
    pub fn into_transport(self) -> Option<TransportError> {
        match self {
            Error::Transport(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_round_trip_unchanged() {
        let original = TransportError::Status {
            status: 503,
            url: "https://api.example.com/".to_string(),
        };
        let err = Error::from(original.clone());
        assert!(err.is_transport());
        assert!(!err.is_halt());
        assert_eq!(err.to_string(), original.to_string());
        assert_eq!(err.into_transport(), Some(original));
    }

    #[test]
    fn io_error_mentions_path() {
        let err = super::super::io_at(
            std::path::Path::new("/tmp/cache.json"),
            "write snapshot",
            std::io::Error::other("disk full"),
        );
        assert!(err.is_io());
        let text = err.to_string();
        assert!(text.contains("/tmp/cache.json"));
        assert!(text.contains("disk full"));
    }
}
