//! `ClientConfig` presets and builder methods

use std::path::PathBuf;

use super::{ClientConfig, KeyConfig, LogTarget};

impl ClientConfig {
    /// Default configuration: cache on, sorted query keys, logging off
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache disabled; every request goes to the transport
    #[must_use]
    pub fn no_cache() -> Self {
        Self {
            cache_enabled: false,
            ..Self::default()
        }
    }

    /// Cache restored from `path` and persisted back there by the caller
    ///
    /// # Examples
    /// ```
    /// use cachet_client::config::ClientConfig;
    ///
    /// let config = ClientConfig::offline("/tmp/api-cache.json");
    /// assert!(config.cache_enabled);
    /// assert!(config.snapshot_path.is_some());
    /// ```
    #[must_use]
    pub fn offline(path: impl Into<PathBuf>) -> Self {
        Self {
            snapshot_path: Some(path.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_keys(mut self, keys: KeyConfig) -> Self {
        self.keys = keys;
        self
    }

    #[must_use]
    pub fn with_log_target(mut self, target: LogTarget) -> Self {
        self.log_target = target;
        self
    }

    /// Log to a file, appending
    #[must_use]
    pub fn with_log_file(self, path: impl Into<PathBuf>) -> Self {
        self.with_log_target(LogTarget::File(path.into()))
    }

    #[must_use]
    pub fn with_snapshot(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }
}
