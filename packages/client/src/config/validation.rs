//! Configuration validation

use super::{ClientConfig, ConfigurationError, LogTarget};

/// Configuration validation trait
pub trait ConfigurationValidator {
    /// Validates the configuration for correctness and consistency
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if validation fails:
    /// - `LogTarget` - if the log file path is empty or names a directory
    /// - `Snapshot` - if the snapshot path is empty or names a directory
    fn validate(&self) -> Result<(), ConfigurationError>;
}

impl ConfigurationValidator for ClientConfig {
    fn validate(&self) -> Result<(), ConfigurationError> {
        if let LogTarget::File(path) = &self.log_target {
            if path.as_os_str().is_empty() {
                return Err(ConfigurationError::LogTarget(
                    "log file path cannot be empty".to_string(),
                ));
            }
            if path.is_dir() {
                return Err(ConfigurationError::LogTarget(format!(
                    "{} is a directory",
                    path.display()
                )));
            }
        }

        if let Some(path) = &self.snapshot_path {
            if path.as_os_str().is_empty() {
                return Err(ConfigurationError::Snapshot(
                    "snapshot path cannot be empty".to_string(),
                ));
            }
            if path.is_dir() {
                return Err(ConfigurationError::Snapshot(format!(
                    "{} is a directory",
                    path.display()
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(ClientConfig::default().validate(), Ok(()));
        assert_eq!(ClientConfig::no_cache().validate(), Ok(()));
    }

    #[test]
    fn empty_log_path_is_rejected() {
        let config = ClientConfig::new().with_log_target(LogTarget::File(PathBuf::new()));
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::LogTarget(_))
        ));
    }

    #[test]
    fn directory_snapshot_path_is_rejected() {
        let dir = std::env::temp_dir();
        let config = ClientConfig::offline(dir);
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::Snapshot(_))
        ));
    }
}
