//! Backchannel configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound for the exchange timeout. The call blocks a user-facing
/// request, so anything longer is a misconfiguration.
pub const MAX_TIMEOUT_MS: u64 = 30_000;

/// Where the authority listens and how long to wait for it.
#[derive(Debug, Clone, Deserialize)]
pub struct BackchannelConfig {
    /// Directory holding the authority's Unix socket
    pub socket_dir: String,

    /// Socket file name inside `socket_dir`
    pub socket_file: String,

    /// Timeout for connect + write + read, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl BackchannelConfig {
    /// Full socket path (`socket_dir/socket_file`)
    pub fn socket_path(&self) -> PathBuf {
        Path::new(&self.socket_dir).join(&self.socket_file)
    }

    /// Exchange timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Validate backchannel configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.socket_dir.is_empty() {
            return Err(ValidationError::MissingRequired("BACKCHANNEL__SOCKET_DIR"));
        }
        if self.socket_file.is_empty() {
            return Err(ValidationError::MissingRequired("BACKCHANNEL__SOCKET_FILE"));
        }
        if self.socket_file.contains('/') {
            return Err(ValidationError::InvalidSocketFile(self.socket_file.clone()));
        }
        if self.timeout_ms == 0 || self.timeout_ms > MAX_TIMEOUT_MS {
            return Err(ValidationError::InvalidTimeout {
                actual: self.timeout_ms,
                max: MAX_TIMEOUT_MS,
            });
        }
        Ok(())
    }
}

impl Default for BackchannelConfig {
    fn default() -> Self {
        Self {
            socket_dir: String::new(),
            socket_file: String::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    3_000
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> BackchannelConfig {
        BackchannelConfig {
            socket_dir: "/run/authority".to_string(),
            socket_file: "auth.sock".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = BackchannelConfig::default();
        assert_eq!(config.timeout_ms, 3_000);
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_socket_path_joins_dir_and_file() {
        assert_eq!(valid().socket_path(), PathBuf::from("/run/authority/auth.sock"));
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_validation_missing_dir() {
        let config = BackchannelConfig {
            socket_dir: String::new(),
            ..valid()
        };
        assert!(matches!(config.validate(), Err(ValidationError::MissingRequired(_))));
    }

    #[test]
    fn test_validation_rejects_nested_file() {
        let config = BackchannelConfig {
            socket_file: "nested/auth.sock".to_string(),
            ..valid()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidSocketFile(_))));
    }

    #[test]
    fn test_validation_timeout_bounds() {
        let zero = BackchannelConfig { timeout_ms: 0, ..valid() };
        let huge = BackchannelConfig { timeout_ms: 60_000, ..valid() };
        assert!(zero.validate().is_err());
        assert!(huge.validate().is_err());
    }
}
