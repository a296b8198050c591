//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `INVITE_GATE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use invite_gate::config::{init_tracing, AppConfig};
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! init_tracing(&config.logging).expect("Failed to install subscriber");
//!
//! println!("Authority socket: {}", config.backchannel.socket_path().display());
//! ```

mod backchannel;
mod error;
mod lifecycle;
mod logging;
mod registration;

pub use backchannel::{BackchannelConfig, MAX_TIMEOUT_MS};
pub use error::{ConfigError, ValidationError};
pub use lifecycle::LifecycleConfig;
pub use logging::{init_tracing, LogFormat, LoggingConfig};
pub use registration::RegistrationConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
/// Resolved once at startup; nothing here is reconfigurable per call.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Authority socket location and timeout
    pub backchannel: BackchannelConfig,

    /// Lifecycle event forwarding
    #[serde(default)]
    pub lifecycle: LifecycleConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Registration form identity and request headers
    #[serde(default)]
    pub registration: RegistrationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `INVITE_GATE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `INVITE_GATE__BACKCHANNEL__SOCKET_DIR=/run/authority` -> `backchannel.socket_dir`
    /// - `INVITE_GATE__LIFECYCLE__FORWARDED_EVENTS=LOGIN,LOGOUT` -> `lifecycle.forwarded_events`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("INVITE_GATE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.backchannel.validate()?;
        self.lifecycle.validate()?;
        self.logging.validate()?;
        self.registration.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;
    use std::time::Duration;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("INVITE_GATE__BACKCHANNEL__SOCKET_DIR", "/run/authority");
        env::set_var("INVITE_GATE__BACKCHANNEL__SOCKET_FILE", "auth.sock");
    }

    fn clear_env() {
        env::remove_var("INVITE_GATE__BACKCHANNEL__SOCKET_DIR");
        env::remove_var("INVITE_GATE__BACKCHANNEL__SOCKET_FILE");
        env::remove_var("INVITE_GATE__BACKCHANNEL__TIMEOUT_MS");
        env::remove_var("INVITE_GATE__LIFECYCLE__FORWARDED_EVENTS");
        env::remove_var("INVITE_GATE__LOGGING__FORMAT");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(
            config.backchannel.socket_path(),
            std::path::PathBuf::from("/run/authority/auth.sock")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_applied() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.backchannel.timeout(), Duration::from_secs(3));
        assert!(config.lifecycle.forwarded_events_list().is_empty());
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.registration.provider_id, "custom-registration-user-creation");
    }

    #[test]
    fn test_custom_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("INVITE_GATE__BACKCHANNEL__TIMEOUT_MS", "1500");
        env::set_var("INVITE_GATE__LIFECYCLE__FORWARDED_EVENTS", "LOGIN,LOGOUT");
        env::set_var("INVITE_GATE__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.backchannel.timeout_ms, 1500);
        assert_eq!(config.lifecycle.forwarded_events_list().len(), 2);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_missing_socket_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        assert!(AppConfig::load().is_err());
    }
}
