//! Registration form configuration

use http::HeaderName;
use serde::Deserialize;

use super::error::ValidationError;

/// How the group-code registration form presents itself to the host.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationConfig {
    /// Provider id the host registers the form under
    #[serde(default = "default_provider_id")]
    pub provider_id: String,

    /// Name shown in the host's admin console
    #[serde(default = "default_display_type")]
    pub display_type: String,

    /// Header carrying the originating client address
    #[serde(default = "default_forwarded_for_header")]
    pub forwarded_for_header: String,
}

impl RegistrationConfig {
    /// Validate registration configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.provider_id.is_empty() {
            return Err(ValidationError::MissingRequired("REGISTRATION__PROVIDER_ID"));
        }
        HeaderName::from_bytes(self.forwarded_for_header.as_bytes())
            .map_err(|_| ValidationError::InvalidHeaderName(self.forwarded_for_header.clone()))?;
        Ok(())
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            provider_id: default_provider_id(),
            display_type: default_display_type(),
            forwarded_for_header: default_forwarded_for_header(),
        }
    }
}

fn default_provider_id() -> String {
    "custom-registration-user-creation".to_string()
}

fn default_display_type() -> String {
    "Custom Registration User Creation".to_string()
}

fn default_forwarded_for_header() -> String {
    "X-Forwarded-For".to_string()
}
