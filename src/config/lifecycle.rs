//! Lifecycle event forwarding configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::backchannel::WebhookName;

/// Which host lifecycle events are forwarded to the authority.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LifecycleConfig {
    /// Event names to forward (comma-separated), e.g. `LOGIN,LOGOUT`.
    /// Unset means nothing is forwarded.
    pub forwarded_events: Option<String>,
}

impl LifecycleConfig {
    /// Parsed event names. Unknown and non-forwardable names are skipped;
    /// `validate` reports them.
    pub fn forwarded_events_list(&self) -> Vec<WebhookName> {
        self.entries()
            .filter_map(|entry| entry.parse::<WebhookName>().ok())
            .filter(WebhookName::is_forwardable)
            .collect()
    }

    /// Validate lifecycle configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        for entry in self.entries() {
            match entry.parse::<WebhookName>() {
                Ok(WebhookName::RegisterValidate) | Err(_) => {
                    return Err(ValidationError::UnknownEventType(entry.to_string()));
                }
                Ok(WebhookName::Register) => {
                    return Err(ValidationError::ReservedEventType(entry.to_string()));
                }
                Ok(_) => {}
            }
        }
        Ok(())
    }

    fn entries(&self) -> impl Iterator<Item = &str> {
        self.forwarded_events
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
    }
}
