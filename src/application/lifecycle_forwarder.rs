//! LifecycleEventForwarder - relays host lifecycle events to the authority.

use std::collections::HashSet;

use super::EventNotifier;
use crate::config::LifecycleConfig;
use crate::domain::backchannel::{EventPayload, WebhookName};

/// Discriminator field the host puts in its own event payloads.
pub const HOST_TYPE_FIELD: &str = "type";

/// An event raised by the identity host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Something a user did: login, logout, registration, profile update.
    User {
        event_type: WebhookName,
        fields: EventPayload,
    },
    /// An administrative change made through the host's admin surface.
    Admin { operation: String, resource_path: String },
}

pub struct LifecycleEventForwarder {
    notifier: EventNotifier,
    forwarded: HashSet<WebhookName>,
}

impl LifecycleEventForwarder {
    pub fn new(notifier: EventNotifier, forwarded: impl IntoIterator<Item = WebhookName>) -> Self {
        Self {
            notifier,
            forwarded: forwarded.into_iter().filter(WebhookName::is_forwardable).collect(),
        }
    }

    pub fn from_config(notifier: EventNotifier, config: &LifecycleConfig) -> Self {
        Self::new(notifier, config.forwarded_events_list())
    }

    pub fn forwards(&self, event_type: WebhookName) -> bool {
        self.forwarded.contains(&event_type)
    }

    /// Forwards `event` if its type is configured. Returns whether it was sent.
    pub async fn on_event(&self, event: HostEvent) -> bool {
        match event {
            HostEvent::User { event_type, mut fields } if self.forwards(event_type) => {
                fields.remove(HOST_TYPE_FIELD);
                self.notifier.notify(event_type, fields).await;
                true
            }
            HostEvent::User { event_type, .. } => {
                tracing::trace!(event_type = %event_type, "Lifecycle event not forwarded");
                false
            }
            HostEvent::Admin { operation, .. } => {
                tracing::trace!(operation = %operation, "Admin event ignored");
                false
            }
        }
    }
}
