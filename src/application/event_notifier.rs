//! EventNotifier - best-effort notifications to the authority.

use std::sync::Arc;

use crate::domain::backchannel::{AuthorityResponse, EventPayload, WebhookName};
use crate::ports::Backchannel;

/// Thin layer over the [`Backchannel`] that logs rejections.
///
/// Never fails; callers decide what `success = false` means for them.
#[derive(Clone)]
pub struct EventNotifier {
    backchannel: Arc<dyn Backchannel>,
}

impl EventNotifier {
    pub fn new(backchannel: Arc<dyn Backchannel>) -> Self {
        Self { backchannel }
    }

    pub async fn notify(&self, event_type: WebhookName, payload: EventPayload) -> AuthorityResponse {
        let response = self.backchannel.send(event_type, payload).await;

        if !response.success {
            if let Some(reason) = response.reason.as_deref() {
                tracing::info!(event_type = %event_type, reason, "The event was not successful");
            }
        }

        response
    }
}
