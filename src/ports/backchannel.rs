//! Backchannel port - request/response link to the external authority.
//!
//! The authority is a separate local process that owns the ground truth
//! for group codes and receives lifecycle notifications.

use async_trait::async_trait;

use crate::domain::backchannel::{AuthorityResponse, EventPayload, WebhookName};

/// Sends one event to the authority and returns its reply.
///
/// # Contract
///
/// Implementations must:
/// - Make at most one delivery attempt per call (no retries)
/// - Inject `webhookName` into the payload before sending
/// - Bound the whole exchange by a timeout
/// - Never fail: connect, write, read, parse and timeout errors are logged
///   and returned as [`AuthorityResponse::failure`]
#[async_trait]
pub trait Backchannel: Send + Sync {
    async fn send(&self, event_type: WebhookName, payload: EventPayload) -> AuthorityResponse;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn Backchannel) {}
}
