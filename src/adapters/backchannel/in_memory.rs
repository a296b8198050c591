//! In-memory backchannel for testing.
//!
//! Scripted replies per webhook and a record of every message sent.
//!
//! # Security Note
//!
//! This adapter is for **testing only**. It uses `.expect()` on lock
//! operations which will panic if locks are poisoned.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use crate::domain::backchannel::{AuthorityResponse, EventPayload, WebhookName};
use crate::ports::Backchannel;

/// A message as it would have gone on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub event_type: WebhookName,
    pub message: Value,
}

/// In-memory authority stand-in.
///
/// Replies are looked up in order: one-shot replies queued with
/// [`enqueue`](Self::enqueue), then the standing reply set with
/// [`respond_to`](Self::respond_to), then [`AuthorityResponse::failure`]
/// (which is what an unreachable authority looks like).
///
/// # Example
///
/// ```ignore
/// let backchannel = InMemoryBackchannel::new();
/// backchannel.respond_to(
///     WebhookName::RegisterValidate,
///     AuthorityResponse::group("g1", "Acme", "acme.com"),
/// );
///
/// // ... run the flow ...
///
/// assert_eq!(backchannel.call_count(WebhookName::RegisterValidate), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBackchannel {
    standing: Mutex<HashMap<WebhookName, AuthorityResponse>>,
    queued: Mutex<HashMap<WebhookName, VecDeque<AuthorityResponse>>>,
    sent: Mutex<Vec<SentMessage>>,
}

impl InMemoryBackchannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reply for every call to `event_type`.
    pub fn respond_to(&self, event_type: WebhookName, response: AuthorityResponse) {
        self.standing
            .lock()
            .expect("InMemoryBackchannel: standing lock poisoned")
            .insert(event_type, response);
    }

    /// Queues a reply for the next call to `event_type` only.
    pub fn enqueue(&self, event_type: WebhookName, response: AuthorityResponse) {
        self.queued
            .lock()
            .expect("InMemoryBackchannel: queued lock poisoned")
            .entry(event_type)
            .or_default()
            .push_back(response);
    }

    // === Test Helpers ===

    /// All messages sent, oldest first.
    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent
            .lock()
            .expect("InMemoryBackchannel: sent lock poisoned")
            .clone()
    }

    /// Wire messages sent for `event_type`.
    pub fn sent_of(&self, event_type: WebhookName) -> Vec<Value> {
        self.sent()
            .into_iter()
            .filter(|m| m.event_type == event_type)
            .map(|m| m.message)
            .collect()
    }

    pub fn call_count(&self, event_type: WebhookName) -> usize {
        self.sent_of(event_type).len()
    }

    pub fn total_calls(&self) -> usize {
        self.sent
            .lock()
            .expect("InMemoryBackchannel: sent lock poisoned")
            .len()
    }

    /// Forgets recorded messages; scripted replies stay.
    pub fn clear_sent(&self) {
        self.sent
            .lock()
            .expect("InMemoryBackchannel: sent lock poisoned")
            .clear();
    }

    fn next_response(&self, event_type: WebhookName) -> AuthorityResponse {
        let queued = self
            .queued
            .lock()
            .expect("InMemoryBackchannel: queued lock poisoned")
            .get_mut(&event_type)
            .and_then(VecDeque::pop_front);

        queued.unwrap_or_else(|| {
            self.standing
                .lock()
                .expect("InMemoryBackchannel: standing lock poisoned")
                .get(&event_type)
                .cloned()
                .unwrap_or_else(AuthorityResponse::failure)
        })
    }
}

#[async_trait]
impl Backchannel for InMemoryBackchannel {
    async fn send(&self, event_type: WebhookName, payload: EventPayload) -> AuthorityResponse {
        let message = payload.into_message(event_type);
        self.sent
            .lock()
            .expect("InMemoryBackchannel: sent lock poisoned")
            .push(SentMessage { event_type, message });

        self.next_response(event_type)
    }
}
