//! Outbound event payload.

use serde::Serialize;
use serde_json::{Map, Value};

use super::WebhookName;

/// Field injected into every outbound message.
pub const WEBHOOK_NAME_FIELD: &str = "webhookName";

/// Ordered mapping of event fields sent to the authority.
///
/// Built fresh for each call. [`EventPayload::into_message`] consumes the
/// payload, so a value can never be sent twice.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EventPayload(Map<String, Value>);

impl EventPayload {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tags the payload with its event type and returns the JSON object
    /// that goes on the wire. A caller-supplied `webhookName` is overwritten.
    pub fn into_message(mut self, event_type: WebhookName) -> Value {
        self.0.insert(
            WEBHOOK_NAME_FIELD.to_string(),
            Value::String(event_type.as_str().to_string()),
        );
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for EventPayload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn into_message_injects_webhook_name() {
        let message = EventPayload::new()
            .with("groupCode", "ABCD1234")
            .into_message(WebhookName::RegisterValidate);

        assert_eq!(
            message,
            json!({ "groupCode": "ABCD1234", "webhookName": "REGISTER_VALIDATE" })
        );
    }

    #[test]
    fn into_message_overwrites_existing_webhook_name() {
        let message = EventPayload::new()
            .with(WEBHOOK_NAME_FIELD, "SPOOFED")
            .into_message(WebhookName::Register);

        assert_eq!(message[WEBHOOK_NAME_FIELD], "REGISTER");
    }

    #[test]
    fn remove_drops_field() {
        let mut payload = EventPayload::new().with("type", "LOGIN").with("userId", "u1");
        assert_eq!(payload.remove("type"), Some(json!("LOGIN")));
        assert!(!payload.contains_key("type"));
        assert_eq!(payload.len(), 1);
    }
}
