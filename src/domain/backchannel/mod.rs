//! Backchannel message types.
//!
//! One JSON object per direction: an [`EventPayload`] tagged with a
//! [`WebhookName`] goes out, an [`AuthorityResponse`] comes back.

mod payload;
mod response;
mod webhook_name;

pub use payload::{EventPayload, WEBHOOK_NAME_FIELD};
pub use response::{AuthorityResponse, BAD_GROUP_MARKER};
pub use webhook_name::WebhookName;
