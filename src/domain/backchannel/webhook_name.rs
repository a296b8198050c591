//! Event-type discriminator carried in every outbound message.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Name of the webhook the authority dispatches a message to.
///
/// Serialized into the `webhookName` field of every outbound payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WebhookName {
    /// Asks the authority whether a group code is valid.
    RegisterValidate,
    /// A registration completed on the host.
    Register,
    RegisterError,
    Login,
    LoginError,
    Logout,
    ResetPassword,
    SendVerifyEmail,
    UpdateProfile,
}

impl WebhookName {
    pub const ALL: [WebhookName; 9] = [
        WebhookName::RegisterValidate,
        WebhookName::Register,
        WebhookName::RegisterError,
        WebhookName::Login,
        WebhookName::LoginError,
        WebhookName::Logout,
        WebhookName::ResetPassword,
        WebhookName::SendVerifyEmail,
        WebhookName::UpdateProfile,
    ];

    /// Whether the host raises this event itself, so a lifecycle forwarder
    /// may relay it. `REGISTER_VALIDATE` is a request made by the
    /// registration form and `REGISTER` is published on commit, so relaying
    /// either would send the authority a second copy.
    pub fn is_forwardable(&self) -> bool {
        !matches!(self, WebhookName::RegisterValidate | WebhookName::Register)
    }

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            WebhookName::RegisterValidate => "REGISTER_VALIDATE",
            WebhookName::Register => "REGISTER",
            WebhookName::RegisterError => "REGISTER_ERROR",
            WebhookName::Login => "LOGIN",
            WebhookName::LoginError => "LOGIN_ERROR",
            WebhookName::Logout => "LOGOUT",
            WebhookName::ResetPassword => "RESET_PASSWORD",
            WebhookName::SendVerifyEmail => "SEND_VERIFY_EMAIL",
            WebhookName::UpdateProfile => "UPDATE_PROFILE",
        }
    }
}

impl fmt::Display for WebhookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WebhookName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        WebhookName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                ValidationError::invalid_format("webhook_name", format!("unknown event type '{}'", wanted))
            })
    }
}
