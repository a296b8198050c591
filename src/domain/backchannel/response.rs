//! Authority reply.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::GroupId;
use crate::domain::registration::{AllowedDomains, CachedGroup};

/// Substring of `reason` that marks a code the authority does not know.
pub const BAD_GROUP_MARKER: &str = "BAD_GROUP";

/// Structured reply from the authority.
///
/// A transport failure, an empty reply, or a non-object reply all become
/// [`AuthorityResponse::failure`]: `success = false` with no reason.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorityResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_group_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,

    /// Comma-joined domain list, as sent on the wire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_domains: Option<String>,
}

impl AuthorityResponse {
    /// The default failure result.
    pub fn failure() -> Self {
        Self::default()
    }

    /// A rejection carrying a reason.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
            ..Self::default()
        }
    }

    /// A successful group-code validation reply.
    pub fn group(
        role_group_id: impl Into<String>,
        group_name: impl Into<String>,
        allowed_domains: impl Into<String>,
    ) -> Self {
        Self {
            success: true,
            reason: None,
            role_group_id: Some(role_group_id.into()),
            group_name: Some(group_name.into()),
            allowed_domains: Some(allowed_domains.into()),
        }
    }

    /// A bare `{"success": true}` acknowledgement.
    pub fn acknowledged() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    /// Parses the raw text read from the channel.
    ///
    /// Surrounding whitespace is ignored and an empty reply is the default
    /// failure. Anything that is not a JSON object is an error.
    pub fn from_reply(raw: &str) -> Result<Self, serde_json::Error> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::failure());
        }

        let value: Value = serde_json::from_str(trimmed)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("authority reply is not a JSON object"));
        }
        serde_json::from_value(value)
    }

    /// True when the authority rejected the code as unknown.
    pub fn is_bad_group(&self) -> bool {
        !self.success
            && self
                .reason
                .as_deref()
                .is_some_and(|reason| reason.contains(BAD_GROUP_MARKER))
    }

    /// Group data of a successful validation reply.
    ///
    /// Returns `None` for a failed reply, or for a successful one that lacks
    /// a usable `roleGroupId` or `groupName`. A missing `allowedDomains`
    /// means no domain restriction.
    pub fn authorized_group(&self) -> Option<CachedGroup> {
        if !self.success {
            return None;
        }
        let group_id = GroupId::new(self.role_group_id.clone()?).ok()?;
        let group_name = self.group_name.clone()?;
        let allowed_domains = AllowedDomains::parse(self.allowed_domains.as_deref().unwrap_or(""));
        Some(CachedGroup::new(group_id, group_name, allowed_domains))
    }
}
