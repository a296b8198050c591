//! Per-session memo of the authority's last answer.
//!
//! # Invariants
//!
//! - Group name and allowed domains live in one [`CachedGroup`], so they
//!   are present together or not at all.
//! - A group is cached only while the validity is
//!   [`GroupValidity::KnownValid`]; marking a code invalid drops it.
//! - A `KnownInvalid` code is never trusted, even if the same string is
//!   submitted again.
//!
//! Fields are private; every mutation goes through a method that keeps the
//! invariants.

use serde::{Deserialize, Serialize};

use super::AllowedDomains;
use crate::domain::foundation::GroupId;

/// Group data confirmed by the authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedGroup {
    group_id: GroupId,
    group_name: String,
    allowed_domains: AllowedDomains,
}

impl CachedGroup {
    pub fn new(group_id: GroupId, group_name: impl Into<String>, allowed_domains: AllowedDomains) -> Self {
        Self {
            group_id,
            group_name: group_name.into(),
            allowed_domains,
        }
    }

    pub fn group_id(&self) -> &GroupId {
        &self.group_id
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    pub fn allowed_domains(&self) -> &AllowedDomains {
        &self.allowed_domains
    }

    /// Name as shown on the form: underscores become spaces.
    pub fn display_name(&self) -> String {
        self.group_name.replace('_', " ")
    }
}

/// What the cache knows about the validity of its code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupValidity {
    #[default]
    Unknown,
    KnownInvalid,
    KnownValid,
}

/// Conceptual registration state, derived from the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationState {
    /// No code in play.
    NoCode,
    /// A code is known but the authority has not settled it.
    PendingValidation,
    Valid,
    Invalid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationCache {
    group_code: Option<String>,
    group: Option<CachedGroup>,
    validity: GroupValidity,
}

impl ValidationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group_code(&self) -> Option<&str> {
        self.group_code.as_deref()
    }

    pub fn group(&self) -> Option<&CachedGroup> {
        self.group.as_ref()
    }

    pub fn group_id(&self) -> Option<&GroupId> {
        self.group.as_ref().map(CachedGroup::group_id)
    }

    pub fn allowed_domains(&self) -> Option<&AllowedDomains> {
        self.group.as_ref().map(CachedGroup::allowed_domains)
    }

    pub fn validity(&self) -> GroupValidity {
        self.validity
    }

    pub fn state(&self) -> RegistrationState {
        match (&self.group_code, self.validity) {
            (None, _) => RegistrationState::NoCode,
            (Some(_), GroupValidity::KnownValid) => RegistrationState::Valid,
            (Some(_), GroupValidity::KnownInvalid) => RegistrationState::Invalid,
            (Some(_), GroupValidity::Unknown) => RegistrationState::PendingValidation,
        }
    }

    /// True when `code` was confirmed valid by the authority and nothing
    /// has contradicted it since. Compares code values, not identity.
    pub fn is_trusted_for(&self, code: &str) -> bool {
        self.validity == GroupValidity::KnownValid
            && self.group.is_some()
            && self.group_code.as_deref() == Some(code)
    }

    /// Records that the authority confirmed `code`.
    pub fn store_valid(&mut self, code: &str, group: CachedGroup) {
        self.group_code = Some(code.to_string());
        self.group = Some(group);
        self.validity = GroupValidity::KnownValid;
    }

    /// Records that `code` is bad; any cached group data is dropped.
    pub fn mark_invalid(&mut self, code: &str) {
        self.group_code = Some(code.to_string());
        self.group = None;
        self.validity = GroupValidity::KnownInvalid;
    }

    /// Starts tracking `code` without an answer yet. Stale data for a
    /// different code is dropped; a settled answer for the same code is kept.
    pub fn begin_validation(&mut self, code: &str) {
        if self.group_code.as_deref() != Some(code) {
            self.group_code = Some(code.to_string());
            self.group = None;
            self.validity = GroupValidity::Unknown;
        }
    }

    /// Forgets everything (user removed the code).
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
