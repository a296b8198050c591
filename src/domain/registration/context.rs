//! Registration session state passed through every form phase.

use serde::{Deserialize, Serialize};

use super::ValidationCache;
use crate::domain::foundation::UserId;

/// Session-scoped state of one registration attempt.
///
/// The host owns the value and hands it to render, validate and commit by
/// `&mut`. The crate does not serialize concurrent requests for the same
/// session; with concurrent access the last writer wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationContext {
    /// Host session identifier, used only for log correlation.
    pub session_id: String,
    pub cache: ValidationCache,
}

impl RegistrationContext {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            cache: ValidationCache::new(),
        }
    }
}

/// The user the host just created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
