//! Group directory port - the host's view of groups.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, GroupId, UserId};

/// A group as known to the identity host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
}

impl Group {
    pub fn new(id: GroupId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// Resolves groups and manages membership in the host.
///
/// # Contract
///
/// - `find_group` returns `Ok(None)` for an unknown id; `Err` is reserved
///   for infrastructure failures
/// - `join_group` is called only after the user exists in the host
#[async_trait]
pub trait GroupDirectory: Send + Sync {
    async fn find_group(&self, id: &GroupId) -> Result<Option<Group>, DomainError>;

    async fn join_group(&self, user_id: &UserId, group: &Group) -> Result<(), DomainError>;
}
