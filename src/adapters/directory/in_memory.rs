//! In-memory host directory for development and testing.
//!
//! Implements both [`GroupDirectory`] and [`UserDirectory`] over plain maps
//! and records every group join for assertions.
//!
//! # Security Note
//!
//! Uses `.expect()` on lock operations which will panic if locks are
//! poisoned. Not for production use.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, GroupId, UserId};
use crate::ports::{Group, GroupDirectory, UserDirectory};

#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    groups: RwLock<HashMap<GroupId, Group>>,
    users_by_email: RwLock<HashMap<String, UserId>>,
    memberships: RwLock<Vec<(UserId, GroupId)>>,
    unavailable: bool,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A directory whose every call fails with `DirectoryUnavailable`.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with_group(self, group: Group) -> Self {
        self.add_group(group);
        self
    }

    pub fn with_user(self, email: &str, user_id: UserId) -> Self {
        self.add_user(email, user_id);
        self
    }

    pub fn add_group(&self, group: Group) {
        self.groups
            .write()
            .expect("InMemoryDirectory: groups lock poisoned")
            .insert(group.id.clone(), group);
    }

    pub fn add_user(&self, email: &str, user_id: UserId) {
        self.users_by_email
            .write()
            .expect("InMemoryDirectory: users lock poisoned")
            .insert(email.to_ascii_lowercase(), user_id);
    }

    // === Test Helpers ===

    pub fn memberships(&self) -> Vec<(UserId, GroupId)> {
        self.memberships
            .read()
            .expect("InMemoryDirectory: memberships lock poisoned")
            .clone()
    }

    pub fn is_member(&self, user_id: &UserId, group_id: &GroupId) -> bool {
        self.memberships()
            .iter()
            .any(|(user, group)| user == user_id && group == group_id)
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable {
            return Err(DomainError::new(
                ErrorCode::DirectoryUnavailable,
                "Simulated directory outage",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl GroupDirectory for InMemoryDirectory {
    async fn find_group(&self, id: &GroupId) -> Result<Option<Group>, DomainError> {
        self.check_available()?;
        Ok(self
            .groups
            .read()
            .expect("InMemoryDirectory: groups lock poisoned")
            .get(id)
            .cloned())
    }

    async fn join_group(&self, user_id: &UserId, group: &Group) -> Result<(), DomainError> {
        self.check_available()?;
        if !self
            .groups
            .read()
            .expect("InMemoryDirectory: groups lock poisoned")
            .contains_key(&group.id)
        {
            return Err(DomainError::new(ErrorCode::GroupNotFound, "Group not found")
                .with_detail("group_id", group.id.as_str()));
        }
        self.memberships
            .write()
            .expect("InMemoryDirectory: memberships lock poisoned")
            .push((user_id.clone(), group.id.clone()));
        Ok(())
    }
}

#[async_trait]
impl UserDirectory for InMemoryDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserId>, DomainError> {
        self.check_available()?;
        Ok(self
            .users_by_email
            .read()
            .expect("InMemoryDirectory: users lock poisoned")
            .get(&email.to_ascii_lowercase())
            .cloned())
    }
}
