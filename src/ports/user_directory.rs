//! User directory port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};

/// Looks up existing users in the host.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Id of the user registered with `email`, if any.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserId>, DomainError>;
}
