//! Registration form port - the host's multi-phase form provider.
//!
//! The host drives a registration form through three phases:
//!
//! 1. `build_page` - render (GET, or re-render after a failed POST)
//! 2. `validate` - the form POST; errors abort the registration
//! 3. `success` - after the host created the user
//!
//! Implementations compose: a decorator wraps a base form and calls
//! through to it at the points it defines.

use async_trait::async_trait;

use crate::domain::registration::{
    FormPage, FormRequest, RegisteredUser, RegistrationContext, RegistrationError,
};

#[async_trait]
pub trait RegistrationForm: Send + Sync {
    /// Provider id the host registers this form under.
    fn id(&self) -> &str;

    /// Name shown in the host's admin console.
    fn display_type(&self) -> &str;

    async fn build_page(
        &self,
        ctx: &mut RegistrationContext,
        request: &FormRequest,
        page: &mut FormPage,
    ) -> Result<(), RegistrationError>;

    /// Validates the submitted form in `request.form`.
    async fn validate(
        &self,
        ctx: &mut RegistrationContext,
        request: &FormRequest,
    ) -> Result<(), RegistrationError>;

    async fn success(
        &self,
        ctx: &mut RegistrationContext,
        request: &FormRequest,
        user: &RegisteredUser,
    ) -> Result<(), RegistrationError>;
}
