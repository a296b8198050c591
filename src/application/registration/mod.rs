//! GroupCodeRegistration - group-code gate around the host's registration form.
//!
//! Decorates a base [`RegistrationForm`]:
//!
//! - `build_page` - resolve the supplied code (cached or via the authority)
//!   and show the group's name and allowed domains
//! - `validate` - the authoritative gate: code shape, authority answer,
//!   group resolution, email domain, email uniqueness; errors are batched
//! - `success` - join the new user to the group and publish `REGISTER`
//!
//! The phases share nothing but the [`RegistrationContext`] the host hands
//! in, so every decision is made from its [`ValidationCache`].
//!
//! [`ValidationCache`]: crate::domain::registration::ValidationCache

mod commit;
mod render;
mod validate;

#[cfg(test)]
mod test_support;

use async_trait::async_trait;
use std::sync::Arc;

use super::EventNotifier;
use crate::config::RegistrationConfig;
use crate::domain::backchannel::{AuthorityResponse, EventPayload, WebhookName};
use crate::domain::registration::{
    FormPage, FormRequest, RegisteredUser, RegistrationContext, RegistrationError, GROUP_CODE_FIELD,
};
use crate::ports::{GroupDirectory, RegistrationForm, UserDirectory};

/// Registration form that requires and enforces group codes.
pub struct GroupCodeRegistration<B> {
    base: B,
    notifier: EventNotifier,
    groups: Arc<dyn GroupDirectory>,
    users: Arc<dyn UserDirectory>,
    config: RegistrationConfig,
}

impl<B: RegistrationForm> GroupCodeRegistration<B> {
    pub fn new(
        base: B,
        notifier: EventNotifier,
        groups: Arc<dyn GroupDirectory>,
        users: Arc<dyn UserDirectory>,
    ) -> Self {
        Self {
            base,
            notifier,
            groups,
            users,
            config: RegistrationConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RegistrationConfig) -> Self {
        self.config = config;
        self
    }

    /// The wrapped base form.
    pub fn base(&self) -> &B {
        &self.base
    }

    async fn request_validation(&self, code: &str) -> AuthorityResponse {
        self.notifier
            .notify(
                WebhookName::RegisterValidate,
                EventPayload::new().with(GROUP_CODE_FIELD, code),
            )
            .await
    }
}

#[async_trait]
impl<B: RegistrationForm> RegistrationForm for GroupCodeRegistration<B> {
    fn id(&self) -> &str {
        &self.config.provider_id
    }

    fn display_type(&self) -> &str {
        &self.config.display_type
    }

    async fn build_page(
        &self,
        ctx: &mut RegistrationContext,
        request: &FormRequest,
        page: &mut FormPage,
    ) -> Result<(), RegistrationError> {
        self.base.build_page(ctx, request, page).await?;
        self.render(ctx, request, page).await;
        Ok(())
    }

    async fn validate(
        &self,
        ctx: &mut RegistrationContext,
        request: &FormRequest,
    ) -> Result<(), RegistrationError> {
        self.check_submission(ctx, request).await?;
        self.base.validate(ctx, request).await
    }

    async fn success(
        &self,
        ctx: &mut RegistrationContext,
        request: &FormRequest,
        user: &RegisteredUser,
    ) -> Result<(), RegistrationError> {
        self.base.success(ctx, request, user).await?;
        self.commit(ctx, request, user).await;
        Ok(())
    }
}
