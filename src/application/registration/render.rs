//! Render phase.

use super::GroupCodeRegistration;
use crate::domain::registration::{
    CodeSource, FieldError, FormPage, FormRequest, RegistrationContext, ALLOWED_DOMAINS_ATTRIBUTE,
    GROUP_CODE_FIELD, GROUP_NAME_ATTRIBUTE,
};
use crate::ports::RegistrationForm;

impl<B: RegistrationForm> GroupCodeRegistration<B> {
    /// Resolves the supplied code and decorates the page.
    ///
    /// No code clears the cache. A code the cache already trusts is reused
    /// without contacting the authority.
    pub(super) async fn render(&self, ctx: &mut RegistrationContext, request: &FormRequest, page: &mut FormPage) {
        let Some((code, source)) = request.supplied_group_code() else {
            ctx.cache.clear();
            return;
        };

        if ctx.cache.is_trusted_for(code) {
            tracing::debug!(session_id = %ctx.session_id, "Reusing cached group for code");
        } else {
            self.resolve_for_render(ctx, code, page).await;
        }

        if source == CodeSource::Query {
            page.form_data.put_single(GROUP_CODE_FIELD, code);
        }

        match ctx.cache.group() {
            Some(group) => {
                page.set_attribute(GROUP_NAME_ATTRIBUTE, group.display_name());
                page.set_attribute(ALLOWED_DOMAINS_ATTRIBUTE, group.allowed_domains().display());
            }
            None => {
                page.remove_attribute(GROUP_NAME_ATTRIBUTE);
                page.remove_attribute(ALLOWED_DOMAINS_ATTRIBUTE);
            }
        }
    }

    async fn resolve_for_render(&self, ctx: &mut RegistrationContext, code: &str, page: &mut FormPage) {
        let response = self.request_validation(code).await;

        if let Some(group) = response.authorized_group() {
            tracing::debug!(
                session_id = %ctx.session_id,
                group_id = %group.group_id(),
                "Group code accepted"
            );
            ctx.cache.store_valid(code, group);
        } else if response.is_bad_group() {
            ctx.cache.mark_invalid(code);
            page.errors.push(FieldError::invalid_group());
        } else if response.success {
            tracing::warn!(
                session_id = %ctx.session_id,
                "Authority accepted code without group data"
            );
        }
    }
}
