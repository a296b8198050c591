//! Validate phase - the authoritative gate.

use super::GroupCodeRegistration;
use crate::domain::registration::{
    domain_gate, FieldError, FieldErrors, FormParams, FormRequest, GroupCode,
    RegistrationContext, RegistrationError, EMAIL_FIELD, GROUP_CODE_FIELD,
};
use crate::ports::RegistrationForm;

impl<B: RegistrationForm> GroupCodeRegistration<B> {
    /// Checks a submitted form and batches every problem found.
    ///
    /// Engages only when the submitted form carries a `groupCode` key.
    /// Returns `Err(RegistrationError::Validation)` with all field errors
    /// together; the base form's validation must not run in that case.
    pub(super) async fn check_submission(
        &self,
        ctx: &mut RegistrationContext,
        request: &FormRequest,
    ) -> Result<(), RegistrationError> {
        let Some(form) = request.form.as_ref().filter(|f| f.contains_key(GROUP_CODE_FIELD)) else {
            return Ok(());
        };

        let code = form.first(GROUP_CODE_FIELD).unwrap_or_default();
        let email = form.first(EMAIL_FIELD).filter(|e| !e.is_empty());
        let mut errors = FieldErrors::new();

        if code.is_empty() {
            ctx.cache.clear();
        } else if GroupCode::try_new(code).is_err() {
            tracing::debug!(session_id = %ctx.session_id, "Submitted group code is malformed");
            ctx.cache.mark_invalid(code);
            errors.push(FieldError::invalid_group());
        } else {
            if !ctx.cache.is_trusted_for(code) {
                self.revalidate(ctx, code).await;
            }
            errors.extend(domain_gate::check(email, ctx.cache.allowed_domains(), true));
        }

        self.check_email_unique(form, &mut errors).await?;

        if errors.is_empty() {
            return Ok(());
        }

        tracing::info!(
            session_id = %ctx.session_id,
            errors = %errors,
            "Registration rejected"
        );
        Err(RegistrationError::Validation(errors))
    }

    /// Asks the authority about `code` and confirms the group in the host.
    ///
    /// Leaves the cache pending when the answer is inconclusive, so the next
    /// submission asks again.
    async fn revalidate(&self, ctx: &mut RegistrationContext, code: &str) {
        ctx.cache.begin_validation(code);
        let response = self.request_validation(code).await;

        if !response.success {
            if response.reason.is_some() {
                ctx.cache.mark_invalid(code);
            }
            return;
        }

        let Some(group) = response.authorized_group() else {
            tracing::warn!(
                session_id = %ctx.session_id,
                "Authority accepted code without group data"
            );
            return;
        };

        match self.groups.find_group(group.group_id()).await {
            Ok(Some(_)) => ctx.cache.store_valid(code, group),
            Ok(None) => {
                tracing::warn!(
                    session_id = %ctx.session_id,
                    group_id = %group.group_id(),
                    "Authority returned a group unknown to the host"
                );
                ctx.cache.mark_invalid(code);
            }
            Err(error) => {
                tracing::error!(
                    session_id = %ctx.session_id,
                    group_id = %group.group_id(),
                    error = %error,
                    "Group lookup failed"
                );
            }
        }
    }

    async fn check_email_unique(&self, form: &FormParams, errors: &mut FieldErrors) -> Result<(), RegistrationError> {
        let Some(email) = form.first(EMAIL_FIELD).filter(|e| !e.is_empty()) else {
            return Ok(());
        };

        let existing = self
            .users
            .find_by_email(email)
            .await
            .map_err(RegistrationError::Directory)?;

        if existing.is_some() {
            errors.push(FieldError::email_in_use());
        }
        Ok(())
    }
}
