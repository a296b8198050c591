//! Commit phase - runs after the host created the user.

use super::GroupCodeRegistration;
use crate::domain::backchannel::{EventPayload, WebhookName};
use crate::domain::foundation::GroupId;
use crate::domain::registration::{
    FormRequest, RegisteredUser, RegistrationContext, RegistrationState, GROUP_CODE_FIELD,
};
use crate::ports::RegistrationForm;

impl<B: RegistrationForm> GroupCodeRegistration<B> {
    /// Joins the new user to the cached group and publishes `REGISTER`.
    ///
    /// The user already exists at this point, so nothing here fails the
    /// registration. A failed join is logged and the event still goes out.
    pub(super) async fn commit(&self, ctx: &mut RegistrationContext, request: &FormRequest, user: &RegisteredUser) {
        let mut payload = EventPayload::new()
            .with("userId", user.id.as_str())
            .with("firstName", user.first_name.as_str())
            .with("lastName", user.last_name.as_str())
            .with("email", user.email.as_str())
            .with("ipAddress", request.client_address(&self.config.forwarded_for_header));

        if let Some(group_id) = ctx.cache.group_id() {
            self.join(ctx, user, group_id).await;
        }

        if ctx.cache.state() == RegistrationState::Valid {
            if let Some(code) = ctx.cache.group_code() {
                payload.insert(GROUP_CODE_FIELD, code);
            }
        }

        self.notifier.notify(WebhookName::Register, payload).await;
    }

    async fn join(&self, ctx: &RegistrationContext, user: &RegisteredUser, group_id: &GroupId) {
        let group = match self.groups.find_group(group_id).await {
            Ok(Some(group)) => group,
            Ok(None) => {
                tracing::error!(
                    session_id = %ctx.session_id,
                    user_id = %user.id,
                    group_id = %group_id,
                    "Cached group no longer exists, user not joined"
                );
                return;
            }
            Err(error) => {
                tracing::error!(
                    session_id = %ctx.session_id,
                    user_id = %user.id,
                    group_id = %group_id,
                    error = %error,
                    "Group lookup failed, user not joined"
                );
                return;
            }
        };

        match self.groups.join_group(&user.id, &group).await {
            Ok(()) => tracing::info!(user_id = %user.id, group_id = %group.id, "User joined group"),
            Err(error) => tracing::error!(
                session_id = %ctx.session_id,
                user_id = %user.id,
                group_id = %group.id,
                error = %error,
                "Failed to join user to group"
            ),
        }
    }
}
