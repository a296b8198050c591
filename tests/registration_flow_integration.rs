//! End-to-end registration through an invite link.
//!
//! Drives render, validate and commit against one session context with
//! in-memory host adapters and a scripted authority:
//! 1. The invite link renders the group name and allowed domains
//! 2. The POST passes validation from the cached answer
//! 3. Commit joins the user to the group and publishes `REGISTER`

use std::sync::Arc;

use invite_gate::adapters::{InMemoryBackchannel, InMemoryDirectory, StubRegistrationForm};
use invite_gate::application::{EventNotifier, GroupCodeRegistration};
use invite_gate::domain::backchannel::{AuthorityResponse, WebhookName};
use invite_gate::domain::foundation::{GroupId, UserId};
use invite_gate::domain::registration::{
    FieldError, FormPage, FormParams, FormRequest, RegisteredUser, RegistrationContext,
    RegistrationError, RegistrationState, ALLOWED_DOMAINS_ATTRIBUTE, EMAIL_FIELD, GROUP_CODE_FIELD,
    GROUP_NAME_ATTRIBUTE,
};
use invite_gate::ports::{Group, RegistrationForm};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Host {
    backchannel: Arc<InMemoryBackchannel>,
    directory: Arc<InMemoryDirectory>,
    form: GroupCodeRegistration<StubRegistrationForm>,
}

impl Host {
    fn new() -> Self {
        let backchannel = Arc::new(InMemoryBackchannel::new());
        let directory = Arc::new(
            InMemoryDirectory::new().with_group(Group::new(GroupId::new("g1").unwrap(), "Acme")),
        );
        let form = GroupCodeRegistration::new(
            StubRegistrationForm::new(),
            EventNotifier::new(backchannel.clone()),
            directory.clone(),
            directory.clone(),
        );
        Self {
            backchannel,
            directory,
            form,
        }
    }
}

fn post(code: &str, email: &str) -> FormRequest {
    FormRequest::new().with_form(
        FormParams::new()
            .with(GROUP_CODE_FIELD, code)
            .with(EMAIL_FIELD, email),
    )
}

fn jo() -> RegisteredUser {
    RegisteredUser {
        id: UserId::new("u1").unwrap(),
        first_name: "Jo".to_string(),
        last_name: "Doe".to_string(),
        email: "jo@acme.com".to_string(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn invite_link_registration_joins_group() {
    let host = Host::new();
    host.backchannel.respond_to(
        WebhookName::RegisterValidate,
        AuthorityResponse::group("g1", "Acme", "acme.com,acme.org"),
    );
    host.backchannel
        .respond_to(WebhookName::Register, AuthorityResponse::acknowledged());
    let mut ctx = RegistrationContext::new("session-42");

    let invite = FormRequest::new().with_query(FormParams::new().with(GROUP_CODE_FIELD, "ABCD1234"));
    let mut page = FormPage::new();
    host.form.build_page(&mut ctx, &invite, &mut page).await.unwrap();

    assert_eq!(page.attribute(GROUP_NAME_ATTRIBUTE), Some("Acme"));
    assert_eq!(page.attribute(ALLOWED_DOMAINS_ATTRIBUTE), Some("acme.com, acme.org"));
    assert_eq!(page.form_data.first(GROUP_CODE_FIELD), Some("ABCD1234"));

    let submission = post("ABCD1234", "jo@acme.com");
    host.form.validate(&mut ctx, &submission).await.unwrap();
    assert_eq!(ctx.cache.state(), RegistrationState::Valid);
    assert_eq!(ctx.cache.group_id().unwrap().as_str(), "g1");

    host.form.success(&mut ctx, &submission, &jo()).await.unwrap();

    assert!(host
        .directory
        .is_member(&UserId::new("u1").unwrap(), &GroupId::new("g1").unwrap()));
    assert_eq!(host.backchannel.call_count(WebhookName::RegisterValidate), 1);

    let register = host.backchannel.sent_of(WebhookName::Register);
    assert_eq!(register.len(), 1);
    assert_eq!(register[0]["groupCode"], "ABCD1234");
    assert_eq!(register[0]["userId"], "u1");
}

#[tokio::test]
async fn corrected_code_after_rejection_registers() {
    let host = Host::new();
    host.backchannel.enqueue(
        WebhookName::RegisterValidate,
        AuthorityResponse::rejected("BAD_GROUP"),
    );
    host.backchannel.respond_to(
        WebhookName::RegisterValidate,
        AuthorityResponse::group("g1", "Acme", "acme.com"),
    );
    let mut ctx = RegistrationContext::new("session-43");

    let rejected = host.form.validate(&mut ctx, &post("WRONG123", "jo@acme.com")).await;
    match rejected {
        Err(RegistrationError::Validation(errors)) => {
            assert_eq!(errors.into_vec(), vec![FieldError::invalid_group()])
        }
        other => panic!("expected validation errors, got {other:?}"),
    }
    assert_eq!(ctx.cache.state(), RegistrationState::Invalid);

    let corrected = post("ABCD1234", "jo@acme.com");
    host.form.validate(&mut ctx, &corrected).await.unwrap();
    host.form.success(&mut ctx, &corrected, &jo()).await.unwrap();

    assert_eq!(host.directory.memberships().len(), 1);
    let register = host.backchannel.sent_of(WebhookName::Register);
    assert_eq!(register[0]["groupCode"], "ABCD1234");
}

#[tokio::test]
async fn authority_outage_blocks_registration_with_code() {
    let host = Host::new();
    let mut ctx = RegistrationContext::new("session-44");

    let result = host.form.validate(&mut ctx, &post("ABCD1234", "jo@acme.com")).await;

    let errors = result.unwrap_err();
    assert_eq!(
        errors.field_errors().map(|e| e.len()),
        Some(1),
        "outage should surface one invalidGroup error"
    );
    assert_eq!(host.form.base().validate_calls(), 0);
}
