//! Shared fixtures for the registration phase tests.

use std::sync::Arc;

use super::GroupCodeRegistration;
use crate::adapters::{InMemoryBackchannel, InMemoryDirectory, StubRegistrationForm};
use crate::application::EventNotifier;
use crate::domain::backchannel::AuthorityResponse;
use crate::domain::foundation::GroupId;
use crate::domain::registration::{
    AllowedDomains, CachedGroup, FormParams, FormRequest, RegistrationContext, EMAIL_FIELD,
    GROUP_CODE_FIELD,
};
use crate::ports::Group;

pub const CODE: &str = "ABCD1234";
pub const GROUP_ID: &str = "g1";

pub fn acme_reply() -> AuthorityResponse {
    AuthorityResponse::group(GROUP_ID, "Acme_Corp", "acme.com,acme.org")
}

pub fn acme_group() -> Group {
    Group::new(GroupId::new(GROUP_ID).unwrap(), "Acme_Corp")
}

pub fn submission(code: &str, email: &str) -> FormRequest {
    FormRequest::new().with_form(
        FormParams::new()
            .with(GROUP_CODE_FIELD, code)
            .with(EMAIL_FIELD, email)
            .with("firstName", "Jo")
            .with("lastName", "Doe"),
    )
}

pub struct Harness {
    pub backchannel: Arc<InMemoryBackchannel>,
    pub directory: Arc<InMemoryDirectory>,
    pub form: GroupCodeRegistration<StubRegistrationForm>,
    pub ctx: RegistrationContext,
}

impl Harness {
    /// Accepting base form; the directory knows group `g1`.
    pub fn new() -> Self {
        Self::build(
            StubRegistrationForm::new(),
            InMemoryDirectory::new().with_group(acme_group()),
        )
    }

    pub fn with_directory(directory: InMemoryDirectory) -> Self {
        Self::build(StubRegistrationForm::new(), directory)
    }

    pub fn with_base(base: StubRegistrationForm) -> Self {
        Self::build(base, InMemoryDirectory::new().with_group(acme_group()))
    }

    fn build(base: StubRegistrationForm, directory: InMemoryDirectory) -> Self {
        let backchannel = Arc::new(InMemoryBackchannel::new());
        let directory = Arc::new(directory);
        let form = GroupCodeRegistration::new(
            base,
            EventNotifier::new(backchannel.clone()),
            directory.clone(),
            directory.clone(),
        );
        Self {
            backchannel,
            directory,
            form,
            ctx: RegistrationContext::new("session-1"),
        }
    }

    /// Puts `CODE` in the cache as confirmed for group `g1`.
    pub fn seed_valid_cache(&mut self) {
        self.ctx.cache.store_valid(
            CODE,
            CachedGroup::new(
                GroupId::new(GROUP_ID).unwrap(),
                "Acme_Corp",
                AllowedDomains::parse("acme.com,acme.org"),
            ),
        );
    }
}
