//! Stub implementation of the host's base registration form.
//!
//! Stands in for the host's default user-creation step: accepts every
//! submission unless told otherwise, and records which phases ran.
//!
//! # Usage
//!
//! ```ignore
//! use invite_gate::adapters::form::StubRegistrationForm;
//!
//! let base = StubRegistrationForm::new();
//! // Or reject every submission:
//! let base = StubRegistrationForm::rejecting(vec![FieldError::email_in_use()]);
//! ```

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::registration::{
    FieldError, FieldErrors, FormPage, FormRequest, RegisteredUser, RegistrationContext,
    RegistrationError,
};
use crate::ports::RegistrationForm;

/// Which phase of the base form ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    BuildPage,
    Validate,
    Success(RegisteredUser),
}

#[derive(Debug, Default)]
pub struct StubRegistrationForm {
    /// Errors returned from every `validate` call.
    rejection: Option<FieldErrors>,
    /// Whether `success` fails (user creation failed in the host).
    fail_success: bool,
    phases: Mutex<Vec<FormPhase>>,
}

impl StubRegistrationForm {
    /// A base form that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// A base form whose validation always fails with `errors`.
    pub fn rejecting(errors: Vec<FieldError>) -> Self {
        Self {
            rejection: Some(FieldErrors::from(errors)),
            ..Self::default()
        }
    }

    /// A base form whose user creation fails.
    pub fn failing_success() -> Self {
        Self {
            fail_success: true,
            ..Self::default()
        }
    }

    // === Test Helpers ===

    pub fn phases(&self) -> Vec<FormPhase> {
        self.phases
            .lock()
            .expect("StubRegistrationForm: phases lock poisoned")
            .clone()
    }

    pub fn validate_calls(&self) -> usize {
        self.phases()
            .iter()
            .filter(|phase| matches!(phase, FormPhase::Validate))
            .count()
    }

    fn record(&self, phase: FormPhase) {
        self.phases
            .lock()
            .expect("StubRegistrationForm: phases lock poisoned")
            .push(phase);
    }
}

#[async_trait]
impl RegistrationForm for StubRegistrationForm {
    fn id(&self) -> &str {
        "registration-user-creation"
    }

    fn display_type(&self) -> &str {
        "Registration User Creation"
    }

    async fn build_page(
        &self,
        _ctx: &mut RegistrationContext,
        _request: &FormRequest,
        _page: &mut FormPage,
    ) -> Result<(), RegistrationError> {
        self.record(FormPhase::BuildPage);
        Ok(())
    }

    async fn validate(
        &self,
        _ctx: &mut RegistrationContext,
        _request: &FormRequest,
    ) -> Result<(), RegistrationError> {
        self.record(FormPhase::Validate);
        match &self.rejection {
            Some(errors) => Err(RegistrationError::Validation(errors.clone())),
            None => Ok(()),
        }
    }

    async fn success(
        &self,
        _ctx: &mut RegistrationContext,
        _request: &FormRequest,
        user: &RegisteredUser,
    ) -> Result<(), RegistrationError> {
        if self.fail_success {
            return Err(RegistrationError::Base(DomainError::new(
                ErrorCode::UserCreationFailed,
                "Simulated user creation failure",
            )));
        }
        self.record(FormPhase::Success(user.clone()));
        Ok(())
    }
}
