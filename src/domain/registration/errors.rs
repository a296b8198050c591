//! Registration error types.

use thiserror::Error;

use super::FieldErrors;
use crate::domain::foundation::DomainError;

/// Failure of a registration form phase.
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// User-facing field errors, reported as one batch.
    #[error("Registration form has errors: {0}")]
    Validation(FieldErrors),

    /// A host directory lookup failed while validating.
    #[error("Directory lookup failed: {0}")]
    Directory(#[source] DomainError),

    /// The wrapped base form failed.
    #[error("Base registration step failed: {0}")]
    Base(#[source] DomainError),
}

impl RegistrationError {
    /// Field errors, if this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            RegistrationError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<FieldErrors> for RegistrationError {
    fn from(errors: FieldErrors) -> Self {
        RegistrationError::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::registration::FieldError;

    #[test]
    fn validation_error_lists_fields() {
        let err = RegistrationError::from(FieldErrors::from(vec![FieldError::email_in_use()]));
        assert_eq!(err.to_string(), "Registration form has errors: email: emailInUse");
        assert_eq!(err.field_errors().unwrap().len(), 1);
    }

    #[test]
    fn directory_error_has_no_field_errors() {
        let err = RegistrationError::Directory(DomainError::new(ErrorCode::DirectoryUnavailable, "down"));
        assert!(err.field_errors().is_none());
        assert_eq!(err.to_string(), "Directory lookup failed: [DIRECTORY_UNAVAILABLE] down");
    }
}
