//! Field-level validation errors shown on the registration form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Form field carrying the group code.
pub const GROUP_CODE_FIELD: &str = "groupCode";
/// Form field carrying the email address.
pub const EMAIL_FIELD: &str = "email";

/// Message code the host resolves into a localized message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageCode {
    InvalidGroup,
    InvalidEmail,
    EmailInUse,
}

impl MessageCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageCode::InvalidGroup => "invalidGroup",
            MessageCode::InvalidEmail => "invalidEmail",
            MessageCode::EmailInUse => "emailInUse",
        }
    }
}

impl fmt::Display for MessageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One error attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: MessageCode,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: MessageCode) -> Self {
        Self {
            field: field.into(),
            message,
        }
    }

    pub fn invalid_group() -> Self {
        Self::new(GROUP_CODE_FIELD, MessageCode::InvalidGroup)
    }

    pub fn invalid_email() -> Self {
        Self::new(EMAIL_FIELD, MessageCode::InvalidEmail)
    }

    pub fn email_in_use() -> Self {
        Self::new(EMAIL_FIELD, MessageCode::EmailInUse)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Batch of field errors, reported together.
///
/// Keeps insertion order and ignores exact duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        if !self.0.contains(&error) {
            self.0.push(error);
        }
    }

    pub fn extend(&mut self, errors: impl IntoIterator<Item = FieldError>) {
        for error in errors {
            self.push(error);
        }
    }

    pub fn contains(&self, field: &str, message: MessageCode) -> bool {
        self.0.iter().any(|e| e.field == field && e.message == message)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.0
    }
}

impl From<Vec<FieldError>> for FieldErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        let mut batch = FieldErrors::new();
        batch.extend(errors);
        batch
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&rendered.join(", "))
    }
}
