//! Group code value object.
//!
//! An invite token tying a registrant to a group and its allowed domains.
//!
//! # Validation Rules
//!
//! - Exactly 8 characters
//! - ASCII letters and digits only
//! - Case is preserved; the authority decides whether case matters

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Required length of a group code.
pub const GROUP_CODE_LEN: usize = 8;

/// A group code whose shape has been checked.
///
/// A well-formed code is not necessarily a valid one; only the authority
/// can say that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupCode(String);

impl GroupCode {
    /// Checks the shape of `code`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the code is empty, is not exactly
    /// [`GROUP_CODE_LEN`] characters, or contains non-alphanumeric characters.
    pub fn try_new(code: &str) -> Result<Self, ValidationError> {
        if code.is_empty() {
            return Err(ValidationError::empty_field("group_code"));
        }

        if code.len() != GROUP_CODE_LEN || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::invalid_format(
                "group_code",
                format!("expected {} alphanumeric characters", GROUP_CODE_LEN),
            ));
        }

        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for GroupCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        GroupCode::try_new(&value)
    }
}

impl From<GroupCode> for String {
    fn from(code: GroupCode) -> Self {
        code.0
    }
}
