//! Registration domain module.
//!
//! Group-code registration: the code value object, the per-session
//! validation cache, and the pure rules that decide pass or fail.
//!
//! # Module Structure
//!
//! - `group_code` - GroupCode value object (8 alphanumerics)
//! - `allowed_domains` - Email domain allow-list
//! - `cache` - ValidationCache and the derived RegistrationState
//! - `domain_gate` - Email domain rules
//! - `field_error` - User-facing field errors
//! - `form` - Request/page types shared with the host
//! - `context` - RegistrationContext and RegisteredUser
//! - `errors` - RegistrationError

mod allowed_domains;
mod cache;
mod context;
pub mod domain_gate;
mod errors;
mod field_error;
mod form;
mod group_code;

pub use allowed_domains::AllowedDomains;
pub use cache::{CachedGroup, GroupValidity, RegistrationState, ValidationCache};
pub use context::{RegisteredUser, RegistrationContext};
pub use errors::RegistrationError;
pub use field_error::{FieldError, FieldErrors, MessageCode, EMAIL_FIELD, GROUP_CODE_FIELD};
pub use form::{
    CodeSource, FormPage, FormParams, FormRequest, ALLOWED_DOMAINS_ATTRIBUTE, GROUP_NAME_ATTRIBUTE,
};
pub use group_code::{GroupCode, GROUP_CODE_LEN};
