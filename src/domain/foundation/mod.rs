//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers and error types shared by the registration and
//! backchannel modules.

mod errors;
mod ids;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{GroupId, UserId};
