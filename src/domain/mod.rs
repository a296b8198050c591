//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `backchannel` - Messages exchanged with the authority
//! - `registration` - Group-code registration state and rules

pub mod backchannel;
pub mod foundation;
pub mod registration;
