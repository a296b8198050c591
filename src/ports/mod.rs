//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Authority Port
//!
//! - `Backchannel` - One-shot request/response to the local authority
//!
//! ## Host Ports
//!
//! - `GroupDirectory` - Group lookup and membership
//! - `UserDirectory` - Existing-user lookup by email
//! - `RegistrationForm` - The host's render/validate/success form provider

mod backchannel;
mod group_directory;
mod registration_form;
mod user_directory;

pub use backchannel::Backchannel;
pub use group_directory::{Group, GroupDirectory};
pub use registration_form::RegistrationForm;
pub use user_directory::UserDirectory;
