//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `backchannel` - Unix socket transport to the authority, plus an in-memory double
//! - `directory` - In-memory group/user directory
//! - `form` - Stub base registration form

pub mod backchannel;
pub mod directory;
pub mod form;

pub use backchannel::{InMemoryBackchannel, SentMessage};
#[cfg(unix)]
pub use backchannel::UnixSocketBackchannel;
pub use directory::InMemoryDirectory;
pub use form::{FormPhase, StubRegistrationForm};
