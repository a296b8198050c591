//! Backchannel adapters.
//!
//! - `UnixSocketBackchannel` - Production transport over a local Unix socket
//! - `InMemoryBackchannel` - Scripted authority for tests

mod in_memory;
#[cfg(unix)]
mod unix_socket;

pub use in_memory::{InMemoryBackchannel, SentMessage};
#[cfg(unix)]
pub use unix_socket::{BackchannelError, UnixSocketBackchannel, MAX_REPLY_BYTES};
