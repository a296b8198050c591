//! Application layer - orchestration over the ports.
//!
//! - `EventNotifier` - best-effort events to the authority
//! - `registration` - the group-code registration decorator
//! - `LifecycleEventForwarder` - relays host lifecycle events

mod event_notifier;
mod lifecycle_forwarder;
pub mod registration;

pub use event_notifier::EventNotifier;
pub use lifecycle_forwarder::{HostEvent, LifecycleEventForwarder, HOST_TYPE_FIELD};
pub use registration::GroupCodeRegistration;
