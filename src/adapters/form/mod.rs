//! Base registration form adapters.

mod stub_form;

pub use stub_form::{FormPhase, StubRegistrationForm};
