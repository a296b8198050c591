//! Invite Gate - group-code registration for an identity host
//!
//! This crate gates user registration on invite codes validated by an
//! external authority reached over a local Unix socket, and forwards the
//! host's lifecycle events to that authority.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
