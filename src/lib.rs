//! Clockface Service Module
//!
//! Persists the user's chosen lock-screen clock face into the platform
//! settings store as a versioned JSON envelope and reads it back, tolerating
//! the legacy bare-identifier storage format.

// Public exports
pub mod contract;
pub use contract::{client::ClockApi, error::ClockError, Clockface};

pub mod module;
pub use module::ClockfaceServiceModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
