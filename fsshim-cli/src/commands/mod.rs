//! CLI command implementations.
//!
//! - [`config`] - Configuration inspection (path, show)
//! - [`info`] - Platform support summary
//! - [`probe`] - Invoke one portable filesystem operation

pub mod config;
pub mod info;
pub mod probe;
