//! Infrastructure implementations.
//!
//! Clock port and environment-driven configuration.

pub mod clock;
pub mod config;
