//! Test utilities shared across the tforge workspace
//!
//! This crate provides common testing infrastructure including:
//! - XDG and `TFORGE_*` environment isolation ([`EnvTestGuard`])
//! - Temporary config trees for driving the `tforge` binary
//!   ([`ConfigDirsTestGuard`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod config;
pub mod env;

// Re-export commonly used items
pub use config::ConfigDirsTestGuard;
pub use env::EnvTestGuard;
