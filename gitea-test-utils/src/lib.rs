//! Test utilities shared across the gitea-client workspace
//!
//! This crate provides common testing infrastructure including:
//! - Environment variable overrides ([`GiteaEnvGuard`])
//! - Canned forge payloads ([`fixtures`])
//! - Opt-in tracing output for tests ([`init_tracing`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
pub mod logging;

// Re-export commonly used items
pub use env::GiteaEnvGuard;
pub use logging::init_tracing;
