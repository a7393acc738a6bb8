//! # levelbridge-testkit
//!
//! Test helpers and in-memory structured loggers.
//! This crate depends on `ports` only.

pub mod in_memory;

pub use in_memory::{NoopLogger, RecordedEntry, RecordingLogger, fields_1};

/// Returns the testkit crate version.
#[must_use]
pub const fn testkit_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
