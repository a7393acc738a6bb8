//! # levelbridge-config
//!
//! Observability configuration: threshold and output format for the
//! process-wide logging backend, from documents or environment variables.
//! This crate depends on `ports` only.

/// Environment variable parsing and merging.
pub mod env;
/// Configuration schema types and document parsing.
pub mod schema;

pub use env::{
    ENV_LOG_FORMAT, ENV_LOG_LEVEL, EnvParseError, ObservabilityEnv, apply_env_overrides,
    load_observability_config_std_env,
};
pub use schema::{
    ConfigError, LogFormat, ObservabilityConfig, parse_observability_config_json,
    parse_observability_config_toml,
};

/// Returns the config crate version.
#[must_use]
pub const fn config_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
