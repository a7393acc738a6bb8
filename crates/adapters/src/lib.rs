//! # levelbridge-adapters
//!
//! Adapter implementations for the levelbridge ports: the [`LevelAdapter`]
//! presenting a structured logger as a leveled logger, plus the pieces it
//! hands out (writers, a `log`-facade logger) and a `tracing` backend.
//! This crate depends on `ports` and `config`.

pub mod adapter;
pub mod fields;
pub mod level_map;
pub mod line_writer;
pub mod standard;
pub mod tracing_backend;

pub use adapter::LevelAdapter;
pub use fields::field_set_from_args;
pub use line_writer::LineWriter;
pub use standard::{StandardLogger, StandardWriter};
pub use tracing_backend::TracingLogger;

/// Returns the adapters crate version.
#[must_use]
pub const fn adapters_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use levelbridge_config::config_crate_version;
    use levelbridge_ports::ports_crate_version;

    fn workspace_deps() -> Vec<String> {
        let cargo_toml = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"));
        let mut deps = Vec::new();
        let mut in_deps = false;

        for raw_line in cargo_toml.lines() {
            let line = raw_line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('[') {
                in_deps = line == "[dependencies]";
                continue;
            }
            if in_deps && line.starts_with("levelbridge-") {
                let key = line.split('=').next().unwrap_or("").trim();
                let name = key.split('.').next().unwrap_or("").trim();
                deps.push(name.to_string());
            }
        }

        deps
    }

    #[test]
    fn adapters_do_not_depend_on_testkit() {
        let deps = workspace_deps();
        assert!(
            !deps.iter().any(|dep| dep == "levelbridge-testkit"),
            "testkit must stay a dev-dependency: {deps:?}"
        );
    }

    #[test]
    fn adapters_crate_compiles() {
        let version = adapters_crate_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn adapters_can_use_ports_and_config() {
        assert!(!ports_crate_version().is_empty());
        assert!(!config_crate_version().is_empty());
    }
}
