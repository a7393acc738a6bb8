//! # levelbridge-ports
//!
//! Port traits for the levelbridge logging adapter.
//!
//! This crate defines both logger shapes the adapter bridges: the
//! consumer-facing [`LeveledLogger`] and the wrapped [`StructuredLogger`].
//! It has no workspace dependencies.

/// Returns the ports crate version.
#[must_use]
pub const fn ports_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub mod fields;
pub mod level;
pub mod leveled;
pub mod structured;

pub use fields::*;
pub use level::*;
pub use leveled::*;
pub use structured::*;

#[cfg(test)]
mod tests {
    use super::*;

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
                in_deps = line == "[dependencies]" || line == "[dev-dependencies]";
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
    fn ports_have_no_workspace_dependencies() {
        let deps = workspace_deps();
        assert!(deps.is_empty(), "unexpected workspace dependencies: {deps:?}");
    }

    #[test]
    fn ports_crate_compiles() {
        let version = ports_crate_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn ports_are_object_safe() {
        fn assert_object_safe(_: Option<&dyn LeveledLogger>, _: Option<&dyn StructuredLogger>) {}
        assert_object_safe(None, None);
    }
}
