//! Environment variable overrides for observability config.

use crate::schema::{LogFormat, ObservabilityConfig};
use levelbridge_ports::Severity;
use std::collections::BTreeMap;

/// Threshold override.
pub const ENV_LOG_LEVEL: &str = "LEVELBRIDGE_LOG_LEVEL";
/// Format override.
pub const ENV_LOG_FORMAT: &str = "LEVELBRIDGE_LOG_FORMAT";

/// Parsed environment overrides. `None` means the variable was unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ObservabilityEnv {
    /// Value of [`ENV_LOG_LEVEL`].
    pub log_level: Option<Severity>,
    /// Value of [`ENV_LOG_FORMAT`].
    pub log_format: Option<LogFormat>,
}

/// Validation failures when parsing env variables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvParseError {
    /// An env var was present but empty after trimming.
    #[error("{var} must be non-empty")]
    EmptyValue {
        /// Env var name.
        var: &'static str,
    },
    /// Enum env var had an invalid value.
    #[error("{var} has an unsupported value: {value}")]
    InvalidEnum {
        /// Env var name.
        var: &'static str,
        /// Raw input value.
        value: String,
    },
}

impl ObservabilityEnv {
    /// Parse env overrides from a key/value map (useful for tests and fixtures).
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, EnvParseError> {
        Ok(Self {
            log_level: parse_optional_enum(map, ENV_LOG_LEVEL, |value| value.parse().ok())?,
            log_format: parse_optional_enum(map, ENV_LOG_FORMAT, LogFormat::parse)?,
        })
    }

    /// Parse env overrides from the current process environment.
    pub fn from_std_env() -> Result<Self, EnvParseError> {
        let mut map = BTreeMap::new();
        for name in [ENV_LOG_LEVEL, ENV_LOG_FORMAT] {
            if let Ok(value) = std::env::var(name) {
                map.insert(name.to_string(), value);
            }
        }
        Self::from_map(&map)
    }
}

/// Apply env overrides on top of a base config. Set variables win.
#[must_use]
pub fn apply_env_overrides(
    base: ObservabilityConfig,
    env: &ObservabilityEnv,
) -> ObservabilityConfig {
    ObservabilityConfig {
        level: env.log_level.unwrap_or(base.level),
        format: env.log_format.unwrap_or(base.format),
    }
}

/// Load the config from defaults plus the process environment.
pub fn load_observability_config_std_env() -> Result<ObservabilityConfig, EnvParseError> {
    let env = ObservabilityEnv::from_std_env()?;
    Ok(apply_env_overrides(ObservabilityConfig::default(), &env))
}

fn parse_optional_enum<T>(
    map: &BTreeMap<String, String>,
    var: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, EnvParseError> {
    let Some(raw) = map.get(var) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EnvParseError::EmptyValue { var });
    }

    parse(trimmed)
        .map(Some)
        .ok_or_else(|| EnvParseError::InvalidEnum {
            var,
            value: raw.clone(),
        })
}
