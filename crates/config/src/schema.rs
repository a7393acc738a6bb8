//! Observability configuration schema.

use levelbridge_ports::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format of the installed subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Parse a format name (case-insensitive).
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Threshold and format for the process-wide logging backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObservabilityConfig {
    /// Most verbose severity that is emitted.
    pub level: Severity,
    /// Output format.
    pub format: LogFormat,
}

/// Failures when reading a config document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML document could not be decoded.
    #[error("invalid observability config (toml): {0}")]
    Toml(#[from] toml::de::Error),
    /// JSON document could not be decoded.
    #[error("invalid observability config (json): {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse an [`ObservabilityConfig`] from TOML. Missing keys take defaults.
pub fn parse_observability_config_toml(input: &str) -> Result<ObservabilityConfig, ConfigError> {
    Ok(toml::from_str(input)?)
}

/// Parse an [`ObservabilityConfig`] from JSON. Missing keys take defaults.
pub fn parse_observability_config_json(input: &str) -> Result<ObservabilityConfig, ConfigError> {
    Ok(serde_json::from_str(input)?)
}

impl FromStr for ObservabilityConfig {
    type Err = ConfigError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_observability_config_toml(input)
    }
}
