//! Level scales for both sides of the bridge.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Consumer-facing log level.
///
/// `NoLevel` is the level assigned to messages that did not pick one; `Off`
/// is a sentinel that is never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// No explicit level.
    NoLevel,
    /// Trace.
    Trace,
    /// Debug.
    Debug,
    /// Info.
    Info,
    /// Warn.
    Warn,
    /// Error.
    Error,
    /// Logging disabled.
    Off,
}

impl Level {
    /// Every level, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::NoLevel,
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Off,
    ];

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoLevel => "nolevel",
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Failure to parse a [`Level`] from its name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level: {input}")]
pub struct ParseLevelError {
    /// Raw input value.
    pub input: String,
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = input.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "" | "nolevel" => Ok(Self::NoLevel),
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            "off" => Ok(Self::Off),
            _ => Err(ParseLevelError {
                input: input.to_owned(),
            }),
        }
    }
}

/// Severity understood by the wrapped structured logger.
///
/// Ordered by verbosity: `Error < Warn < Info < Debug < Trace`. A logger whose
/// threshold is `t` emits a message of severity `s` iff `t >= s`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error.
    Error,
    /// Warn.
    Warn,
    /// Info.
    #[default]
    Info,
    /// Debug.
    Debug,
    /// Trace.
    Trace,
}

impl Severity {
    /// Every severity, least verbose first.
    pub const ALL: [Self; 5] = [
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Trace,
    ];

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Returns true when a logger with this threshold emits `severity`.
    #[must_use]
    pub fn admits(self, severity: Self) -> bool {
        self >= severity
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Failure to parse a [`Severity`] from its name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity: {input}")]
pub struct ParseSeverityError {
    /// Raw input value.
    pub input: String,
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = input.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(ParseSeverityError {
                input: input.to_owned(),
            }),
        }
    }
}
