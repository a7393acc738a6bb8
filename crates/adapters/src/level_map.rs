//! Fixed translation between the consumer level scale and wrapped severities.

use levelbridge_ports::{Level, Severity};

/// Translate a consumer level into the wrapped logger's severity.
///
/// Returns `None` for levels that are never forwarded: `Off`, and `Trace`,
/// which the wrapped scale cannot represent below `Debug`.
#[must_use]
pub const fn to_severity(level: Level) -> Option<Severity> {
    match level {
        Level::NoLevel | Level::Warn => Some(Severity::Warn),
        Level::Error => Some(Severity::Error),
        Level::Info => Some(Severity::Info),
        Level::Debug => Some(Severity::Debug),
        Level::Trace | Level::Off => None,
    }
}

/// Translate a wrapped severity back into the consumer scale.
///
/// `Trace` reports as `Debug`: the adapter never emits trace messages, so the
/// most verbose level a consumer can reach is debug.
#[must_use]
pub const fn to_level(severity: Severity) -> Level {
    match severity {
        Severity::Error => Level::Error,
        Severity::Warn => Level::Warn,
        Severity::Info => Level::Info,
        Severity::Debug | Severity::Trace => Level::Debug,
    }
}
