//! Consumer-facing leveled logger contract.

use crate::level::Level;
use serde_json::Value;
use std::io::Write;

/// Options accepted by the writer-exposure methods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardLoggerOptions {
    /// Infer the level of each line from its text.
    pub infer_levels: bool,
    /// Record every line at this level.
    pub force_level: Option<Level>,
}

/// Leveled logger taking variadic key/value argument pairs.
///
/// `args` is a flat sequence `[key, value, key, value, ...]`.
pub trait LeveledLogger: Send + Sync {
    /// Emit `message` at `level`.
    fn log(&self, level: Level, message: &str, args: &[Value]);

    /// Returns true when a message at `level` would be emitted.
    fn is_enabled(&self, level: Level) -> bool;

    /// Change the threshold. Implementations may ignore this.
    fn set_level(&self, level: Level);

    /// Current threshold.
    fn level(&self) -> Level;

    /// Derive a logger with `args` attached to every message.
    fn with(&self, args: &[Value]) -> Box<dyn LeveledLogger>;

    /// Arguments attached through [`LeveledLogger::with`], when tracked.
    fn implied_args(&self) -> Vec<Value>;

    /// Full dotted name, empty when never named.
    fn name(&self) -> &str;

    /// Derive a logger named `<name>.<segment>`.
    fn named(&self, segment: &str) -> Box<dyn LeveledLogger>;

    /// Derive a logger named exactly `name`.
    fn reset_named(&self, name: &str) -> Box<dyn LeveledLogger>;

    /// Raw byte sink for libraries that want a writable stream.
    fn standard_writer(&self, options: &StandardLoggerOptions) -> Box<dyn Write + Send>;

    /// Logger shaped like the `log` facade, writing into this logger.
    fn standard_logger(&self, options: &StandardLoggerOptions) -> Box<dyn log::Log>;

    /// Convenience: trace message.
    fn trace(&self, message: &str, args: &[Value]) {
        self.log(Level::Trace, message, args);
    }

    /// Convenience: debug message.
    fn debug(&self, message: &str, args: &[Value]) {
        self.log(Level::Debug, message, args);
    }

    /// Convenience: info message.
    fn info(&self, message: &str, args: &[Value]) {
        self.log(Level::Info, message, args);
    }

    /// Convenience: warn message.
    fn warn(&self, message: &str, args: &[Value]) {
        self.log(Level::Warn, message, args);
    }

    /// Convenience: error message.
    fn error(&self, message: &str, args: &[Value]) {
        self.log(Level::Error, message, args);
    }

    /// Convenience: trace enabled.
    fn is_trace(&self) -> bool {
        self.is_enabled(Level::Trace)
    }

    /// Convenience: debug enabled.
    fn is_debug(&self) -> bool {
        self.is_enabled(Level::Debug)
    }

    /// Convenience: info enabled.
    fn is_info(&self) -> bool {
        self.is_enabled(Level::Info)
    }

    /// Convenience: warn enabled.
    fn is_warn(&self) -> bool {
        self.is_enabled(Level::Warn)
    }

    /// Convenience: error enabled.
    fn is_error(&self) -> bool {
        self.is_enabled(Level::Error)
    }
}
