//! Wrapped-logger boundary contract.

use crate::fields::FieldSet;
use crate::level::Severity;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Output stream shared between a logger and the writers handed out for it.
pub type SharedWriter = Arc<Mutex<dyn Write + Send>>;

/// Structured logger with a fixed severity threshold.
///
/// Implementations must be safe for concurrent use; adapters built on top of
/// this trait add no synchronization of their own.
pub trait StructuredLogger: Send + Sync {
    /// Derive a logger with `fields` attached to every message it emits.
    fn with_fields(&self, fields: FieldSet) -> Arc<dyn StructuredLogger>;

    /// Emit `message` at `severity`. Messages above the threshold are dropped.
    fn log(&self, severity: Severity, message: &str);

    /// Current threshold.
    fn threshold(&self) -> Severity;

    /// Whether a message at `severity` would be emitted right now.
    ///
    /// Defaults to comparing against [`threshold`](Self::threshold). Loggers
    /// whose sink can reject every severity (or whose filtering is not a
    /// single threshold) override this.
    fn enabled(&self, severity: Severity) -> bool {
        self.threshold().admits(severity)
    }

    /// Underlying output stream, when the logger writes to one it can share.
    fn output(&self) -> Option<SharedWriter> {
        None
    }

    /// Convenience: debug message.
    fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }

    /// Convenience: info message.
    fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    /// Convenience: warn message.
    fn warn(&self, message: &str) {
        self.log(Severity::Warn, message);
    }

    /// Convenience: error message.
    fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }
}
