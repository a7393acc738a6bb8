//! Leveled logger adapter over a structured logger.

use crate::fields::field_set_from_args;
use crate::level_map::{to_level, to_severity};
use crate::standard::{StandardLogger, StandardWriter};
use levelbridge_ports::{
    FieldSet, Level, LeveledLogger, SUBSYSTEM_NAME_FIELD, StandardLoggerOptions, StructuredLogger,
};
use serde_json::Value;
use std::io::Write;
use std::sync::Arc;

/// Presents a [`StructuredLogger`] as a [`LeveledLogger`].
///
/// The wrapped logger is shared, never owned exclusively; derived adapters
/// (`with`, `named`, `reset_named`) wrap a derived logger and leave the
/// receiver untouched.
///
/// ```
/// use levelbridge_adapters::LevelAdapter;
/// use levelbridge_adapters::tracing_backend::TracingLogger;
/// use levelbridge_ports::LeveledLogger;
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let logger = LevelAdapter::new(Arc::new(TracingLogger::new()));
/// let db = logger.named("storage").named("db");
/// assert_eq!(db.name(), "storage.db");
/// db.info("connected", &[json!("pool_size"), json!(8)]);
/// ```
#[derive(Clone)]
pub struct LevelAdapter {
    logger: Arc<dyn StructuredLogger>,
    name: Box<str>,
}

impl LevelAdapter {
    /// Wrap `logger` with an empty name.
    #[must_use]
    pub fn new(logger: Arc<dyn StructuredLogger>) -> Self {
        Self {
            logger,
            name: Box::default(),
        }
    }

    fn entry(&self, args: &[Value]) -> Arc<dyn StructuredLogger> {
        self.logger.with_fields(field_set_from_args(args))
    }

    fn derive_named(&self, name: &str) -> Self {
        let mut fields = FieldSet::new();
        fields.insert(SUBSYSTEM_NAME_FIELD.into(), Value::String(name.to_owned()));
        Self {
            logger: self.logger.with_fields(fields),
            name: name.into(),
        }
    }
}

impl LeveledLogger for LevelAdapter {
    fn log(&self, level: Level, message: &str, args: &[Value]) {
        let Some(severity) = to_severity(level) else {
            return;
        };
        self.entry(args).log(severity, message);
    }

    fn is_enabled(&self, level: Level) -> bool {
        to_severity(level).is_some_and(|severity| self.logger.enabled(severity))
    }

    fn set_level(&self, _level: Level) {
        // Thresholds belong to the wrapped logger; runtime changes are not supported.
    }

    fn level(&self) -> Level {
        to_level(self.logger.threshold())
    }

    fn with(&self, args: &[Value]) -> Box<dyn LeveledLogger> {
        Box::new(Self::new(self.entry(args)))
    }

    fn implied_args(&self) -> Vec<Value> {
        Vec::new()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn named(&self, segment: &str) -> Box<dyn LeveledLogger> {
        let name = if self.name.is_empty() {
            segment.to_owned()
        } else {
            format!("{}.{segment}", self.name)
        };
        Box::new(self.derive_named(&name))
    }

    fn reset_named(&self, name: &str) -> Box<dyn LeveledLogger> {
        Box::new(self.derive_named(name))
    }

    fn standard_writer(&self, _options: &StandardLoggerOptions) -> Box<dyn Write + Send> {
        Box::new(StandardWriter::for_logger(self.logger.as_ref()))
    }

    fn standard_logger(&self, _options: &StandardLoggerOptions) -> Box<dyn log::Log> {
        Box::new(StandardLogger::new(Arc::clone(&self.logger)))
    }

    fn trace(&self, _message: &str, _args: &[Value]) {}

    fn is_trace(&self) -> bool {
        false
    }
}

impl std::fmt::Debug for LevelAdapter {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LevelAdapter")
            .field("name", &self.name)
            .field("threshold", &self.logger.threshold())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use levelbridge_ports::{Severity, UNKNOWN_VALUE};
    use levelbridge_testkit::{NoopLogger, RecordingLogger};
    use serde_json::json;

    fn adapter(threshold: Severity) -> (RecordingLogger, LevelAdapter) {
        let recorder = RecordingLogger::new(threshold);
        let adapter = LevelAdapter::new(Arc::new(recorder.clone()));
        (recorder, adapter)
    }

    #[test]
    fn log_attaches_fields_and_translates_level() {
        let (recorder, adapter) = adapter(Severity::Debug);
        adapter.log(Level::NoLevel, "unleveled", &[json!("k"), json!("v")]);

        let entries = recorder.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, Severity::Warn);
        assert_eq!(entries[0].message, "unleveled");
        assert_eq!(entries[0].fields.get("k"), Some(&json!("v")));
    }

    #[test]
    fn odd_args_record_the_sentinel() {
        let (recorder, adapter) = adapter(Severity::Info);
        adapter.info("odd", &[json!("k1"), json!("v1"), json!("k2")]);

        let entries = recorder.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].fields.get("k1"), Some(&json!("v1")));
        assert_eq!(entries[0].fields.get("k2"), Some(&json!(UNKNOWN_VALUE)));
    }

    #[test]
    fn off_is_never_emitted() {
        let (recorder, adapter) = adapter(Severity::Trace);
        adapter.log(Level::Off, "silent", &[json!("k"), json!(1)]);
        assert!(recorder.entries().is_empty());
    }

    #[test]
    fn trace_is_never_emitted() {
        let (recorder, adapter) = adapter(Severity::Trace);
        adapter.trace("direct", &[]);
        adapter.log(Level::Trace, "generic", &[]);
        assert!(recorder.entries().is_empty());
        assert!(!adapter.is_trace());
        assert!(!adapter.is_enabled(Level::Trace));
    }

    #[test]
    fn set_level_does_not_change_threshold() {
        let (_recorder, adapter) = adapter(Severity::Info);
        adapter.set_level(Level::Debug);
        assert!(!adapter.is_debug());
        assert_eq!(adapter.level(), Level::Info);
    }

    #[test]
    fn named_joins_with_dots() {
        let (_recorder, adapter) = adapter(Severity::Info);
        assert_eq!(adapter.name(), "");
        let child = adapter.named("a").named("b");
        assert_eq!(child.name(), "a.b");
        assert_eq!(child.reset_named("x").name(), "x");
        assert_eq!(adapter.name(), "");
    }

    #[test]
    fn named_attaches_subsystem_field() {
        let (recorder, adapter) = adapter(Severity::Info);
        adapter.named("api").named("v1").info("hello", &[]);

        let entries = recorder.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].fields.get(SUBSYSTEM_NAME_FIELD),
            Some(&json!("api.v1"))
        );
    }

    #[test]
    fn with_does_not_mutate_receiver() {
        let (recorder, adapter) = adapter(Severity::Info);
        let child = adapter.with(&[json!("request_id"), json!("r-1")]);
        child.info("child", &[]);
        adapter.info("parent", &[]);

        let entries = recorder.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].fields.get("request_id"), Some(&json!("r-1")));
        assert!(entries[1].fields.is_empty());
    }

    #[test]
    fn implied_args_are_always_empty() {
        let (_recorder, adapter) = adapter(Severity::Info);
        let child = adapter.with(&[json!("k"), json!("v")]);
        assert!(adapter.implied_args().is_empty());
        assert!(child.implied_args().is_empty());
    }

    #[test]
    fn debug_output_names_the_adapter() {
        let (_recorder, adapter) = adapter(Severity::Warn);
        let rendered = format!("{adapter:?}");
        assert!(rendered.contains("LevelAdapter"));
        assert!(rendered.contains("Warn"));
    }

    #[test]
    fn is_enabled_defers_to_wrapped_logger() {
        let adapter = LevelAdapter::new(Arc::new(NoopLogger));
        for level in Level::ALL {
            assert!(!adapter.is_enabled(level), "level {level}");
        }
        assert!(!adapter.is_error());
    }
}
