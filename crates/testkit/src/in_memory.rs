//! In-memory structured logger implementations for port contracts.
//!
//! These implementations are intended for:
//! - Unit/integration tests of the adapter layer
//! - Deterministic contract tests for the ports layer

use levelbridge_ports::{FieldSet, Severity, SharedWriter, StructuredLogger};
use std::sync::{Arc, Mutex, PoisonError};

/// A no-op structured logger. It reports an `Error` threshold but enables
/// nothing, since nothing is ever emitted.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl StructuredLogger for NoopLogger {
    fn with_fields(&self, _fields: FieldSet) -> Arc<dyn StructuredLogger> {
        Arc::new(Self)
    }

    fn log(&self, _severity: Severity, _message: &str) {}

    fn threshold(&self) -> Severity {
        Severity::Error
    }

    fn enabled(&self, _severity: Severity) -> bool {
        false
    }
}

/// One message captured by [`RecordingLogger`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedEntry {
    /// Severity the message was emitted at.
    pub severity: Severity,
    /// Message text.
    pub message: String,
    /// Fields attached when the message was emitted.
    pub fields: FieldSet,
}

/// Structured logger that records admitted messages in memory.
///
/// Clones and loggers derived through `with_fields` share one buffer, so the
/// root handle observes everything its children emitted.
#[derive(Clone)]
pub struct RecordingLogger {
    entries: Arc<Mutex<Vec<RecordedEntry>>>,
    fields: FieldSet,
    threshold: Severity,
    output: Option<SharedWriter>,
}

impl RecordingLogger {
    /// Create a recorder with the given threshold and no output stream.
    #[must_use]
    pub fn new(threshold: Severity) -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            fields: FieldSet::new(),
            threshold,
            output: None,
        }
    }

    /// Expose `output` as the recorder's underlying stream.
    #[must_use]
    pub fn with_output(mut self, output: SharedWriter) -> Self {
        self.output = Some(output);
        self
    }

    /// Snapshot of every recorded entry, oldest first.
    pub fn entries(&self) -> Vec<RecordedEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Recorded messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .map(|entry| entry.message)
            .collect()
    }

    /// Drain the recorded entries.
    pub fn take(&self) -> Vec<RecordedEntry> {
        let mut guard = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *guard)
    }

    /// Fields attached to this handle.
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }
}

impl StructuredLogger for RecordingLogger {
    fn with_fields(&self, fields: FieldSet) -> Arc<dyn StructuredLogger> {
        let mut merged = self.fields.clone();
        merged.extend(fields);
        Arc::new(Self {
            entries: Arc::clone(&self.entries),
            fields: merged,
            threshold: self.threshold,
            output: self.output.clone(),
        })
    }

    fn log(&self, severity: Severity, message: &str) {
        if !self.threshold.admits(severity) {
            return;
        }
        let entry = RecordedEntry {
            severity,
            message: message.to_owned(),
            fields: self.fields.clone(),
        };
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }

    fn threshold(&self) -> Severity {
        self.threshold
    }

    fn output(&self) -> Option<SharedWriter> {
        self.output.clone()
    }
}

impl std::fmt::Debug for RecordingLogger {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("RecordingLogger")
            .field("fields", &self.fields)
            .field("threshold", &self.threshold)
            .field("has_output", &self.output.is_some())
            .finish_non_exhaustive()
    }
}

/// Build a single-field set for tests.
#[must_use]
pub fn fields_1(key: &str, value: impl Into<serde_json::Value>) -> FieldSet {
    let mut fields = FieldSet::new();
    fields.insert(key.into(), value.into());
    fields
}
