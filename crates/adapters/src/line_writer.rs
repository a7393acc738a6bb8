//! Line-oriented bridge from a byte stream into a structured logger.

use levelbridge_ports::{Severity, StructuredLogger};
use std::io::{self, Write};
use std::sync::Arc;

/// Writer that emits every complete line as one message at a fixed severity.
///
/// Partial lines are held until the next newline, an explicit `flush`, or
/// drop. Trailing `\r` is stripped and empty lines are skipped.
pub struct LineWriter {
    logger: Arc<dyn StructuredLogger>,
    severity: Severity,
    pending: Vec<u8>,
}

impl LineWriter {
    /// Create a writer emitting into `logger` at `severity`.
    #[must_use]
    pub fn new(logger: Arc<dyn StructuredLogger>, severity: Severity) -> Self {
        Self {
            logger,
            severity,
            pending: Vec::new(),
        }
    }

    /// Append `bytes`, emitting every line they complete.
    pub fn push(&mut self, bytes: &[u8]) {
        let mut rest = bytes;
        while let Some(index) = rest.iter().position(|byte| *byte == b'\n') {
            let (line, tail) = rest.split_at(index);
            if self.pending.is_empty() {
                self.emit(line);
            } else {
                self.pending.extend_from_slice(line);
                self.flush_pending();
            }
            rest = tail.get(1..).unwrap_or_default();
        }
        self.pending.extend_from_slice(rest);
    }

    /// Emit the buffered partial line, if any.
    pub fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let pending = std::mem::take(&mut self.pending);
        self.emit(&pending);
    }

    fn emit(&self, line: &[u8]) {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        if line.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(line);
        self.logger.log(self.severity, &text);
    }
}

impl Write for LineWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.push(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_pending();
        Ok(())
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        self.flush_pending();
    }
}

impl std::fmt::Debug for LineWriter {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LineWriter")
            .field("severity", &self.severity)
            .field("pending_bytes", &self.pending.len())
            .finish_non_exhaustive()
    }
}
