//! Writer and `log`-facade shapes handed to third-party libraries.

use crate::line_writer::LineWriter;
use levelbridge_ports::{Severity, SharedWriter, StructuredLogger};
use std::io::{self, Stderr, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Raw byte sink: a logger's own output stream, or process stderr.
pub enum StandardWriter {
    /// Output stream shared with the wrapped logger.
    Shared(SharedWriter),
    /// Process standard error.
    Stderr(Stderr),
}

impl StandardWriter {
    /// Writer for `logger`: its exposed output when it has one, else stderr.
    #[must_use]
    pub fn for_logger(logger: &dyn StructuredLogger) -> Self {
        logger
            .output()
            .map_or_else(|| Self::Stderr(io::stderr()), Self::Shared)
    }

    /// Returns true when writes go to process stderr.
    #[must_use]
    pub const fn is_stderr(&self) -> bool {
        matches!(self, Self::Stderr(_))
    }
}

impl Write for StandardWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Shared(shared) => shared
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .write(buf),
            Self::Stderr(stderr) => stderr.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Shared(shared) => shared
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .flush(),
            Self::Stderr(stderr) => stderr.flush(),
        }
    }
}

impl std::fmt::Debug for StandardWriter {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shared(_) => formatter.write_str("StandardWriter::Shared"),
            Self::Stderr(_) => formatter.write_str("StandardWriter::Stderr"),
        }
    }
}

/// [`log::Log`] implementation that records every message at Info.
///
/// The record's own level is ignored: lines are not inspected for level
/// markers, so a `log::error!` through this logger still lands at Info.
#[derive(Debug)]
pub struct StandardLogger {
    writer: Mutex<LineWriter>,
}

impl StandardLogger {
    /// Severity every record is emitted at.
    pub const SEVERITY: Severity = Severity::Info;

    /// Create a standard logger writing into `logger`.
    #[must_use]
    pub fn new(logger: Arc<dyn StructuredLogger>) -> Self {
        Self {
            writer: Mutex::new(LineWriter::new(logger, Self::SEVERITY)),
        }
    }

    /// Write one line, like `Logger.Print` in other ecosystems.
    pub fn print(&self, args: std::fmt::Arguments<'_>) {
        let line = format!("{args}\n");
        self.writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.as_bytes());
    }
}

impl log::Log for StandardLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        self.print(*record.args());
    }

    fn flush(&self) {
        self.writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush_pending();
    }
}
