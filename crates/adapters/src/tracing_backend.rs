//! `tracing`-backed structured logger and subscriber installation.

use levelbridge_config::{LogFormat, ObservabilityConfig};
use levelbridge_ports::{FieldSet, Severity, StructuredLogger};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Target used for every event emitted through [`TracingLogger`].
pub const TRACING_TARGET: &str = "levelbridge";

/// Event field carrying the attached field set.
pub const ATTACHED_FIELDS: &str = "fields";

/// Structured logger that forwards to the `tracing` macros.
///
/// Attached fields are rendered as one JSON object in the event's `fields`
/// field. Enablement is asked of the dispatcher that would receive the
/// event, so a scoped subscriber is honored even while more verbose
/// dispatchers exist elsewhere in the process. With no subscriber at all,
/// nothing is enabled and the threshold reports `Error`.
#[derive(Debug, Clone, Default)]
pub struct TracingLogger {
    fields: FieldSet,
}

impl TracingLogger {
    /// Create a logger with no attached fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields attached to every event.
    #[must_use]
    pub const fn fields(&self) -> &FieldSet {
        &self.fields
    }

    fn rendered_fields(&self) -> Option<String> {
        if self.fields.is_empty() {
            return None;
        }
        let map: Map<String, Value> = self
            .fields
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect();
        serde_json::to_string(&map).ok()
    }
}

impl StructuredLogger for TracingLogger {
    fn with_fields(&self, fields: FieldSet) -> Arc<dyn StructuredLogger> {
        let mut merged = self.fields.clone();
        merged.extend(fields);
        Arc::new(Self { fields: merged })
    }

    fn log(&self, severity: Severity, message: &str) {
        match (severity, self.rendered_fields()) {
            (Severity::Error, Some(fields)) => {
                tracing::error!(target: TRACING_TARGET, fields = %fields, "{message}");
            },
            (Severity::Error, None) => tracing::error!(target: TRACING_TARGET, "{message}"),
            (Severity::Warn, Some(fields)) => {
                tracing::warn!(target: TRACING_TARGET, fields = %fields, "{message}");
            },
            (Severity::Warn, None) => tracing::warn!(target: TRACING_TARGET, "{message}"),
            (Severity::Info, Some(fields)) => {
                tracing::info!(target: TRACING_TARGET, fields = %fields, "{message}");
            },
            (Severity::Info, None) => tracing::info!(target: TRACING_TARGET, "{message}"),
            (Severity::Debug, Some(fields)) => {
                tracing::debug!(target: TRACING_TARGET, fields = %fields, "{message}");
            },
            (Severity::Debug, None) => tracing::debug!(target: TRACING_TARGET, "{message}"),
            (Severity::Trace, Some(fields)) => {
                tracing::trace!(target: TRACING_TARGET, fields = %fields, "{message}");
            },
            (Severity::Trace, None) => tracing::trace!(target: TRACING_TARGET, "{message}"),
        }
    }

    fn threshold(&self) -> Severity {
        Severity::ALL
            .into_iter()
            .rev()
            .find(|severity| self.enabled(*severity))
            .unwrap_or(Severity::Error)
    }

    fn enabled(&self, severity: Severity) -> bool {
        match severity {
            Severity::Error => tracing::enabled!(target: TRACING_TARGET, tracing::Level::ERROR),
            Severity::Warn => tracing::enabled!(target: TRACING_TARGET, tracing::Level::WARN),
            Severity::Info => tracing::enabled!(target: TRACING_TARGET, tracing::Level::INFO),
            Severity::Debug => tracing::enabled!(target: TRACING_TARGET, tracing::Level::DEBUG),
            Severity::Trace => tracing::enabled!(target: TRACING_TARGET, tracing::Level::TRACE),
        }
    }
}

/// Map a severity onto a `tracing` level filter.
#[must_use]
pub const fn filter_from_severity(severity: Severity) -> LevelFilter {
    match severity {
        Severity::Error => LevelFilter::ERROR,
        Severity::Warn => LevelFilter::WARN,
        Severity::Info => LevelFilter::INFO,
        Severity::Debug => LevelFilter::DEBUG,
        Severity::Trace => LevelFilter::TRACE,
    }
}

/// JSON line formatter that nests the attached field set as an object.
///
/// Lines carry `timestamp`, `level`, `target` and `fields`; inside `fields`,
/// the [`ATTACHED_FIELDS`] entry is the decoded object rather than its text.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEventFormat;

impl<S, N> FormatEvent<S, N> for JsonEventFormat
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut timestamp = String::new();
        SystemTime.format_time(&mut Writer::new(&mut timestamp))?;

        let mut visitor = JsonVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        let mut line = Map::new();
        line.insert("timestamp".to_owned(), Value::String(timestamp));
        line.insert("level".to_owned(), Value::String(metadata.level().to_string()));
        line.insert("target".to_owned(), Value::String(metadata.target().to_owned()));
        line.insert("fields".to_owned(), Value::Object(visitor.0));
        writeln!(writer, "{}", Value::Object(line))
    }
}

#[derive(Default)]
struct JsonVisitor(Map<String, Value>);

impl JsonVisitor {
    fn insert(&mut self, field: &Field, value: Value) {
        self.0.insert(field.name().to_owned(), value);
    }
}

impl Visit for JsonVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let rendered = format!("{value:?}");
        let value = if field.name() == ATTACHED_FIELDS {
            serde_json::from_str(&rendered).unwrap_or_else(|_| Value::String(rendered))
        } else {
            Value::String(rendered)
        };
        self.insert(field, value);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, Value::from(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, Value::from(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, Value::from(value));
    }
}

/// Failure to install the global subscriber.
#[derive(Debug, thiserror::Error)]
#[error("failed to install tracing subscriber: {message}")]
pub struct SubscriberInitError {
    /// Underlying error text.
    pub message: String,
}

/// Filter admitting `config.level` and everything less verbose.
#[must_use]
pub fn default_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::default().add_directive(filter_from_severity(config.level).into())
}

/// Filter from `RUST_LOG`, falling back to [`default_filter`].
#[must_use]
pub fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(config))
}

/// Build a stderr subscriber for `config` without installing it.
///
/// `RUST_LOG`, when set, takes precedence over `config.level`.
#[must_use]
pub fn build_subscriber(config: &ObservabilityConfig) -> Box<dyn Subscriber + Send + Sync> {
    build_subscriber_with_writer(config, env_filter(config), std::io::stderr)
}

/// Build a subscriber for `config` filtered by `filter`, writing through
/// `make_writer`.
pub fn build_subscriber_with_writer<W>(
    config: &ObservabilityConfig,
    filter: EnvFilter,
    make_writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(make_writer);
    match config.format {
        LogFormat::Text => Box::new(builder.finish()),
        LogFormat::Json => Box::new(builder.event_format(JsonEventFormat).finish()),
    }
}

/// Install the process-wide subscriber described by `config`.
pub fn install_subscriber(config: &ObservabilityConfig) -> Result<(), SubscriberInitError> {
    tracing::subscriber::set_global_default(build_subscriber(config)).map_err(|error| {
        SubscriberInitError {
            message: error.to_string(),
        }
    })
}
