//! Custom tracing Layer that renders events into a [`LogSink`].
//!
//! In the browser the sink is the devtools console; tests capture lines in
//! memory.

use std::fmt::Write as FmtWrite;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

use super::entry::LogEntry;
use crate::error::{PortfolioError, PortfolioResult};

/// Destination for rendered log lines.
pub trait LogSink: Send + Sync + 'static {
    fn emit(&self, level: Level, entry: &LogEntry);
}

/// A tracing Layer that turns events into [`LogEntry`] values.
pub struct ConsoleLayer<K> {
    sink: K,
}

impl<K: LogSink> ConsoleLayer<K> {
    pub fn new(sink: K) -> Self {
        Self { sink }
    }
}

impl<S, K> Layer<S> for ConsoleLayer<K>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    K: LogSink,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = *metadata.level();

        let mut visitor = JsonVisitor::new();
        event.record(&mut visitor);

        let message = visitor.message.unwrap_or_default();
        let mut entry = LogEntry::new(level.as_str().to_lowercase(), metadata.target(), message);

        if !visitor.fields.is_empty() {
            entry = entry.with_fields(serde_json::Value::Object(visitor.fields));
        }

        if let Some(scope) = ctx.event_scope(event) {
            let spans: Vec<String> = scope.from_root().map(|span| span.name().to_string()).collect();
            if !spans.is_empty() {
                entry = entry.with_span(spans.join(" > "));
            }
        }

        self.sink.emit(level, &entry);
    }
}

/// Visitor that extracts fields from tracing events.
struct JsonVisitor {
    message: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl JsonVisitor {
    fn new() -> Self {
        Self {
            message: None,
            fields: serde_json::Map::new(),
        }
    }
}

impl Visit for JsonVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);

        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.fields
                .insert(field.name().to_string(), serde_json::Value::String(buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.insert(
                field.name().to_string(),
                serde_json::Value::String(value.to_string()),
            );
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Number(value.into()));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Number(value.into()));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Bool(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if let Some(n) = serde_json::Number::from_f64(value) {
            self.fields
                .insert(field.name().to_string(), serde_json::Value::Number(n));
        }
    }
}

/// Install the global subscriber: an `EnvFilter` from `filter` in front of a
/// [`ConsoleLayer`] writing to `sink`.
pub fn init_logging<K: LogSink>(filter: &str, sink: K) -> PortfolioResult<()> {
    let filter = EnvFilter::try_new(filter).map_err(|e| PortfolioError::Config(e.to_string()))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(ConsoleLayer::new(sink))
        .try_init()
        .map_err(|e| PortfolioError::Config(e.to_string()))
}
