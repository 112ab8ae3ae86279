//! Log entry type rendered by the console layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single log record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// ISO 8601 timestamp (e.g., "2026-01-21T14:30:45.123Z")
    pub ts: String,

    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Module path / target (e.g., "portfolio_core::contact")
    pub target: String,

    /// Human-readable message
    pub msg: String,

    /// Optional structured fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,

    /// Span path if this entry is from within a span
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
}

impl LogEntry {
    /// Create a new log entry with the current timestamp.
    pub fn new(level: impl Into<String>, target: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            level: level.into(),
            target: target.into(),
            msg: msg.into(),
            fields: None,
            span: None,
        }
    }

    pub fn with_fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_span(mut self, span: impl Into<String>) -> Self {
        self.span = Some(span.into());
        self
    }

    /// Serialize to a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// One human-readable line:
    /// `LEVEL target [span]: message key=value ...`
    pub fn to_console_line(&self) -> String {
        let mut line = format!("{} {}", self.level.to_uppercase(), self.target);
        if let Some(ref span) = self.span {
            line.push_str(&format!(" [{}]", span));
        }
        line.push_str(": ");
        line.push_str(&self.msg);
        if let Some(Value::Object(ref map)) = self.fields {
            for (key, value) in map {
                match value {
                    Value::String(s) => line.push_str(&format!(" {}={}", key, s)),
                    other => line.push_str(&format!(" {}={}", key, other)),
                }
            }
        }
        line
    }
}
