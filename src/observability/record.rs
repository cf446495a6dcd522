//! Flat JSON record for one finished span.
//!
//! ```json
//! {"service":"mediadeck","name":"play_at","trace_id":"…","span_id":"…",
//!  "start":"2024-05-01T10:00:00.000120Z","end":"2024-05-01T10:00:00.000480Z",
//!  "duration_us":360,"attributes":{"index":2,"kind":"audio"},"status":"unset"}
//! ```

use std::collections::BTreeMap;
use std::time::SystemTime;

use chrono::{DateTime, SecondsFormat, Utc};
use opentelemetry::trace::{SpanId, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// One span, ready to be written as a single JSON line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanRecord {
    pub service: String,
    pub name: String,
    pub trace_id: String,
    pub span_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_span_id: Option<String>,
    pub start: String,
    pub end: String,
    pub duration_us: u64,
    pub attributes: BTreeMap<String, JsonValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventRecord>,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
}

/// A log event recorded inside a span.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    pub name: String,
    pub timestamp: String,
    pub attributes: BTreeMap<String, JsonValue>,
}

impl SpanRecord {
    #[must_use]
    pub fn from_span(service: &str, span: &SpanData) -> Self {
        let parent_span_id = (span.parent_span_id != SpanId::INVALID)
            .then(|| format!("{:016x}", span.parent_span_id));

        let (status, status_message) = match &span.status {
            Status::Unset => ("unset", None),
            Status::Ok => ("ok", None),
            Status::Error { description } => ("error", Some(description.to_string())),
        };

        let events = span
            .events
            .iter()
            .map(|event| EventRecord {
                name: event.name.to_string(),
                timestamp: timestamp(event.timestamp),
                attributes: attributes(&event.attributes),
            })
            .collect();

        Self {
            service: service.to_string(),
            name: span.name.to_string(),
            trace_id: format!("{:032x}", span.span_context.trace_id()),
            span_id: format!("{:016x}", span.span_context.span_id()),
            parent_span_id,
            start: timestamp(span.start_time),
            end: timestamp(span.end_time),
            duration_us: duration_us(span.start_time, span.end_time),
            attributes: attributes(&span.attributes),
            events,
            status,
            status_message,
        }
    }
}

/// RFC 3339 UTC timestamp with microsecond precision.
fn timestamp(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn duration_us(start: SystemTime, end: SystemTime) -> u64 {
    end.duration_since(start)
        .map(|elapsed| u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

fn attributes(pairs: &[KeyValue]) -> BTreeMap<String, JsonValue> {
    pairs
        .iter()
        .map(|pair| (pair.key.to_string(), attribute_value(&pair.value)))
        .collect()
}

fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::I64(i) => JsonValue::from(*i),
        Value::F64(f) => JsonValue::from(*f),
        Value::String(s) => JsonValue::String(s.to_string()),
        other => JsonValue::String(other.to_string()),
    }
}
