//! Cloud Logging structured payload.
//!
//! Field names are the ones the logging agent recognises as special fields;
//! everything else would land in `jsonPayload` untouched.

use crate::record::{LogRecord, SourceLocation};
use serde::Serialize;

/// Borrowed view of a record in the wire layout. Keys appear in declaration order.
#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    timestamp: String,
    #[serde(rename = "Message")]
    message: &'a str,
    severity: &'static str,
    #[serde(
        rename = "logging.googleapis.com/trace",
        skip_serializing_if = "Option::is_none"
    )]
    trace: Option<&'a str>,
    #[serde(
        rename = "logging.googleapis.com/spanId",
        skip_serializing_if = "Option::is_none"
    )]
    span_id: Option<&'a str>,
    #[serde(
        rename = "logging.googleapis.com/sourceLocation",
        skip_serializing_if = "Option::is_none"
    )]
    source_location: Option<&'a SourceLocation>,
}

impl<'a> From<&'a LogRecord> for JsonEntry<'a> {
    fn from(record: &'a LogRecord) -> Self {
        Self {
            timestamp: record.timestamp_string(),
            message: &record.message,
            severity: record.severity.as_str(),
            trace: record.trace.as_deref(),
            span_id: record.span_id.as_deref(),
            source_location: record.source_location.as_ref(),
        }
    }
}

/// Single-line JSON; non-ASCII text is emitted as-is.
///
/// # Errors
/// Returns [`crate::Error::Render`] if serialization fails.
pub fn render_json(record: &LogRecord) -> Result<String, crate::Error> {
    Ok(serde_json::to_string(&JsonEntry::from(record))?)
}
