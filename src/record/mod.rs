//! One log call's worth of data, built synchronously and handed to the formatter.

mod location;
mod message;

pub use location::{SourceLocation, clean_function_name};
pub use message::Message;

use crate::context::LoggerContext;
use crate::level::Level;
use chrono::{DateTime, SecondsFormat, Utc};

/// Carries everything a formatter needs to render one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub severity: Level,
    pub message: String,
    /// Present only when the bound context has a trace.
    pub trace: Option<String>,
    /// Present only when the bound context has a span id.
    pub span_id: Option<String>,
    pub source_location: Option<SourceLocation>,
}

impl LogRecord {
    /// Stamps the record with the current UTC time.
    #[must_use]
    pub fn build(
        severity: Level,
        message: Message,
        context: &LoggerContext,
        source_location: Option<SourceLocation>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            severity,
            message: message.into_text(),
            trace: context.trace.clone(),
            span_id: context.span_id.clone(),
            source_location,
        }
    }

    /// ISO-8601 UTC with microseconds and a literal `Z`.
    #[must_use]
    pub fn timestamp_string(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }
}
