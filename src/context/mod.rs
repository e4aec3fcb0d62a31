//! Per-unit-of-work tracing identifiers and the `X-Cloud-Trace-Context` parser.
//!
//! A header looks like `TRACE_ID/SPAN_ID;o=OPTIONS`. Anything without a `/`
//! is treated as opaque and yields an empty context rather than an error.

use serde::Serialize;

/// Header name used by the load balancer in front of App Engine and Cloud Run.
pub const TRACE_HEADER: &str = "X-Cloud-Trace-Context";

/// Project id used in trace paths when the environment does not declare one.
pub const UNKNOWN_PROJECT: &str = "<unknown-project>";

/// Immutable trace/span pair attached to every record a logger emits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct LoggerContext {
    /// Fully qualified trace path: `projects/<project>/traces/<trace-id>`.
    pub trace: Option<String>,
    pub span_id: Option<String>,
}

impl LoggerContext {
    #[must_use]
    pub fn new(trace: Option<String>, span_id: Option<String>) -> Self {
        Self { trace, span_id }
    }

    /// Context with neither field set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }

    #[must_use]
    pub fn span_id(&self) -> Option<&str> {
        self.span_id.as_deref()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.trace.is_none() && self.span_id.is_none()
    }
}

/// Parses a trace header into a context scoped to `project_id`.
///
/// Splits once on the first `/`; the span part is cut at the first `;` to drop
/// trace options. The trace id is not validated.
#[must_use]
pub fn parse_trace_header(header: Option<&str>, project_id: &str) -> LoggerContext {
    let Some((trace_id, rest)) = header.and_then(|h| h.split_once('/')) else {
        return LoggerContext::empty();
    };

    let span_id = rest.split_once(';').map_or(rest, |(span, _options)| span);

    LoggerContext {
        trace: Some(format!("projects/{project_id}/traces/{trace_id}")),
        span_id: Some(span_id.to_string()),
    }
}
