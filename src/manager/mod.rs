//! Process-wide factory: owns the sink pair and the resolved settings, turns
//! trace headers into contexts, and mints loggers bound to them.
//!
//! Typical request lifecycle:
//!
//! ```
//! use gumo_logging::LoggerManager;
//!
//! let manager = LoggerManager::new();
//!
//! // per request
//! let logger = manager.get_logger(Some("105445aa7843bc8bf206b12000100000/1;o=1"));
//! logger.info("handling request");
//! manager.flush().ok();
//! ```

mod builder;

pub use builder::LoggerManagerBuilder;

use crate::config::{Config, Settings};
use crate::context::{LoggerContext, parse_trace_header};
use crate::fmt::{Formatter, OutputFormat};
use crate::internal;
use crate::level::Level;
use crate::logger::{ContextHook, Logger};
use crate::sink::SinkPair;
use std::fmt;
use std::sync::Arc;

pub struct LoggerManager {
    project_id: Arc<str>,
    format: OutputFormat,
    source_location: bool,
    sinks: SinkPair,
    fetch_context: Option<ContextHook>,
}

impl LoggerManager {
    /// Environment-driven manager on stdout/stderr with no refresh hook.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> LoggerManagerBuilder {
        LoggerManagerBuilder::new()
    }

    /// Environment-driven manager whose loggers poll `fetch` on every call.
    #[must_use]
    pub fn with_context_hook<F>(fetch: F) -> Self
    where
        F: Fn() -> Option<LoggerContext> + Send + Sync + 'static,
    {
        Self::builder().fetch_context(fetch).build()
    }

    pub(crate) fn from_parts(
        settings: Settings,
        sinks: SinkPair,
        fetch_context: Option<ContextHook>,
    ) -> Self {
        internal::debug(
            "MANAGER",
            &format!(
                "Ready: project={} format={:?} hook={}",
                settings.project_id,
                settings.format,
                fetch_context.is_some()
            ),
        );
        Self {
            project_id: Arc::from(settings.project_id),
            format: settings.format,
            source_location: settings.source_location,
            sinks,
            fetch_context,
        }
    }

    /// Parses an `X-Cloud-Trace-Context` value. Missing or slash-less headers
    /// give an empty context; they are never rejected.
    #[must_use]
    pub fn get_logger_context(&self, trace_header: Option<&str>) -> LoggerContext {
        parse_trace_header(trace_header, &self.project_id)
    }

    /// Mints a logger bound to the context parsed from `trace_header`.
    #[must_use]
    pub fn get_logger(&self, trace_header: Option<&str>) -> Logger {
        self.get_logger_with_context(self.get_logger_context(trace_header))
    }

    /// Mints a logger bound to an already-built context.
    #[must_use]
    pub fn get_logger_with_context(&self, context: LoggerContext) -> Logger {
        Logger::new(
            Arc::clone(&self.project_id),
            self.sinks.clone(),
            context,
            Formatter::new(self.format),
            self.source_location,
            self.fetch_context.clone(),
        )
    }

    /// Pushes buffered output on both sinks. Call once at the end of each unit of work.
    ///
    /// # Errors
    /// Returns the first I/O error reported by either sink.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.sinks.flush()
    }

    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    #[must_use]
    pub const fn is_structured(&self) -> bool {
        self.format.is_structured()
    }

    /// Severity name for a level, as records render it.
    #[must_use]
    pub const fn level_name(level: Level) -> &'static str {
        level.as_str()
    }
}

impl Default for LoggerManager {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&Config> for LoggerManager {
    fn from(config: &Config) -> Self {
        Self::builder().config(config).build()
    }
}

impl fmt::Debug for LoggerManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerManager")
            .field("project_id", &self.project_id)
            .field("format", &self.format)
            .field("source_location", &self.source_location)
            .field("fetch_context", &self.fetch_context.is_some())
            .finish_non_exhaustive()
    }
}
