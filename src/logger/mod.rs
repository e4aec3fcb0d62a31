//! The per-request façade.
//!
//! A `Logger` is minted by a [`LoggerManager`](crate::LoggerManager) and bound
//! to one [`LoggerContext`]. Every call builds a record, renders it in the
//! logger's mode, and writes it to the error sink for `ERROR` and above or the
//! normal sink otherwise. Nothing here returns an error to the caller; write
//! failures are reported through the internal diagnostic channel only.

mod macros;

use crate::context::LoggerContext;
use crate::fmt::{Formatter, OutputFormat};
use crate::internal;
use crate::level::Level;
use crate::record::{LogRecord, Message, SourceLocation};
use crate::sink::SinkPair;
use arc_swap::ArcSwap;
use std::fmt;
use std::sync::Arc;

/// Ambient-context accessor polled once per log call.
///
/// Returning `None` keeps the logger's current context. The hook runs inside
/// the log call and must not log through this crate itself.
pub type ContextHook = Arc<dyn Fn() -> Option<LoggerContext> + Send + Sync>;

pub struct Logger {
    project_id: Arc<str>,
    sinks: SinkPair,
    /// Replaced only by the refresh hook.
    context: ArcSwap<LoggerContext>,
    formatter: Formatter,
    source_location: bool,
    fetch_context: Option<ContextHook>,
}

impl Logger {
    pub(crate) fn new(
        project_id: Arc<str>,
        sinks: SinkPair,
        context: LoggerContext,
        formatter: Formatter,
        source_location: bool,
        fetch_context: Option<ContextHook>,
    ) -> Self {
        Self {
            project_id,
            sinks,
            context: ArcSwap::from_pointee(context),
            formatter,
            source_location,
            fetch_context,
        }
    }

    #[track_caller]
    pub fn debug(&self, msg: impl Into<Message>) {
        self.emit(Level::Debug, msg.into(), self.locate());
    }

    #[track_caller]
    pub fn info(&self, msg: impl Into<Message>) {
        self.emit(Level::Info, msg.into(), self.locate());
    }

    #[track_caller]
    pub fn warning(&self, msg: impl Into<Message>) {
        self.emit(Level::Warning, msg.into(), self.locate());
    }

    #[track_caller]
    pub fn error(&self, msg: impl Into<Message>) {
        self.emit(Level::Error, msg.into(), self.locate());
    }

    /// Same as [`error`](Self::error). Pass the error value itself to get its trace section.
    #[track_caller]
    pub fn exception(&self, msg: impl Into<Message>) {
        self.error(msg);
    }

    #[track_caller]
    pub fn critical(&self, msg: impl Into<Message>) {
        self.emit(Level::Critical, msg.into(), self.locate());
    }

    /// Logs at [`Level::FATAL`], which is the `CRITICAL` level. Does not abort.
    #[track_caller]
    pub fn fatal(&self, msg: impl Into<Message>) {
        self.emit(Level::FATAL, msg.into(), self.locate());
    }

    #[track_caller]
    pub fn log(&self, level: Level, msg: impl Into<Message>) {
        self.emit(level, msg.into(), self.locate());
    }

    /// Logs with an explicitly supplied call site, or none. The macros use this
    /// with a compile-time function name; hosts relaying foreign records pass `None`.
    pub fn log_at(
        &self,
        level: Level,
        msg: impl Into<Message>,
        location: Option<SourceLocation>,
    ) {
        self.emit(level, msg.into(), location);
    }

    /// Sibling logger sharing sinks, mode and hook, bound to `context`.
    #[must_use]
    pub fn with_context(&self, context: LoggerContext) -> Self {
        Self::new(
            Arc::clone(&self.project_id),
            self.sinks.clone(),
            context,
            self.formatter.clone(),
            self.source_location,
            self.fetch_context.clone(),
        )
    }

    /// Snapshot of the currently bound context.
    #[must_use]
    pub fn context(&self) -> LoggerContext {
        LoggerContext::clone(&self.context.load())
    }

    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.formatter.format()
    }

    #[track_caller]
    fn locate(&self) -> Option<SourceLocation> {
        if self.source_location {
            Some(SourceLocation::caller())
        } else {
            None
        }
    }

    fn refresh_context(&self) {
        if let Some(fetch) = &self.fetch_context
            && let Some(context) = fetch()
        {
            self.context.store(Arc::new(context));
        }
    }

    fn emit(&self, level: Level, message: Message, location: Option<SourceLocation>) {
        self.refresh_context();

        let location = location.filter(|_| self.source_location);
        let record = LogRecord::build(level, message, &self.context.load(), location);

        let line = match self.formatter.render(&record) {
            Ok(line) => line,
            Err(e) => {
                internal::error("LOGGER", &format!("Dropping record: {e}"));
                return;
            }
        };

        if let Err(e) = self.sinks.for_level(level).write_line(&line) {
            internal::warn("SINK", &format!("Write failed: {e}"));
        }
    }
}

impl Clone for Logger {
    fn clone(&self) -> Self {
        Self {
            project_id: Arc::clone(&self.project_id),
            sinks: self.sinks.clone(),
            context: ArcSwap::new(self.context.load_full()),
            formatter: self.formatter.clone(),
            source_location: self.source_location,
            fetch_context: self.fetch_context.clone(),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("project_id", &self.project_id)
            .field("context", &self.context())
            .field("format", &self.format())
            .field("source_location", &self.source_location)
            .field("fetch_context", &self.fetch_context.is_some())
            .finish_non_exhaustive()
    }
}
