//! Destinations for rendered lines. A manager owns exactly two: one for normal
//! severities and one for errors. The `Sink` trait lets hosts and tests swap
//! in their own without touching the logger.

mod memory;
mod stream;

pub use memory::MemorySink;
pub use stream::{StderrSink, StdoutSink};

use crate::level::Level;
use std::fmt;
use std::sync::Arc;

/// `Send + Sync` so one sink pair can serve loggers on every thread.
/// Implementations provide their own synchronization; a single `write_line`
/// must emit the whole line atomically.
pub trait Sink: Send + Sync {
    /// Writes one rendered record followed by a newline.
    ///
    /// # Errors
    /// I/O errors from the underlying stream.
    fn write_line(&self, line: &str) -> Result<(), crate::Error>;

    /// Pushes buffered bytes to the destination.
    ///
    /// # Errors
    /// I/O errors from the underlying stream.
    fn flush(&self) -> Result<(), crate::Error>;
}

/// The normal/error pair, built once per manager and shared with every logger it mints.
#[derive(Clone)]
pub struct SinkPair {
    normal: Arc<dyn Sink>,
    error: Arc<dyn Sink>,
}

impl SinkPair {
    #[must_use]
    pub fn new(normal: Arc<dyn Sink>, error: Arc<dyn Sink>) -> Self {
        Self { normal, error }
    }

    /// stdout for normal severities, stderr for errors. Each call returns fresh
    /// handles onto the process streams, so building twice never duplicates output.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Arc::new(StdoutSink), Arc::new(StderrSink))
    }

    /// Sink a record of `level` is written to.
    #[must_use]
    pub fn for_level(&self, level: Level) -> &dyn Sink {
        if level.is_error() {
            self.error.as_ref()
        } else {
            self.normal.as_ref()
        }
    }

    #[must_use]
    pub const fn normal(&self) -> &Arc<dyn Sink> {
        &self.normal
    }

    #[must_use]
    pub const fn error(&self) -> &Arc<dyn Sink> {
        &self.error
    }

    /// Same error sink, different normal sink.
    #[must_use]
    pub fn with_normal(&self, normal: Arc<dyn Sink>) -> Self {
        Self::new(normal, Arc::clone(&self.error))
    }

    /// Same normal sink, different error sink.
    #[must_use]
    pub fn with_error(&self, error: Arc<dyn Sink>) -> Self {
        Self::new(Arc::clone(&self.normal), error)
    }

    /// Flushes both sinks, attempting the error sink even if the normal one fails.
    ///
    /// # Errors
    /// Returns the first I/O error encountered.
    pub fn flush(&self) -> Result<(), crate::Error> {
        let normal = self.normal.flush();
        let error = self.error.flush();
        normal.and(error)
    }
}

impl Default for SinkPair {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for SinkPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkPair").finish_non_exhaustive()
    }
}
