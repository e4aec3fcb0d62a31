//! Message payloads: plain text, or an error rendered with its cause chain.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt::{self, Write as _};

/// What a log call carries before it becomes record text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Rendered verbatim.
    Text(String),
    /// An error's one-line representation plus its trace section.
    Error { repr: String, trace: String },
}

impl Message {
    /// Captures an error for logging.
    ///
    /// `repr` is the error's `Debug` form on one line. The trace section holds
    /// the display text, every `source()` in the chain, and a backtrace of the
    /// logging call site when `RUST_BACKTRACE`/`RUST_LIB_BACKTRACE` enable it.
    #[must_use]
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let repr = format!("{err:?}").replace('\n', " ");

        let mut trace = format!("Error: {err}");
        let mut source = err.source();
        if source.is_some() {
            trace.push_str("\n\nCaused by:");
        }
        let mut depth = 0;
        while let Some(cause) = source {
            let _ = write!(trace, "\n    {depth}: {cause}");
            depth += 1;
            source = cause.source();
        }

        let backtrace = Backtrace::capture();
        if backtrace.status() == BacktraceStatus::Captured {
            let _ = write!(trace, "\n\nStack backtrace:\n{backtrace}");
        }

        Self::Error { repr, trace }
    }

    /// Final message text as it appears in the record.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Error { repr, trace } => format!("{repr}\n{trace}"),
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Error { repr, trace } => write!(f, "{repr}\n{trace}"),
        }
    }
}

impl From<&str> for Message {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Message {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for Message {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<fmt::Arguments<'_>> for Message {
    fn from(args: fmt::Arguments<'_>) -> Self {
        Self::Text(args.to_string())
    }
}

impl From<&(dyn std::error::Error + 'static)> for Message {
    fn from(err: &(dyn std::error::Error + 'static)) -> Self {
        Self::from_error(err)
    }
}

impl From<&(dyn std::error::Error + Send + Sync + 'static)> for Message {
    fn from(err: &(dyn std::error::Error + Send + Sync + 'static)) -> Self {
        Self::from_error(err)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for Message {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self::from_error(err.as_ref())
    }
}

impl From<std::io::Error> for Message {
    fn from(err: std::io::Error) -> Self {
        Self::from_error(&err)
    }
}
