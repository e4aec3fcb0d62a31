//! `gumo-logging` - structured logging with Cloud Logging trace correlation.
//!
//! - JSON records with the special fields Cloud Logging recognises
//!   (`severity`, `logging.googleapis.com/trace`, `.../spanId`, `.../sourceLocation`)
//!   when running on App Engine, single-line text everywhere else
//! - Per-request trace/span binding from the `X-Cloud-Trace-Context` header
//! - Call-site resolution that skips the logger's own frames
//! - `DEBUG`..`WARNING` to stdout, `ERROR` and above to stderr
//!
//! # Example
//!
//! ```
//! use gumo_logging::LoggerManager;
//!
//! let manager = LoggerManager::new();
//!
//! // once per request
//! let logger = manager.get_logger(Some("0af7651916cd43dd8448eb211c80319c/2;o=1"));
//! logger.info("Hello. This is test log message.");
//! logger.warning("This is test warning message.");
//!
//! let err = std::io::Error::other("division by zero");
//! logger.exception(&err as &(dyn std::error::Error + 'static));
//!
//! manager.flush().ok();
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `gumo-log` binary

pub mod config;
pub mod context;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod manager;
pub mod record;
pub mod sink;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::{Config, Settings};
pub use context::{LoggerContext, TRACE_HEADER, UNKNOWN_PROJECT, parse_trace_header};
pub use error::Error;
pub use fmt::{Formatter, OutputFormat};
pub use level::Level;
pub use logger::{ContextHook, Logger};
pub use manager::{LoggerManager, LoggerManagerBuilder};
pub use record::{LogRecord, Message, SourceLocation};
pub use sink::{MemorySink, Sink, SinkPair, StderrSink, StdoutSink};
