//! The one error type the crate returns.
//!
//! Log calls never produce it. It comes back from config loading, from
//! [`Formatter::render`](crate::Formatter::render), and from explicit flushes.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// Reading a config file, or writing to or flushing a sink, failed.
    Io(std::io::Error),
    /// A config file is not valid TOML or a field has the wrong type.
    /// `path` is `None` for configs parsed from a string.
    ConfigParse {
        path: Option<PathBuf>,
        source: toml::de::Error,
    },
    /// The platform has no per-user config directory.
    ConfigDirNotFound,
    /// A chain of `source = "..."` includes leads back to this file.
    CyclicInclude(PathBuf),
    /// A record could not be serialized as JSON.
    Render(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "logging i/o failed: {e}"),
            Self::ConfigParse { path: Some(path), source } => {
                write!(f, "invalid logging config {}: {source}", path.display())
            }
            Self::ConfigParse { path: None, source } => {
                write!(f, "invalid logging config: {source}")
            }
            Self::ConfigDirNotFound => f.write_str("no user config directory on this platform"),
            Self::CyclicInclude(path) => {
                write!(f, "config includes loop back to {}", path.display())
            }
            Self::Render(e) => write!(f, "record not renderable as JSON: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse { source, .. } => Some(source),
            Self::Render(e) => Some(e),
            Self::ConfigDirNotFound | Self::CyclicInclude(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Parse errors without a file attached; file loads add the path themselves.
impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Self::ConfigParse { path: None, source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Render(e)
    }
}
