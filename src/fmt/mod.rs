//! Rendering records into single output lines.
//!
//! The mode is fixed per logger when it is minted; the formatter also captures
//! the working directory so text mode can print project-relative paths.

mod json;
mod text;

pub use json::render_json;
pub use text::{render_text, strip_cwd};

use crate::record::LogRecord;
use serde::Deserialize;
use std::str::FromStr;

/// JSON for Cloud Logging ingestion, or a human-readable line for local runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    Structured,
    #[default]
    Text,
}

impl OutputFormat {
    #[must_use]
    pub const fn from_structured(structured: bool) -> Self {
        if structured { Self::Structured } else { Self::Text }
    }

    #[must_use]
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::Structured)
    }
}

/// Config and CLI spelling of the rendering mode; `Auto` defers to platform detection.
/// Both spellings accept `json` for `structured`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeSetting {
    #[default]
    Auto,
    #[serde(alias = "json")]
    Structured,
    Text,
}

impl FromStr for ModeSetting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "structured" | "json" => Ok(Self::Structured),
            "text" => Ok(Self::Text),
            _ => Err(format!("unknown output mode '{s}' (expected auto, structured, json or text)")),
        }
    }
}

/// Renders records in one fixed mode.
#[derive(Debug, Clone)]
pub struct Formatter {
    format: OutputFormat,
    /// Working directory with a trailing separator, stripped from text-mode paths.
    cwd_prefix: Option<String>,
}

impl Formatter {
    /// Captures the current working directory for relative paths.
    #[must_use]
    pub fn new(format: OutputFormat) -> Self {
        let cwd_prefix = std::env::current_dir().ok().map(|dir| {
            let mut prefix = dir.to_string_lossy().into_owned();
            if !prefix.ends_with(std::path::MAIN_SEPARATOR) {
                prefix.push(std::path::MAIN_SEPARATOR);
            }
            prefix
        });
        Self { format, cwd_prefix }
    }

    /// Overrides the captured working directory. Used by tests and hosts that chdir.
    #[must_use]
    pub fn cwd_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.cwd_prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// # Errors
    /// Returns [`crate::Error::Render`] if JSON serialization fails.
    pub fn render(&self, record: &LogRecord) -> Result<String, crate::Error> {
        match self.format {
            OutputFormat::Structured => render_json(record),
            OutputFormat::Text => Ok(render_text(record, self.cwd_prefix.as_deref())),
        }
    }
}
