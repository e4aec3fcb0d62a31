//! Severity levels and the numeric table that decides sink routing.

use std::fmt;
use std::str::FromStr;

/// Ordered severity. Discriminants follow the conventional numeric table so
/// integrations that speak in numbers (10, 20, ...) map without a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Development-time detail.
    Debug = 10,
    /// Normal operational milestones.
    #[default]
    Info = 20,
    /// Anomalies that did not stop the operation.
    Warning = 30,
    /// Failures of the current unit of work. First level routed to the error sink.
    Error = 40,
    /// Failures that take the process or service down. Shared by `critical` and `fatal`.
    Critical = 50,
}

impl Level {
    /// `fatal` and `critical` share the ceiling of the table.
    pub const FATAL: Self = Self::Critical;

    /// Records at or above this level go to the error sink.
    pub const ERROR_THRESHOLD: Self = Self::Error;

    /// Severity name as it appears in rendered records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    #[must_use]
    pub const fn as_number(self) -> u8 {
        self as u8
    }

    /// Maps a numeric level onto the table, rounding down to the nearest known
    /// level. Anything below 10 is treated as `Debug`.
    #[must_use]
    pub const fn from_number(n: u8) -> Self {
        match n {
            50.. => Self::Critical,
            40..=49 => Self::Error,
            30..=39 => Self::Warning,
            20..=29 => Self::Info,
            _ => Self::Debug,
        }
    }

    /// Routing predicate for the error sink.
    #[must_use]
    pub fn is_error(self) -> bool {
        self >= Self::ERROR_THRESHOLD
    }

    /// Used by help output and tests.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Debug,
            Self::Info,
            Self::Warning,
            Self::Error,
            Self::Critical,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" | "err" | "exception" => Ok(Self::Error),
            "critical" | "crit" | "fatal" => Ok(Self::Critical),
            other => other
                .parse::<u8>()
                .map(Self::from_number)
                .map_err(|_| ParseLevelError(s.to_string())),
        }
    }
}
