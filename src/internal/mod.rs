//! gumo-logging's own diagnostics: config loading, manager setup, and
//! swallowed render or sink failures.
//!
//! These cannot go through a `Logger` (a failing sink would recurse), so they
//! are written straight to stderr, and only when `GUMO_LOGGING_DEBUG` is set
//! to something other than `0`/`false`. The switch is read once.

use crate::level::Level;
use crate::sink::{Sink, StderrSink};
use std::sync::OnceLock;

/// Environment switch for internal diagnostics.
pub const DEBUG_ENV: &str = "GUMO_LOGGING_DEBUG";

static ENABLED: OnceLock<bool> = OnceLock::new();

/// Reads the environment switch. Later calls are no-ops; the first diagnostic
/// call initializes it implicitly if nobody did.
pub fn init() {
    ENABLED.get_or_init(|| enabled_from(std::env::var(DEBUG_ENV).ok().as_deref()));
}

#[must_use]
pub fn is_enabled() -> bool {
    init();
    ENABLED.get().copied().unwrap_or(false)
}

fn enabled_from(value: Option<&str>) -> bool {
    value.is_some_and(|v| !matches!(v.trim().to_lowercase().as_str(), "" | "0" | "false" | "off"))
}

fn log(level: Level, scope: &str, msg: &str) {
    if !is_enabled() {
        return;
    }
    // Nowhere left to report a failing stderr.
    let _ = StderrSink.write_line(&format!("[gumo-logging] {level} {scope}: {msg}"));
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warning, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
