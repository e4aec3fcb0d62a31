//! Human-readable single line for local development:
//! `[2024-05-01 10:00:00.123456]INFO:src/main.rs:42: message`.

use crate::record::LogRecord;
use chrono::Local;

const UNKNOWN_FILE: &str = "<unknown>";
const UNKNOWN_LINE: &str = "-";

/// Renders with a local timestamp taken now, not the record's UTC build time.
#[must_use]
pub fn render_text(record: &LogRecord, cwd_prefix: Option<&str>) -> String {
    let (file, line) = record.source_location.as_ref().map_or_else(
        || (UNKNOWN_FILE, UNKNOWN_LINE.to_string()),
        |loc| (strip_cwd(loc.file, cwd_prefix), loc.line.to_string()),
    );

    format!(
        "[{}]{}:{}:{}: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S%.6f"),
        record.severity,
        file,
        line,
        record.message
    )
}

/// Drops the working-directory prefix from absolute source paths.
/// Paths outside the working directory and relative paths pass through.
#[must_use]
pub fn strip_cwd<'a>(file: &'a str, cwd_prefix: Option<&str>) -> &'a str {
    cwd_prefix
        .and_then(|prefix| file.strip_prefix(prefix))
        .unwrap_or(file)
}
