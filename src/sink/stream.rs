//! Process stdout/stderr. The standard library already serializes writers
//! behind a reentrant lock, so these sinks hold no state of their own.

use super::Sink;
use std::io::{self, Write};

/// Normal-severity destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&self, line: &str) -> Result<(), crate::Error> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        Ok(())
    }
}

/// Error-severity destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write_line(&self, line: &str) -> Result<(), crate::Error> {
        let mut err = io::stderr().lock();
        writeln!(err, "{line}")?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stderr().flush()?;
        Ok(())
    }
}
