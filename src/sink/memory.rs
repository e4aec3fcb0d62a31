//! In-process sink that keeps every line. Clones share the same buffer, so a
//! test can hand one clone to the manager and read through the other.

use super::Sink;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
    flushes: Arc<Mutex<usize>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        lock(&self.lines).clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.lines).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        lock(&self.lines).is_empty()
    }

    /// Removes and returns everything written so far.
    #[must_use]
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *lock(&self.lines))
    }

    /// Number of `flush` calls observed.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        *lock(&self.flushes)
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) -> Result<(), crate::Error> {
        lock(&self.lines).push(line.to_string());
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        *lock(&self.flushes) += 1;
        Ok(())
    }
}

/// A panicking writer must not make the buffer unreadable for the rest of a test run.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
