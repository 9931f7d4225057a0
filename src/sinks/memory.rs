//! In-memory sink for tests

use crate::core::{Level, LoggerError, Record, Result, Sink};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Keeps every record it receives.
///
/// Write and flush failures can be switched on to exercise error paths.
///
/// ```
/// use std::sync::Arc;
/// use leveled_logger::{kv, Logger};
/// use leveled_logger::sinks::MemorySink;
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = Logger::builder().shared_sink(sink.clone()).build();
/// logger.warn("disk nearly full", kv!["free_mb" => 120]);
///
/// let (_, record) = sink.last().unwrap();
/// assert_eq!(record.message(), Some("disk nearly full"));
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<(Level, Record)>>,
    fail_writes: AtomicBool,
    flush_error: Mutex<Option<String>>,
    flushes: AtomicUsize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far
    pub fn records(&self) -> Vec<(Level, Record)> {
        self.records.lock().clone()
    }

    pub fn last(&self) -> Option<(Level, Record)> {
        self.records.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }

    /// Make subsequent writes fail (and not be stored)
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }

    /// Make subsequent flushes fail with a writer error carrying `message`
    pub fn fail_flush(&self, message: impl Into<String>) {
        *self.flush_error.lock() = Some(message.into());
    }

    pub fn flush_count(&self) -> usize {
        self.flushes.load(Ordering::Relaxed)
    }
}

impl Sink for MemorySink {
    fn log(&self, level: Level, record: &Record) -> Result<()> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(LoggerError::writer("memory sink rejected write"));
        }
        self.records.lock().push((level, record.clone()));
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.flushes.fetch_add(1, Ordering::Relaxed);
        match self.flush_error.lock().as_ref() {
            Some(message) => Err(LoggerError::writer(message.clone())),
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "memory"
    }
}
