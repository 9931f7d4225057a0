//! Runtime-swappable severity filter
//!
//! A [`LevelGate`] sits between a logger and its sink. The active
//! [`LevelFilter`] lives behind an [`ArcSwap`]: every log call loads it
//! exactly once, and [`LevelGate::swap`] publishes a replacement
//! atomically. Readers never take a lock, and a call racing with a swap
//! sees either the old filter or the new one in full.

use super::error::Result;
use super::level::Level;
use super::record::Record;
use super::sink::Sink;
use arc_swap::ArcSwap;
use std::sync::Arc;

/// Which call levels reach the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelFilter {
    AllowNone,
    AllowError,
    AllowWarn,
    AllowInfo,
    AllowDebug,
    /// Unrecognised level codes disable filtering entirely
    PassThrough,
}

impl LevelFilter {
    /// Filter for a raw level code. Codes outside `0..=4` fail open.
    pub fn from_code(code: u8) -> Self {
        Level::from_repr(code).map_or(LevelFilter::PassThrough, LevelFilter::from)
    }

    /// Level this filter was built from, if any.
    pub fn level(&self) -> Option<Level> {
        match self {
            LevelFilter::AllowNone => Some(Level::None),
            LevelFilter::AllowError => Some(Level::Error),
            LevelFilter::AllowWarn => Some(Level::Warn),
            LevelFilter::AllowInfo => Some(Level::Info),
            LevelFilter::AllowDebug => Some(Level::Debug),
            LevelFilter::PassThrough => None,
        }
    }

    /// Whether a call at `call` passes this filter.
    #[inline]
    pub fn allows(&self, call: Level) -> bool {
        match self.level() {
            Some(threshold) => call != Level::None && call <= threshold,
            None => true,
        }
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::None => LevelFilter::AllowNone,
            Level::Error => LevelFilter::AllowError,
            Level::Warn => LevelFilter::AllowWarn,
            Level::Info => LevelFilter::AllowInfo,
            Level::Debug => LevelFilter::AllowDebug,
        }
    }
}

/// Filtering wrapper around a sink.
pub struct LevelGate {
    filter: ArcSwap<LevelFilter>,
    sink: Arc<dyn Sink>,
}

impl LevelGate {
    pub fn new(sink: Arc<dyn Sink>, filter: LevelFilter) -> Self {
        Self {
            filter: ArcSwap::from_pointee(filter),
            sink,
        }
    }

    /// Currently active filter.
    #[inline]
    pub fn filter(&self) -> LevelFilter {
        **self.filter.load()
    }

    /// Replace the active filter in place.
    pub fn swap(&self, filter: LevelFilter) {
        self.filter.store(Arc::new(filter));
    }

    #[inline]
    pub fn allows(&self, call: Level) -> bool {
        self.filter.load().allows(call)
    }

    /// Forward `record` to the sink if `level` passes. Filtered records
    /// are not an error.
    pub fn log(&self, level: Level, record: &Record) -> Result<()> {
        if self.allows(level) {
            self.sink.log(level, record)
        } else {
            Ok(())
        }
    }

    /// Like [`log`](Self::log), but only builds the record once the filter
    /// has admitted it. Returns `Ok(false)` when filtered.
    pub fn log_with<F>(&self, level: Level, build: F) -> Result<bool>
    where
        F: FnOnce() -> Record,
    {
        if !self.allows(level) {
            return Ok(false);
        }
        let record = build();
        self.sink.log(level, &record).map(|()| true)
    }

    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }
}

impl std::fmt::Debug for LevelGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LevelGate")
            .field("filter", &self.filter())
            .field("sink", &self.sink.name())
            .finish()
    }
}
