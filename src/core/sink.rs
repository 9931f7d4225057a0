//! Sink trait for log output engines

use super::context::{standard_enrichment, ContextField};
use super::error::Result;
use super::level::Level;
use super::options::Options;
use super::record::Record;

/// A logging engine that turns records into output.
///
/// Implementations must tolerate concurrent calls; a single `log` call is
/// expected to produce one whole record or nothing.
pub trait Sink: Send + Sync {
    /// Write one record. `level` is the severity it was logged at.
    fn log(&self, level: Level, record: &Record) -> Result<()>;

    fn flush(&self) -> Result<()>;

    fn name(&self) -> &str;

    /// Static fields this engine wants merged into every record, derived
    /// from the construction options.
    fn enrichment(&self, opts: &Options) -> Vec<ContextField> {
        standard_enrichment(opts)
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopSink;

impl Sink for NopSink {
    fn log(&self, _level: Level, _record: &Record) -> Result<()> {
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "nop"
    }

    fn enrichment(&self, _opts: &Options) -> Vec<ContextField> {
        Vec::new()
    }
}
