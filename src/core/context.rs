//! Accumulated key/value context
//!
//! This module provides:
//! - `ContextField`: a key bound to a fixed value or to a per-record valuer
//! - `Context`: a sink together with the ordered fields merged into every
//!   record written through it
//!
//! Deriving a context copies the parent's field list and appends to the
//! copy, so parents never observe their children's fields.

use super::level::Level;
use super::metrics::LoggerMetrics;
use super::options::Options;
use super::record::Record;
use super::sink::Sink;
use super::timestamp::TimestampFormat;
use super::value::Value;
use std::panic::Location;
use std::sync::Arc;

/// How a context field obtains its value.
#[derive(Debug, Clone, PartialEq)]
pub enum ContextValue {
    /// Same value on every record
    Fixed(Value),
    /// Time the record was produced
    Timestamp(TimestampFormat),
    /// `file:line` of the application call site
    Caller,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContextField {
    pub key: String,
    pub value: ContextValue,
}

impl ContextField {
    pub fn fixed(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: ContextValue::Fixed(value.into()),
        }
    }

    pub fn timestamp(format: TimestampFormat) -> Self {
        Self {
            key: "timestamp".to_string(),
            value: ContextValue::Timestamp(format),
        }
    }

    pub fn caller() -> Self {
        Self {
            key: "caller".to_string(),
            value: ContextValue::Caller,
        }
    }

    fn resolve(&self, location: &Location<'_>) -> Value {
        match &self.value {
            ContextValue::Fixed(value) => value.clone(),
            ContextValue::Timestamp(format) => format.now(),
            ContextValue::Caller => Value::String(format_caller(location)),
        }
    }
}

/// `file:line` using only the file's base name.
pub fn format_caller(location: &Location<'_>) -> String {
    let file = location.file();
    let base = file.rsplit(['/', '\\']).next().unwrap_or(file);
    format!("{}:{}", base, location.line())
}

/// Static enrichment for a set of options, in emission order:
/// timestamp, caller, logger, environment, region, then tags by key.
pub fn standard_enrichment(opts: &Options) -> Vec<ContextField> {
    let mut fields = vec![
        ContextField::timestamp(opts.timestamp_format.or_default()),
        ContextField::caller(),
    ];

    if !opts.name.is_empty() {
        fields.push(ContextField::fixed("logger", opts.name.as_str()));
    }
    if !opts.environment.is_empty() {
        fields.push(ContextField::fixed("environment", opts.environment.as_str()));
    }
    if !opts.region.is_empty() {
        fields.push(ContextField::fixed("region", opts.region.as_str()));
    }
    for (key, value) in &opts.tags {
        fields.push(ContextField::fixed(key.as_str(), value.as_str()));
    }

    fields
}

/// A sink plus the fields baked into every record sent to it.
#[derive(Clone)]
pub(crate) struct Context {
    sink: Arc<dyn Sink>,
    fields: Arc<[ContextField]>,
    metrics: Arc<LoggerMetrics>,
}

impl Context {
    /// Root context for a sink, enriched the way that sink asks for.
    pub(crate) fn root(sink: Arc<dyn Sink>, opts: &Options) -> Self {
        let fields = sink.enrichment(opts);
        Self {
            sink,
            fields: fields.into(),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    pub(crate) fn bare(sink: Arc<dyn Sink>) -> Self {
        Self {
            sink,
            fields: Arc::from(Vec::new()),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    /// Child context with `pairs` appended after the existing fields.
    pub(crate) fn with<I>(&self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let mut fields = self.fields.to_vec();
        fields.extend(pairs.into_iter().map(|(key, value)| ContextField {
            key,
            value: ContextValue::Fixed(value),
        }));
        Self {
            sink: Arc::clone(&self.sink),
            fields: fields.into(),
            metrics: Arc::clone(&self.metrics),
        }
    }

    pub(crate) fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }

    pub(crate) fn fields(&self) -> &[ContextField] {
        &self.fields
    }

    pub(crate) fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Assemble a record: context fields, `level`, `message`, then the
    /// call-site pairs.
    pub(crate) fn record<I>(
        &self,
        level: Level,
        message: String,
        pairs: I,
        location: &Location<'_>,
    ) -> Record
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let pairs = pairs.into_iter();
        let mut record = Record::with_capacity(self.fields.len() + 2 + pairs.size_hint().0);
        for field in self.fields.iter() {
            record.push(field.key.as_str(), field.resolve(location));
        }
        record.push("level", level.to_str());
        record.push("message", message);
        record.extend(pairs);
        record
    }

    /// Account for the outcome of one sink write. Errors stop here.
    pub(crate) fn settle(&self, result: super::error::Result<()>) {
        match result {
            Ok(()) => {
                self.metrics.record_logged();
            }
            Err(e) => {
                let dropped = self.metrics.record_dropped();
                // Alert on first drop and periodically thereafter
                if dropped == 0 || (dropped + 1) % 1000 == 0 {
                    eprintln!(
                        "[LOGGER ERROR] Sink '{}' failed to write ({} records dropped): {}",
                        self.sink.name(),
                        dropped + 1,
                        e
                    );
                }
            }
        }
    }

    pub(crate) fn flush(&self) -> super::error::Result<()> {
        self.sink.flush()
    }
}
