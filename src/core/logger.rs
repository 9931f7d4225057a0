//! Main logger implementation

use super::{
    context::Context,
    error::Result,
    gate::{LevelFilter, LevelGate},
    level::{parse_level, Level},
    metrics::LoggerMetrics,
    options::Options,
    output_format::Format,
    record::Record,
    sink::{NopSink, Sink},
    timestamp::TimestampFormat,
    value::Value,
};
use crate::sinks::StreamSink;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Leveled structured logger.
///
/// A logger pairs a [`LevelGate`] with a context: a sink plus the fields
/// merged into every record. It is safe to share across threads; the
/// level can be changed with [`set_level`](Self::set_level) while other
/// threads are logging.
///
/// Children created with [`with`](Self::with) share the sink but get their
/// own gate, so their level evolves independently of the parent.
///
/// # Example
///
/// ```
/// use leveled_logger::{kv, Logger, Options};
///
/// let logger = Logger::new(Options {
///     name: "checkout".into(),
///     level: "debug".into(),
///     ..Options::default()
/// });
///
/// let request = logger.with(kv!["request_id" => "abc-123"]);
/// request.info("payment accepted", kv!["amount_cents" => 4200]);
/// request.set_level("warn");
/// assert_eq!(logger.get_level(), leveled_logger::Level::Debug);
/// ```
pub struct Logger {
    context: Context,
    gate: LevelGate,
}

impl Logger {
    /// Logger writing to stdout in `opts.format`.
    #[must_use]
    pub fn new(opts: Options) -> Self {
        let sink = Arc::new(StreamSink::from_options(&opts));
        Self::with_sink(opts, sink)
    }

    /// Logger over an arbitrary sink. The sink decides which static fields
    /// the options translate into.
    #[must_use]
    pub fn with_sink(opts: Options, sink: Arc<dyn Sink>) -> Self {
        let level = parse_level(&opts.level);
        let context = Context::root(sink, &opts);
        Self::from_parts(context, level)
    }

    /// Logger backed by the `tracing` ecosystem.
    #[cfg(feature = "tracing")]
    #[must_use]
    pub fn tracing(opts: Options) -> Self {
        Self::with_sink(opts, Arc::new(crate::sinks::TracingSink::new()))
    }

    /// Logger that never writes anything. Its level is always `None`.
    #[must_use]
    pub fn nop() -> Self {
        Self::from_parts(Context::bare(Arc::new(NopSink)), Level::None)
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn from_parts(context: Context, level: Level) -> Self {
        let gate = LevelGate::new(Arc::clone(context.sink()), LevelFilter::from(level));
        Self { context, gate }
    }

    /// Derive a child carrying `kv` after this logger's own context.
    ///
    /// The child starts at this logger's current level and has its own
    /// gate. Nothing about `self` changes.
    #[must_use]
    pub fn with<I, K, V>(&self, kv: I) -> Logger
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let context = self.context.with(kv.into_iter().map(|(k, v)| (k.into(), v.into())));
        Self::from_parts(context, self.get_level())
    }

    /// Copy sharing sink, context and metrics, but with a gate of its own.
    pub(crate) fn detached(&self) -> Logger {
        Self::from_parts(self.context.clone(), self.get_level())
    }

    /// Level currently enforced by the gate.
    pub fn get_level(&self) -> Level {
        // Loggers only ever install filters built from a Level.
        self.gate.filter().level().unwrap_or(Level::None)
    }

    /// Parse `level` and make it effective immediately.
    pub fn set_level(&self, level: &str) {
        self.gate.swap(LevelFilter::from(parse_level(level)));
    }

    #[track_caller]
    pub fn debug<I, K, V>(&self, message: impl Into<String>, kv: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.log(Level::Debug, message.into(), kv, Location::caller());
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Debug, args, Location::caller());
    }

    #[track_caller]
    pub fn info<I, K, V>(&self, message: impl Into<String>, kv: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.log(Level::Info, message.into(), kv, Location::caller());
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Info, args, Location::caller());
    }

    #[track_caller]
    pub fn warn<I, K, V>(&self, message: impl Into<String>, kv: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.log(Level::Warn, message.into(), kv, Location::caller());
    }

    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Warn, args, Location::caller());
    }

    #[track_caller]
    pub fn error<I, K, V>(&self, message: impl Into<String>, kv: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.log(Level::Error, message.into(), kv, Location::caller());
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Error, args, Location::caller());
    }

    /// Flush the sink and report whatever it reports.
    pub fn close(&self) -> Result<()> {
        self.context.flush()
    }

    /// Counters shared with every logger derived from the same root.
    pub fn metrics(&self) -> &LoggerMetrics {
        self.context.metrics()
    }

    fn logf(&self, level: Level, args: fmt::Arguments<'_>, location: &Location<'_>) {
        if !self.gate.allows(level) {
            self.context.metrics().record_filtered();
            return;
        }
        let message = match args.as_str() {
            Some(s) => s.to_string(),
            None => fmt::format(args),
        };
        self.log(level, message, std::iter::empty::<(String, Value)>(), location);
    }

    fn log<I, K, V>(&self, level: Level, message: String, kv: I, location: &Location<'_>)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let build = || -> Record {
            self.context.record(
                level,
                message,
                kv.into_iter().map(|(k, v)| (k.into(), v.into())),
                location,
            )
        };

        match self.gate.log_with(level, build) {
            Ok(true) => self.context.settle(Ok(())),
            Ok(false) => {
                self.context.metrics().record_filtered();
            }
            Err(e) => self.context.settle(Err(e)),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.get_level())
            .field("sink", &self.context.sink().name())
            .field(
                "fields",
                &self.context.fields().iter().map(|f| f.key.as_str()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use leveled_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .name("inventory")
///     .environment("production")
///     .region("eu-west-1")
///     .level("warn")
///     .format(Format::Console)
///     .tag("team", "storage")
///     .build();
///
/// assert_eq!(logger.get_level(), Level::Warn);
/// ```
#[derive(Default)]
pub struct LoggerBuilder {
    options: Options,
    sink: Option<Arc<dyn Sink>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing set of options
    #[must_use = "builder methods return a new value"]
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.options.name = name.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.options.environment = environment.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.options.region = region.into();
        self
    }

    /// Minimum level as free text
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.options.level = level.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: Format) -> Self {
        self.options.format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.options.timestamp_format = format;
        self
    }

    /// Add one static tag field
    #[must_use = "builder methods return a new value"]
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.tags.insert(key.into(), value.into());
        self
    }

    /// Send records to `sink` instead of stdout
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Like [`sink`](Self::sink), for a sink the caller keeps a handle to
    #[must_use = "builder methods return a new value"]
    pub fn shared_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        match self.sink {
            Some(sink) => Logger::with_sink(self.options, sink),
            None => Logger::new(self.options),
        }
    }
}
