//! # Leveled Logger
//!
//! Leveled structured logging behind one interface, whatever engine does
//! the writing.
//!
//! ## Features
//!
//! - **Runtime levels**: change a logger's level while other threads log
//!   through it, without locks on the logging path
//! - **Contextual children**: `with` derives a logger carrying extra
//!   key/value fields and a level of its own
//! - **Pluggable engines**: JSON or logfmt streams, `tracing`, or any
//!   [`Sink`]
//! - **Process-wide default**: an optional registered logger reachable
//!   through [`registry`] free functions
//!
//! ```
//! use leveled_logger::prelude::*;
//!
//! let logger = Logger::builder()
//!     .name("orders")
//!     .environment("staging")
//!     .level("info")
//!     .format(Format::Console)
//!     .build();
//!
//! let order = logger.with(kv!["order_id" => 1042]);
//! order.info("order placed", kv!["items" => 3]);
//! order.debug("not written at info", kv![]);
//! logger.close().unwrap();
//! ```

pub mod core;
pub mod macros;
pub mod registry;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        parse_level, Format, KeyValues, Level, Logger, LoggerBuilder, LoggerError, Options,
        Record, Result, Sink, TimestampFormat, Value,
    };
    pub use crate::sinks::{MemorySink, StreamSink};
    pub use crate::{debugf, errorf, infof, kv, warnf};
}

pub use crate::core::{
    format_caller, parse_level, standard_enrichment, ContextField, ContextValue, Format,
    KeyValues, Level, LevelFilter, LevelGate, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
    NopSink, Options, Record, Result, Sink, TimestampFormat, Value,
};
pub use crate::sinks::{MemorySink, StreamSink};

#[cfg(feature = "tracing")]
pub use crate::sinks::TracingSink;
