//! Core logger types and traits

pub mod context;
pub mod error;
pub mod gate;
pub mod level;
pub mod logger;
pub mod metrics;
pub mod options;
pub mod output_format;
pub mod record;
pub mod sink;
pub mod timestamp;
pub mod value;

pub use context::{format_caller, standard_enrichment, ContextField, ContextValue};
pub use error::{LoggerError, Result};
pub use gate::{LevelFilter, LevelGate};
pub use level::{parse_level, Level};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use options::Options;
pub use output_format::Format;
pub use record::{KeyValues, Record};
pub use sink::{NopSink, Sink};
pub use timestamp::TimestampFormat;
pub use value::Value;
