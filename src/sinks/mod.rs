//! Sink implementations

pub mod memory;
pub mod stream;

#[cfg(feature = "tracing")]
pub mod tracing_sink;

pub use memory::MemorySink;
pub use stream::StreamSink;

#[cfg(feature = "tracing")]
pub use tracing_sink::TracingSink;

// Re-export traits for convenience
pub use crate::core::{NopSink, Sink};
