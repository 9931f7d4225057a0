//! Process-wide default logger
//!
//! Prefer passing a [`Logger`] to the code that needs it. Where that is not
//! practical, register one here and log through the free functions:
//!
//! ```
//! use leveled_logger::{kv, registry, Logger, Options};
//!
//! // Before anything is registered every call is a silent no-op.
//! registry::info("dropped", kv![]);
//!
//! registry::set_singleton(&Logger::new(Options::default()));
//! registry::info("service started", kv!["port" => 8080]);
//! registry::close().unwrap();
//! # registry::clear_singleton();
//! ```
//!
//! Nothing is registered at process start, and nothing is torn down
//! automatically: call [`set_singleton`] once while wiring the application
//! and [`close`] (optionally [`clear_singleton`]) when shutting down. Code
//! must not assume a logger is registered before that wiring step ran.
//!
//! The slot is an [`ArcSwapOption`], so logging through it never takes a
//! lock and replacing the registered logger is atomic.

use crate::core::{Level, Logger, Result, Value};
use arc_swap::ArcSwapOption;
use std::fmt;
use std::sync::{Arc, LazyLock};

static SINGLETON: LazyLock<ArcSwapOption<Logger>> = LazyLock::new(ArcSwapOption::empty);

/// Register `logger` as the process-wide default, replacing any previous
/// one.
///
/// The registry keeps its own copy: it writes to the same sink with the
/// same context and starts at the same level, but has a gate of its own.
/// Every forwarding function is `#[track_caller]`, so the `caller` field
/// still names the application call site rather than this module.
pub fn set_singleton(logger: &Logger) {
    SINGLETON.store(Some(Arc::new(logger.detached())));
}

/// Currently registered logger, if any.
pub fn singleton() -> Option<Arc<Logger>> {
    SINGLETON.load_full()
}

/// Unregister the current logger and hand it back. Does not flush it.
pub fn clear_singleton() -> Option<Arc<Logger>> {
    SINGLETON.swap(None)
}

/// Level of the registered logger, or `None` when nothing is registered.
pub fn get_level() -> Level {
    match &*SINGLETON.load() {
        Some(logger) => logger.get_level(),
        None => Level::None,
    }
}

/// Change the registered logger's level. Does nothing when unset.
pub fn set_level(level: &str) {
    if let Some(logger) = &*SINGLETON.load() {
        logger.set_level(level);
    }
}

#[track_caller]
pub fn debug<I, K, V>(message: impl Into<String>, kv: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    if let Some(logger) = &*SINGLETON.load() {
        logger.debug(message, kv);
    }
}

#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    if let Some(logger) = &*SINGLETON.load() {
        logger.debugf(args);
    }
}

#[track_caller]
pub fn info<I, K, V>(message: impl Into<String>, kv: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    if let Some(logger) = &*SINGLETON.load() {
        logger.info(message, kv);
    }
}

#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    if let Some(logger) = &*SINGLETON.load() {
        logger.infof(args);
    }
}

#[track_caller]
pub fn warn<I, K, V>(message: impl Into<String>, kv: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    if let Some(logger) = &*SINGLETON.load() {
        logger.warn(message, kv);
    }
}

#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) {
    if let Some(logger) = &*SINGLETON.load() {
        logger.warnf(args);
    }
}

#[track_caller]
pub fn error<I, K, V>(message: impl Into<String>, kv: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    if let Some(logger) = &*SINGLETON.load() {
        logger.error(message, kv);
    }
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    if let Some(logger) = &*SINGLETON.load() {
        logger.errorf(args);
    }
}

/// Flush the registered logger. The logger stays registered.
pub fn close() -> Result<()> {
    match &*SINGLETON.load() {
        Some(logger) => logger.close(),
        None => Ok(()),
    }
}
