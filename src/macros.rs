//! Logging macros for ergonomic field lists and message formatting.
//!
//! # Examples
//!
//! ```
//! use leveled_logger::{infof, kv, Logger};
//!
//! let logger = Logger::nop();
//!
//! // Structured call with key/value pairs
//! logger.info("Server started", kv!["port" => 8080, "tls" => true]);
//!
//! // Formatted message, no extra fields
//! let port = 8080;
//! infof!(logger, "Server listening on port {}", port);
//! ```

/// Build a list of key/value pairs.
///
/// Keys convert into `String`, values into [`Value`](crate::Value).
/// `kv![]` is the empty list.
///
/// ```
/// use leveled_logger::{kv, Value};
///
/// let pairs = kv!["user" => "alice", "attempt" => 3];
/// assert_eq!(pairs[1], ("attempt".to_string(), Value::Int(3)));
/// assert!(kv![].is_empty());
/// ```
#[macro_export]
macro_rules! kv {
    () => {
        ::std::vec::Vec::<(::std::string::String, $crate::Value)>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        ::std::vec![$((
            ::std::convert::Into::<::std::string::String>::into($key),
            ::std::convert::Into::<$crate::Value>::into($value),
        )),+]
    };
}

/// Log a formatted message at the given level.
///
/// ```
/// # use leveled_logger::{Level, Logger};
/// # let logger = Logger::nop();
/// use leveled_logger::logf;
/// logf!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        match $level {
            $crate::Level::Debug => $logger.debugf(::std::format_args!($($arg)+)),
            $crate::Level::Info => $logger.infof(::std::format_args!($($arg)+)),
            $crate::Level::Warn => $logger.warnf(::std::format_args!($($arg)+)),
            $crate::Level::Error => $logger.errorf(::std::format_args!($($arg)+)),
            $crate::Level::None => {}
        }
    };
}

/// Log a formatted debug-level message.
///
/// ```
/// # use leveled_logger::Logger;
/// # let logger = Logger::nop();
/// use leveled_logger::debugf;
/// debugf!(logger, "failed: {}", "disk full");
/// ```
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
}

/// Log a formatted info-level message.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
}

/// Log a formatted warning-level message.
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(::std::format_args!($($arg)+))
    };
}

/// Log a formatted error-level message.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
}
