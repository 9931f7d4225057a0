//! Timestamp formatting for the `timestamp` field
//!
//! The default matches RFC 3339 with nanosecond precision and a `Z`
//! suffix, which is what most log aggregation systems parse natively.

use super::error::{LoggerError, Result};
use super::value::Value;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use leveled_logger::TimestampFormat;
/// use chrono::Utc;
///
/// let stamp = TimestampFormat::Iso8601.format(&Utc::now());
/// assert!(stamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 with nanoseconds: `2025-01-08T10:30:45.123456789Z`
    #[default]
    Rfc3339Nanos,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// RFC 3339 with timezone offset: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1736332245123`
    ///
    /// Emitted as a number rather than a string.
    UnixMillis,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Rfc3339Nanos => datetime.to_rfc3339_opts(SecondsFormat::Nanos, true),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                match write!(out, "{}", datetime.format(format_str)) {
                    Ok(()) => out,
                    Err(_) => TimestampFormat::Rfc3339Nanos.format(datetime),
                }
            }
        }
    }

    /// Reject custom patterns chrono cannot render.
    pub fn validate(&self) -> Result<()> {
        match self {
            TimestampFormat::Custom(format_str)
                if StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error)) =>
            {
                Err(LoggerError::formatter(
                    "timestamp",
                    format!("invalid strftime pattern '{}'", format_str),
                ))
            }
            _ => Ok(()),
        }
    }

    /// This format if it is usable, otherwise the default.
    pub fn or_default(&self) -> TimestampFormat {
        match self.validate() {
            Ok(()) => self.clone(),
            Err(e) => {
                eprintln!("[LOGGER ERROR] {}; falling back to RFC 3339", e);
                TimestampFormat::default()
            }
        }
    }

    /// Field value for `datetime`; numeric formats produce numbers.
    #[must_use]
    pub fn value(&self, datetime: &DateTime<Utc>) -> Value {
        match self {
            TimestampFormat::UnixMillis => Value::Int(datetime.timestamp_millis()),
            _ => Value::String(self.format(datetime)),
        }
    }

    /// Field value for the current instant.
    #[must_use]
    pub fn now(&self) -> Value {
        self.value(&Utc::now())
    }
}
