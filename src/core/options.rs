//! Construction-time configuration

use super::output_format::Format;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Options consumed once when a logger is built.
///
/// Every field is optional. Empty strings mean "not set", except for
/// `level`, where empty selects `info`.
///
/// Options deserialize from any serde format, so they can live in the
/// application's own configuration file:
///
/// ```
/// use leveled_logger::{Format, Options};
///
/// let opts: Options = serde_json::from_str(
///     r#"{"name":"billing","level":"debug","format":"console","tags":{"team":"payments"}}"#,
/// ).unwrap();
/// assert_eq!(opts.format, Format::Console);
/// assert_eq!(opts.tags["team"], "payments");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Adds a `logger` field to every record
    pub name: String,
    /// Adds an `environment` field to every record
    pub environment: String,
    /// Adds a `region` field to every record
    pub region: String,
    /// Minimum level as free text, parsed with [`parse_level`](crate::parse_level)
    pub level: String,
    pub format: Format,
    /// Static fields merged verbatim into every record, in key order
    pub tags: BTreeMap<String, String>,
    pub timestamp_format: TimestampFormat,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }
}
