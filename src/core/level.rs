//! Log level definitions

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Severity of a log record, ordered by increasing verbosity.
///
/// `None` admits nothing and `Debug` admits everything, so a record at
/// level `c` passes a logger at level `l` iff `c <= l` (with `c != None`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    None = 0,
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::None,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Level::None => "none",
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }

    /// Raw numeric code of this level.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Level for a raw code, or `None` for codes outside `0..=4`.
    pub const fn from_repr(code: u8) -> Option<Self> {
        match code {
            0 => Some(Level::None),
            1 => Some(Level::Error),
            2 => Some(Level::Warn),
            3 => Some(Level::Info),
            4 => Some(Level::Debug),
            _ => None,
        }
    }
}

/// Parse a human-readable level name.
///
/// Matching is case-insensitive. An empty string selects the default,
/// `Info`. Anything unrecognised selects `None`, silencing the logger
/// rather than over-logging.
pub fn parse_level(text: &str) -> Level {
    match text.to_ascii_lowercase().as_str() {
        "debug" => Level::Debug,
        "" | "info" => Level::Info,
        "warn" => Level::Warn,
        "error" => Level::Error,
        _ => Level::None,
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Level {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_level(s))
    }
}
