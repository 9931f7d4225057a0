//! Record encodings
//!
//! - Json: one JSON object per line, keys in record order
//! - Console: logfmt `key=value` pairs, readable in a terminal and still
//!   parseable by log aggregation tools

use super::error::Result;
use super::record::Record;
use super::value::Value;
use serde::{Deserialize, Serialize};

/// Output format for log records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Example: `{"timestamp":"2025-01-08T10:30:45.1Z","level":"info","message":"ready"}`
    #[default]
    Json,

    /// Example: `timestamp=2025-01-08T10:30:45.1Z level=info message=ready`
    Console,
}

impl Format {
    /// Encode a record as a single line without the trailing newline
    pub fn encode(&self, record: &Record) -> Result<String> {
        match self {
            Format::Json => Self::encode_json(record),
            Format::Console => Ok(Self::encode_logfmt(record)),
        }
    }

    /// JSON objects are assembled by hand so that field order and
    /// duplicate keys survive exactly as recorded.
    fn encode_json(record: &Record) -> Result<String> {
        let mut out = String::with_capacity(64 + record.len() * 24);
        out.push('{');
        for (idx, (key, value)) in record.fields().iter().enumerate() {
            if idx > 0 {
                out.push(',');
            }
            out.push_str(&serde_json::to_string(key)?);
            out.push(':');
            out.push_str(&serde_json::to_string(&value.to_json_value())?);
        }
        out.push('}');
        Ok(out)
    }

    fn encode_logfmt(record: &Record) -> String {
        record
            .fields()
            .iter()
            .map(|(key, value)| {
                let formatted = match value {
                    Value::String(s) => escape_logfmt_value(s),
                    other => other.to_string(),
                };
                format!("{}={}", escape_logfmt_key(key), formatted)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Escape a logfmt key (remove spaces and special chars)
///
/// A key with nothing left after filtering becomes `_`.
fn escape_logfmt_key(key: &str) -> String {
    let escaped: String = key
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || *c == '.')
        .collect();
    if escaped.is_empty() {
        "_".to_string()
    } else {
        escaped
    }
}

/// Quote a logfmt value when it would otherwise break the line apart
fn escape_logfmt_value(value: &str) -> String {
    let needs_quoting = value.is_empty()
        || value
            .chars()
            .any(|c| c == ' ' || c == '"' || c == '=' || c == '\\' || c.is_control());
    if needs_quoting {
        quote_logfmt_value(value)
    } else {
        value.to_string()
    }
}

fn quote_logfmt_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        let mut record = Record::new();
        record.push("timestamp", "2025-01-08T10:30:45Z");
        record.push("level", "info");
        record.push("message", "request completed");
        record.push("latency_ms", 42);
        record
    }

    #[test]
    fn test_json_format_preserves_order() {
        let line = Format::Json.encode(&sample()).unwrap();
        assert_eq!(
            line,
            r#"{"timestamp":"2025-01-08T10:30:45Z","level":"info","message":"request completed","latency_ms":42}"#
        );

        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["latency_ms"], 42);
    }

    #[test]
    fn test_json_escapes_newlines() {
        let mut record = Record::new();
        record.push("message", "line one\nline two");
        let line = Format::Json.encode(&record).unwrap();
        assert!(!line.contains('\n'));
        assert!(line.contains("\\n"));
    }

    #[test]
    fn test_logfmt_format() {
        let line = Format::Console.encode(&sample()).unwrap();
        assert_eq!(
            line,
            r#"timestamp=2025-01-08T10:30:45Z level=info message="request completed" latency_ms=42"#
        );
    }

    #[test]
    fn test_logfmt_escape_special_chars() {
        let mut record = Record::new();
        record.push("query", "SELECT * FROM users WHERE id=1");
        record.push("bad key!", "x");
        record.push("empty", "");
        record.push("multi", "a\nb");

        let line = Format::Console.encode(&record).unwrap();
        assert!(line.contains(r#"query="SELECT * FROM users WHERE id=1""#));
        assert!(line.contains("badkey=x"));
        assert!(line.contains(r#"empty="""#));
        assert!(line.contains(r#"multi="a\nb""#));
        assert_eq!(line.lines().count(), 1);
    }

    #[test]
    fn test_logfmt_key_without_valid_chars() {
        let mut record = Record::new();
        record.push("!!", "x");
        record.push("", 1);

        let line = Format::Console.encode(&record).unwrap();
        assert_eq!(line, "_=x _=1");
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(Format::default(), Format::Json);
    }

    #[test]
    fn test_format_deserialization() {
        let format: Format = serde_json::from_str("\"console\"").unwrap();
        assert_eq!(format, Format::Console);
    }
}
