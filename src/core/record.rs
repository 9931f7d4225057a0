//! Flat, ordered key/value records handed to sinks

use super::value::Value;

/// Call-site key/value pairs, as built by the [`kv!`](crate::kv) macro.
pub type KeyValues = Vec<(String, Value)>;

/// A single log record.
///
/// Fields keep insertion order and duplicate keys are allowed; encoders
/// emit them exactly as stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub fn push<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields.push((key.into(), value.into()));
    }

    pub fn extend<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        self.fields.extend(pairs);
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Shorthand for the `message` field as text.
    pub fn message(&self) -> Option<&str> {
        self.get("message").and_then(Value::as_str)
    }

    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<KeyValues> for Record {
    fn from(fields: KeyValues) -> Self {
        Self { fields }
    }
}
