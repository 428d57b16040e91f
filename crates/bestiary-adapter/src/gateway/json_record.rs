//! JsonRecord - serde_json-backed RawValue

use bestiary_domain::RawValue;
use serde_json::Value;

/// A decoded JSON value seen through the domain's `RawValue` port
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRecord(Value);

impl JsonRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parse a JSON document
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json).map(Self)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for JsonRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl RawValue for JsonRecord {
    fn has(&self, key: &str) -> bool {
        self.0.get(key).is_some()
    }

    fn number(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    fn into_sequence(self) -> Option<Vec<Self>> {
        match self.0 {
            Value::Array(items) => Some(items.into_iter().map(Self).collect()),
            _ => None,
        }
    }
}
