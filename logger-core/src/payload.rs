use crate::error::PayloadError;
use serde::Serialize;
use serde_json::Value;

/// Auxiliary value printed on a tab-indented line after a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Printed verbatim.
    Text(String),
    /// Printed as compact JSON, except bare strings which print verbatim.
    Json(Value),
}

impl Payload {
    /// Converts any serializable value into a JSON payload.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, PayloadError> {
        serde_json::to_value(value)
            .map(Payload::Json)
            .map_err(|source| PayloadError::Serialize { source })
    }

    /// Whether the payload produces a line at all. Empty text and the JSON
    /// values `null`, `false`, `0` and `""` are treated as not supplied.
    pub fn is_present(&self) -> bool {
        match self {
            Payload::Text(text) => !text.is_empty(),
            Payload::Json(Value::Null) => false,
            Payload::Json(Value::Bool(b)) => *b,
            Payload::Json(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
            Payload::Json(Value::String(s)) => !s.is_empty(),
            Payload::Json(_) => true,
        }
    }

    /// Text of the payload line without the leading tab.
    pub fn render(&self) -> String {
        match self {
            Payload::Text(text) => text.clone(),
            Payload::Json(Value::String(s)) => s.clone(),
            Payload::Json(value) => value.to_string(),
        }
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Json(value)
    }
}
