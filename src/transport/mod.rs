//! Transport layer: HTTP and wire-format details (serialization/deserialization).

use serde_json::{Map, Value};

use crate::domain::Params;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object in response body, got {kind}")]
    UnexpectedShape { kind: &'static str },
}

/// Encode normalized parameters as wire pairs, in key order.
pub fn encode_pairs(params: &Params) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(key, value)| (key.to_owned(), value.to_wire()))
        .collect()
}

/// Decode a response body into a JSON object.
///
/// Empty and whitespace-only bodies decode to an empty object; the gateway
/// returns nothing on some successful calls (`account/top-up`).
pub fn decode_json_body(body: &str) -> Result<Map<String, Value>, TransportError> {
    if body.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str::<Value>(body)? {
        Value::Object(map) => Ok(map),
        other => Err(TransportError::UnexpectedShape {
            kind: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
