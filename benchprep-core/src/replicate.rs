//! Multiply the entries of a JSON object
//!
//! Used to grow JSON parser fixtures: every key/value pair of the source
//! object is repeated `n` times under the keys `{key}_1` .. `{key}_n`.

use crate::error::{BenchError, Result};
use serde_json::{Map, Value};

/// Parse a copy count argument.
///
/// Any integer is accepted. Zero or negative counts yield an empty object.
pub fn parse_copy_count(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| BenchError::InvalidCopyCount(raw.to_string()))
}

/// Replicate every entry of `document` `copies` times.
///
/// Copies form the outer loop and source keys the inner loop, so the
/// output order is `a_1, b_1, a_2, b_2, ...`. Fails when the top-level
/// value is not an object.
pub fn replicate(document: &Value, copies: i64) -> Result<Map<String, Value>> {
    let source = document
        .as_object()
        .ok_or_else(|| BenchError::UnsupportedContent(kind_of(document)))?;

    let mut result = Map::new();
    for index in 1..=copies.max(0) {
        for (key, value) in source {
            result.insert(format!("{key}_{index}"), value.clone());
        }
    }
    Ok(result)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
