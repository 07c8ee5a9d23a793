//! Field deserializers that never reject a record.
//!
//! The location API is loose about JSON types: identifiers show up as numbers
//! or strings, coordinates as numbers or numeric strings, nested objects are
//! sometimes `null`. Each helper maps anything it cannot use to `None` so one
//! odd field leaves the rest of the record intact.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::location::Coordinate;

/// Strings pass through, numbers are rendered, everything else is absent.
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

/// Numbers, or strings holding a number. The text is kept as sent, trimmed.
pub fn coordinate<'de, D>(deserializer: D) -> Result<Option<Coordinate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let (number, text) = match value {
        Some(Value::Number(n)) => (n.as_f64(), n.to_string()),
        Some(Value::String(s)) => {
            let text = s.trim().to_string();
            (text.parse::<f64>().ok(), text)
        }
        _ => return Ok(None),
    };
    Ok(number
        .filter(|f| f.is_finite())
        .map(|value| Coordinate { value, text }))
}

/// Whole numbers; fractional values are truncated toward zero.
pub fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }))
}

/// Nested objects; non-objects and objects that fail to decode are absent.
pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Object(_) => serde_json::from_value(v).ok(),
        _ => None,
    }))
}
