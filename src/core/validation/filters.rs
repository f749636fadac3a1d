//! Reusable field filters
//!
//! These filters normalize field values before they are validated or sent
//! to the backend.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Filter: trim whitespace from a string
pub fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

/// Filter: trim whitespace, mapping an empty result to `None`
pub fn trimmed_or_none(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Filter: coerce an arbitrary JSON value to a finite integer.
///
/// Integers pass through, finite floats are truncated, numeric strings are
/// parsed. Anything else (null, NaN, infinities, garbage) becomes 0.
pub fn finite_integer(value: &Value) -> i64 {
    if let Some(i) = value.as_i64() {
        return i;
    }
    let float = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match float {
        Some(f) if f.is_finite() => f.trunc() as i64,
        _ => 0,
    }
}

/// Serde default for flags that are on unless stated otherwise
pub fn default_true() -> bool {
    true
}

/// Deserialize a boolean, treating `null` as `true`
pub fn bool_or_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

/// Deserialize an ordering value leniently through [`finite_integer`]
pub fn lenient_integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(finite_integer(&value))
}
