//! Lenient readings of loosely-typed JSON input.
//!
//! Request bodies arrive as arbitrary JSON, so a price may be `50`, `"50"` or
//! `true`. These helpers define how such values are read by the validation
//! rules and by the conversions into typed inputs.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?([0-9]*[.])?[0-9]+$").expect("valid numeric pattern"));

static POSITIVE_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]*$").expect("valid integer pattern"));

/// Text form of a value; absent and `null` read as `""`.
pub fn as_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Absent, `null` or the empty string.
pub fn is_empty(value: Option<&Value>) -> bool {
    as_text(value).is_empty()
}

/// A JSON number or a string holding a plain decimal number.
pub fn is_numeric(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Number(_)) => true,
        Some(Value::String(s)) => NUMERIC.is_match(s),
        _ => false,
    }
}

/// Numeric reading used for comparisons. Booleans count as `1`/`0`.
///
/// Strings too large for `f64` read as `None` rather than infinity.
pub fn as_number(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            NUMERIC.is_match(s).then(|| s.parse().ok()).flatten()
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    number.filter(|n: &f64| n.is_finite())
}

/// Boolean reading: `true`/`false`, `"true"`/`"false"`, `"1"`/`"0"` and `1`/`0`.
pub fn as_bool(value: Option<&Value>) -> Option<bool> {
    match value? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        Value::Number(n) => match n.as_u64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Parses a path segment as a positive `i32` identifier.
pub fn as_positive_id(raw: &str) -> Option<i32> {
    if !POSITIVE_INT.is_match(raw) {
        return None;
    }
    raw.trim_start_matches('+').parse().ok()
}
