use serde_json::Value;

/// Convert a serde_json::Value into a plain string for display. Note that this will always
/// return something, and an empty value on an unsupported type.
pub fn value_to_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            // Render each element as JSON (so strings get quotes),
            // then join with "," and omit the outer brackets.
            let parts: Vec<String> = arr
                .iter()
                .map(|e| serde_json::to_string(e).unwrap_or_else(|_| "null".to_string()))
                .collect();
            parts.join(",")
        }
        _ => "".to_string(),
    }
}

#[inline]
pub fn str_is_truthy(s: &str) -> bool {
    matches!(s.to_ascii_lowercase().as_str(), "true" | "yes" | "1" | "on")
}

#[inline]
pub fn str_is_falsy(s: &str) -> bool {
    matches!(s.to_ascii_lowercase().as_str(), "false" | "no" | "0" | "off")
}

/// Numeric view of a value. Booleans are not numbers here.
#[inline]
pub fn as_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Equality where `1` and `1.0` are the same value.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (as_number(a), as_number(b)) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}
