use crate::models::property::{StateDescriptions, StateKey};
use serde_json::Value;

/// Picks the text describing `value` from a state-description table.
///
/// Booleans use the `true`/`false` entries. Numbers walk the threshold entries in
/// declaration order and take the first one that holds. Anything else has no text.
pub fn resolve<'a>(value: &Value, table: &'a StateDescriptions) -> Option<&'a str> {
    match value {
        Value::Bool(b) => table
            .entries()
            .iter()
            .find(|e| e.key == StateKey::Bool(*b))
            .map(|e| e.text.as_str()),
        Value::Number(n) => {
            let v = n.as_f64()?;
            table
                .entries()
                .iter()
                .find(|e| matches!(e.key, StateKey::Threshold(cmp, t) if cmp.holds(v, t)))
                .map(|e| e.text.as_str())
        }
        _ => None,
    }
}
