use crate::util::value::{str_is_falsy, str_is_truthy, value_to_string};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

static THRESHOLD_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(greater_than|less_than|equals)_(.+)$").expect("threshold regex")
});

/// Declared value type of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    Bool,
    Int,
    Float,
    Str,
    /// Type name we don't know. Values are stored as given.
    Any,
}

impl PropertyType {
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "bool" | "boolean" => PropertyType::Bool,
            "int" | "integer" => PropertyType::Int,
            "float" | "number" => PropertyType::Float,
            "str" | "string" => PropertyType::Str,
            _ => PropertyType::Any,
        }
    }

    /// Convert `value` into this type, e.g. `"on"` into `true` for a bool property.
    pub fn coerce(&self, value: &Value) -> Result<Value, String> {
        match self {
            PropertyType::Bool => match value {
                Value::Bool(_) => Ok(value.clone()),
                Value::String(s) if str_is_truthy(s) => Ok(Value::Bool(true)),
                Value::String(s) if str_is_falsy(s) => Ok(Value::Bool(false)),
                Value::Number(n) => Ok(Value::Bool(n.as_f64().is_some_and(|f| f != 0.0))),
                _ => Err(format!("expected a boolean, got {value}")),
            },
            PropertyType::Int => {
                let n = match value {
                    Value::Number(n) if n.is_i64() || n.is_u64() => return Ok(value.clone()),
                    Value::Number(n) => n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64),
                    Value::String(s) => s.trim().parse::<i64>().ok(),
                    _ => None,
                };
                n.map(|n| Value::Number(n.into()))
                    .ok_or_else(|| format!("expected an integer, got {value}"))
            }
            PropertyType::Float => {
                let f = match value {
                    Value::Number(n) => n.as_f64(),
                    Value::String(s) => s.trim().parse::<f64>().ok(),
                    _ => None,
                };
                f.and_then(Number::from_f64)
                    .map(Value::Number)
                    .ok_or_else(|| format!("expected a number, got {value}"))
            }
            PropertyType::Str => match value {
                Value::String(_) => Ok(value.clone()),
                Value::Number(_) | Value::Bool(_) => Ok(Value::String(value_to_string(value))),
                _ => Err(format!("expected a string, got {value}")),
            },
            PropertyType::Any => Ok(value.clone()),
        }
    }
}

/// Constraint descriptor declared for one item property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyConstraint {
    /// Declared type name ("bool", "int", ...), kept verbatim for saving
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub toggleable: bool,
    /// Human-readable text per value state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_descriptions: Option<StateDescriptions>,
}

impl PropertyConstraint {
    #[inline]
    pub fn property_type(&self) -> PropertyType {
        PropertyType::parse(&self.type_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Comparison {
    GreaterThan,
    LessThan,
    Equals,
}

impl Comparison {
    #[inline]
    pub fn holds(&self, value: f64, threshold: f64) -> bool {
        match self {
            Comparison::GreaterThan => value > threshold,
            Comparison::LessThan => value < threshold,
            Comparison::Equals => value == threshold,
        }
    }
}

/// Parsed form of a state-description key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateKey {
    /// "true" / "false"
    Bool(bool),
    /// "greater_than_<n>", "less_than_<n>", "equals_<n>"
    Threshold(Comparison, f64),
    /// Anything else; never matches
    Unrecognized,
}

impl StateKey {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "true" => return StateKey::Bool(true),
            "false" => return StateKey::Bool(false),
            _ => {}
        }

        let Some(caps) = THRESHOLD_KEY.captures(raw) else {
            return StateKey::Unrecognized;
        };
        // Any float literal: "5", "-2.5", ".5", "+2", "1e3"
        let Ok(threshold) = caps[2].parse::<f64>() else {
            return StateKey::Unrecognized;
        };
        if threshold.is_nan() {
            return StateKey::Unrecognized;
        }
        let cmp = match &caps[1] {
            "greater_than" => Comparison::GreaterThan,
            "less_than" => Comparison::LessThan,
            _ => Comparison::Equals,
        };
        StateKey::Threshold(cmp, threshold)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StateEntry {
    /// Key as written in the world file
    pub raw: String,
    pub key: StateKey,
    pub text: String,
}

/// Ordered state-description table. Declaration order is significant: the first
/// matching threshold wins.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StateDescriptions {
    entries: Vec<StateEntry>,
}

impl StateDescriptions {
    pub fn entries(&self) -> &[StateEntry] {
        &self.entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StateDescriptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(k, v)| {
                let raw = k.into();
                StateEntry {
                    key: StateKey::parse(&raw),
                    raw,
                    text: v.into(),
                }
            })
            .collect();
        Self { entries }
    }
}

impl Serialize for StateDescriptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for e in &self.entries {
            map.serialize_entry(&e.raw, &e.text)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StateDescriptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = IndexMap::<String, String>::deserialize(deserializer)?;
        Ok(map.into_iter().collect())
    }
}
