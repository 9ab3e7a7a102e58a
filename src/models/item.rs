use crate::error::{AppResult, DomainError};
use crate::models::property::{Comparison, PropertyConstraint, StateKey};
use crate::models::types::{ItemId, ItemLocation};
use crate::util::value::{as_number, values_equal};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub base_description: String,
    pub current_location: ItemLocation,
    /// Verbs this item responds to
    #[serde(default)]
    pub commands: Vec<String>,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub property_constraints: IndexMap<String, PropertyConstraint>,
    /// Verb -> what the verb does to a property
    #[serde(default)]
    pub cmd_to_config_map: IndexMap<String, ActionConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionKind {
    Toggle,
    /// Written as `set_value` (`set` is accepted too)
    Set,
    Increment,
    Other(String),
}

impl From<String> for ActionKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "toggle" => ActionKind::Toggle,
            "set_value" | "set" => ActionKind::Set,
            "increment" => ActionKind::Increment,
            _ => ActionKind::Other(s),
        }
    }
}

impl From<ActionKind> for String {
    fn from(k: ActionKind) -> Self {
        match k {
            ActionKind::Toggle => "toggle".to_string(),
            ActionKind::Set => "set_value".to_string(),
            ActionKind::Increment => "increment".to_string(),
            ActionKind::Other(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionConfig {
    pub property: String,
    pub action_type: ActionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<Prerequisite>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub already_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PrereqKind {
    Compare(Comparison),
    Other(String),
}

impl From<String> for PrereqKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "greater_than" => PrereqKind::Compare(Comparison::GreaterThan),
            "less_than" => PrereqKind::Compare(Comparison::LessThan),
            "equals" => PrereqKind::Compare(Comparison::Equals),
            _ => PrereqKind::Other(s),
        }
    }
}

impl From<PrereqKind> for String {
    fn from(k: PrereqKind) -> Self {
        match k {
            PrereqKind::Compare(Comparison::GreaterThan) => "greater_than".to_string(),
            PrereqKind::Compare(Comparison::LessThan) => "less_than".to_string(),
            PrereqKind::Compare(Comparison::Equals) => "equals".to_string(),
            PrereqKind::Other(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prerequisite {
    pub condition: PrereqKind,
    pub property: String,
    #[serde(alias = "value")]
    pub threshold: Value,
    pub fail_message: String,
}

impl Prerequisite {
    /// Checks the prerequisite against an item's properties. An absent property never passes.
    pub fn holds(&self, properties: &Map<String, Value>) -> bool {
        let Some(current) = properties.get(&self.property) else {
            return false;
        };
        match &self.condition {
            PrereqKind::Compare(Comparison::Equals) => values_equal(current, &self.threshold),
            PrereqKind::Compare(cmp) => match (as_number(current), as_number(&self.threshold)) {
                (Some(v), Some(t)) => cmp.holds(v, t),
                _ => false,
            },
            PrereqKind::Other(kind) => {
                tracing::warn!(kind = %kind, property = %self.property, "unknown prerequisite kind");
                false
            }
        }
    }
}

/// Outcome of running a verb against an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    pub message: String,
    pub state_changed: bool,
}

impl ActionResult {
    fn unchanged(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            state_changed: false,
        }
    }

    fn changed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            state_changed: true,
        }
    }
}

impl Item {
    #[inline]
    pub fn get_property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    #[inline]
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn set_current_location(&mut self, location: ItemLocation) -> &ItemLocation {
        self.current_location = location;
        &self.current_location
    }

    /// Stores a new value for an existing property, converted to its declared type.
    pub fn set_property(&mut self, name: &str, value: Value) -> AppResult<&Value> {
        if !self.properties.contains_key(name) {
            return Err(DomainError::UnknownProperty {
                item: self.id.clone(),
                property: name.to_string(),
            });
        }

        let value = match self.property_constraints.get(name) {
            Some(c) => c
                .property_type()
                .coerce(&value)
                .map_err(|message| DomainError::Validation {
                    field: "property",
                    message: format!("{}.{}: {}", self.id, name, message),
                })?,
            None => value,
        };

        self.properties.insert(name.to_string(), value);
        self.properties
            .get(name)
            .ok_or_else(|| DomainError::InternalError(format!("property {name} vanished")))
    }

    fn nothing_happens(&self, verb: &str) -> ActionResult {
        ActionResult::unchanged(format!("You try to {} the {}, but nothing happens.", verb, self.name))
    }

    /// Runs `verb` through the item's action table.
    pub fn apply_command(&mut self, verb: &str) -> ActionResult {
        let Some(cfg) = self.cmd_to_config_map.get(verb).cloned() else {
            return self.nothing_happens(verb);
        };

        if let Some(failed) = cfg.prerequisites.iter().find(|p| !p.holds(&self.properties)) {
            return ActionResult::unchanged(failed.fail_message.clone());
        }

        let Some(current) = self.properties.get(&cfg.property).cloned() else {
            tracing::warn!(item = %self.id, property = %cfg.property, verb, "action targets a missing property");
            return self.nothing_happens(verb);
        };

        let target = match &cfg.action_type {
            ActionKind::Toggle => match (&cfg.target_value, &current) {
                (Some(t), _) => t.clone(),
                (None, Value::Bool(b)) => Value::Bool(!b),
                (None, other) => {
                    tracing::warn!(item = %self.id, property = %cfg.property, value = %other, "cannot toggle a non-boolean property");
                    return self.nothing_happens(verb);
                }
            },
            ActionKind::Set => match &cfg.target_value {
                Some(t) => t.clone(),
                None => {
                    tracing::warn!(item = %self.id, verb, "set action without a target value");
                    return self.nothing_happens(verb);
                }
            },
            ActionKind::Increment => match increment(&current, cfg.target_value.as_ref()) {
                Some(v) => v,
                None => {
                    tracing::warn!(item = %self.id, property = %cfg.property, verb, "increment needs numeric values");
                    return self.nothing_happens(verb);
                }
            },
            ActionKind::Other(kind) => {
                tracing::warn!(item = %self.id, kind = %kind, verb, "unknown action type");
                return self.nothing_happens(verb);
            }
        };

        // Compare in the declared type, so "on" and true are the same state
        let target = match self.property_constraints.get(&cfg.property) {
            Some(c) => match c.property_type().coerce(&target) {
                Ok(v) => v,
                Err(e) => {
                    tracing::warn!(item = %self.id, verb, error = %e, "action produced an invalid value");
                    return self.nothing_happens(verb);
                }
            },
            None => target,
        };

        if values_equal(&current, &target) {
            let msg = cfg
                .already_message
                .unwrap_or_else(|| format!("The {} is already like that.", self.name));
            return ActionResult::unchanged(msg);
        }

        match self.set_property(&cfg.property, target) {
            Ok(_) => {
                let msg = cfg
                    .success_message
                    .unwrap_or_else(|| format!("You {} the {}.", verb, self.name));
                ActionResult::changed(msg)
            }
            Err(e) => {
                tracing::warn!(item = %self.id, verb, error = %e, "action produced an invalid value");
                self.nothing_happens(verb)
            }
        }
    }

    /// Declaration problems of this item, as readable lines.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        for verb in self.cmd_to_config_map.keys() {
            if !self.commands.iter().any(|c| c == verb) {
                issues.push(format!("action '{verb}' is not listed in commands"));
            }
        }

        for (name, constraint) in &self.property_constraints {
            if !self.has_property(name) {
                issues.push(format!("constraint for missing property '{name}'"));
            }
            if let Some(table) = &constraint.state_descriptions {
                for e in table.entries().iter().filter(|e| e.key == StateKey::Unrecognized) {
                    issues.push(format!("state description key '{}' of '{name}' is never used", e.raw));
                }
            }
        }

        for (verb, cfg) in &self.cmd_to_config_map {
            if !self.has_property(&cfg.property) {
                issues.push(format!("action '{verb}' targets missing property '{}'", cfg.property));
            }
            if let ActionKind::Other(kind) = &cfg.action_type {
                issues.push(format!("action '{verb}' has unknown type '{kind}'"));
            }
            for p in &cfg.prerequisites {
                if !self.has_property(&p.property) {
                    issues.push(format!("action '{verb}' checks missing property '{}'", p.property));
                }
                if let PrereqKind::Other(kind) = &p.condition {
                    issues.push(format!("action '{verb}' has unknown prerequisite '{kind}'"));
                }
            }
        }

        issues
    }
}

fn increment(current: &Value, by: Option<&Value>) -> Option<Value> {
    let by = by?;
    if let (Some(a), Some(b)) = (current.as_i64(), by.as_i64()) {
        return Some(Value::Number(a.checked_add(b)?.into()));
    }
    let sum = as_number(current)? + as_number(by)?;
    Number::from_f64(sum).map(Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lamp(fuel: Option<i64>) -> Item {
        let mut properties = json!({"is_lit": false});
        if let Some(f) = fuel {
            properties["fuel_remaining"] = json!(f);
        }
        serde_json::from_value(json!({
            "id": "lamp",
            "name": "lamp",
            "base_description": "An old storm lantern.",
            "current_location": "start_room",
            "commands": ["on", "off", "refill"],
            "properties": properties,
            "property_constraints": {
                "is_lit": {"type": "bool", "toggleable": true},
                "fuel_remaining": {"type": "int"}
            },
            "cmd_to_config_map": {
                "on": {
                    "property": "is_lit",
                    "action_type": "toggle",
                    "target_value": true,
                    "prerequisites": [{
                        "condition": "greater_than",
                        "property": "fuel_remaining",
                        "threshold": 0,
                        "fail_message": "The lamp has no fuel."
                    }],
                    "success_message": "The lamp flickers to life.",
                    "already_message": "The lamp is already lit."
                },
                "off": {
                    "property": "is_lit",
                    "action_type": "toggle",
                    "target_value": false,
                    "success_message": "The lamp goes dark.",
                    "already_message": "The lamp is already off."
                },
                "refill": {
                    "property": "fuel_remaining",
                    "action_type": "increment",
                    "target_value": 25,
                    "success_message": "You top up the lamp."
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn failing_prerequisite_blocks_the_action() {
        for fuel in [None, Some(0)] {
            let mut lamp = lamp(fuel);
            let res = lamp.apply_command("on");
            assert_eq!(res.message, "The lamp has no fuel.");
            assert!(!res.state_changed);
            assert_eq!(lamp.get_property("is_lit"), Some(&json!(false)));
        }
    }

    #[test]
    fn toggle_sets_target_then_reports_already() {
        let mut lamp = lamp(Some(10));
        let res = lamp.apply_command("on");
        assert_eq!(res.message, "The lamp flickers to life.");
        assert!(res.state_changed);
        assert_eq!(lamp.get_property("is_lit"), Some(&json!(true)));

        let again = lamp.apply_command("on");
        assert_eq!(again.message, "The lamp is already lit.");
        assert!(!again.state_changed);
    }

    #[test]
    fn already_in_state_never_mutates() {
        let mut lamp = lamp(Some(10));
        let before = lamp.properties.clone();
        let res = lamp.apply_command("off");
        assert_eq!(res.message, "The lamp is already off.");
        assert_eq!(lamp.properties, before);
    }

    #[test]
    fn increment_adds_target_value() {
        let mut lamp = lamp(Some(10));
        assert!(lamp.apply_command("refill").state_changed);
        assert_eq!(lamp.get_property("fuel_remaining"), Some(&json!(35)));
    }

    #[test]
    fn string_target_matching_current_state_is_already() {
        let mut lamp = lamp(Some(10));
        lamp.properties.insert("is_lit".into(), json!(true));
        lamp.cmd_to_config_map.get_mut("on").unwrap().target_value = Some(json!("on"));

        let res = lamp.apply_command("on");
        assert_eq!(res.message, "The lamp is already lit.");
        assert!(!res.state_changed);
        assert_eq!(lamp.get_property("is_lit"), Some(&json!(true)));
    }

    #[test]
    fn string_target_is_stored_in_declared_type() {
        let mut lamp = lamp(Some(10));
        lamp.cmd_to_config_map.get_mut("on").unwrap().target_value = Some(json!("on"));

        assert!(lamp.apply_command("on").state_changed);
        assert_eq!(lamp.get_property("is_lit"), Some(&json!(true)));
    }

    #[test]
    fn increment_by_zero_changes_nothing() {
        let mut lamp = lamp(Some(10));
        lamp.cmd_to_config_map.get_mut("refill").unwrap().target_value = Some(json!(0));

        let res = lamp.apply_command("refill");
        assert!(!res.state_changed);
        assert_eq!(res.message, "The lamp is already like that.");
        assert_eq!(lamp.get_property("fuel_remaining"), Some(&json!(10)));
    }

    #[test]
    fn unknown_verb_does_nothing() {
        let mut lamp = lamp(Some(10));
        let res = lamp.apply_command("eat");
        assert_eq!(res.message, "You try to eat the lamp, but nothing happens.");
        assert!(!res.state_changed);
    }

    #[test]
    fn set_property_coerces_and_rejects() {
        let mut lamp = lamp(Some(10));
        assert_eq!(lamp.set_property("fuel_remaining", json!("7")).unwrap(), &json!(7));
        assert!(lamp.set_property("fuel_remaining", json!("lots")).is_err());
        assert!(matches!(
            lamp.set_property("colour", json!("red")),
            Err(DomainError::UnknownProperty { .. })
        ));
    }

    #[test]
    fn validate_reports_dangling_references() {
        let mut lamp = lamp(None);
        assert!(lamp.validate().iter().any(|i| i.contains("'fuel_remaining'")));

        lamp.commands.retain(|c| c != "refill");
        assert!(lamp.validate().iter().any(|i| i == "action 'refill' is not listed in commands"));
    }
}
