//! Named predicates used by conditional room descriptions.
//!
//! A declared condition (`{"type": "has_item", "params": ["lamp"]}`) is compiled once
//! at load time into a [`Condition`]. Compilation never fails hard: a kind nobody
//! registered, or params of the wrong shape, becomes [`Condition::Unresolved`], which
//! is logged and then evaluates to `false` every time.

use crate::error::ConditionError;
use crate::models::room::Room;
use crate::models::types::ItemId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Condition exactly as written in the world file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionSpec {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub params: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    HasItem { item: ItemId },
    LacksItem { item: ItemId },
    VisitCountLess { n: i64 },
    /// Kind registered from outside the crate; params kept as given.
    Custom { kind: String, params: Vec<Value> },
    /// Could not be compiled. Always false.
    Unresolved { kind: String, reason: ConditionError },
}

impl Condition {
    pub fn kind(&self) -> &str {
        match self {
            Condition::HasItem { .. } => "has_item",
            Condition::LacksItem { .. } => "lacks_item",
            Condition::VisitCountLess { .. } => "visit_count_less",
            Condition::Custom { kind, .. } | Condition::Unresolved { kind, .. } => kind,
        }
    }
}

/// What a condition gets to look at.
pub struct ConditionCtx<'a> {
    pub room: &'a Room,
    /// Items visible in `room` (see `WorldState::items_visible_in`)
    pub items_in_room: &'a [ItemId],
}

pub type ParseFn = fn(&str, &[Value]) -> Result<Condition, ConditionError>;
pub type EvalFn = fn(&Condition, &ConditionCtx<'_>) -> bool;

#[derive(Clone, Copy)]
pub struct ConditionDef {
    pub parse: ParseFn,
    pub eval: EvalFn,
}

pub struct ConditionRegistry {
    defs: HashMap<String, ConditionDef>,
}

impl Default for ConditionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConditionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConditionRegistry").field("kinds", &self.kinds()).finish()
    }
}

impl ConditionRegistry {
    /// Registry holding the built-in kinds.
    pub fn new() -> Self {
        let mut reg = Self::empty();
        reg.register("has_item", parse_has_item, eval_builtin);
        reg.register("lacks_item", parse_lacks_item, eval_builtin);
        reg.register("visit_count_less", parse_visit_count_less, eval_builtin);
        reg
    }

    pub fn empty() -> Self {
        Self { defs: HashMap::new() }
    }

    /// Adds (or replaces) a condition kind.
    pub fn register(&mut self, kind: impl Into<String>, parse: ParseFn, eval: EvalFn) {
        self.defs.insert(kind.into(), ConditionDef { parse, eval });
    }

    /// Registered kinds, sorted.
    pub fn kinds(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.defs.keys().map(String::as_str).collect();
        v.sort_unstable();
        v
    }

    pub fn compile(&self, spec: &ConditionSpec) -> Condition {
        let result = match self.defs.get(spec.kind.as_str()) {
            Some(def) => (def.parse)(&spec.kind, &spec.params),
            None => Err(ConditionError::UnknownKind(spec.kind.clone())),
        };

        result.unwrap_or_else(|reason| {
            tracing::warn!(kind = %spec.kind, error = %reason, "condition will never hold");
            Condition::Unresolved {
                kind: spec.kind.clone(),
                reason,
            }
        })
    }

    pub fn evaluate(&self, cond: &Condition, ctx: &ConditionCtx<'_>) -> bool {
        if let Condition::Unresolved { kind, reason } = cond {
            tracing::warn!(kind = %kind, error = %reason, room = %ctx.room.id, "skipping unresolved condition");
            return false;
        }

        match self.defs.get(cond.kind()) {
            Some(def) => (def.eval)(cond, ctx),
            None => {
                tracing::warn!(kind = %cond.kind(), room = %ctx.room.id, "no evaluator registered for condition");
                false
            }
        }
    }
}

fn single_param<'a>(kind: &str, params: &'a [Value]) -> Result<&'a Value, ConditionError> {
    match params {
        [p] => Ok(p),
        _ => Err(ConditionError::BadParams {
            kind: kind.to_string(),
            reason: format!("expected exactly 1 param, got {}", params.len()),
        }),
    }
}

fn item_param(kind: &str, params: &[Value]) -> Result<ItemId, ConditionError> {
    match single_param(kind, params)? {
        Value::String(s) => Ok(ItemId::from(s.as_str())),
        other => Err(ConditionError::BadParams {
            kind: kind.to_string(),
            reason: format!("expected an item id, got {other}"),
        }),
    }
}

fn parse_has_item(kind: &str, params: &[Value]) -> Result<Condition, ConditionError> {
    Ok(Condition::HasItem {
        item: item_param(kind, params)?,
    })
}

fn parse_lacks_item(kind: &str, params: &[Value]) -> Result<Condition, ConditionError> {
    Ok(Condition::LacksItem {
        item: item_param(kind, params)?,
    })
}

fn parse_visit_count_less(kind: &str, params: &[Value]) -> Result<Condition, ConditionError> {
    let p = single_param(kind, params)?;
    let n = p
        .as_i64()
        .or_else(|| p.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
        .ok_or_else(|| ConditionError::BadParams {
            kind: kind.to_string(),
            reason: format!("expected an integer, got {p}"),
        })?;
    Ok(Condition::VisitCountLess { n })
}

fn eval_builtin(cond: &Condition, ctx: &ConditionCtx<'_>) -> bool {
    match cond {
        Condition::HasItem { item } => ctx.items_in_room.contains(item),
        Condition::LacksItem { item } => !ctx.items_in_room.contains(item),
        Condition::VisitCountLess { n } => i64::from(ctx.room.num_player_visits) < *n,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::RoomId;
    use serde_json::json;

    fn room(visits: u32) -> Room {
        Room {
            id: RoomId::from("hall"),
            name: "HALL".into(),
            base_description: "A hall.".into(),
            num_player_visits: visits,
            ..Default::default()
        }
    }

    fn spec(kind: &str, params: Value) -> ConditionSpec {
        serde_json::from_value(json!({"type": kind, "params": params})).unwrap()
    }

    #[test]
    fn has_item_looks_at_visible_items() {
        let reg = ConditionRegistry::new();
        let cond = reg.compile(&spec("has_item", json!(["lamp"])));
        let r = room(0);

        let lamp = [ItemId::from("lamp")];
        assert!(reg.evaluate(&cond, &ConditionCtx { room: &r, items_in_room: &lamp }));
        assert!(!reg.evaluate(&cond, &ConditionCtx { room: &r, items_in_room: &[] }));

        let lacks = reg.compile(&spec("lacks_item", json!(["lamp"])));
        assert!(reg.evaluate(&lacks, &ConditionCtx { room: &r, items_in_room: &[] }));
    }

    #[test]
    fn visit_count_less_is_strict() {
        let reg = ConditionRegistry::new();
        let cond = reg.compile(&spec("visit_count_less", json!([2])));

        assert!(reg.evaluate(&cond, &ConditionCtx { room: &room(1), items_in_room: &[] }));
        assert!(!reg.evaluate(&cond, &ConditionCtx { room: &room(2), items_in_room: &[] }));
    }

    #[test]
    fn unknown_kind_and_bad_params_fail_soft() {
        let reg = ConditionRegistry::new();
        let r = room(0);
        let ctx = ConditionCtx { room: &r, items_in_room: &[] };

        let unknown = reg.compile(&spec("is_raining", json!([])));
        assert!(matches!(unknown, Condition::Unresolved { .. }));
        assert!(!reg.evaluate(&unknown, &ctx));

        let bad = reg.compile(&spec("visit_count_less", json!(["soon"])));
        assert!(matches!(
            bad,
            Condition::Unresolved { reason: ConditionError::BadParams { .. }, .. }
        ));
        assert!(!reg.evaluate(&bad, &ctx));

        let too_many = reg.compile(&spec("has_item", json!(["lamp", "sword"])));
        assert!(!reg.evaluate(&too_many, &ctx));
    }

    #[test]
    fn custom_kinds_can_be_registered() {
        fn parse(kind: &str, params: &[Value]) -> Result<Condition, ConditionError> {
            Ok(Condition::Custom {
                kind: kind.to_string(),
                params: params.to_vec(),
            })
        }
        fn eval(_: &Condition, ctx: &ConditionCtx<'_>) -> bool {
            ctx.items_in_room.len() >= 2
        }

        let mut reg = ConditionRegistry::new();
        reg.register("crowded", parse, eval);
        assert!(reg.kinds().contains(&"crowded"));

        let cond = reg.compile(&spec("crowded", json!([])));
        let r = room(0);
        let items = [ItemId::from("a"), ItemId::from("b")];
        assert!(reg.evaluate(&cond, &ConditionCtx { room: &r, items_in_room: &items }));
    }
}
