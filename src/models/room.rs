use crate::models::types::{Direction, RoomId};
use crate::renderer::conditions::{Condition, ConditionRegistry, ConditionSpec};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Property holding the declared conditional descriptions of a room.
pub const CONDITIONAL_DESCRIPTIONS: &str = "conditional_descriptions";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub base_description: String,
    #[serde(default)]
    pub num_player_visits: u32,
    /// Direction token -> adjacent room
    #[serde(default)]
    pub connections_map: IndexMap<String, RoomId>,
    #[serde(default)]
    pub properties: Map<String, Value>,

    /// Compiled from `properties.conditional_descriptions`, never saved
    #[serde(skip)]
    pub modifiers: Vec<ConditionalDescription>,
}

/// One entry of `conditional_descriptions`, as written in the world file.
#[derive(Debug, Clone, Deserialize)]
pub struct ConditionalEntry {
    pub condition: ConditionSpec,
    pub description_modifier: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalDescription {
    pub name: String,
    pub condition: Condition,
    pub modifier: String,
}

impl Room {
    /// Declared conditional descriptions, each parsed on its own.
    pub fn conditional_entries(&self) -> Vec<(String, Result<ConditionalEntry, String>)> {
        let Some(table) = self.properties.get(CONDITIONAL_DESCRIPTIONS) else {
            return Vec::new();
        };
        let Some(table) = table.as_object() else {
            return vec![(
                CONDITIONAL_DESCRIPTIONS.to_string(),
                Err(format!("expected an object, got {table}")),
            )];
        };

        table
            .iter()
            .map(|(name, raw)| {
                let entry = ConditionalEntry::deserialize(raw).map_err(|e| e.to_string());
                (name.clone(), entry)
            })
            .collect()
    }

    /// Rebuilds `modifiers` from the declared properties. Malformed entries are dropped.
    pub fn compile(&mut self, registry: &ConditionRegistry) {
        let mut modifiers = Vec::new();
        for (name, entry) in self.conditional_entries() {
            match entry {
                Ok(entry) => modifiers.push(ConditionalDescription {
                    condition: registry.compile(&entry.condition),
                    modifier: entry.description_modifier,
                    name,
                }),
                Err(e) => {
                    tracing::warn!(room = %self.id, modifier = %name, error = %e, "ignoring malformed conditional description");
                }
            }
        }
        self.modifiers = modifiers;
    }

    /// Target of the exit matching `token`. Exact keys win, otherwise `w` and `west` are the same exit.
    pub fn exit(&self, token: &str) -> Option<&RoomId> {
        if let Some(id) = self.connections_map.get(token) {
            return Some(id);
        }
        let dir = Direction::parse(token)?;
        self.connections_map
            .iter()
            .find(|(k, _)| Direction::parse(k) == Some(dir))
            .map(|(_, id)| id)
    }

    #[inline]
    pub fn increment_num_player_visits(&mut self, n: u32) {
        self.num_player_visits = self.num_player_visits.saturating_add(n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn start_room() -> Room {
        serde_json::from_value(json!({
            "id": "start_room",
            "name": "DUNGEON ENTRANCE",
            "base_description": "You stand alone in a dark damp basement.",
            "num_player_visits": 0,
            "connections_map": {"w": "armory"},
            "properties": {
                "conditional_descriptions": {
                    "lamp_present": {
                        "condition": {"type": "has_item", "params": ["lamp"]},
                        "description_modifier": "An old lamp sits on the workbench."
                    },
                    "broken": {"condition": "nope"}
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn compile_keeps_good_modifiers_and_drops_malformed_ones() {
        let mut room = start_room();
        room.compile(&ConditionRegistry::new());

        assert_eq!(room.modifiers.len(), 1);
        assert_eq!(room.modifiers[0].name, "lamp_present");
        assert!(matches!(room.modifiers[0].condition, Condition::HasItem { .. }));

        let entries = room.conditional_entries();
        assert!(entries[1].1.is_err());
    }

    #[test]
    fn exits_match_short_and_long_tokens() {
        let room = start_room();
        assert_eq!(room.exit("w").map(RoomId::as_str), Some("armory"));
        assert_eq!(room.exit("west").map(RoomId::as_str), Some("armory"));
        assert!(room.exit("n").is_none());
        assert!(room.exit("sideways").is_none());
    }

    #[test]
    fn modifiers_are_not_serialized() {
        let mut room = start_room();
        room.compile(&ConditionRegistry::new());
        let v = serde_json::to_value(&room).unwrap();
        assert!(v.get("modifiers").is_none());
        assert_eq!(v["connections_map"], json!({"w": "armory"}));
    }
}
