use crate::models::types::{ItemId, RoomId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub health: i64,
    #[serde(default)]
    pub total_moves: u32,
    /// Carried items, in pick-up order
    #[serde(default)]
    pub inventory: Vec<ItemId>,
    pub current_location: RoomId,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl Player {
    #[inline]
    pub fn has_item(&self, item_id: &ItemId) -> bool {
        self.inventory.contains(item_id)
    }

    /// Appends `item_id` unless already carried. Returns true when added.
    pub fn add_item(&mut self, item_id: ItemId) -> bool {
        if self.has_item(&item_id) {
            return false;
        }
        self.inventory.push(item_id);
        true
    }

    /// Returns true when the item was carried.
    pub fn remove_item(&mut self, item_id: &ItemId) -> bool {
        let before = self.inventory.len();
        self.inventory.retain(|id| id != item_id);
        self.inventory.len() != before
    }

    pub fn increment_total_moves(&mut self, n: u32) {
        self.total_moves = self.total_moves.saturating_add(n);
    }

    pub fn set_current_location(&mut self, room_id: RoomId) -> &RoomId {
        self.current_location = room_id;
        &self.current_location
    }
}
