use crate::error::{AppResult, DomainError};
use crate::models::item::{ActionResult, Item};
use crate::models::player::Player;
use crate::models::room::Room;
use crate::models::types::{Direction, ItemId, ItemLocation, RoomId};
use crate::renderer::conditions::{Condition, ConditionRegistry};
use crate::renderer::{compose_item, compose_room};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Full serializable snapshot of a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldRecord {
    pub player: Player,
    pub rooms: IndexMap<RoomId, Room>,
    pub items: IndexMap<ItemId, Item>,
}

/// Room name plus its composed description, as shown on entering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomView {
    pub name: String,
    pub description: String,
}

impl fmt::Display for RoomView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.name, self.description)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { from: RoomId, to: RoomId, view: RoomView },
    Blocked { direction: String },
}

impl MoveOutcome {
    pub fn message(&self) -> String {
        match self {
            MoveOutcome::Moved { view, .. } => view.to_string(),
            MoveOutcome::Blocked { direction } => format!("Unable to move: {direction} The way is blocked!"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TakeOutcome {
    Taken(ItemId),
    /// Item exists but lies elsewhere
    NotHere { name: String },
    Unknown(String),
}

impl TakeOutcome {
    pub fn message(&self) -> String {
        match self {
            TakeOutcome::Taken(id) => format!("{id} added to pack."),
            TakeOutcome::NotHere { name } => format!("No {name} here, why don't you look somewhere else."),
            TakeOutcome::Unknown(target) => format!("Can't take that: {target}."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    Dropped(ItemId),
    NotCarried(String),
}

impl DropOutcome {
    pub fn message(&self) -> String {
        match self {
            DropOutcome::Dropped(id) => format!("{id} removed from pack."),
            DropOutcome::NotCarried(target) => format!("You aren't carrying {target}."),
        }
    }
}

/// A problem found in a loaded world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldIssue {
    /// "room armory", "item lamp", "player"
    pub subject: String,
    pub message: String,
}

impl WorldIssue {
    fn new(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for WorldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.subject, self.message)
    }
}

/// Live game state: every entity plus the condition registry used to describe rooms.
#[derive(Debug, Clone)]
pub struct WorldState {
    conditions: Arc<ConditionRegistry>,
    pub player: Player,
    pub rooms: IndexMap<RoomId, Room>,
    pub items: IndexMap<ItemId, Item>,
}

impl WorldState {
    pub fn from_record(record: WorldRecord, conditions: Arc<ConditionRegistry>) -> AppResult<Self> {
        let WorldRecord {
            player,
            mut rooms,
            items,
        } = record;

        if !rooms.contains_key(&player.current_location) {
            return Err(DomainError::UnknownRoom(player.current_location.clone()));
        }

        for room in rooms.values_mut() {
            room.compile(&conditions);
        }

        let world = Self {
            conditions,
            player,
            rooms,
            items,
        };

        for issue in world.validate() {
            tracing::warn!(subject = %issue.subject, "{}", issue.message);
        }
        tracing::debug!(rooms = world.rooms.len(), items = world.items.len(), "world state built");

        Ok(world)
    }

    pub fn to_record(&self) -> WorldRecord {
        WorldRecord {
            player: self.player.clone(),
            rooms: self.rooms.clone(),
            items: self.items.clone(),
        }
    }

    pub fn room(&self, id: &RoomId) -> AppResult<&Room> {
        self.rooms.get(id).ok_or_else(|| DomainError::UnknownRoom(id.clone()))
    }

    pub fn current_room(&self) -> AppResult<&Room> {
        self.room(&self.player.current_location)
    }

    /// Items in `room_id`, plus carried items when the player stands there.
    pub fn items_visible_in(&self, room_id: &RoomId) -> Vec<ItemId> {
        let player_here = self.player.current_location == *room_id;
        self.items
            .iter()
            .filter(|(_, item)| match &item.current_location {
                ItemLocation::Room(id) => id == room_id,
                ItemLocation::Inventory => player_here,
            })
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn items_in_current_room(&self) -> Vec<ItemId> {
        self.items_visible_in(&self.player.current_location)
    }

    pub fn describe_room(&self, room_id: &RoomId) -> AppResult<String> {
        let room = self.room(room_id)?;
        Ok(compose_room(room, &self.conditions, &self.items_visible_in(room_id)))
    }

    pub fn current_room_view(&self) -> AppResult<RoomView> {
        let room = self.current_room()?;
        Ok(RoomView {
            name: room.name.clone(),
            description: self.describe_room(&room.id)?,
        })
    }

    pub fn describe_item(&self, item_id: &ItemId) -> AppResult<String> {
        self.items
            .get(item_id)
            .map(compose_item)
            .ok_or_else(|| DomainError::UnknownItem(item_id.clone()))
    }

    /// Attempts to walk through the exit named `direction`. Every attempt costs a move.
    pub fn move_player(&mut self, direction: &str) -> AppResult<MoveOutcome> {
        self.player.increment_total_moves(1);

        let from = self.player.current_location.clone();
        let Some(to) = self.current_room()?.exit(direction).cloned() else {
            tracing::debug!(room = %from, direction, "move blocked");
            return Ok(MoveOutcome::Blocked {
                direction: direction.to_string(),
            });
        };

        let next = self.rooms.get_mut(&to).ok_or_else(|| DomainError::UnknownRoom(to.clone()))?;
        next.increment_num_player_visits(1);
        self.player.set_current_location(to.clone());
        tracing::info!(from = %from, to = %to, "player moved");

        Ok(MoveOutcome::Moved {
            from,
            to,
            view: self.current_room_view()?,
        })
    }

    pub fn take_item(&mut self, target: &str) -> TakeOutcome {
        let here = self.player.current_location.clone();
        let Some(item) = self.items.get_mut(target) else {
            tracing::info!(item = target, "take: unknown item");
            return TakeOutcome::Unknown(target.to_string());
        };
        if !item.current_location.is_in_room(&here) {
            return TakeOutcome::NotHere { name: item.name.clone() };
        }

        item.set_current_location(ItemLocation::Inventory);
        let id = item.id.clone();
        self.player.increment_total_moves(1);
        self.player.add_item(id.clone());
        TakeOutcome::Taken(id)
    }

    pub fn drop_item(&mut self, target: &str) -> DropOutcome {
        let here = self.player.current_location.clone();
        let id = ItemId::from(target);
        if !self.player.has_item(&id) {
            return DropOutcome::NotCarried(target.to_string());
        }
        let Some(item) = self.items.get_mut(target) else {
            tracing::warn!(item = %id, "inventory references an unknown item");
            return DropOutcome::NotCarried(target.to_string());
        };

        item.set_current_location(ItemLocation::Room(here));
        self.player.remove_item(&id);
        DropOutcome::Dropped(id)
    }

    /// Composed description of a carried item.
    pub fn inspect_item(&self, target: &str) -> String {
        let id = ItemId::from(target);
        if self.player.has_item(&id)
            && let Ok(desc) = self.describe_item(&id)
        {
            return desc;
        }
        tracing::info!(item = target, "inspect: item not carried");
        format!("No {target} here, try picking it up first.")
    }

    /// Base description of any known item, wherever it is.
    pub fn look_target(&self, target: &str) -> Option<&str> {
        self.items.get(target).map(|i| i.base_description.as_str())
    }

    /// Runs `verb` on an item visible from the current room. `None` when no such item is here.
    pub fn apply_item_command(&mut self, verb: &str, target: &str) -> Option<ActionResult> {
        let id = ItemId::from(target);
        if !self.items_in_current_room().contains(&id) {
            return None;
        }
        let item = self.items.get_mut(&id)?;
        let result = item.apply_command(verb);
        tracing::debug!(item = %id, verb, changed = result.state_changed, "item command");
        Some(result)
    }

    pub fn validate(&self) -> Vec<WorldIssue> {
        let mut issues = Vec::new();

        for (key, room) in &self.rooms {
            let subject = format!("room {key}");
            if room.id != *key {
                issues.push(WorldIssue::new(&subject, format!("stored under a different id ({})", room.id)));
            }
            for (name, entry) in room.conditional_entries() {
                if let Err(e) = entry {
                    issues.push(WorldIssue::new(&subject, format!("malformed conditional description '{name}': {e}")));
                }
            }
            for m in &room.modifiers {
                if let Condition::Unresolved { reason, .. } = &m.condition {
                    issues.push(WorldIssue::new(&subject, format!("conditional description '{}': {reason}", m.name)));
                }
            }
            for (dir, target) in &room.connections_map {
                if Direction::parse(dir).is_none() {
                    issues.push(WorldIssue::new(&subject, format!("unknown direction token '{dir}'")));
                }
                if target == key {
                    issues.push(WorldIssue::new(&subject, format!("exit '{dir}' leads back to itself")));
                } else if !self.rooms.contains_key(target) {
                    issues.push(WorldIssue::new(&subject, format!("exit '{dir}' leads to unknown room '{target}'")));
                }
            }
        }

        for (key, item) in &self.items {
            let subject = format!("item {key}");
            if item.id != *key {
                issues.push(WorldIssue::new(&subject, format!("stored under a different id ({})", item.id)));
            }
            if let ItemLocation::Room(room) = &item.current_location
                && !self.rooms.contains_key(room)
            {
                issues.push(WorldIssue::new(&subject, format!("located in unknown room '{room}'")));
            }
            if item.current_location.is_in_inventory() && !self.player.has_item(key) {
                issues.push(WorldIssue::new(&subject, "marked as carried but missing from the inventory"));
            }
            issues.extend(item.validate().into_iter().map(|m| WorldIssue::new(&subject, m)));
        }

        for (i, id) in self.player.inventory.iter().enumerate() {
            if self.player.inventory[..i].contains(id) {
                issues.push(WorldIssue::new("player", format!("'{id}' is in the inventory twice")));
            }
            match self.items.get(id) {
                None => issues.push(WorldIssue::new("player", format!("inventory holds unknown item '{id}'"))),
                Some(item) if !item.current_location.is_in_inventory() => issues.push(WorldIssue::new(
                    "player",
                    format!("inventory holds '{id}' but it lies in '{}'", item.current_location),
                )),
                Some(_) => {}
            }
        }

        issues
    }
}
