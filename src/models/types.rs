use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Location value meaning "carried by the player".
pub const INVENTORY_SENTINEL: &str = "player_inventory";

#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Clone,
            Debug,
            Default,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[repr(transparent)]
        #[serde(transparent)] // JSON = plain string key
        pub struct $name(pub String);

        impl $name {
            #[inline]
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl core::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

define_id!(RoomId);
define_id!(ItemId);

/// Where an item currently is. Serialized as the room id, or as the inventory sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemLocation {
    /// Item lies in a room
    Room(RoomId),
    /// Item is carried by the player
    Inventory,
}

impl ItemLocation {
    /// Check if item is in player inventory
    #[inline]
    pub fn is_in_inventory(&self) -> bool {
        matches!(self, ItemLocation::Inventory)
    }

    /// Check if item is in a room
    #[inline]
    pub fn is_in_room(&self, room_id: &RoomId) -> bool {
        matches!(self, ItemLocation::Room(id) if id == room_id)
    }

    pub fn as_str(&self) -> &str {
        match self {
            ItemLocation::Room(id) => id.as_str(),
            ItemLocation::Inventory => INVENTORY_SENTINEL,
        }
    }
}

impl From<String> for ItemLocation {
    fn from(s: String) -> Self {
        if s == INVENTORY_SENTINEL {
            ItemLocation::Inventory
        } else {
            ItemLocation::Room(RoomId(s))
        }
    }
}

impl From<ItemLocation> for String {
    fn from(loc: ItemLocation) -> Self {
        match loc {
            ItemLocation::Room(id) => id.0,
            ItemLocation::Inventory => INVENTORY_SENTINEL.to_string(),
        }
    }
}

impl core::fmt::Display for ItemLocation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction vocabulary used as keys of a room's `connections_map`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
    In,
    Out,
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

/// Short tokens accepted by the `move` command, in display order.
pub const VALID_DIRECTIONS: &[&str] = &["n", "s", "e", "w", "ne", "nw", "se", "sw", "u", "d", "in", "out"];

impl Direction {
    #[inline]
    pub fn canonical(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::In => "in",
            Direction::Out => "out",
            Direction::Northeast => "northeast",
            Direction::Northwest => "northwest",
            Direction::Southeast => "southeast",
            Direction::Southwest => "southwest",
        }
    }

    pub fn to_short(&self) -> &'static str {
        match self {
            Direction::North => "n",
            Direction::South => "s",
            Direction::East => "e",
            Direction::West => "w",
            Direction::Up => "u",
            Direction::Down => "d",
            Direction::In => "in",
            Direction::Out => "out",
            Direction::Northeast => "ne",
            Direction::Northwest => "nw",
            Direction::Southeast => "se",
            Direction::Southwest => "sw",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            // cardinal + aliases
            "n" | "north" => Some(Direction::North),
            "e" | "east" => Some(Direction::East),
            "s" | "south" => Some(Direction::South),
            "w" | "west" => Some(Direction::West),

            "ne" | "northeast" => Some(Direction::Northeast),
            "nw" | "northwest" => Some(Direction::Northwest),
            "se" | "southeast" => Some(Direction::Southeast),
            "sw" | "southwest" => Some(Direction::Southwest),

            "u" | "up" => Some(Direction::Up),
            "d" | "down" => Some(Direction::Down),
            "in" => Some(Direction::In),
            "out" => Some(Direction::Out),
            _ => None,
        }
    }
}

impl core::str::FromStr for Direction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::parse(s).ok_or_else(|| DomainError::InvalidDirection(s.to_string()))
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_accepts_short_and_long_tokens() {
        assert_eq!(Direction::parse("w"), Some(Direction::West));
        assert_eq!(Direction::parse("West"), Some(Direction::West));
        assert_eq!(Direction::parse("NE"), Some(Direction::Northeast));
        assert_eq!(Direction::parse("sideways"), None);
        assert!("x".parse::<Direction>().is_err());
    }

    #[test]
    fn every_valid_direction_parses_back_to_its_short_token() {
        for token in VALID_DIRECTIONS {
            let dir = Direction::parse(token).unwrap();
            assert_eq!(dir.to_short(), *token);
        }
    }

    #[test]
    fn location_serializes_as_plain_string() {
        let loc: ItemLocation = serde_json::from_str("\"player_inventory\"").unwrap();
        assert!(loc.is_in_inventory());

        let loc: ItemLocation = serde_json::from_str("\"armory\"").unwrap();
        assert!(loc.is_in_room(&RoomId::from("armory")));
        assert_eq!(serde_json::to_string(&loc).unwrap(), "\"armory\"");
    }
}
