use crate::models::types::ItemId;
use crate::models::world::WorldState;

/// Progress message shown while the player stands in `room` carrying all of `items`.
pub struct Milestone {
    pub key: &'static str,
    pub room: &'static str,
    pub items: &'static [&'static str],
    pub message: &'static str,
}

impl Milestone {
    pub fn is_reached(&self, world: &WorldState) -> bool {
        world.player.current_location == self.room
            && self
                .items
                .iter()
                .all(|id| world.player.has_item(&ItemId::from(*id)))
    }
}

#[rustfmt::skip]
pub const MILESTONES: &[Milestone] = &[
    Milestone { key: "ready_to_explore", room: "start_room", items: &["lamp", "sword"], message: "You feel prepared, proceed into the dungeon" },
    Milestone { key: "trophy_returned",  room: "armory",     items: &["trophy"],        message: "YOU ARE VICTORIOUS, THE OGRE HAS BEEN SLAIN! ... right?" },
];

/// Milestones holding right now, in table order. Checked after every command.
pub fn reached_milestones(world: &WorldState) -> impl Iterator<Item = &'static Milestone> + '_ {
    MILESTONES.iter().filter(move |m| m.is_reached(world))
}
