pub mod item;
pub mod player;
pub mod property;
pub mod room;
pub mod types;
pub mod world;

pub use item::Item;
pub use player::Player;
pub use room::Room;
pub use world::{WorldRecord, WorldState};
