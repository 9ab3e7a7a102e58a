pub mod world;

pub use world::{FileStore, MemoryStore, Namespace, WorldStore};
