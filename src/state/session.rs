use crate::error::AppResult;
use crate::models::world::{RoomView, WorldState};
use crate::services::Namespace;
use crate::state::interactive::InteractiveState;
use crate::state::registry::Registry;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    /// Player asked to quit
    Finished,
}

/// One running game: the live world plus what the prompt is waiting for.
pub struct Session {
    registry: Arc<Registry>,
    world: WorldState,
    state: SessionState,
    interactive: InteractiveState,
}

impl Session {
    /// Starts on the tutorial template.
    pub fn start(registry: Arc<Registry>) -> AppResult<Self> {
        let name = registry.config.tutorial_game.clone();
        Self::start_with(registry, Namespace::GameFiles, &name)
    }

    pub fn start_with(registry: Arc<Registry>, ns: Namespace, name: &str) -> AppResult<Self> {
        let world = Self::build_world(&registry, ns, name)?;
        tracing::info!(%ns, name, "session started");
        Ok(Self {
            registry,
            world,
            state: SessionState::Playing,
            interactive: InteractiveState::None,
        })
    }

    fn build_world(registry: &Registry, ns: Namespace, name: &str) -> AppResult<WorldState> {
        let record = registry.store.load(ns, name)?;
        WorldState::from_record(record, registry.conditions.clone())
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut WorldState {
        &mut self.world
    }

    /// Replaces the world with a stored one. On error the current world stays as it was.
    pub fn load(&mut self, ns: Namespace, name: &str) -> AppResult<RoomView> {
        let world = Self::build_world(&self.registry, ns, name)?;
        self.world = world;
        tracing::info!(%ns, name, "game loaded");
        self.world.current_room_view()
    }

    /// Writes the world to the save namespace, under `name` or the default save name.
    pub fn save(&self, name: Option<&str>) -> AppResult<String> {
        let name = name.unwrap_or(self.registry.config.default_save.as_str());
        let path = self.registry.store.save(Namespace::SaveFiles, name, &self.world.to_record())?;
        tracing::info!(path = %path, "game saved");
        Ok(path)
    }

    /// Reloads the tutorial template.
    pub fn restart(&mut self) -> AppResult<RoomView> {
        let name = self.registry.config.tutorial_game.clone();
        let view = self.load(Namespace::GameFiles, &name)?;
        tracing::info!("game restarted");
        Ok(view)
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Playing
    }

    pub fn quit(&mut self) {
        self.state = SessionState::Finished;
    }

    pub fn interactive(&self) -> InteractiveState {
        self.interactive
    }

    pub fn set_interactive(&mut self, state: InteractiveState) {
        self.interactive = state;
    }
}
