use crate::config::Config;
use crate::renderer::conditions::ConditionRegistry;
use crate::services::{FileStore, WorldStore};
use std::sync::Arc;

/// Everything a session needs that outlives any one world.
pub struct Registry {
    pub config: Arc<Config>,
    pub store: Arc<dyn WorldStore>,
    pub conditions: Arc<ConditionRegistry>,
}

impl Registry {
    pub fn new(config: Arc<Config>, store: Arc<dyn WorldStore>) -> Self {
        Self::with_conditions(config, store, ConditionRegistry::new())
    }

    pub fn with_conditions(config: Arc<Config>, store: Arc<dyn WorldStore>, conditions: ConditionRegistry) -> Self {
        Self {
            config,
            store,
            conditions: Arc::new(conditions),
        }
    }

    /// Registry backed by the directories named in `config`.
    pub fn from_config(config: Arc<Config>) -> Self {
        let store = Arc::new(FileStore::new(
            config.base_dir.clone(),
            config.game_files_dir.clone(),
            config.save_files_dir.clone(),
        ));
        Self::new(config, store)
    }
}
