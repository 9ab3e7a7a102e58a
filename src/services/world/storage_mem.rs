use crate::error::{AppResult, DomainError};
use crate::models::world::WorldRecord;
use crate::services::world::{Namespace, WorldStore, to_pretty_json, validate_name};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Keeps serialized records in memory, so loads go through the same decoding as files do.
#[derive(Default)]
pub struct MemoryStore {
    docs: RwLock<HashMap<(Namespace, String), Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores raw JSON text as-is.
    pub fn insert_raw(&self, ns: Namespace, name: &str, json: &str) {
        self.docs.write().insert((ns, name.to_string()), json.as_bytes().to_vec());
    }

    pub fn contains(&self, ns: Namespace, name: &str) -> bool {
        self.docs.read().contains_key(&(ns, name.to_string()))
    }
}

impl WorldStore for MemoryStore {
    fn load(&self, ns: Namespace, name: &str) -> AppResult<WorldRecord> {
        let name = validate_name(name)?;
        let docs = self.docs.read();
        let bytes = docs
            .get(&(ns, name.to_string()))
            .ok_or_else(|| DomainError::NotFound(format!("{ns}/{name}.json")))?;
        Ok(serde_json::from_slice(bytes)?)
    }

    fn save(&self, ns: Namespace, name: &str, record: &WorldRecord) -> AppResult<String> {
        let name = validate_name(name)?;
        let bytes = to_pretty_json(record)?;
        self.docs.write().insert((ns, name.to_string()), bytes);
        Ok(format!("{ns}/{name}.json"))
    }
}
