use crate::error::{AppResult, DomainError};
use crate::models::world::WorldRecord;
use serde::Serialize;
use std::fmt;

mod storage_file; // Directory backed
mod storage_mem; // Ephemeral

pub use storage_file::FileStore;
pub use storage_mem::MemoryStore;

/// The two places world records live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Pristine scenario templates
    GameFiles,
    /// Player saves
    SaveFiles,
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Namespace::GameFiles => f.write_str("game_files"),
            Namespace::SaveFiles => f.write_str("save_files"),
        }
    }
}

pub trait WorldStore: Send + Sync {
    /// Reads the record stored as `name` (no extension).
    fn load(&self, ns: Namespace, name: &str) -> AppResult<WorldRecord>;
    /// Stores `record` as `name`, returning where it went.
    fn save(&self, ns: Namespace, name: &str, record: &WorldRecord) -> AppResult<String>;
}

/// Bare file names only: no separators, no dot entries.
pub fn validate_name(name: &str) -> AppResult<&str> {
    let trimmed = name.trim();
    let bad = trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains(['/', '\\'])
        || trimmed.chars().any(char::is_control);
    if bad {
        return Err(DomainError::InvalidFilename(name.to_string()));
    }
    Ok(trimmed)
}

/// Pretty JSON with a four space indent, keys in declaration order.
pub fn to_pretty_json(record: &WorldRecord) -> AppResult<Vec<u8>> {
    let mut buf = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    record.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_paths_and_blank_names() {
        assert_eq!(validate_name(" PROT01 ").unwrap(), "PROT01");
        for bad in ["", "   ", ".", "..", "../etc", "a/b", "a\\b"] {
            assert!(matches!(validate_name(bad), Err(DomainError::InvalidFilename(_))), "{bad}");
        }
    }
}
