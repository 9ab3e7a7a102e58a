use crate::error::{AppResult, DomainError};
use crate::models::world::WorldRecord;
use crate::services::world::{Namespace, WorldStore, to_pretty_json, validate_name};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct FileStore {
    base_dir: PathBuf,
    game_files: String,
    save_files: String,
}

impl FileStore {
    pub fn new(base_dir: impl Into<PathBuf>, game_files: impl Into<String>, save_files: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            game_files: game_files.into(),
            save_files: save_files.into(),
        }
    }

    pub fn dir(&self, ns: Namespace) -> PathBuf {
        match ns {
            Namespace::GameFiles => self.base_dir.join(&self.game_files),
            Namespace::SaveFiles => self.base_dir.join(&self.save_files),
        }
    }

    pub fn path(&self, ns: Namespace, name: &str) -> AppResult<PathBuf> {
        let name = validate_name(name)?;
        Ok(self.dir(ns).join(format!("{name}.json")))
    }
}

impl WorldStore for FileStore {
    fn load(&self, ns: Namespace, name: &str) -> AppResult<WorldRecord> {
        let path = self.path(ns, name)?;
        let data = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DomainError::NotFound(path.display().to_string()),
            _ => DomainError::Io(e),
        })?;

        let record: WorldRecord = serde_json::from_str(&data)?;
        tracing::info!(path = %path.display(), "world loaded");
        Ok(record)
    }

    fn save(&self, ns: Namespace, name: &str, record: &WorldRecord) -> AppResult<String> {
        let path = self.path(ns, name)?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let bytes = to_pretty_json(record)?;
        write_atomic(&path, &bytes)?;

        tracing::info!(path = %path.display(), "world saved");
        Ok(path.display().to_string())
    }
}

/// Write next to the target, then rename over it.
fn write_atomic(path: &Path, bytes: &[u8]) -> AppResult<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    if let Err(e) = std::fs::write(&tmp, bytes) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }
    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        DomainError::from(e)
    })
}
