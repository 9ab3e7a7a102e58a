use crate::error::{ConfigErrorKind, InfraError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_dir: PathBuf,         // e.g. "."
    pub game_files_dir: String,    // e.g. "game_files"
    pub save_files_dir: String,    // e.g. "save_files"
    pub tutorial_game: String,     // template loaded on start and restart
    pub default_save: String,      // used by a bare `save`
    pub log_file: Option<PathBuf>, // e.g. "logs/text_quest.log"
    pub log_level: String,         // EnvFilter directive
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            game_files_dir: "game_files".to_string(),
            save_files_dir: "save_files".to_string(),
            tutorial_game: "TUTORIAL_GAME".to_string(),
            default_save: "PROT01".to_string(),
            log_file: None,
            log_level: "error".to_string(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, InfraError> {
        let path = path.as_ref();
        let wrap = |source| InfraError::Config {
            path: path.to_path_buf(),
            source,
        };

        let data = std::fs::read_to_string(path).map_err(|e| wrap(ConfigErrorKind::Read(e)))?;
        let cfg: Self = toml::from_str(&data).map_err(|e| wrap(ConfigErrorKind::Parse(e)))?;
        Ok(cfg)
    }

    pub fn from_env() -> Result<Self, InfraError> {
        let _ = dotenvy::from_filename(".env");
        Self::default().with_env(|k| std::env::var(k).ok())
    }

    /// Overrides fields from `TEXTQUEST_*` variables found through `lookup`.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, InfraError> {
        if let Some(v) = lookup("TEXTQUEST_BASE_DIR") {
            self.base_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("TEXTQUEST_GAME_FILES_DIR") {
            self.game_files_dir = non_empty("TEXTQUEST_GAME_FILES_DIR", v)?;
        }
        if let Some(v) = lookup("TEXTQUEST_SAVE_FILES_DIR") {
            self.save_files_dir = non_empty("TEXTQUEST_SAVE_FILES_DIR", v)?;
        }
        if let Some(v) = lookup("TEXTQUEST_TUTORIAL_GAME") {
            self.tutorial_game = non_empty("TEXTQUEST_TUTORIAL_GAME", v)?;
        }
        if let Some(v) = lookup("TEXTQUEST_DEFAULT_SAVE") {
            self.default_save = non_empty("TEXTQUEST_DEFAULT_SAVE", v)?;
        }
        if let Some(v) = lookup("TEXTQUEST_LOG_FILE") {
            self.log_file = (!v.trim().is_empty()).then(|| PathBuf::from(v));
        }
        if let Some(v) = lookup("TEXTQUEST_LOG_LEVEL") {
            self.log_level = non_empty("TEXTQUEST_LOG_LEVEL", v)?;
        }
        Ok(self)
    }
}

fn non_empty(key: &str, v: String) -> Result<String, InfraError> {
    if v.trim().is_empty() {
        return Err(InfraError::Env(ConfigErrorKind::InvalidEnv(
            key.to_string(),
            "must not be empty".to_string(),
        )));
    }
    Ok(v.trim().to_string())
}
