use crate::models::types::{ItemId, RoomId};
use thiserror::Error;

pub type AppResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Item does not exist in the world
    #[error("unknown item: {0}")]
    UnknownItem(ItemId),

    /// Room does not exist in the world
    #[error("unknown room: {0}")]
    UnknownRoom(RoomId),

    /// Property is not declared on the item
    #[error("property '{property}' not found on {item}")]
    UnknownProperty { item: ItemId, property: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("invalid direction: {0}")]
    InvalidDirection(String),

    #[error("invalid file name: {0}")]
    InvalidFilename(String),

    #[error("validation failed: {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    InternalError(String),
}

/// Raised while compiling a declared condition into its typed form.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConditionError {
    #[error("unknown condition kind: {0}")]
    UnknownKind(String),

    #[error("bad params for '{kind}': {reason}")]
    BadParams { kind: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigErrorKind {
    #[error("failed to read file: {0}")]
    Read(std::io::Error),

    #[error("failed to parse file: {0}")]
    Parse(toml::de::Error),

    #[error("invalid environment variable {0}: {1}")]
    InvalidEnv(String, String),
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("invalid configuration in {path}: {source}")]
    Config {
        path: std::path::PathBuf,
        #[source]
        source: ConfigErrorKind,
    },

    #[error("invalid environment: {0}")]
    Env(#[source] ConfigErrorKind),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
