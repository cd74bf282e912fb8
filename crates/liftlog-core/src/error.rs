use thiserror::Error;

/// Top-level error type for the Liftlog system.
///
/// Validation problems are collected up front and carried together so the
/// caller can show every issue at once. Storage errors distinguish reads
/// (parsing existing data) from writes (persisting a new entry) because the
/// recovery advice differs: a read error means the file needs attention, a
/// write error means the entry was not saved.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LiftlogError {
    #[error("Invalid entry: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Storage read error: {0}")]
    StorageRead(String),

    #[error("Storage write error: {0}")]
    StorageWrite(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for LiftlogError {
    fn from(err: serde_json::Error) -> Self {
        LiftlogError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for LiftlogError {
    fn from(err: toml::de::Error) -> Self {
        LiftlogError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for LiftlogError {
    fn from(err: toml::ser::Error) -> Self {
        LiftlogError::Config(err.to_string())
    }
}

/// A specialized `Result` type for Liftlog operations.
pub type Result<T> = std::result::Result<T, LiftlogError>;
