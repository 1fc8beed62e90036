//! Error types for MindFlow progress.
//!
//! Business-rule violations never surface here: they are encoded as no-ops
//! or defaulted results by the engine. These errors cover I/O and
//! (de)serialization of explicitly requested files only.

/// Progress error types covering all fallible operations.
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    #[error("Module not found in catalog: {0}")]
    UnknownModule(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid file format: {0}")]
    InvalidFileFormat(String),

    #[error("Async runtime unavailable: {0}")]
    Runtime(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, ProgressError>;
