use std::io;

/// Errors that can occur during yap-tools operations
///
/// Malformed YAP source is never an error: the engine degrades to "no edit"
/// or "not found" instead. These variants cover the host-facing edges.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("File not found in workspace: {0}")]
    FileNotFound(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for yap-tools operations
pub type Result<T> = std::result::Result<T, Error>;
