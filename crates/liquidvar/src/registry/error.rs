//! Error types for registry loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while loading a custom transformer registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// File I/O error when reading a registry file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The registry file is not a JSON array of definitions.
    #[error("invalid registry JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two definitions share an id.
    #[error("duplicate transformer id '{id}'")]
    DuplicateId { id: String },
}
