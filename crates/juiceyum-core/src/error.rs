//! Error types for core stores

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the durable stores (registry, catalog cache, installed apps).
///
/// Store failures are configuration-level: the CLI treats them as fatal,
/// unlike per-repo or per-app failures which are reported and skipped.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Could not read {path}: {message}")]
    StoreUnreadable { path: PathBuf, message: String },

    #[error("Could not determine the {0} directory")]
    DataDir(&'static str),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
