//! Error types for the lifecycle engine
//!
//! Every variant is per-app: batch operations catch these, report them and
//! continue with the remaining apps. Only store failures escalate to the
//! configuration level.

use juiceyum_core::CoreError;
use juiceyum_repo::DownloadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("App '{name}' not found in catalog")]
    AppNotFound { name: String },

    #[error("App '{name}' is not installable (no url or install_script)")]
    NotInstallable { name: String },

    #[error("App '{name}' defines no uninstall command")]
    NoUninstallCommand { name: String },

    #[error("Installer for '{name}' exited with code {code}")]
    InstallCommandFailed { name: String, code: i32 },

    #[error("Install script for '{name}' exited with code {code}")]
    ScriptFailed { name: String, code: i32 },

    #[error("Uninstall command for '{name}' exited with code {code}")]
    UninstallCommandFailed { name: String, code: i32 },

    #[error(transparent)]
    Download(#[from] DownloadError),

    #[error(transparent)]
    Store(#[from] CoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
