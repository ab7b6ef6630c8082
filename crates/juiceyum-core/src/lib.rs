//! Juiceyum core types and durable stores
//!
//! This crate provides the data model shared by every juiceyum component:
//!
//! - **App manifests**: per-repository JSON mappings of app name to install
//!   metadata, with install-method resolution
//! - **Catalog**: the merged, addressable collection of entries from all
//!   registered repositories, cached on disk
//! - **Repository registry**: the durable name -> manifest URL mapping
//! - **Installed apps**: the durable record of installed versions that
//!   drives idempotent upgrades
//!
//! All persisted state lives in plain JSON files. Every store holds its own
//! path and persists with a whole-file rewrite; there is no file locking, so
//! concurrent invocations against the same data directory are unsupported
//! (last writer wins).

pub mod catalog;
pub mod error;
pub mod installed;
pub mod manifest;
pub mod paths;
pub mod registry;

// Re-exports for convenience
pub use catalog::Catalog;
pub use error::{CoreError, Result};
pub use installed::InstalledApps;
pub use manifest::{AppEntry, InstallMethod, Manifest};
pub use paths::DataDirs;
pub use registry::{AddOutcome, RepositoryRegistry, DEFAULT_REPO_NAME, DEFAULT_REPO_URL};
