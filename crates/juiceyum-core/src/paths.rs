//! Default locations for the persisted stores
//!
//! Follows the platform conventions: registry under the config directory,
//! catalog cache under the cache directory, installed-app records under the
//! data directory. Setting `JUICEYUM_HOME` places all three files under a
//! single directory instead, which is how the integration tests isolate
//! themselves from the real user state.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};

const APP_DIR: &str = "juiceyum";

/// Resolved paths of the three persisted files
#[derive(Debug, Clone)]
pub struct DataDirs {
    pub registry: PathBuf,
    pub catalog_cache: PathBuf,
    pub installed: PathBuf,
}

impl DataDirs {
    /// Resolve the default locations, honoring `JUICEYUM_HOME`.
    pub fn resolve() -> Result<Self> {
        if let Some(home) = std::env::var_os("JUICEYUM_HOME") {
            return Ok(Self::under(Path::new(&home)));
        }

        let config = dirs::config_dir().ok_or(CoreError::DataDir("config"))?;
        let cache = dirs::cache_dir().ok_or(CoreError::DataDir("cache"))?;
        let data = dirs::data_dir().ok_or(CoreError::DataDir("data"))?;

        Ok(Self {
            registry: config.join(APP_DIR).join("repos.json"),
            catalog_cache: cache.join(APP_DIR).join("catalog.json"),
            installed: data.join(APP_DIR).join("installed.json"),
        })
    }

    /// Place all three files under one root directory.
    pub fn under(root: &Path) -> Self {
        Self {
            registry: root.join("repos.json"),
            catalog_cache: root.join("catalog.json"),
            installed: root.join("installed.json"),
        }
    }
}
