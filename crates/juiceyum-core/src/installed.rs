//! Installed-app records
//!
//! Durable mapping of installed app name -> installed version string.
//! Entries are created on install success, overwritten on upgrade success
//! and deleted on uninstall success; never mutated on failure. Every
//! mutation persists immediately with a whole-file rewrite.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::error::{CoreError, Result};

/// Durable record of installed app versions
#[derive(Debug)]
pub struct InstalledApps {
    path: PathBuf,
    apps: IndexMap<String, String>,
}

impl InstalledApps {
    /// Load the store from `path`; a missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        let apps = match std::fs::read_to_string(path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| CoreError::StoreUnreadable {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => IndexMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path: path.to_path_buf(),
            apps,
        })
    }

    pub fn version_of(&self, name: &str) -> Option<&str> {
        self.apps.get(name).map(|v| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.apps.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.apps.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    /// Record a successful install or upgrade and persist immediately.
    pub fn upsert(&mut self, name: &str, version: &str) -> Result<()> {
        self.apps.insert(name.to_string(), version.to_string());
        self.save()
    }

    /// Record a successful uninstall and persist immediately. Removing an
    /// app that was never recorded is a no-op.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        if self.apps.shift_remove(name).is_some() {
            self.save()?;
        }
        Ok(())
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.apps)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
