//! Merged app catalog and its on-disk cache
//!
//! The catalog is rebuilt wholesale from all registered repositories and
//! persisted as a single JSON object with the same shape as a manifest.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::manifest::{AppEntry, Manifest};

/// Merged, addressable collection of app entries from all repositories
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub entries: Manifest,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&AppEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    /// Merge a repository manifest into the catalog. On key collision the
    /// merged entry replaces the existing one, so merging repositories in
    /// registry order makes the last-merged repository win.
    pub fn merge(&mut self, manifest: Manifest) {
        for (name, entry) in manifest {
            self.entries.insert(name, entry);
        }
    }

    /// Case-insensitive search over app names and descriptions
    pub fn search(&self, term: &str) -> Vec<(&str, &AppEntry)> {
        let term = term.to_lowercase();
        self.entries
            .iter()
            .filter(|(name, entry)| {
                name.to_lowercase().contains(&term)
                    || entry
                        .description
                        .as_ref()
                        .is_some_and(|d| d.to_lowercase().contains(&term))
            })
            .map(|(name, entry)| (name.as_str(), entry))
            .collect()
    }

    /// Load the cached catalog. A missing cache yields `None`; a corrupted
    /// cache is discarded with a warning so the caller rebuilds it.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&content) {
            Ok(catalog) => Ok(Some(catalog)),
            Err(e) => {
                tracing::warn!("discarding corrupted catalog cache at {}: {e}", path.display());
                Ok(None)
            }
        }
    }

    /// Persist the catalog wholesale, replacing any previous cache.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
