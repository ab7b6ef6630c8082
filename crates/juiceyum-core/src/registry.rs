//! Repository registry
//!
//! Durable, insertion-ordered mapping of repository name -> manifest URL,
//! persisted as a JSON object. The registry seeds itself with the canonical
//! juiceyum repository on first-ever load.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::error::{CoreError, Result};

/// Name of the repository seeded on first load
pub const DEFAULT_REPO_NAME: &str = "juiceyum-apps";

/// Canonical manifest URL seeded on first load
pub const DEFAULT_REPO_URL: &str =
    "https://raw.githubusercontent.com/juiceyum/juiceyum-apps/main/juiceyum-apps.json";

/// Outcome of a registry `add`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Inserted under the derived name
    Added { name: String },
    /// The URL is already registered under `name`; nothing was changed
    DuplicateUrl { name: String },
}

/// Durable repository name -> URL mapping, in insertion order
#[derive(Debug)]
pub struct RepositoryRegistry {
    path: PathBuf,
    repos: IndexMap<String, String>,
}

impl RepositoryRegistry {
    /// Load the registry from `path`. When no registry has ever been
    /// persisted, seeds the default repository and saves immediately.
    /// An unreadable or unparsable registry is a fatal configuration error.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let repos = serde_json::from_str(&content).map_err(|e| {
                    CoreError::StoreUnreadable {
                        path: path.to_path_buf(),
                        message: e.to_string(),
                    }
                })?;
                Ok(Self {
                    path: path.to_path_buf(),
                    repos,
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let mut registry = Self {
                    path: path.to_path_buf(),
                    repos: IndexMap::new(),
                };
                registry
                    .repos
                    .insert(DEFAULT_REPO_NAME.to_string(), DEFAULT_REPO_URL.to_string());
                registry.save()?;
                Ok(registry)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Register a manifest URL under a name derived from its last path
    /// segment. A duplicate URL is rejected with a warning, not an error;
    /// a duplicate derived name overwrites the previous URL.
    pub fn add(&mut self, url: &str) -> Result<AddOutcome> {
        if let Some((name, _)) = self.repos.iter().find(|(_, u)| u.as_str() == url) {
            let name = name.clone();
            tracing::warn!("repository URL already registered as '{name}': {url}");
            return Ok(AddOutcome::DuplicateUrl { name });
        }

        let name = derive_name(url);
        self.repos.insert(name.clone(), url.to_string());
        self.save()?;
        Ok(AddOutcome::Added { name })
    }

    /// Remove a repository by name. Returns `false` when the name was not
    /// registered; the caller reports this, it is not an error.
    pub fn remove(&mut self, name: &str) -> Result<bool> {
        if self.repos.shift_remove(name).is_none() {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// All `(name, url)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.repos.iter().map(|(n, u)| (n.as_str(), u.as_str()))
    }

    pub fn len(&self) -> usize {
        self.repos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.repos)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Derive a repository name from the URL's last path segment: strip a
/// `.json` extension and replace remaining dots with dashes.
fn derive_name(url: &str) -> String {
    let tail = url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(url);
    let tail = tail.split('?').next().unwrap_or(tail);
    let stem = tail.strip_suffix(".json").unwrap_or(tail);
    stem.replace('.', "-")
}
