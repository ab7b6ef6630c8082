//! Shared command context
//!
//! Resolves the data directories once and hands each command the stores and
//! network components it needs. Store failures here are configuration
//! errors: the process aborts instead of limping on without durable state.

use juiceyum_core::{Catalog, DataDirs, InstalledApps, RepositoryRegistry};
use juiceyum_repo::{default_client, CatalogAggregator, CatalogFetcher, Downloader};

use crate::error::{CliError, Result};

pub struct AppContext {
    pub dirs: DataDirs,
    pub registry: RepositoryRegistry,
    client: reqwest::Client,
}

impl AppContext {
    pub fn open() -> Result<Self> {
        let dirs = DataDirs::resolve()?;
        let registry = RepositoryRegistry::load(&dirs.registry)?;
        let client = default_client()
            .map_err(|e| CliError::internal(format!("could not build HTTP client: {e}")))?;
        Ok(Self {
            dirs,
            registry,
            client,
        })
    }

    pub fn installed(&self) -> Result<InstalledApps> {
        Ok(InstalledApps::load(&self.dirs.installed)?)
    }

    pub fn aggregator(&self) -> CatalogAggregator<CatalogFetcher> {
        CatalogAggregator::new(
            CatalogFetcher::new(self.client.clone()),
            &self.dirs.catalog_cache,
        )
    }

    pub fn downloader(&self) -> Downloader {
        Downloader::new(self.client.clone())
    }

    /// The cached catalog, rebuilt from the registry when no cache exists.
    pub async fn catalog(&self) -> Result<Catalog> {
        Ok(self.aggregator().load_or_rebuild(&self.registry).await?)
    }
}
