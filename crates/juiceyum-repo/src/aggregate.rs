//! Catalog aggregation
//!
//! Rebuilds the catalog by fetching every registered repository's manifest
//! and merging them in registry order, later repositories overwriting
//! earlier ones on key collision. Aggregation is best-effort: a repository
//! that fails to fetch is reported and skipped, and the rebuild proceeds
//! with whatever succeeded, even if that leaves an empty catalog.

use std::path::PathBuf;

use juiceyum_core::{Catalog, CoreError, RepositoryRegistry};

use crate::error::FetchError;
use crate::fetch::ManifestSource;

/// Per-repo rebuild observer: repository name plus either the number of
/// merged entries or the fetch failure.
pub type RepoObserver = Box<dyn Fn(&str, Result<usize, &FetchError>) + Send + Sync>;

/// Merges manifests from all registered repositories into one cached catalog
pub struct CatalogAggregator<S> {
    source: S,
    cache_path: PathBuf,
    on_repo: Option<RepoObserver>,
}

impl<S: ManifestSource> CatalogAggregator<S> {
    pub fn new(source: S, cache_path: impl Into<PathBuf>) -> Self {
        Self {
            source,
            cache_path: cache_path.into(),
            on_repo: None,
        }
    }

    /// Observe each repository as it is fetched (for per-repo CLI output).
    pub fn on_repo(mut self, observer: impl Fn(&str, Result<usize, &FetchError>) + Send + Sync + 'static) -> Self {
        self.on_repo = Some(Box::new(observer));
        self
    }

    /// Rebuild the catalog wholesale and replace the on-disk cache.
    /// Only a cache-write failure is an error; fetch failures are skipped.
    pub async fn rebuild(&self, registry: &RepositoryRegistry) -> Result<Catalog, CoreError> {
        let mut catalog = Catalog::new();

        for (name, url) in registry.iter() {
            match self.source.fetch(url).await {
                Ok(manifest) => {
                    let count = manifest.len();
                    tracing::debug!("merged {count} entries from repository '{name}'");
                    if let Some(observer) = &self.on_repo {
                        observer(name, Ok(count));
                    }
                    catalog.merge(manifest);
                }
                Err(e) => {
                    tracing::warn!("skipping repository '{name}': {e}");
                    if let Some(observer) = &self.on_repo {
                        observer(name, Err(&e));
                    }
                }
            }
        }

        catalog.save(&self.cache_path)?;
        Ok(catalog)
    }

    /// Return the cached catalog if one exists, else rebuild it.
    pub async fn load_or_rebuild(
        &self,
        registry: &RepositoryRegistry,
    ) -> Result<Catalog, CoreError> {
        match Catalog::load(&self.cache_path)? {
            Some(catalog) => Ok(catalog),
            None => self.rebuild(registry).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::CatalogFetcher;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn manifest_server(routes: &[(&str, &str)]) -> MockServer {
        let server = MockServer::start().await;
        for (route, body) in routes {
            Mock::given(method("GET"))
                .and(path(*route))
                .respond_with(ResponseTemplate::new(200).set_body_string(*body))
                .mount(&server)
                .await;
        }
        server
    }

    fn test_registry(dir: &tempfile::TempDir, urls: &[String]) -> RepositoryRegistry {
        let mut registry = RepositoryRegistry::load(&dir.path().join("repos.json")).unwrap();
        registry.remove(juiceyum_core::DEFAULT_REPO_NAME).unwrap();
        for url in urls {
            registry.add(url).unwrap();
        }
        registry
    }

    #[tokio::test]
    async fn later_repositories_win_on_collision() {
        let server = manifest_server(&[
            ("/first.json", r#"{"x": {"version": "1.0"}, "only-first": {}}"#),
            ("/second.json", r#"{"x": {"version": "2.0"}}"#),
        ])
        .await;

        let dir = tempfile::tempdir().unwrap();
        let registry = test_registry(
            &dir,
            &[
                format!("{}/first.json", server.uri()),
                format!("{}/second.json", server.uri()),
            ],
        );

        let aggregator = CatalogAggregator::new(
            CatalogFetcher::new(reqwest::Client::new()),
            dir.path().join("catalog.json"),
        );
        let catalog = aggregator.rebuild(&registry).await.unwrap();

        assert_eq!(catalog.get("x").unwrap().version.as_deref(), Some("2.0"));
        assert!(catalog.contains("only-first"));
    }

    #[tokio::test]
    async fn failing_repository_is_skipped_not_fatal() {
        let server = manifest_server(&[("/good.json", r#"{"foo": {"version": "1.0"}}"#)]).await;

        let dir = tempfile::tempdir().unwrap();
        let registry = test_registry(
            &dir,
            &[
                format!("{}/absent.json", server.uri()),
                format!("{}/good.json", server.uri()),
            ],
        );

        let aggregator = CatalogAggregator::new(
            CatalogFetcher::new(reqwest::Client::new()),
            dir.path().join("catalog.json"),
        );
        let catalog = aggregator.rebuild(&registry).await.unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("foo"));
    }

    #[tokio::test]
    async fn rebuild_replaces_the_cache_wholesale() {
        let server = manifest_server(&[("/apps.json", r#"{"foo": {"version": "1.0"}}"#)]).await;

        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("catalog.json");
        // Stale cache with an app that no longer exists anywhere
        std::fs::write(&cache, r#"{"stale": {"version": "0.1"}}"#).unwrap();

        let registry = test_registry(&dir, &[format!("{}/apps.json", server.uri())]);
        let aggregator =
            CatalogAggregator::new(CatalogFetcher::new(reqwest::Client::new()), &cache);

        let catalog = aggregator.rebuild(&registry).await.unwrap();
        assert!(!catalog.contains("stale"));

        let cached = Catalog::load(&cache).unwrap().unwrap();
        assert!(!cached.contains("stale"));
        assert!(cached.contains("foo"));
    }

    #[tokio::test]
    async fn load_or_rebuild_prefers_the_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("catalog.json");
        std::fs::write(&cache, r#"{"cached": {"version": "1.0"}}"#).unwrap();

        // Registry points nowhere; the cache must be used without fetching
        let registry = test_registry(&dir, &[]);
        let aggregator =
            CatalogAggregator::new(CatalogFetcher::new(reqwest::Client::new()), &cache);

        let catalog = aggregator.load_or_rebuild(&registry).await.unwrap();
        assert!(catalog.contains("cached"));
    }
}
