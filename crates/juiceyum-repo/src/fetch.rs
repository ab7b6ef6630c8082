//! Manifest fetching
//!
//! A manifest fetch is a pure function of URL -> manifest or failure. No
//! schema validation happens here beyond well-formed JSON: incomplete
//! entries fail the installability check later instead of being rejected
//! during fetch.

use async_trait::async_trait;
use juiceyum_core::Manifest;

use crate::error::FetchError;

/// Source of repository manifests, abstracted so the aggregator can be
/// exercised without a network.
#[async_trait]
pub trait ManifestSource {
    async fn fetch(&self, url: &str) -> Result<Manifest, FetchError>;
}

/// HTTP manifest fetcher
pub struct CatalogFetcher {
    client: reqwest::Client,
}

impl CatalogFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ManifestSource for CatalogFetcher {
    async fn fetch(&self, url: &str) -> Result<Manifest, FetchError> {
        let http = |source| FetchError::Http {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(http)?
            .error_for_status()
            .map_err(http)?;
        let body = response.bytes().await.map_err(http)?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Parse {
            url: url.to_string(),
            source,
        })
    }
}
