//! Error types for repository operations

use thiserror::Error;

/// A single manifest fetch failed. Per-repo and non-fatal: the aggregator
/// logs it and continues with the remaining repositories.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to fetch manifest from {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid manifest from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// URL of the repository that failed
    pub fn url(&self) -> &str {
        match self {
            FetchError::Http { url, .. } | FetchError::Parse { url, .. } => url,
        }
    }
}

/// An installer download failed after exhausting its retry budget. Aborts
/// the single install attempt; any partial file is left behind.
#[derive(Debug, Error)]
#[error("Download of {url} failed after {attempts} attempt(s): {reason}")]
pub struct DownloadError {
    pub url: String,
    pub attempts: u32,
    pub reason: String,
}
