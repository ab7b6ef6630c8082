//! Juiceyum networking
//!
//! This crate covers everything that talks to a remote repository:
//!
//! - **Fetching**: one manifest GET + JSON parse per repository
//! - **Aggregation**: best-effort merge of every registered repository's
//!   manifest into a single cached catalog (a failing repository is logged
//!   and skipped, never aborts the rebuild)
//! - **Downloads**: streaming installer downloads with progress reporting
//!   and a bounded fixed-delay retry loop
//!
//! All requests run sequentially; there is no concurrent fetching.

pub mod aggregate;
pub mod client;
pub mod download;
pub mod error;
pub mod fetch;

// Re-exports for convenience
pub use aggregate::CatalogAggregator;
pub use client::default_client;
pub use download::{DownloadProgress, Downloader, DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY};
pub use error::{DownloadError, FetchError};
pub use fetch::{CatalogFetcher, ManifestSource};
