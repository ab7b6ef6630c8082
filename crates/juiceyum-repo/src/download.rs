//! Installer downloads
//!
//! Streams a response body to a destination file in chunks, reporting
//! progress through an optional observer. Progress is observability only;
//! its absence never affects the download itself. Any failure is retried
//! with a fixed inter-attempt delay up to a bounded number of attempts;
//! each attempt truncates the destination, so a prior partial file is
//! overwritten, never appended to. After the final failed attempt the
//! partial file is left behind for the caller to deal with.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::error::DownloadError;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(3);

/// Snapshot of a download in flight
#[derive(Debug, Clone, Copy)]
pub struct DownloadProgress {
    pub bytes: u64,
    pub total: u64,
    pub elapsed: Duration,
}

impl DownloadProgress {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.bytes as f64 * 100.0 / self.total as f64
        }
    }
}

#[derive(Debug, Error)]
enum AttemptError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Streaming downloader with bounded, fixed-delay retries
pub struct Downloader {
    client: reqwest::Client,
    max_attempts: u32,
    retry_delay: Duration,
    on_progress: Option<Box<dyn Fn(DownloadProgress) + Send + Sync>>,
}

impl Downloader {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
            on_progress: None,
        }
    }

    /// Total number of attempts, including the first (clamped to >= 1).
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Fixed delay between attempts. No backoff, no jitter.
    pub fn retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Observe progress chunks. Only called when the server reports a
    /// content length; without one the body is read in a single pass.
    pub fn on_progress(
        mut self,
        observer: impl Fn(DownloadProgress) + Send + Sync + 'static,
    ) -> Self {
        self.on_progress = Some(Box::new(observer));
        self
    }

    /// Download `url` to `dest`, retrying on any network or IO failure.
    pub async fn download(&self, url: &str, dest: &Path) -> Result<(), DownloadError> {
        let mut last_error = None;

        for attempt in 1..=self.max_attempts {
            match self.attempt(url, dest).await {
                Ok(()) => return Ok(()),
                Err(e) => {
                    tracing::warn!(
                        "download attempt {attempt}/{} for {url} failed: {e}",
                        self.max_attempts
                    );
                    last_error = Some(e);
                    if attempt < self.max_attempts {
                        tokio::time::sleep(self.retry_delay).await;
                    }
                }
            }
        }

        Err(DownloadError {
            url: url.to_string(),
            attempts: self.max_attempts,
            reason: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no attempts made".to_string()),
        })
    }

    async fn attempt(&self, url: &str, dest: &Path) -> Result<(), AttemptError> {
        let response = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?;

        // Truncates any partial file from a previous attempt
        let mut file = File::create(dest)?;

        match response.content_length() {
            Some(total) => {
                let started = Instant::now();
                let mut bytes: u64 = 0;
                let mut response = response;
                while let Some(chunk) = response.chunk().await? {
                    file.write_all(&chunk)?;
                    bytes += chunk.len() as u64;
                    if let Some(observer) = &self.on_progress {
                        observer(DownloadProgress {
                            bytes,
                            total,
                            elapsed: started.elapsed(),
                        });
                    }
                }
            }
            None => {
                // No content length: single unbounded read, no progress
                let body = response.bytes().await?;
                file.write_all(&body)?;
            }
        }

        file.flush()?;
        Ok(())
    }
}
