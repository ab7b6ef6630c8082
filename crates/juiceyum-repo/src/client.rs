//! Shared HTTP client construction

use std::time::Duration;

pub const USER_AGENT: &str = concat!("juiceyum/", env!("CARGO_PKG_VERSION"));

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the client used for manifest fetches and installer downloads.
/// No overall request timeout: installer downloads can be large and slow,
/// only the connection attempt itself is bounded.
pub fn default_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
}
