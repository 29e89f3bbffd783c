//! Network utilities and helpers

use anyhow::Result;
use reqwest::Client;
use std::time::Duration;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Get user agent string
pub fn get_user_agent() -> &'static str {
    concat!("YtCommentsFetcher/", env!("CARGO_PKG_VERSION"))
}

/// Build the HTTP client used for API calls
pub fn build_client(timeout: Duration, user_agent: &str) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}
