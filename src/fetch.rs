use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

// Listing pages block requests with a default library User-Agent
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Build the HTTP client shared by all page fetches.
///
/// Certificate validation is disabled for this client: some listing mirrors
/// serve broken certificate chains. The Telegram client does not share this
/// policy.
pub(crate) fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .danger_accept_invalid_certs(true)
        .build()
        .context("Failed to create HTTP client")
}

/// Fetch the raw HTML body of a single page. One attempt, no retries; the
/// caller decides what a failed page means for the batch.
pub(crate) async fn fetch_html(client: &reqwest::Client, url: &Url) -> Result<String> {
    let response = client
        .get(url.as_str())
        .send()
        .await
        .context("HTTP request failed")?;

    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("HTTP {} for {}", status, url);
    }

    response
        .text()
        .await
        .context("Failed to read response body")
}
