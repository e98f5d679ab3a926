use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetch the raw HTML of a single page. Non-success statuses and timeouts
/// come back as errors; the caller aborts the run on any of them.
pub async fn fetch_page(url: &str) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;

    info!("Fetching {}", url);
    let body = client
        .get(url)
        .send()
        .await
        .and_then(|resp| resp.error_for_status())
        .with_context(|| format!("Failed to fetch {}", url))?
        .text()
        .await
        .with_context(|| format!("Failed to read response body from {}", url))?;

    info!("Fetched {} bytes", body.len());
    Ok(body)
}
