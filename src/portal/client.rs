// src/portal/client.rs
use crate::utils::error::FetchError;
use reqwest::header;
use std::time::Duration;

// Lookup page of the outage schedule service; the form behind it needs a
// real browser, so callers pass the URL of an already rendered result page.
pub const LOOKUP_PAGE_URL: &str = "https://www.cskh.evnspc.vn/TraCuu/LichNgungGiamCungCapDien";

const USER_AGENT: &str = concat!("outage_extractor/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Creates a reqwest client configured for result page downloads.
fn build_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
}

/// Downloads a rendered result page and returns its body (HTML or text).
pub async fn download_result_page(url: &str) -> Result<String, FetchError> {
    let client = build_client()?; // Propagate client build error if any

    tracing::info!("Downloading result page from: {}", url);
    tracing::debug!("Using User-Agent: {}", USER_AGENT);

    let response = client
        .get(url)
        .header(header::ACCEPT, "text/html,text/plain,*/*")
        .send()
        .await?; // Propagates reqwest::Error as FetchError::Network

    let status = response.status();
    if !status.is_success() {
        tracing::error!("HTTP error status: {} for URL: {}", status, url);
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::PageNotFound(url.to_string()));
        }
        return Err(FetchError::Http(status));
    }

    let body = response.text().await?;
    if body.trim().is_empty() {
        tracing::warn!("Result page at {} has an empty body", url);
        return Err(FetchError::EmptyPage(url.to_string()));
    }
    tracing::debug!("Successfully downloaded {} bytes from {}", body.len(), url);

    Ok(body)
}
