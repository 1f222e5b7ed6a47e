//! Scraper module for fetching HTML content from the upstream site
//!
//! A thin wrapper around a shared `reqwest::Client` that sends browser-like
//! headers. Every call is a single GET: no retries, no delays, no caching.

use reqwest::Client;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during scraping operations
#[derive(Error, Debug)]
pub enum ScraperError {
    /// Network-related errors (connection failure, DNS failure, bad URL, etc.)
    #[error("Failed to connect to server: {0}")]
    NetworkError(String),

    /// HTTP non-success status code errors
    #[error("Server returned status {0}")]
    HttpError(u16),

    /// Error reading response body
    #[error("Failed to read response body: {0}")]
    ResponseError(String),
}

/// Result of a successful page fetch
#[derive(Debug)]
pub struct ScraperResult {
    /// The HTML content of the page
    pub html: String,
    /// The HTTP status code
    pub status: u16,
}

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// HTTP client for fetching upstream pages
#[derive(Debug, Clone)]
pub struct Scraper {
    client: Client,
}

impl Scraper {
    /// Create a new Scraper
    pub fn new() -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ScraperError::NetworkError(e.to_string()))?;

        Ok(Self { client })
    }

    /// Fetch a page from the given URL
    pub async fn fetch_page(&self, url: &str) -> Result<ScraperResult, ScraperError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .header("Accept-Language", "en-US,en;q=0.9,id;q=0.8")
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ScraperError::NetworkError("Failed to connect to server".to_string())
                } else {
                    ScraperError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::HttpError(status.as_u16()));
        }

        let html = response
            .text()
            .await
            .map_err(|e| ScraperError::ResponseError(e.to_string()))?;

        Ok(ScraperResult {
            html,
            status: status.as_u16(),
        })
    }
}
