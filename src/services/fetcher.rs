//! Page fetching seam.
//!
//! The traversal engine only needs "give me the status and body for this
//! URL"; everything else about HTTP stays behind this trait so tests can
//! drive the driver against an in-memory site.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::CrawlerConfig;
use crate::utils::http;

/// Raw fetch result handed to the engine.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP status code
    pub status: u16,

    /// Response body as text
    pub body: String,
}

impl FetchedPage {
    /// Whether the response status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Capability to fetch one page at a time.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch a URL, returning status and body.
    ///
    /// Transport-level failures surface as errors; HTTP-level failures
    /// (non-2xx) come back as a normal `FetchedPage`. The driver treats
    /// both identically: unreachable, skip.
    async fn fetch(&self, url: &str) -> Result<FetchedPage>;
}

/// Production fetcher backed by a configured `reqwest` client.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with user agent and timeout from the configuration.
    pub fn new(config: &CrawlerConfig) -> Result<Self> {
        let client = http::create_async_client(config)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(FetchedPage { status, body })
    }
}
