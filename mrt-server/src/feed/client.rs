//! Jakarta MRT station feed HTTP client.

use futures::future::BoxFuture;
use tracing::debug;

use super::error::FeedError;
use super::source::FeedSource;

/// Default URL of the station and schedule feed.
pub const DEFAULT_FEED_URL: &str = "https://www.jakartamrt.co.id/id/val/stasiuns";

/// Default request timeout in seconds.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the feed client.
#[derive(Debug, Clone)]
pub struct FeedClientConfig {
    /// Feed URL
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl FeedClientConfig {
    /// Create a config pointing at the production feed.
    pub fn new() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom feed URL (for testing).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for FeedClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the upstream station feed.
///
/// Every call performs a fresh GET; nothing is cached or retried.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    url: String,
}

impl FeedClient {
    /// Create a new feed client.
    pub fn new(config: FeedClientConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// Fetch the raw feed document.
    pub async fn fetch_raw(&self) -> Result<Vec<u8>, FeedError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let body = response.bytes().await?;
        debug!(url = %self.url, bytes = body.len(), "fetched station feed");
        Ok(body.to_vec())
    }
}

impl FeedSource for FeedClient {
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<u8>, FeedError>> {
        Box::pin(self.fetch_raw())
    }
}
