//! HTTP fetcher implementation
//!
//! This module handles all upstream HTTP requests:
//! - Building the HTTP client with the configured user agent and timeout
//! - GET requests for page HTML
//! - Error classification (timeout, non-2xx status, transport failure)
//!
//! There is no retry logic: one failed fetch fails the whole request.

use crate::config::UpstreamConfig;
use crate::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Source of raw page HTML
///
/// [`HttpFetcher`] is the production implementation; anything that can map
/// a URL to HTML (fixtures, recorded pages) can stand in for it.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Retrieves the HTML body served at `url`
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError>;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The upstream site configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use driverays_api::config::UpstreamConfig;
/// use driverays_api::scraper::build_http_client;
///
/// let client = build_http_client(&UpstreamConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &UpstreamConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches pages from the upstream site over HTTP
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher around an already configured client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a fetcher from the upstream configuration
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, FetchError> {
        let client = build_http_client(config).map_err(|source| FetchError::Http {
            url: config.base_url.clone(),
            source,
        })?;
        Ok(Self::new(client))
    }
}

/// Maps a reqwest failure onto the fetch error taxonomy
fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| classify_error(url, e))
    }
}
