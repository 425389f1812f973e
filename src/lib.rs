//! Driverays API: a scraping proxy for the driverays catalog site
//!
//! This crate fetches the site's HTML pages, extracts movie and series
//! listings, genre indexes, search results and title detail records, and
//! serves them as paginated JSON behind a TTL cache and a per-client rate
//! limit.

pub mod api;
pub mod cache;
pub mod config;
pub mod scraper;
pub mod url;

use thiserror::Error;

/// Errors fetching a page from the upstream site
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Upstream returned status {status} for {url}")]
    Status { url: String, status: u16 },
}

/// Errors producing a record from an upstream page
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Missing {field} in {context}")]
    Extraction {
        field: &'static str,
        context: String,
    },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors surfaced by the HTTP routes
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing search keyword")]
    MissingKeyword,

    #[error(transparent)]
    Scrape(#[from] ScrapeError),

    #[error("Failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for scraping operations
pub type ScrapeResult<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use api::{router, AppState, Assembler, RateLimit};
pub use cache::ResponseCache;
pub use config::Config;
pub use scraper::{HttpFetcher, Scraper};
