//! Response assembly
//!
//! Every cached route follows the same contract:
//!
//! 1. Build the cache key from the route tag and normalized parameters
//! 2. On a hit, return the stored payload flagged `cached: true`
//! 3. On a miss, run the extractor, shape the route's envelope (with
//!    pagination links for paged routes), store it without the flag and
//!    return it flagged `cached: false`

use crate::api::cache_key::CacheKey;
use crate::api::pagination::Pagination;
use crate::cache::ResponseCache;
use crate::scraper::{DetailRecord, GenreRef, Listing, ListingItem, PageResult, Scraper};
use crate::url::{encode_component, Category};
use crate::{ApiError, ScrapeError};
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use utoipa::ToSchema;

/// A route payload with the read-time `cached` flag in front
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cached<T = Value> {
    pub cached: bool,
    #[serde(flatten)]
    pub payload: T,
}

/// Homepage snapshot envelope
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingPayload {
    pub total: usize,
    pub total_movies: usize,
    pub total_series: usize,
    pub movies: Vec<ListingItem>,
    pub series: Vec<ListingItem>,
}

impl From<Listing> for ListingPayload {
    fn from(listing: Listing) -> Self {
        Self {
            total: listing.movies.len() + listing.series.len(),
            total_movies: listing.movies.len(),
            total_series: listing.series.len(),
            movies: listing.movies,
            series: listing.series,
        }
    }
}

/// Envelope shared by every paginated route
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagedPayload {
    /// Present on genre pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Present on search results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    pub page: u32,
    pub total_pages: u32,
    pub items: Vec<ListingItem>,
    pub pagination: Pagination,
}

impl PagedPayload {
    /// Wraps an extracted page, linking siblings under `route`
    pub fn new(route: &str, result: PageResult<ListingItem>) -> Self {
        Self {
            genre: None,
            keyword: None,
            pagination: Pagination::new(route, result.page, result.total_pages),
            page: result.page,
            total_pages: result.total_pages,
            items: result.items,
        }
    }
}

/// Genre index envelope
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GenresPayload {
    pub data: Vec<GenreRef>,
}

/// Detail route envelope (never cached)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DetailResponse {
    pub success: bool,
    pub slug: String,
    pub data: DetailRecord,
}

/// Turns extractor output into cache-backed route payloads
pub struct Assembler {
    scraper: Scraper,
    cache: Arc<ResponseCache>,
}

impl Assembler {
    pub fn new(scraper: Scraper, cache: Arc<ResponseCache>) -> Self {
        Self { scraper, cache }
    }

    pub fn scraper(&self) -> &Scraper {
        &self.scraper
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Serves `key` from the cache, or builds, stores and serves a fresh payload
    async fn cached_or_build<T, F, Fut>(&self, key: CacheKey<'_>, build: F) -> Result<Cached, ApiError>
    where
        T: Serialize,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ScrapeError>>,
    {
        let key = key.to_string();

        if let Some(payload) = self.cache.get(&key) {
            tracing::debug!("Cache hit for '{}'", key);
            return Ok(Cached {
                cached: true,
                payload,
            });
        }

        tracing::debug!("Cache miss for '{}'", key);
        let payload = serde_json::to_value(build().await?)?;
        self.cache.insert(key, payload.clone());

        Ok(Cached {
            cached: false,
            payload,
        })
    }

    /// Homepage snapshot of `url` (the site root when absent)
    ///
    /// `follow` only takes part in the cache key; it does not change what
    /// is scraped.
    pub async fn listing(&self, url: Option<&str>, follow: bool) -> Result<Cached, ApiError> {
        let url = url.unwrap_or(self.scraper.site().root());

        self.cached_or_build(CacheKey::Listing { url, follow }, || async {
            let listing = self.scraper.scrape(url).await?;
            Ok::<_, ScrapeError>(ListingPayload::from(listing))
        })
        .await
    }

    /// One page of the movies or series category
    pub async fn category(&self, category: Category, page: u32) -> Result<Cached, ApiError> {
        self.cached_or_build(CacheKey::Category { category, page }, || async {
            let result = self.scraper.scrape_category_kind(category, page).await?;
            let route = format!("/api/{}", category);
            Ok::<_, ScrapeError>(PagedPayload::new(&route, result))
        })
        .await
    }

    /// The genre index
    pub async fn genres(&self) -> Result<Cached, ApiError> {
        self.cached_or_build(CacheKey::Genres, || async {
            let data = self.scraper.scrape_genres().await?;
            Ok::<_, ScrapeError>(GenresPayload { data })
        })
        .await
    }

    /// One page of a genre listing
    pub async fn genre_page(&self, genre: &str, page: u32) -> Result<Cached, ApiError> {
        self.cached_or_build(CacheKey::Genre { genre, page }, || async {
            let genre_page = self.scraper.scrape_genre_page(genre, page).await?;
            let route = format!("/api/genres/{}", genre);
            Ok::<_, ScrapeError>(PagedPayload {
                genre: Some(genre_page.genre),
                ..PagedPayload::new(&route, genre_page.result)
            })
        })
        .await
    }

    /// One page of search results for a non-empty keyword
    pub async fn search(&self, keyword: &str, page: u32) -> Result<Cached, ApiError> {
        self.cached_or_build(CacheKey::Search { keyword, page }, || async {
            let search = self.scraper.scrape_search(keyword, page).await?;
            let route = format!("/api/search/{}", encode_component(keyword));
            Ok::<_, ScrapeError>(PagedPayload {
                keyword: Some(search.keyword),
                ..PagedPayload::new(&route, search.result)
            })
        })
        .await
    }

    /// The detail record for `slug`, resolved against the site root
    pub async fn detail(&self, slug: &str) -> Result<DetailResponse, ScrapeError> {
        let url = self.scraper.site().detail(slug);
        let data = self.scraper.scrape_detail(&url).await?;

        Ok(DetailResponse {
            success: true,
            slug: slug.to_string(),
            data,
        })
    }
}
