//! Scraper module for the upstream catalog site
//!
//! This module contains the extraction layer, including:
//! - HTTP fetching of page HTML
//! - A narrow queryable document interface over the HTML parser
//! - Extractors mapping page markup to normalized records
//! - The [`Scraper`] facade composing fetch, parse and extract per page kind
//!
//! Every scrape is one fetch, one parse and one extraction pass.

mod category;
mod detail;
mod document;
mod fetcher;
mod genre;
mod listing;
mod search;
mod types;

pub use category::{extract_page, extract_total_pages, leading_integer, parse_total_pages};
pub use detail::extract_detail;
pub use document::{poster_of, Document, Node};
pub use fetcher::{build_http_client, Fetcher, HttpFetcher};
pub use genre::{extract_genre_page, extract_genres};
pub use listing::{extract_listing, parse_item, parse_items};
pub use search::extract_search;
pub use types::{
    DetailMeta, DetailRecord, DownloadEntry, GenrePage, GenreRef, HostLink, Listing, ListingItem,
    PageResult, SearchPage,
};

use crate::url::{paged_url, Category, SiteUrls};
use crate::ScrapeError;
use std::sync::Arc;

/// Page-level extractors bound to one upstream site
#[derive(Clone)]
pub struct Scraper {
    fetcher: Arc<dyn Fetcher>,
    site: SiteUrls,
}

impl Scraper {
    /// Creates a scraper for the site rooted at `site`
    pub fn new(fetcher: Arc<dyn Fetcher>, site: SiteUrls) -> Self {
        Self { fetcher, site }
    }

    /// Upstream URL builder for this site
    pub fn site(&self) -> &SiteUrls {
        &self.site
    }

    /// Fetches `url` and parses it
    async fn document(&self, url: &str) -> Result<Document, ScrapeError> {
        let html = self.fetcher.fetch_html(url).await?;
        Ok(Document::parse(&html))
    }

    /// Scrapes the homepage snapshot (movies and series regions) at `url`
    pub async fn scrape(&self, url: &str) -> Result<Listing, ScrapeError> {
        let document = self.document(url).await?;
        extract_listing(&document)
    }

    /// Scrapes one page of a category listing rooted at `base_url`
    pub async fn scrape_category(
        &self,
        base_url: &str,
        page: u32,
    ) -> Result<PageResult<ListingItem>, ScrapeError> {
        let document = self.document(&paged_url(base_url, page)).await?;
        extract_page(&document, page)
    }

    /// Scrapes one page of the movies or series category
    pub async fn scrape_category_kind(
        &self,
        category: Category,
        page: u32,
    ) -> Result<PageResult<ListingItem>, ScrapeError> {
        self.scrape_category(&self.site.category(category), page)
            .await
    }

    /// Scrapes one page of search results; `keyword` must be non-empty
    pub async fn scrape_search(&self, keyword: &str, page: u32) -> Result<SearchPage, ScrapeError> {
        let document = self.document(&self.site.search(keyword, page)).await?;
        extract_search(&document, keyword, page)
    }

    /// Scrapes the genre index
    pub async fn scrape_genres(&self) -> Result<Vec<GenreRef>, ScrapeError> {
        let document = self.document(&self.site.genre_list()).await?;
        extract_genres(&document)
    }

    /// Scrapes one page of a genre listing; the slug is not checked against the index
    pub async fn scrape_genre_page(&self, genre: &str, page: u32) -> Result<GenrePage, ScrapeError> {
        let url = paged_url(&self.site.genre(genre), page);
        let document = self.document(&url).await?;
        extract_genre_page(&document, genre, page)
    }

    /// Scrapes the detail page at `url`
    pub async fn scrape_detail(&self, url: &str) -> Result<DetailRecord, ScrapeError> {
        let document = self.document(url).await?;
        Ok(extract_detail(&document))
    }
}
