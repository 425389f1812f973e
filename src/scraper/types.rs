//! Normalized records extracted from catalog pages

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One catalog entry (movie or series) as shown on a listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListingItem {
    /// The item block's own `id` attribute
    pub id: Option<String>,
    pub title: String,
    pub year: String,
    pub rating: String,
    /// Text of the quality badge overlay
    pub quality: String,
    pub poster: Option<String>,
    /// Internal detail route, always `/api/<slug>`
    pub url: String,
}

/// Homepage snapshot split by region
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub movies: Vec<ListingItem>,
    pub series: Vec<ListingItem>,
}

/// One page of a paginated listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub page: u32,
    /// Always at least 1
    pub total_pages: u32,
    pub items: Vec<T>,
}

/// Search results with the keyword echoed back verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    pub keyword: String,
    #[serde(flatten)]
    pub result: PageResult<ListingItem>,
}

/// Genre listing tagged with the requested genre slug
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenrePage {
    pub genre: String,
    #[serde(flatten)]
    pub result: PageResult<ListingItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenreRef {
    pub name: String,
    pub url: String,
}

/// Positional metadata: year, country, duration in page order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DetailMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// A hoster label and its outbound URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HostLink {
    pub host: String,
    pub url: Option<String>,
}

/// A download group from either page template
///
/// Series pages render a table (one entry per row), movie pages render
/// flex blocks (one entry per resolution). A page may carry both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DownloadEntry {
    Series {
        name: String,
        links: Vec<HostLink>,
    },
    Movie {
        resolution: String,
        size: Option<String>,
        links: Vec<HostLink>,
    },
}

/// The full detail page for one slug
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DetailRecord {
    pub title: String,
    pub tagline: String,
    pub meta: DetailMeta,
    pub director: String,
    pub rating: String,
    pub genres: Vec<GenreRef>,
    pub sinopsis: String,
    pub poster: Option<String>,
    pub downloads: Vec<DownloadEntry>,
}
