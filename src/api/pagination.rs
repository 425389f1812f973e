//! Page parameter normalization and pagination links

use crate::scraper::leading_integer;
use serde::Serialize;
use utoipa::ToSchema;

/// Sibling page links for a paginated route family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Pagination {
    pub first: String,
    pub last: String,
    /// `None` on the first page
    pub prev: Option<String>,
    /// `None` on the last page (or beyond it)
    pub next: Option<String>,
}

impl Pagination {
    /// Builds links under `route`, e.g. `/api/movies` → `/api/movies/page/N`
    pub fn new(route: &str, page: u32, total_pages: u32) -> Self {
        let link = |n: u32| format!("{}/page/{}", route, n);

        Self {
            first: link(1),
            last: link(total_pages),
            prev: (page > 1).then(|| link(page - 1)),
            next: (page < total_pages).then(|| link(page + 1)),
        }
    }
}

/// Parses a raw page parameter, leniently
///
/// Leading digits are taken (`"3abc"` → 3); zero, negative and
/// non-numeric values are treated as absent.
pub fn parse_page(raw: Option<&str>) -> Option<u32> {
    raw.and_then(leading_integer).filter(|page| *page > 0)
}

/// Resolves the requested page: query parameter, then path parameter, then 1
pub fn normalize_page(query: Option<&str>, path: Option<&str>) -> u32 {
    parse_page(query).or_else(|| parse_page(path)).unwrap_or(1)
}
