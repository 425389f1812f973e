//! Paginated listing extraction (category, search and genre pages)

use crate::scraper::document::Document;
use crate::scraper::listing::{parse_items, MOVIE_ITEMS};
use crate::scraper::types::{ListingItem, PageResult};
use crate::ScrapeError;

/// The "Page X of N" pagination control
pub const PAGINATION_CONTROL: &str = ".wp-pagenavi .pages";

/// Parses the leading run of ASCII digits, ignoring leading whitespace
///
/// `"12 pages"` → 12; text that does not start with a digit → `None`.
pub fn leading_integer(text: &str) -> Option<u32> {
    let text = text.trim_start();
    let end = text
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    text[..end].parse().ok()
}

/// Parses `N` out of a "Page X of N" control text
///
/// The text is split on the literal `of`; anything other than exactly two
/// parts, or a non-numeric tail, yields 1. The result is never below 1.
///
/// # Examples
///
/// ```
/// use driverays_api::scraper::parse_total_pages;
///
/// assert_eq!(parse_total_pages("Page 1 of 50"), 50);
/// assert_eq!(parse_total_pages(""), 1);
/// ```
pub fn parse_total_pages(text: &str) -> u32 {
    let parts: Vec<&str> = text.split("of").collect();
    if parts.len() != 2 {
        return 1;
    }

    leading_integer(parts[1]).unwrap_or(1).max(1)
}

/// Total page count declared by the document, 1 without a pagination control
pub fn extract_total_pages(document: &Document) -> u32 {
    parse_total_pages(&document.text_of(PAGINATION_CONTROL))
}

/// Extracts one page of movie-region items plus its page count
///
/// Only the movies region is read, whichever category the page belongs to.
pub fn extract_page(
    document: &Document,
    page: u32,
) -> Result<PageResult<ListingItem>, ScrapeError> {
    Ok(PageResult {
        page,
        total_pages: extract_total_pages(document),
        items: parse_items(document, MOVIE_ITEMS)?,
    })
}
