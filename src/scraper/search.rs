//! Search result extraction

use crate::scraper::category::extract_page;
use crate::scraper::document::Document;
use crate::scraper::types::SearchPage;
use crate::ScrapeError;

/// Extracts one page of search results, echoing `keyword` verbatim
///
/// Results use the same item markup as category pages.
pub fn extract_search(
    document: &Document,
    keyword: &str,
    page: u32,
) -> Result<SearchPage, ScrapeError> {
    Ok(SearchPage {
        keyword: keyword.to_string(),
        result: extract_page(document, page)?,
    })
}
