//! Genre index and genre page extraction

use crate::scraper::category::extract_page;
use crate::scraper::document::Document;
use crate::scraper::types::{GenrePage, GenreRef};
use crate::url::{genre_path, last_segment};
use crate::ScrapeError;

/// Genre anchors on the genre index page
pub const GENRE_LINKS: &str = ".genres_list .yakx a";

/// Extracts every genre anchor, rewriting its href to `/api/genres/<slug>`
pub fn extract_genres(document: &Document) -> Result<Vec<GenreRef>, ScrapeError> {
    document
        .select(GENRE_LINKS)
        .iter()
        .map(|anchor| -> Result<GenreRef, ScrapeError> {
            let name = anchor.text();
            let slug = anchor
                .attr("href")
                .and_then(last_segment)
                .ok_or_else(|| ScrapeError::Extraction {
                    field: "href",
                    context: format!("genre link '{}'", name),
                })?;

            Ok(GenreRef {
                url: genre_path(slug),
                name,
            })
        })
        .collect()
}

/// Extracts one page of a genre listing tagged with its slug
pub fn extract_genre_page(
    document: &Document,
    genre: &str,
    page: u32,
) -> Result<GenrePage, ScrapeError> {
    Ok(GenrePage {
        genre: genre.to_string(),
        result: extract_page(document, page)?,
    })
}
