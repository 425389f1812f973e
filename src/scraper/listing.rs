//! Listing item extraction shared by every listing-shaped page
//!
//! The homepage, category pages, search results and genre pages all render
//! catalog entries with the same item block markup:
//!
//! ```html
//! <div class="content ct-archive" id="post-123">
//!   <a href="https://site/slug/">
//!     <div class="poster"><img data-src="..." src="..."></div>
//!     <div class="absolute top-0 right-0"><span>HD</span></div>
//!     <div class="title"><h2>Title</h2></div>
//!     <div class="desc"><span>7.5</span><span>2024</span></div>
//!   </a>
//! </div>
//! ```
//!
//! The two `.desc` spans carry no labels; the first is the rating and the
//! last is the year. That positional contract is kept as-is.

use crate::scraper::document::{poster_of, Document, Node};
use crate::scraper::types::{Listing, ListingItem};
use crate::url::{detail_path, last_segment};
use crate::ScrapeError;

/// Movie item blocks (homepage movies region, category, search, genre pages)
pub const MOVIE_ITEMS: &str = "#movies .content.ct-archive";

/// Series item blocks on the homepage (no archive decoration class)
pub const SERIES_ITEMS: &str = "#series .content";

/// Parses one item block into a [`ListingItem`]
///
/// Missing optional fields degrade to `""`/`None`. An item without an
/// anchor href that yields a slug is a structural failure.
pub fn parse_item(item: &Node<'_>) -> Result<ListingItem, ScrapeError> {
    let id = item.attr("id").map(str::to_string);

    let href = item
        .attr_of("a", "href")
        .ok_or_else(|| ScrapeError::Extraction {
            field: "href",
            context: describe(id.as_deref()),
        })?;
    let slug = last_segment(href).ok_or_else(|| ScrapeError::Extraction {
        field: "slug",
        context: format!("href '{}' of {}", href, describe(id.as_deref())),
    })?;

    let spans = item.select(".desc span");
    let rating = spans.first().map(|span| span.text()).unwrap_or_default();
    let year = spans.last().map(|span| span.text()).unwrap_or_default();

    Ok(ListingItem {
        id,
        title: item.text_of(".title h2"),
        year,
        rating,
        quality: item.text_of(".absolute.top-0.right-0 span"),
        poster: poster_of(item, ".poster img"),
        url: detail_path(slug),
    })
}

/// Parses every item block matching `selector`, in document order
pub fn parse_items(document: &Document, selector: &str) -> Result<Vec<ListingItem>, ScrapeError> {
    document
        .select(selector)
        .iter()
        .map(parse_item)
        .collect()
}

/// Extracts the homepage snapshot: movies and series regions
pub fn extract_listing(document: &Document) -> Result<Listing, ScrapeError> {
    Ok(Listing {
        movies: parse_items(document, MOVIE_ITEMS)?,
        series: parse_items(document, SERIES_ITEMS)?,
    })
}

fn describe(id: Option<&str>) -> String {
    match id {
        Some(id) => format!("item block #{}", id),
        None => "item block".to_string(),
    }
}
