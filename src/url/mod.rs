//! URL handling module for the Driverays API
//!
//! This module provides slug extraction from upstream hrefs, internal API
//! path construction, and upstream URL construction (including the
//! site's pagination rule).

mod slug;
mod upstream;

// Re-export main functions
pub use slug::{detail_path, genre_path, last_segment};
pub use upstream::{encode_component, paged_url, Category, SiteUrls};
