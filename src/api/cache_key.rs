use crate::url::Category;
use std::fmt;

/// Deterministic cache key for a cached route
///
/// The textual form is the route tag followed by the normalized
/// parameters, e.g. `movies:2` or `search:batman:1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheKey<'a> {
    Listing { url: &'a str, follow: bool },
    Category { category: Category, page: u32 },
    Genres,
    Genre { genre: &'a str, page: u32 },
    Search { keyword: &'a str, page: u32 },
}

impl fmt::Display for CacheKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Listing { url, follow } => write!(f, "list:{}:follow={}", url, follow),
            Self::Category { category, page } => write!(f, "{}:{}", category, page),
            Self::Genres => f.write_str("genres:all"),
            Self::Genre { genre, page } => write!(f, "genre:{}:{}", genre, page),
            Self::Search { keyword, page } => write!(f, "search:{}:{}", keyword, page),
        }
    }
}
