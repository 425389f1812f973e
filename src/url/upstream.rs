use std::fmt;

/// Category listing families served by the catalog site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Movies,
    Series,
}

impl Category {
    /// Route segment used by both the upstream site and the internal API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movies => "movies",
            Self::Series => "series",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Applies the upstream pagination rule to a listing URL
///
/// Page 1 (and anything below it) is the bare URL; page N appends `page/N/`.
///
/// # Examples
///
/// ```
/// use driverays_api::url::paged_url;
///
/// assert_eq!(paged_url("https://driverays.quest/category/movies/", 1), "https://driverays.quest/category/movies/");
/// assert_eq!(paged_url("https://driverays.quest/category/movies/", 3), "https://driverays.quest/category/movies/page/3/");
/// ```
pub fn paged_url(base_url: &str, page: u32) -> String {
    if page > 1 {
        format!("{}page/{}/", base_url, page)
    } else {
        base_url.to_string()
    }
}

/// Percent-encodes a URI component, leaving the marks `!'()*` literal
///
/// This is the character set the catalog site and browsers use for
/// query values and path segments.
///
/// # Examples
///
/// ```
/// use driverays_api::url::encode_component;
///
/// assert_eq!(encode_component("mad max"), "mad%20max");
/// assert_eq!(encode_component("what's up (2024)!"), "what's%20up%20(2024)!");
/// ```
pub fn encode_component(component: &str) -> String {
    let mut encoded = urlencoding::encode(component).into_owned();
    for (escape, mark) in [("%21", "!"), ("%27", "'"), ("%28", "("), ("%29", ")"), ("%2A", "*")] {
        if encoded.contains(escape) {
            encoded = encoded.replace(escape, mark);
        }
    }
    encoded
}

/// Builds upstream URLs relative to the catalog site root
///
/// The root must end with `/`; paths are appended by concatenation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrls {
    root: String,
}

impl SiteUrls {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    /// The site homepage
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Detail page for a slug
    pub fn detail(&self, slug: &str) -> String {
        format!("{}{}/", self.root, slug)
    }

    /// First page of a category listing
    pub fn category(&self, category: Category) -> String {
        format!("{}category/{}/", self.root, category.as_str())
    }

    /// The genre index page
    pub fn genre_list(&self) -> String {
        format!("{}genre-list/", self.root)
    }

    /// First page of a genre listing
    pub fn genre(&self, slug: &str) -> String {
        format!("{}genres/{}/", self.root, slug)
    }

    /// Native query-string search, with `paged` only past the first page
    pub fn search(&self, keyword: &str, page: u32) -> String {
        let url = format!(
            "{}?s={}&post_type=post",
            self.root,
            encode_component(keyword)
        );

        if page > 1 {
            format!("{}&paged={}", url, page)
        } else {
            url
        }
    }
}
