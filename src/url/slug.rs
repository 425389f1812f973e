/// Returns the last non-empty `/`-separated segment of an href
///
/// Query strings and fragments are not stripped; the catalog site only
/// links to clean permalinks.
///
/// # Examples
///
/// ```
/// use driverays_api::url::last_segment;
///
/// assert_eq!(last_segment("https://driverays.quest/the-batman-2022/"), Some("the-batman-2022"));
/// assert_eq!(last_segment("/"), None);
/// ```
pub fn last_segment(href: &str) -> Option<&str> {
    href.split('/').filter(|segment| !segment.is_empty()).last()
}

/// Internal detail route for a slug (`/api/<slug>`)
pub fn detail_path(slug: &str) -> String {
    format!("/api/{}", slug)
}

/// Internal genre route for a genre slug (`/api/genres/<slug>`)
pub fn genre_path(slug: &str) -> String {
    format!("/api/genres/{}", slug)
}
