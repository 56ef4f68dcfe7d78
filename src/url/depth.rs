use url::Url;

/// Counts the non-empty `/`-separated segments of a URL's path
///
/// Trailing slashes and doubled slashes do not add depth. Unparsable URLs have
/// depth 0.
///
/// # Examples
///
/// ```
/// use sitemapper::url::path_depth;
///
/// assert_eq!(path_depth("https://example.com/"), 0);
/// assert_eq!(path_depth("https://example.com/a/b/"), 2);
/// assert_eq!(path_depth("https://example.com/a/b/c.html?x=1"), 3);
/// ```
pub fn path_depth(url: &str) -> usize {
    Url::parse(url)
        .map(|parsed| {
            parsed
                .path()
                .split('/')
                .filter(|segment| !segment.is_empty())
                .count()
        })
        .unwrap_or(0)
}
