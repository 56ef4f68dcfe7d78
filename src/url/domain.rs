use std::collections::BTreeSet;
use url::Url;

/// Extracts the hostname used for internal/external classification
///
/// The host is lowercased by the URL parser and a single leading `www.` is
/// removed. Only that literal prefix is stripped: `wwwx.example.com` and
/// `foo.www.example.com` are left alone. Returns an empty string when the URL
/// cannot be parsed or has no host.
///
/// # Examples
///
/// ```
/// use sitemapper::url::hostname_of;
///
/// assert_eq!(hostname_of("https://www.example.com/page"), "example.com");
/// assert_eq!(hostname_of("https://blog.example.com/"), "blog.example.com");
/// assert_eq!(hostname_of("not a url"), "");
/// ```
pub fn hostname_of(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed
            .host_str()
            .map(|host| host.strip_prefix("www.").unwrap_or(host).to_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    }
}

/// Returns true if `candidate` lives on the same host as `base`
///
/// Subdomains other than `www.` count as external.
pub fn is_internal(base: &str, candidate: &str) -> bool {
    hostname_of(candidate) == hostname_of(base)
}

/// Partitions resolved links into internal and external sets relative to `base`
pub fn split_links<I>(base: &str, links: I) -> (BTreeSet<String>, BTreeSet<String>)
where
    I: IntoIterator<Item = String>,
{
    let base_host = hostname_of(base);
    let mut internal = BTreeSet::new();
    let mut external = BTreeSet::new();

    for link in links {
        if hostname_of(&link) == base_host {
            internal.insert(link);
        } else {
            external.insert(link);
        }
    }

    (internal, external)
}
