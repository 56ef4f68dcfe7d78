//! HTML link extraction
//!
//! This module scans a fetched page for reference-bearing attributes and sorts
//! each reference into one of three buckets:
//! - crawlable references, resolved to absolute URLs against the page URL
//! - `mailto:` references, kept verbatim
//! - anchors and `sms:`, `tel:`, `javascript:`, `data:` references, kept verbatim
//!
//! Parsing is best-effort: malformed markup never produces an error.

use scraper::{Html, Selector};
use std::collections::BTreeSet;
use url::Url;

/// Element selectors paired with the attribute that carries the reference
const REFERENCE_SOURCES: &[(&str, &str)] = &[
    ("a[href]", "href"),
    ("link[href]", "href"),
    ("script[src]", "src"),
    ("img[src]", "src"),
];

/// Schemes that can never be fetched as a page
const NON_CRAWLABLE_PREFIXES: &[&str] = &["sms:", "tel:", "javascript:", "data:"];

const MAILTO_PREFIX: &str = "mailto:";

/// References found on a single page, before host classification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedLinks {
    /// Absolute URLs resolved against the page URL
    pub links: BTreeSet<String>,

    /// `mailto:` references
    pub mailto: BTreeSet<String>,

    /// Anchors and non-HTTP scheme references
    pub non_crawlable: BTreeSet<String>,
}

/// Extracts every reference from `html`, resolving crawlable ones against `base_url`
///
/// Scans `<a href>`, `<link href>`, `<script src>` and `<img src>`. Empty
/// attributes are skipped, as are references the URL parser cannot resolve.
///
/// # Example
///
/// ```
/// use sitemapper::crawler::extract_links;
/// use url::Url;
///
/// let html = r##"<a href="/about">About</a><a href="#top">Top</a>"##;
/// let base = Url::parse("https://example.com/").unwrap();
/// let found = extract_links(html, &base);
/// assert!(found.links.contains("https://example.com/about"));
/// assert!(found.non_crawlable.contains("#top"));
/// ```
pub fn extract_links(html: &str, base_url: &Url) -> ExtractedLinks {
    let document = Html::parse_document(html);
    let mut extracted = ExtractedLinks::default();

    for (selector, attr) in REFERENCE_SOURCES {
        let Ok(selector) = Selector::parse(selector) else {
            continue;
        };

        for element in document.select(&selector) {
            if let Some(reference) = element.value().attr(attr) {
                classify_reference(reference, base_url, &mut extracted);
            }
        }
    }

    extracted
}

/// Sorts one attribute value into the right bucket
fn classify_reference(reference: &str, base_url: &Url, extracted: &mut ExtractedLinks) {
    if reference.is_empty() {
        return;
    }

    if reference.starts_with('#')
        || NON_CRAWLABLE_PREFIXES
            .iter()
            .any(|prefix| has_prefix_ignore_case(reference, prefix))
    {
        extracted.non_crawlable.insert(reference.to_string());
        return;
    }

    if has_prefix_ignore_case(reference, MAILTO_PREFIX) {
        extracted.mailto.insert(reference.to_string());
        return;
    }

    match base_url.join(reference) {
        Ok(absolute) => {
            extracted.links.insert(absolute.to_string());
        }
        Err(e) => {
            tracing::trace!("Dropping unresolvable reference {:?}: {}", reference, e);
        }
    }
}

fn has_prefix_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .map_or(false, |head| head.eq_ignore_ascii_case(prefix))
}
