//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the [`Fetch`] seam
//! - HTML parsing and link extraction
//! - Frontier, visited-set and termination bookkeeping
//! - Batched concurrent dispatch

mod coordinator;
mod fetcher;
mod links;
mod parser;
mod scheduler;

pub use coordinator::{process_url, Coordinator};
pub use fetcher::{
    build_http_client, fetch_url, is_html_content_type, Fetch, FetchedPage, HttpFetcher,
};
pub use links::LinkSets;
pub use parser::{extract_links, ExtractedLinks};
pub use scheduler::{Commit, PageResult, Scheduler, SkipReason};

use crate::config::{validate, CrawlConfig};
use url::Url;

/// Runs a complete crawl of `seed` over HTTP
///
/// This is the main entry point for library users. It will:
/// 1. Validate the configuration
/// 2. Build the HTTP client
/// 3. Crawl internal pages batch by batch
/// 4. Return the accumulated link sets
///
/// # Example
///
/// ```no_run
/// use sitemapper::config::{parse_seed_url, CrawlConfig};
/// use sitemapper::crawler::crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let seed = parse_seed_url("https://example.com/")?;
/// let links = crawl(&CrawlConfig::default(), &seed).await?;
/// println!("{} internal links", links.internal.len());
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: &CrawlConfig, seed: &Url) -> crate::Result<LinkSets> {
    validate(config)?;
    let fetcher = HttpFetcher::new(&config.fetch)?;
    Ok(Coordinator::new(config, seed, fetcher).run().await)
}
