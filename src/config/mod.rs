//! Configuration module for Sitemapper
//!
//! A crawl is driven by an immutable [`CrawlConfig`] built once from the
//! command line and passed by reference to every component that needs it.
//!
//! # Example
//!
//! ```
//! use sitemapper::config::{parse_seed_url, validate, CrawlConfig};
//!
//! let seed = parse_seed_url("https://example.com/").unwrap();
//! let config = CrawlConfig {
//!     workers: 4,
//!     max_visited: 100,
//!     ..CrawlConfig::default()
//! };
//! validate(&config).unwrap();
//! assert_eq!(seed.host_str(), Some("example.com"));
//! ```

mod types;
mod validation;

pub use types::{CrawlConfig, FetchConfig, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
pub use validation::{parse_seed_url, validate};
