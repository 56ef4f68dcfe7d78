//! Sitemapper: a bounded, concurrent site mapper
//!
//! Starting from a seed URL, the crawler fetches HTML pages on the seed's host,
//! extracts every referenced URL, and expands breadth-first in batches until
//! the frontier runs dry or the configured visit limit is reached. Links are
//! partitioned into internal, external, mailto and non-crawlable sets.

pub mod config;
pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for Sitemapper operations
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors, fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid seed URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Unsupported URL scheme '{0}', expected http or https")]
    UnsupportedScheme(String),

    #[error("Seed URL has no host: {0}")]
    MissingHost(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Transport-level failure while fetching a single URL
///
/// These never abort a crawl; the scheduler treats the page as having no links.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {message}")]
    Connect { url: String, message: String },

    #[error("Request failed for {url}: {message}")]
    Request { url: String, message: String },

    #[error("Failed to read body of {url}: {message}")]
    Body { url: String, message: String },
}

/// Result type alias for Sitemapper operations
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{CrawlConfig, FetchConfig};
pub use crawler::{crawl, LinkSets};
pub use crate::url::{hostname_of, is_internal, path_depth};
