use std::time::Duration;

/// Per-request timeout applied by the fetcher unless overridden
pub const DEFAULT_TIMEOUT_SECS: u64 = 6;

/// Browser-like user agent, sent so that anti-bot front ends serve real HTML
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/136.0.0.0 Safari/537.36";

/// Immutable per-run crawl configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    /// Number of fetches allowed in flight at once
    pub workers: usize,

    /// Stop after this many URLs have been visited (0 = unlimited)
    pub max_visited: usize,

    /// Only queue internal links whose path depth is at most this (0 = unlimited)
    pub max_depth: usize,

    /// Emit per-URL skip and error diagnostics
    pub verbose: bool,

    /// Report full links instead of directory roll-ups
    pub full_links: bool,

    /// Transport settings
    pub fetch: FetchConfig,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            workers: 1,
            max_visited: 0,
            max_depth: 0,
            verbose: false,
            full_links: false,
            fetch: FetchConfig::default(),
        }
    }
}

/// HTTP transport configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Timeout covering the whole request, including reading the body
    pub timeout: Duration,

    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
