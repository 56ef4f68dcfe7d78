//! Sitemapper main entry point
//!
//! This is the command-line interface for the Sitemapper site crawler.

use anyhow::Context;
use clap::Parser;
use sitemapper::config::{
    parse_seed_url, validate, CrawlConfig, FetchConfig, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use sitemapper::crawler::{Coordinator, HttpFetcher};
use sitemapper::output::{print_report, ProgressLine};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Sitemapper: extracts links from HTML, crawls to them, and extracts more
///
/// Starting from URL, every page on the same host is fetched and its links
/// followed. Internal and external links are reported as directories, or in
/// full with -f.
#[derive(Parser, Debug)]
#[command(name = "sitemapper")]
#[command(version)]
#[command(about = "A bounded, concurrent site mapper", long_about = None)]
struct Cli {
    /// Starting URL to crawl
    #[arg(value_name = "URL")]
    url: String,

    /// Print per-URL skip and error diagnostics
    #[arg(short, long)]
    verbose: bool,

    /// Number of concurrent fetches
    #[arg(short, long, default_value_t = 1)]
    threads: usize,

    /// Maximum number of internal URLs to visit (0 = no limit)
    #[arg(short, long, default_value_t = 0)]
    max: usize,

    /// Maximum path depth of queued links (0 = no limit)
    #[arg(short, long, default_value_t = 0)]
    depth: usize,

    /// Print full links instead of directories, plus email and non-HTML links
    #[arg(short, long)]
    full_links: bool,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// User-Agent header sent with every request
    #[arg(long, value_name = "UA", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
}

impl Cli {
    /// Builds the immutable crawl configuration from the parsed arguments
    fn to_config(&self) -> CrawlConfig {
        CrawlConfig {
            workers: self.threads,
            max_visited: self.max,
            max_depth: self.depth,
            verbose: self.verbose,
            full_links: self.full_links,
            fetch: FetchConfig {
                timeout: Duration::from_secs(self.timeout),
                user_agent: self.user_agent.clone(),
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.to_config();

    setup_logging(config.verbose);

    validate(&config).context("invalid arguments")?;
    let seed = parse_seed_url(&cli.url).context("invalid starting URL")?;
    let fetcher = HttpFetcher::new(&config.fetch).context("failed to build HTTP client")?;

    tracing::debug!(
        "Config: threads={}, max={}, depth={}, timeout={:?}",
        config.workers,
        config.max_visited,
        config.max_depth,
        config.fetch.timeout
    );

    let mut progress = ProgressLine::new();
    let links = Coordinator::new(&config, &seed, fetcher)
        .with_progress(move |visited| progress.update(visited))
        .run()
        .await;

    print_report(&links, config.full_links).context("failed to write report")?;
    Ok(())
}

/// Sets up the logging/tracing subscriber based on the verbose flag
///
/// Diagnostics go to stderr so the report on stdout stays clean.
fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("sitemapper=debug")
    } else {
        EnvFilter::new("sitemapper=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
