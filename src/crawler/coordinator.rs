//! Crawler coordinator - batch dispatch and completion handling
//!
//! The crawl advances in wavefronts. Each round the scheduler hands over its
//! whole frontier, one task per URL is spawned, and a semaphore keeps at most
//! `workers` of them fetching at once. Completions are committed in arrival
//! order; the next round starts only after the current one has drained, so a
//! link discovered in round k is depth-checked before it is fetched in k+1.

use crate::config::CrawlConfig;
use crate::crawler::fetcher::Fetch;
use crate::crawler::links::LinkSets;
use crate::crawler::parser::extract_links;
use crate::crawler::scheduler::{Commit, PageResult, Scheduler, SkipReason};
use crate::url::{hostname_of, split_links};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use url::Url;

type ProgressFn = Box<dyn FnMut(usize) + Send>;

/// Main crawler coordinator structure
pub struct Coordinator<F: Fetch> {
    fetcher: Arc<F>,
    seed: Arc<str>,
    workers: usize,
    max_visited: usize,
    max_depth: usize,
    progress: Option<ProgressFn>,
}

impl<F: Fetch> Coordinator<F> {
    /// Creates a coordinator for one crawl of `seed`
    pub fn new(config: &CrawlConfig, seed: &Url, fetcher: F) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            seed: Arc::from(seed.as_str()),
            workers: config.workers.clamp(1, Semaphore::MAX_PERMITS),
            max_visited: config.max_visited,
            max_depth: config.max_depth,
            progress: None,
        }
    }

    /// Installs a callback invoked with the visited count after every commit
    pub fn with_progress(mut self, progress: impl FnMut(usize) + Send + 'static) -> Self {
        self.progress = Some(Box::new(progress));
        self
    }

    /// Runs the crawl to completion and returns everything discovered
    ///
    /// Ends when the frontier is exhausted or the visit limit is reached. A
    /// limit hit aborts the remaining tasks of the current batch and their
    /// results are dropped.
    pub async fn run(mut self) -> LinkSets {
        let start_time = Instant::now();
        let semaphore = Arc::new(Semaphore::new(self.workers));
        let mut scheduler = Scheduler::new(self.seed.to_string(), self.max_visited, self.max_depth);
        let mut round = 0usize;

        tracing::info!(
            "Starting crawl of {} with {} workers",
            self.seed,
            self.workers
        );

        while let Some(batch) = scheduler.next_batch() {
            round += 1;
            tracing::debug!("Round {}: dispatching {} URLs", round, batch.len());

            let mut tasks = JoinSet::new();
            for url in batch {
                let fetcher = Arc::clone(&self.fetcher);
                let seed = Arc::clone(&self.seed);
                let semaphore = Arc::clone(&semaphore);

                tasks.spawn(async move {
                    let _permit = semaphore.acquire_owned().await.ok();
                    process_url(fetcher.as_ref(), &seed, url).await
                });
            }

            while let Some(joined) = tasks.join_next().await {
                let result = match joined {
                    Ok(result) => result,
                    Err(e) => {
                        tracing::warn!("Worker task failed: {}", e);
                        continue;
                    }
                };

                if let Some(reason) = &result.skipped {
                    tracing::debug!("Skipped {}: {}", result.url, reason);
                }

                let outcome = scheduler.commit(result);
                self.report_progress(scheduler.visited_count());

                if outcome == Commit::LimitReached {
                    tracing::info!(
                        "Visit limit of {} reached, abandoning {} in-flight tasks",
                        self.max_visited,
                        tasks.len()
                    );
                    tasks.abort_all();
                    break;
                }
            }
        }

        tracing::info!(
            "Crawl completed: {} URLs visited in {} rounds, {:?}",
            scheduler.visited_count(),
            round,
            start_time.elapsed()
        );

        scheduler.into_links()
    }

    fn report_progress(&mut self, visited: usize) {
        if let Some(progress) = self.progress.as_mut() {
            progress(visited);
        }
    }
}

/// Fetches and parses one URL without touching shared state
///
/// Pages off the seed's host are never fetched. Transport failures, statuses
/// outside [200, 400) and non-HTML responses all come back as skipped results
/// with no links.
pub async fn process_url<F: Fetch>(fetcher: &F, seed: &str, url: String) -> PageResult {
    if hostname_of(&url) != hostname_of(seed) {
        return PageResult::skipped(url, SkipReason::ExternalHost);
    }

    let base = match Url::parse(&url) {
        Ok(base) => base,
        Err(e) => return PageResult::skipped(url, SkipReason::InvalidBase(e.to_string())),
    };

    let page = match fetcher.fetch(&url).await {
        Ok(page) => page,
        Err(e) => return PageResult::skipped(url, SkipReason::Transport(e)),
    };

    if !page.is_acceptable_status() {
        return PageResult::skipped(url, SkipReason::HttpStatus(page.status_code));
    }

    if !page.is_html() {
        return PageResult::skipped(url, SkipReason::NonHtml(page.content_type));
    }

    let extracted = extract_links(&page.body, &base);
    let (internal, external) = split_links(seed, extracted.links);

    tracing::trace!(
        "Parsed {}: {} internal, {} external links",
        url,
        internal.len(),
        external.len()
    );

    PageResult::crawled(
        url,
        LinkSets {
            internal,
            external,
            mailto: extracted.mailto,
            non_html: extracted.non_crawlable,
        },
    )
}
