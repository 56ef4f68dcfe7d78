//! Scheduler for managing the crawl frontier and termination
//!
//! This module owns all shared crawl state:
//! - The visited set, which only ever grows
//! - The frontier of URLs queued for the next batch
//! - The four link accumulators
//! - The max-visited termination flag
//!
//! Workers never touch this state. They hand back [`PageResult`]s and the
//! scheduler commits them one at a time, which keeps every mutation on a
//! single path.

use crate::crawler::links::LinkSets;
use crate::url::path_depth;
use crate::FetchError;
use std::collections::HashSet;
use std::fmt;

/// Why a page contributed no links
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The URL is not on the seed's host
    ExternalHost,

    /// DNS, connection, timeout or protocol failure
    Transport(FetchError),

    /// Status outside [200, 400)
    HttpStatus(u16),

    /// Content-Type does not indicate HTML
    NonHtml(String),

    /// The URL could not serve as a base for resolving references
    InvalidBase(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExternalHost => write!(f, "external or subdomain"),
            Self::Transport(e) => write!(f, "{}", e),
            Self::HttpStatus(code) => write!(f, "HTTP {}", code),
            Self::NonHtml(content_type) => {
                write!(f, "Non-HTML content type ({})", content_type)
            }
            Self::InvalidBase(reason) => write!(f, "invalid URL ({})", reason),
        }
    }
}

/// What a worker found for one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    /// The URL that was processed
    pub url: String,

    /// Links found on the page, already split by host
    pub links: LinkSets,

    /// Set when the page yielded nothing
    pub skipped: Option<SkipReason>,
}

impl PageResult {
    /// A page that was fetched and parsed
    pub fn crawled(url: String, links: LinkSets) -> Self {
        Self {
            url,
            links,
            skipped: None,
        }
    }

    /// A page that contributes no links
    pub fn skipped(url: String, reason: SkipReason) -> Self {
        Self {
            url,
            links: LinkSets::default(),
            skipped: Some(reason),
        }
    }
}

/// Outcome of committing one page result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// Keep processing completions
    Continue,

    /// The visit limit was reached; no further results are accepted
    LimitReached,
}

/// Scheduler owns the frontier, the visited set and the link accumulators
#[derive(Debug)]
pub struct Scheduler {
    /// Stop once this many URLs are visited (0 = unlimited)
    max_visited: usize,

    /// Only queue links at most this deep (0 = unlimited)
    max_depth: usize,

    /// URLs whose results have been committed
    visited: HashSet<String>,

    /// URLs queued for the next batch
    frontier: HashSet<String>,

    /// URLs of the batch currently being fetched
    in_flight: HashSet<String>,

    /// Everything discovered so far
    links: LinkSets,

    terminated: bool,
}

impl Scheduler {
    /// Creates a scheduler whose frontier holds only the seed
    pub fn new(seed: impl Into<String>, max_visited: usize, max_depth: usize) -> Self {
        let mut frontier = HashSet::new();
        frontier.insert(seed.into());

        Self {
            max_visited,
            max_depth,
            visited: HashSet::new(),
            frontier,
            in_flight: HashSet::new(),
            links: LinkSets::default(),
            terminated: false,
        }
    }

    /// Takes the whole frontier as the next batch
    ///
    /// Returns `None` once the crawl has terminated or there is nothing left
    /// to fetch. The batch is sorted so dispatch order is reproducible.
    pub fn next_batch(&mut self) -> Option<Vec<String>> {
        if self.terminated || self.frontier.is_empty() {
            return None;
        }

        let mut batch: Vec<String> = std::mem::take(&mut self.frontier).into_iter().collect();
        batch.sort();

        self.in_flight = batch.iter().cloned().collect();
        Some(batch)
    }

    /// Commits one worker result into the shared state
    ///
    /// Marks the URL visited, checks the visit limit, queues new internal
    /// links that pass the depth filter, and merges every link category into
    /// the accumulators. When the limit trips, the triggering result is still
    /// recorded but nothing more is queued and later commits are ignored.
    pub fn commit(&mut self, result: PageResult) -> Commit {
        if self.terminated {
            tracing::trace!("Discarding result for {} after termination", result.url);
            return Commit::LimitReached;
        }

        self.in_flight.remove(&result.url);
        self.visited.insert(result.url);

        if self.max_visited > 0 && self.visited.len() >= self.max_visited {
            tracing::debug!("Reached max limit of {} internal links.", self.max_visited);
            self.terminated = true;
            self.in_flight.clear();
            self.frontier.clear();
            self.links.merge(result.links);
            return Commit::LimitReached;
        }

        for link in &result.links.internal {
            if self.should_queue(link) {
                self.frontier.insert(link.clone());
            }
        }

        self.links.merge(result.links);
        Commit::Continue
    }

    /// Returns true if a discovered internal link belongs in the next batch
    fn should_queue(&self, link: &str) -> bool {
        !self.visited.contains(link)
            && !self.frontier.contains(link)
            && !self.in_flight.contains(link)
            && (self.max_depth == 0 || path_depth(link) <= self.max_depth)
    }

    /// Returns the number of URLs visited so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Returns true if `url` has been visited
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Returns the number of URLs waiting for the next batch
    pub fn frontier_size(&self) -> usize {
        self.frontier.len()
    }

    /// Returns true if the URL is queued for the next batch
    pub fn is_queued(&self, url: &str) -> bool {
        self.frontier.contains(url)
    }

    /// Returns whether the visit limit has stopped the crawl
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Gets the links accumulated so far
    pub fn links(&self) -> &LinkSets {
        &self.links
    }

    /// Consumes the scheduler, yielding the final link sets
    pub fn into_links(self) -> LinkSets {
        self.links
    }
}
