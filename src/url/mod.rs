//! URL classification for Sitemapper
//!
//! This module decides whether a URL belongs to the crawled site and how deep
//! its path is. Classification never fails: malformed URLs degrade to an empty
//! hostname and a depth of zero so they can never stall the crawl.

mod depth;
mod domain;

pub use depth::path_depth;
pub use domain::{hostname_of, is_internal, split_links};
