//! Output module for rendering crawl results
//!
//! This module handles:
//! - Rolling links up into directory views
//! - Rendering the internal, external, mailto and non-HTML sections
//! - The live "Crawled: N URLs" progress line

mod progress;
mod report;

pub use progress::ProgressLine;
pub use report::{print_report, to_directories, write_report};
