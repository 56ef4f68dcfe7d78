//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the HTTP client with the configured timeout and user agent
//! - GET requests that return status, content type and body
//! - Classifying transport failures into [`FetchError`]
//!
//! Status and content-type policy lives with the caller; the fetcher only
//! avoids downloading bodies the caller would throw away.

use crate::config::FetchConfig;
use crate::FetchError;
use reqwest::{header::CONTENT_TYPE, Client};
use std::future::Future;

/// A response the server actually produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// HTTP status code
    pub status_code: u16,

    /// Content-Type header value, empty if absent
    pub content_type: String,

    /// Page body; left empty when the page will not be parsed
    pub body: String,
}

impl FetchedPage {
    /// Returns true for statuses in the accepted [200, 400) range
    pub fn is_acceptable_status(&self) -> bool {
        (200..400).contains(&self.status_code)
    }

    /// Returns true if the Content-Type header indicates HTML
    pub fn is_html(&self) -> bool {
        is_html_content_type(&self.content_type)
    }
}

/// Source of pages for the crawler
///
/// Implemented by [`HttpFetcher`] for real crawls; tests substitute in-memory
/// sites.
pub trait Fetch: Send + Sync + 'static {
    /// Retrieves `url`, failing only on transport errors
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FetchedPage, FetchError>> + Send;
}

/// Fetcher backed by a shared `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher from the transport configuration
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FetchedPage, FetchError>> + Send {
        fetch_url(&self.client, url)
    }
}

/// Builds an HTTP client with proper configuration
///
/// Redirects follow reqwest's default policy. The timeout covers the whole
/// exchange, body included.
///
/// # Example
///
/// ```no_run
/// use sitemapper::config::FetchConfig;
/// use sitemapper::crawler::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL, reading the body only for HTML pages with an acceptable status
pub async fn fetch_url(client: &Client, url: &str) -> Result<FetchedPage, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, &e))?;

    let status_code = response.status().as_u16();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let mut page = FetchedPage {
        status_code,
        content_type,
        body: String::new(),
    };

    if page.is_acceptable_status() && page.is_html() {
        page.body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Body {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            }
        })?;
    }

    Ok(page)
}

/// Maps a reqwest error onto the transport error taxonomy
fn classify_error(url: &str, e: &reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if e.is_connect() {
        FetchError::Connect {
            url: url.to_string(),
            message: e.to_string(),
        }
    } else {
        FetchError::Request {
            url: url.to_string(),
            message: e.to_string(),
        }
    }
}

/// Returns true if a Content-Type value indicates HTML
///
/// Matches any mention of `html`, so `application/xhtml+xml` counts too.
pub fn is_html_content_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("html")
}
