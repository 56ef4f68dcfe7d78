//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and drive the real
//! HTTP fetcher through full crawls.

use sitemapper::config::{parse_seed_url, CrawlConfig, FetchConfig};
use sitemapper::crawler::{crawl, Coordinator, HttpFetcher};
use sitemapper::output::write_report;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with a short timeout
fn create_test_config(workers: usize, max_visited: usize, max_depth: usize) -> CrawlConfig {
    CrawlConfig {
        workers,
        max_visited,
        max_depth,
        verbose: false,
        full_links: false,
        fetch: FetchConfig {
            timeout: Duration::from_secs(2),
            user_agent: "TestBot/1.0".to_string(),
        },
    }
}

fn html(body: impl Into<String>) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.into(), "text/html; charset=utf-8")
}

async fn mount_page(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_single_page_link_classification() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html(
            r##"<html><body>
                <a href="/about">About</a>
                <a href="https://other.com">Other</a>
                <a href="mailto:x@y.com">Mail</a>
                <a href="#top">Top</a>
            </body></html>"##,
        ),
    )
    .await;

    let seed = parse_seed_url(&format!("{}/", base_url)).unwrap();
    let links = crawl(&create_test_config(1, 1, 0), &seed).await.unwrap();

    assert_eq!(
        links.internal.iter().cloned().collect::<Vec<_>>(),
        vec![format!("{}/about", base_url)]
    );
    // The URL serializer gives an empty path as "/", so "https://other.com" gains a slash
    assert_eq!(
        links.external.iter().cloned().collect::<Vec<_>>(),
        vec!["https://other.com/".to_string()]
    );
    assert_eq!(
        links.mailto.iter().cloned().collect::<Vec<_>>(),
        vec!["mailto:x@y.com".to_string()]
    );
    assert_eq!(
        links.non_html.iter().cloned().collect::<Vec<_>>(),
        vec!["#top".to_string()]
    );
}

#[tokio::test]
async fn test_full_crawl_follows_internal_links() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html(format!(
            r#"<html><head><link rel="stylesheet" href="/static/site.css"></head><body>
            <a href="{}/page1">Page 1</a>
            <a href="/page2">Page 2</a>
            </body></html>"#,
            base_url
        )),
    )
    .await;
    mount_page(
        &mock_server,
        "/page1",
        html(r#"<a href="/docs/guide">Guide</a><img src="https://cdn.test/logo.png">"#),
    )
    .await;
    mount_page(&mock_server, "/page2", html(r#"<a href="/">Home</a>"#)).await;
    mount_page(&mock_server, "/docs/guide", html("<p>Guide</p>")).await;
    Mock::given(method("GET"))
        .and(path("/static/site.css"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("body {}", "text/css"))
        .mount(&mock_server)
        .await;

    let seed = parse_seed_url(&format!("{}/", base_url)).unwrap();
    let links = crawl(&create_test_config(3, 0, 0), &seed).await.unwrap();

    for route in ["/page1", "/page2", "/docs/guide", "/static/site.css", "/"] {
        assert!(
            links.internal.contains(&format!("{}{}", base_url, route)),
            "missing internal link {}",
            route
        );
    }
    assert!(links.external.contains("https://cdn.test/logo.png"));

    // Every internal URL was requested exactly once
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 5);
}

#[tokio::test]
async fn test_dead_link_marks_visited_and_continues() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html(r#"<a href="/missing">Missing</a><a href="/alive">Alive</a>"#),
    )
    .await;
    mount_page(
        &mock_server,
        "/missing",
        ResponseTemplate::new(404).set_body_raw(r#"<a href="/secret">x</a>"#, "text/html"),
    )
    .await;
    mount_page(&mock_server, "/alive", html(r#"<a href="/leaf">Leaf</a>"#)).await;
    mount_page(&mock_server, "/leaf", html("<p>done</p>")).await;

    let seed = parse_seed_url(&format!("{}/", base_url)).unwrap();
    let links = crawl(&create_test_config(2, 0, 0), &seed).await.unwrap();

    assert!(links.internal.contains(&format!("{}/missing", base_url)));
    assert!(links.internal.contains(&format!("{}/leaf", base_url)));
    assert!(!links.internal.contains(&format!("{}/secret", base_url)));
}

#[tokio::test]
async fn test_non_html_pages_not_parsed() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", html(r#"<a href="/data.json">Data</a>"#)).await;
    mount_page(
        &mock_server,
        "/data.json",
        ResponseTemplate::new(200)
            .set_body_raw(r#"{"html": "<a href=\"/hidden\">x</a>"}"#, "application/json"),
    )
    .await;

    let seed = parse_seed_url(&format!("{}/", base_url)).unwrap();
    let links = crawl(&create_test_config(1, 0, 0), &seed).await.unwrap();

    assert_eq!(links.internal.len(), 1);
    assert!(!links.internal.contains(&format!("{}/hidden", base_url)));
}

#[tokio::test]
async fn test_depth_limit_with_http() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html(r#"<a href="/a/b/c">Deep</a><a href="/a">Shallow</a>"#),
    )
    .await;
    mount_page(&mock_server, "/a", html("<p>a</p>")).await;
    Mock::given(method("GET"))
        .and(path("/a/b/c"))
        .respond_with(html("<p>too deep</p>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let seed = parse_seed_url(&format!("{}/", base_url)).unwrap();
    let links = crawl(&create_test_config(2, 0, 1), &seed).await.unwrap();

    assert!(links.internal.contains(&format!("{}/a/b/c", base_url)));
    assert!(links.internal.contains(&format!("{}/a", base_url)));
    mock_server.verify().await;
}

#[tokio::test]
async fn test_max_visited_stops_self_linking_site() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Every page links to query-string variants of itself, so the frontier never empties
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<a href="/?p=1">1</a><a href="/?p=2">2</a><a href="/?p=3">3</a>"#,
        ))
        .mount(&mock_server)
        .await;

    let seed = parse_seed_url(&format!("{}/", base_url)).unwrap();
    let config = create_test_config(2, 3, 0);
    let fetcher = HttpFetcher::new(&config.fetch).unwrap();

    let mut last_count = 0;
    let links = tokio::time::timeout(
        Duration::from_secs(20),
        Coordinator::new(&config, &seed, fetcher)
            .with_progress(move |n| {
                assert!(n >= last_count);
                last_count = n;
            })
            .run(),
    )
    .await
    .expect("crawl did not terminate");

    assert!(links.internal.contains(&format!("{}/?p=1", base_url)));
    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.len() >= 3);
    assert!(requests.len() < 3 + 3);
}

#[tokio::test]
async fn test_unreachable_seed_reports_empty() {
    let seed = parse_seed_url("http://127.0.0.1:1/").unwrap();
    let links = crawl(&create_test_config(1, 0, 0), &seed).await.unwrap();
    assert!(links.is_empty());

    let mut out = Vec::new();
    write_report(&links, true, &mut out).unwrap();
    let report = String::from_utf8(out).unwrap();
    assert!(report.contains("Found 0 internal links:"));
    assert!(report.contains("Found 0 non-HTML links:"));
}

#[tokio::test]
async fn test_directory_report_for_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html(r#"<a href="/a/b">b</a><a href="/a/c">c</a><a href="https://other.com/x/y">y</a>"#),
    )
    .await;

    let seed = parse_seed_url(&format!("{}/", base_url)).unwrap();
    let links = crawl(&create_test_config(1, 1, 0), &seed).await.unwrap();

    let mut out = Vec::new();
    write_report(&links, false, &mut out).unwrap();
    let report = String::from_utf8(out).unwrap();

    assert!(report.contains(&format!(
        "Found 1 internal directories:\n{}/a/\n",
        base_url
    )));
    assert!(report.contains("Found 1 external directories:\nhttps://other.com/x/\n"));
    assert!(!report.contains("email links"));
}
