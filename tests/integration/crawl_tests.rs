//! End-to-end crawls against mock servers

use sitewalk::config::{Config, CrawlerConfig, InputConfig, OutputConfig};
use sitewalk::crawler::{
    run_crawl, Coordinator, FrontierWalker, HttpFetcher, TruncationReason, WalkLimits,
    WalkOutcome,
};
use sitewalk::state::PageState;
use sitewalk::{CrawlError, ManifestError};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration reading `manifest` and writing into `dir`
fn create_test_config(dir: &Path, manifest: &Path) -> Config {
    Config {
        crawler: CrawlerConfig {
            fetch_timeout_secs: 1,
            max_pages_per_seed: None,
            max_seconds_per_seed: None,
        },
        input: InputConfig {
            manifest_path: manifest.display().to_string(),
        },
        output: OutputConfig {
            urls_path: dir.join("urls.txt").display().to_string(),
            sort: true,
        },
    }
}

/// Writes a sitemap-style manifest with one record per seed
fn write_manifest(dir: &Path, seeds: &[String]) -> std::path::PathBuf {
    let records: Vec<serde_json::Value> = seeds
        .iter()
        .enumerate()
        .map(|(i, url)| serde_json::json!({ "text": format!("Site {}", i), "url": url, "sublinks": [] }))
        .collect();
    let path = dir.join("site_titles_urls.json");
    std::fs::write(&path, serde_json::to_string_pretty(&records).unwrap()).unwrap();
    path
}

async fn mount_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(server)
        .await;
}

/// The two-page site: `/` links to `/page1`, an external host and a fragment;
/// `/page1` links back home.
async fn start_two_page_site() -> MockServer {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r##"<html><body>
            <a href="/page1">Page 1</a>
            <a href="http://other.test/x">Elsewhere</a>
            <a href="#frag">Jump</a>
        </body></html>"##,
    )
    .await;
    mount_page(
        &server,
        "/page1",
        r#"<html><body><a href="/">Home</a></body></html>"#,
    )
    .await;
    server
}

fn quick_fetcher() -> Arc<HttpFetcher> {
    Arc::new(
        HttpFetcher::new(&CrawlerConfig {
            fetch_timeout_secs: 1,
            ..CrawlerConfig::default()
        })
        .expect("Failed to build fetcher"),
    )
}

#[tokio::test]
async fn test_end_to_end_two_page_site() {
    let server = start_two_page_site().await;
    let base = server.uri();

    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(dir.path(), &[base.clone()]);
    let config = create_test_config(dir.path(), &manifest);

    let report = run_crawl(&config).await.expect("Crawl failed");

    let expected: HashSet<String> = [format!("{}/", base), format!("{}/page1", base)]
        .into_iter()
        .collect();

    let seed = Url::parse(&format!("{}/", base)).unwrap();
    let result = report.result_for(&seed).expect("Missing seed result");
    let visited: HashSet<String> = result.visited.iter().map(|u| u.to_string()).collect();
    assert_eq!(visited, expected);
    assert_eq!(result.outcome, WalkOutcome::Complete);
    assert_eq!(report.seed_count, 1);

    let content = std::fs::read_to_string(dir.path().join("urls.txt")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines.iter().map(|l| l.to_string()).collect::<HashSet<_>>(), expected);
}

#[tokio::test]
async fn test_unreachable_seed_is_isolated() {
    let server = start_two_page_site().await;
    let seed_a = Url::parse(&format!("{}/", server.uri())).unwrap();
    let seed_b = Url::parse("http://127.0.0.1:1/").unwrap();

    let coordinator = Coordinator::new(quick_fetcher(), WalkLimits::unlimited());
    let report = coordinator
        .run(vec![seed_a.clone(), seed_b.clone()])
        .await;

    let a = report.result_for(&seed_a).expect("Missing result for A");
    assert_eq!(a.visited.len(), 2);
    assert_eq!(a.failures(), 0);

    let b = report.result_for(&seed_b).expect("Missing result for B");
    assert_eq!(b.visited.len(), 1);
    assert!(b.visited.contains(&seed_b));
    assert_eq!(b.pages_by_state.get(&PageState::Unreachable), Some(&1));

    assert_eq!(report.total_urls(), 3);
    assert_eq!(report.failed_walks, 0);
}

#[tokio::test]
async fn test_dead_and_slow_pages_are_leaves() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<a href="/missing">404</a><a href="/broken">500</a><a href="/slow">slow</a>"#,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<a href="/never-seen">hidden</a>"#)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let seed = Url::parse(&format!("{}/", server.uri())).unwrap();
    let result = FrontierWalker::new(seed, quick_fetcher(), WalkLimits::unlimited())
        .run()
        .await
        .expect("Walk failed");

    assert_eq!(result.visited.len(), 4);
    assert_eq!(result.pages_by_state.get(&PageState::Processed), Some(&1));
    assert_eq!(result.pages_by_state.get(&PageState::HttpError), Some(&2));
    assert_eq!(result.pages_by_state.get(&PageState::Unreachable), Some(&1));
    assert!(!result
        .visited
        .iter()
        .any(|u| u.path() == "/never-seen"));
}

#[tokio::test]
async fn test_query_variants_fetched_once() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<a href="/a?x=1">a1</a><a href="/a?x=2">a2</a><a href="/a#top">a3</a><a href="a">a4</a>"#,
    )
    .await;
    mount_page(&server, "/a", r#"<a href="/?from=a">home</a>"#).await;

    let seed = Url::parse(&format!("{}/", server.uri())).unwrap();
    let result = FrontierWalker::new(seed, quick_fetcher(), WalkLimits::unlimited())
        .run()
        .await
        .expect("Walk failed");

    assert_eq!(result.visited.len(), 2);
    // `expect(1)` on each mock is verified when the server drops
}

#[tokio::test]
async fn test_page_limit_from_config() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<a href="/1">1</a><a href="/2">2</a><a href="/3">3</a><a href="/4">4</a>"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("leaf"))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(dir.path(), &[server.uri()]);
    let mut config = create_test_config(dir.path(), &manifest);
    config.crawler.max_pages_per_seed = Some(3);

    let report = run_crawl(&config).await.expect("Crawl failed");

    assert_eq!(report.total_urls(), 3);
    let result = &report.results[0];
    assert_eq!(
        result.outcome,
        WalkOutcome::Truncated {
            reason: TruncationReason::PageLimit,
            pending: 2,
        }
    );

    let content = std::fs::read_to_string(dir.path().join("urls.txt")).unwrap();
    assert_eq!(content.lines().count(), 3);
}

#[tokio::test]
async fn test_missing_manifest_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = create_test_config(dir.path(), &dir.path().join("absent.json"));

    let err = run_crawl(&config).await.unwrap_err();
    assert!(matches!(
        err,
        CrawlError::Manifest(ManifestError::Io { .. })
    ));
    assert!(!dir.path().join("urls.txt").exists());
}

#[tokio::test]
async fn test_multiple_seeds_merged_into_one_file() {
    let first = start_two_page_site().await;
    let second = MockServer::start().await;
    mount_page(&second, "/", r#"<a href="/about">About</a>"#).await;
    mount_page(&second, "/about", "").await;

    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(dir.path(), &[first.uri(), second.uri()]);
    let config = create_test_config(dir.path(), &manifest);

    let report = run_crawl(&config).await.expect("Crawl failed");
    assert_eq!(report.seed_count, 2);
    assert_eq!(report.total_urls(), 4);

    let content = std::fs::read_to_string(dir.path().join("urls.txt")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    let mut sorted = lines.clone();
    sorted.sort();
    assert_eq!(lines, sorted);
    assert_eq!(lines.len(), 4);
}

#[tokio::test]
async fn test_redirect_off_site_is_not_harvested() {
    let site = MockServer::start().await;
    let other = MockServer::start().await;

    mount_page(&site, "/", r#"<a href="/go">Go</a>"#).await;
    Mock::given(method("GET"))
        .and(path("/go"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("location", format!("{}/offsite", other.uri()).as_str()),
        )
        .expect(1)
        .mount(&site)
        .await;
    Mock::given(method("GET"))
        .and(path("/only-on-other"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&site)
        .await;
    mount_page(&other, "/offsite", r#"<a href="/only-on-other">Other</a>"#).await;

    let seed = Url::parse(&format!("{}/", site.uri())).unwrap();
    let result = FrontierWalker::new(seed, quick_fetcher(), WalkLimits::unlimited())
        .run()
        .await
        .expect("Walk failed");

    let mut paths: Vec<&str> = result.visited.iter().map(|u| u.path()).collect();
    paths.sort();
    assert_eq!(paths, vec!["/", "/go"]);
    assert!(result.visited.iter().all(|u| u.port() == seed_port(&site)));
}

#[tokio::test]
async fn test_redirect_within_site_resolves_against_target() {
    let server = MockServer::start().await;
    mount_page(&server, "/", r#"<a href="/old">Old</a>"#).await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/docs/index"))
        .expect(1)
        .mount(&server)
        .await;
    mount_page(&server, "/docs/index", r#"<a href="guide">Guide</a>"#).await;
    mount_page(&server, "/docs/guide", "").await;

    let seed = Url::parse(&format!("{}/", server.uri())).unwrap();
    let result = FrontierWalker::new(seed, quick_fetcher(), WalkLimits::unlimited())
        .run()
        .await
        .expect("Walk failed");

    let mut paths: Vec<&str> = result.visited.iter().map(|u| u.path()).collect();
    paths.sort();
    assert_eq!(paths, vec!["/", "/docs/guide", "/old"]);
    assert_eq!(result.failures(), 0);
}

fn seed_port(server: &MockServer) -> Option<u16> {
    Some(server.address().port())
}

#[tokio::test]
async fn test_empty_manifest_reports_zero() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(dir.path(), &[]);
    let config = create_test_config(dir.path(), &manifest);

    let report = run_crawl(&config).await.expect("Crawl failed");
    assert_eq!(report.seed_count, 0);
    assert_eq!(report.total_urls(), 0);

    let content = std::fs::read_to_string(dir.path().join("urls.txt")).unwrap();
    assert!(content.is_empty());
}
