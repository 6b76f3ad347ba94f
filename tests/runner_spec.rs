use std::path::Path;
use std::time::Duration;

use chain_icons::runner::{fetch_chain_icon, RunOptions};
use chain_icons::{ChainEntry, IconFetcher, Manifest};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfakedata";

/// Integration tests need entries pointing at a mock server, but
/// `ChainEntry` holds `'static` references like the real table does.
fn test_chain(code: &'static str, urls: Vec<String>) -> ChainEntry {
    let urls: Vec<&'static str> = urls
        .into_iter()
        .map(|u| &*Box::leak(u.into_boxed_str()))
        .collect();
    ChainEntry {
        code,
        name: "Test Chain",
        urls: Box::leak(urls.into_boxed_slice()),
        color: "#123456",
    }
}

fn options(dir: &Path) -> RunOptions {
    RunOptions {
        output_dir: dir.to_path_buf(),
        timeout: Duration::from_millis(500),
    }
}

fn fetcher() -> IconFetcher {
    IconFetcher::new(Duration::from_millis(500)).expect("failed to build fetcher")
}

#[tokio::test]
async fn first_success_short_circuits_remaining_urls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/first.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(PNG_BYTES),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/second.png"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let chain = test_chain(
        "AAA",
        vec![
            format!("{}/first.png", server.uri()),
            format!("{}/second.png", server.uri()),
        ],
    );

    let dir = tempfile::tempdir().expect("tempdir");
    let ok = fetch_chain_icon(&fetcher(), &chain, &options(dir.path())).await;

    assert!(ok);
    assert_eq!(
        std::fs::read(dir.path().join("aaa.png")).expect("read"),
        PNG_BYTES
    );
    server.verify().await;
}

#[tokio::test]
async fn falls_through_timeout_and_html_to_working_source() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(PNG_BYTES)
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/error-page.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string("<html>not found</html>"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/good.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(PNG_BYTES),
        )
        .mount(&server)
        .await;

    let chain = test_chain(
        "TEST",
        vec![
            format!("{}/slow.png", server.uri()),
            format!("{}/error-page.png", server.uri()),
            format!("{}/good.png", server.uri()),
        ],
    );

    let dir = tempfile::tempdir().expect("tempdir");
    let ok = fetch_chain_icon(&fetcher(), &chain, &options(dir.path())).await;

    assert!(ok);
    assert_eq!(
        std::fs::read(dir.path().join("test.png")).expect("read"),
        PNG_BYTES
    );

    // The chain that made it to disk shows up in the manifest.
    let manifest = Manifest::from_registry(&[chain], dir.path());
    let entry = manifest.chains.get("TEST").expect("TEST entry missing");
    assert_eq!(entry.icon, "/icons/test.png");
}

#[tokio::test]
async fn all_sources_failing_leaves_no_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/html.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string("nope"),
        )
        .mount(&server)
        .await;

    let chain = test_chain(
        "BBB",
        vec![
            format!("{}/gone.png", server.uri()),
            format!("{}/html.png", server.uri()),
        ],
    );

    let dir = tempfile::tempdir().expect("tempdir");
    let ok = fetch_chain_icon(&fetcher(), &chain, &options(dir.path())).await;

    assert!(!ok);
    assert!(!dir.path().join("bbb.png").exists());

    let manifest = Manifest::from_registry(&[chain], dir.path());
    assert!(manifest.chains.is_empty());
}

#[tokio::test]
async fn refetches_even_when_file_already_present() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/logo.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(PNG_BYTES),
        )
        .expect(2)
        .mount(&server)
        .await;

    let chain = test_chain("CCC", vec![format!("{}/logo.png", server.uri())]);

    let dir = tempfile::tempdir().expect("tempdir");
    let opts = options(dir.path());
    let f = fetcher();

    assert!(fetch_chain_icon(&f, &chain, &opts).await);
    assert!(fetch_chain_icon(&f, &chain, &opts).await);

    server.verify().await;
}

#[tokio::test]
async fn stale_file_from_prior_run_survives_a_failing_run() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone.png"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let chain = test_chain("DDD", vec![format!("{}/gone.png", server.uri())]);

    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("ddd.png"), b"old icon").expect("write");

    let ok = fetch_chain_icon(&fetcher(), &chain, &options(dir.path())).await;

    assert!(!ok);
    assert_eq!(
        std::fs::read(dir.path().join("ddd.png")).expect("read"),
        b"old icon"
    );

    // Disk state wins: the stale icon still counts as available.
    let manifest = Manifest::from_registry(&[chain], dir.path());
    assert!(manifest.chains.contains_key("DDD"));
}
