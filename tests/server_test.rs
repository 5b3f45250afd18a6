//! Enhancement server routes, driven over HTTP.

mod common;

use interface_enhancements::injector::{FragmentSource, HttpFragmentSource};
use interface_enhancements::{app, AppState, Config};
use std::fs;
use std::sync::Arc;

const FRAGMENT: &str = r#"<section class="enhancements">notebooks</section>"#;
const HOST: &str = r#"<html><body><div class="container"><div class="views">main</div></div></body></html>"#;

struct Server {
    base: String,
    _assets: tempfile::TempDir,
}

async fn spawn_server(notebook_api_url: &str) -> Server {
    let assets = tempfile::tempdir().unwrap();
    fs::write(assets.path().join("enhancements.html"), FRAGMENT).unwrap();
    fs::write(assets.path().join("host.html"), HOST).unwrap();
    fs::write(assets.path().join("plain.html"), "<p>no anchors</p>").unwrap();

    let config = Config {
        notebook_api_url: notebook_api_url.to_string(),
        port: 0,
        assets_dir: assets.path().to_path_buf(),
    };
    let state = Arc::new(AppState::new(config).unwrap());
    let addr = common::spawn(app(state)).await;

    Server {
        base: format!("http://{}", addr),
        _assets: assets,
    }
}

#[tokio::test]
async fn test_serves_static_fragment() {
    let (api, _) = common::spawn_notebook_service().await;
    let server = spawn_server(&api).await;

    let body = reqwest::get(format!("{}/enhancements.html", server.base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, FRAGMENT);
}

#[tokio::test]
async fn test_http_fragment_source_fetch_and_missing() {
    let (api, _) = common::spawn_notebook_service().await;
    let server = spawn_server(&api).await;

    let source = HttpFragmentSource::new(&format!("{}/", server.base)).unwrap();
    assert_eq!(source.fetch().await.unwrap(), FRAGMENT);

    let missing = HttpFragmentSource::new(&format!("{}/nowhere/", server.base)).unwrap();
    assert!(missing.fetch().await.is_err());
}

#[tokio::test]
async fn test_enhanced_page_has_fragment_before_views() {
    let (api, _) = common::spawn_notebook_service().await;
    let server = spawn_server(&api).await;

    let body = reqwest::get(format!("{}/enhanced/host.html", server.base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(
        body,
        format!(
            r#"<html><body><div class="container"><div>{}</div><div class="views">main</div></div></body></html>"#,
            FRAGMENT
        )
    );
}

#[tokio::test]
async fn test_enhanced_page_without_anchors_is_unchanged() {
    let (api, _) = common::spawn_notebook_service().await;
    let server = spawn_server(&api).await;

    let response = reqwest::get(format!("{}/enhanced/plain.html", server.base))
        .await
        .unwrap();
    assert!(response.status().is_success());
    assert_eq!(response.text().await.unwrap(), "<p>no anchors</p>");

    let missing = reqwest::get(format!("{}/enhanced/absent.html", server.base))
        .await
        .unwrap();
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_browser_workflow() {
    let (api, counters) = common::spawn_notebook_service().await;
    let server = spawn_server(&api).await;
    let http = reqwest::Client::new();

    let page = http
        .get(format!("{}/browser", server.base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains(r#"<option value="">Select a directory...</option>"#));
    assert!(page.contains(r#"<option value="math">math</option>"#));
    assert!(page.contains(r#"id="import-button" disabled"#));

    let page = http
        .post(format!("{}/browser/directory", server.base))
        .form(&[("directory", "math")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains(r#"<option value="math" selected>math</option>"#));
    assert!(page.contains(r#"<button type="submit" class="file-item">notes.txt</button>"#));

    let page = http
        .post(format!("{}/browser/file", server.base))
        .form(&[("directory", "math"), ("file", "notes.txt")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("<pre>hello</pre>"));
    assert!(!page.contains(r#"id="import-button" disabled"#));

    let page = http
        .post(format!("{}/browser/import", server.base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("File imported to wiki successfully"));
    assert!(page.contains(&format!(r#"href="{}/pages/notes""#, api)));

    // Actions re-render the panel without listing directories again.
    assert_eq!(counters.listings(), 1);
    assert_eq!(counters.requests(), 4);

    let page = http
        .get(format!("{}/browser", server.base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(!page.contains("File imported to wiki successfully"));
    assert!(page.contains(r#"<option value="math" selected>math</option>"#));
    assert_eq!(counters.listings(), 2);
}

#[tokio::test]
async fn test_browser_reload_recovers_directory_listing() {
    let (api, counters) = common::spawn_flaky_notebook_service(1).await;
    let server = spawn_server(&api).await;
    let url = format!("{}/browser", server.base);

    let page = reqwest::get(&url).await.unwrap().text().await.unwrap();
    assert!(page.contains("Error loading directories"));

    let page = reqwest::get(&url).await.unwrap().text().await.unwrap();
    assert!(!page.contains("Error loading directories"));
    assert!(page.contains(r#"<option value="math">math</option>"#));
    assert_eq!(counters.listings(), 2);
}

#[tokio::test]
async fn test_browser_import_without_file_warns() {
    let (api, counters) = common::spawn_notebook_service().await;
    let server = spawn_server(&api).await;

    let page = reqwest::Client::new()
        .post(format!("{}/browser/import", server.base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(page.contains("Please select a file first"));
    assert_eq!(counters.imports(), 0);
}

#[tokio::test]
async fn test_browser_with_dead_service() {
    let server = spawn_server(&common::dead_service().await).await;

    let page = reqwest::get(format!("{}/browser", server.base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("Error loading directories"));
}
