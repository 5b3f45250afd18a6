//! A stand-in for the unified interface's notebook service.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
pub struct StubCounters {
    pub requests: AtomicUsize,
    pub imports: AtomicUsize,
    pub listings: AtomicUsize,
    /// Number of leading `/notebooks` calls answered with 503.
    pub failing_listings: usize,
}

impl StubCounters {
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn imports(&self) -> usize {
        self.imports.load(Ordering::SeqCst)
    }

    pub fn listings(&self) -> usize {
        self.listings.load(Ordering::SeqCst)
    }
}

async fn directories(State(c): State<Arc<StubCounters>>) -> impl IntoResponse {
    c.requests.fetch_add(1, Ordering::SeqCst);
    let listing = c.listings.fetch_add(1, Ordering::SeqCst);
    if listing < c.failing_listings {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    Json(json!({ "directories": ["math", "bio"] })).into_response()
}

async fn files(State(c): State<Arc<StubCounters>>, Path(dir): Path<String>) -> impl IntoResponse {
    c.requests.fetch_add(1, Ordering::SeqCst);
    match dir.as_str() {
        "math" => Json(json!({ "files": ["notes.txt"] })).into_response(),
        "bio" => Json(json!({ "files": [] })).into_response(),
        "lab notes" => Json(json!({ "files": ["week 1.txt"] })).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn content(
    State(c): State<Arc<StubCounters>>,
    Path((dir, file)): Path<(String, String)>,
) -> impl IntoResponse {
    c.requests.fetch_add(1, Ordering::SeqCst);
    match (dir.as_str(), file.as_str()) {
        ("math", "notes.txt") => "hello".into_response(),
        ("lab notes", "week 1.txt") => "spaces survive".into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn import(
    State(c): State<Arc<StubCounters>>,
    Path((dir, file)): Path<(String, String)>,
) -> StatusCode {
    c.requests.fetch_add(1, Ordering::SeqCst);
    c.imports.fetch_add(1, Ordering::SeqCst);
    if dir == "math" && file == "notes.txt" {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Serve `router` on an ephemeral local port.
pub async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Start the notebook stub, returning its base URL and request counters.
pub async fn spawn_notebook_service() -> (String, Arc<StubCounters>) {
    spawn_flaky_notebook_service(0).await
}

/// Like [`spawn_notebook_service`], but the first `failures` directory listings answer 503.
pub async fn spawn_flaky_notebook_service(failures: usize) -> (String, Arc<StubCounters>) {
    let counters = Arc::new(StubCounters {
        failing_listings: failures,
        ..Default::default()
    });
    let router = Router::new()
        .route("/notebooks", get(directories))
        .route("/notebooks/{dir}", get(files))
        .route("/notebooks/{dir}/{file}", get(content))
        .route("/notebooks/wiki/{dir}/{file}", post(import))
        .with_state(counters.clone());

    let addr = spawn(router).await;
    (format!("http://{}", addr), counters)
}

/// Base URL that refuses connections.
pub async fn dead_service() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
