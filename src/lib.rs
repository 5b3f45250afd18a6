//! Interface enhancements - library root.
//!
//! Exposes the Fragment Injector, the Notebook Browser and the enhancement
//! server's routes for the binary and for tests.

use axum::{routing::get, routing::post, Router};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tower_http::services::ServeDir;

pub mod browser;
pub mod client;
pub mod error;
pub mod handlers;
pub mod injector;
pub mod models;
pub mod templates;

use browser::BrowserSession;
use client::HttpNotebookClient;
use error::ClientError;
use injector::FileFragmentSource;

// ============================================================================
// Configuration
// ============================================================================

pub const NOTEBOOK_API_URL: &str = "http://localhost:3003";
pub const ENHANCEMENTS_PORT: u16 = 3005;
pub const ENHANCEMENTS_DIR: &str = "public";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the unified interface's notebook service.
    pub notebook_api_url: String,
    pub port: u16,
    /// Directory served as static files; also holds `enhancements.html`.
    pub assets_dir: PathBuf,
}

impl Config {
    /// Read `NOTEBOOK_API_URL`, `ENHANCEMENTS_PORT` and `ENHANCEMENTS_DIR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Invalid values are logged and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let notebook_api_url = match lookup("NOTEBOOK_API_URL") {
            Some(raw) if url::Url::parse(&raw).is_ok() => raw,
            Some(raw) => {
                tracing::warn!(value = %raw, "invalid NOTEBOOK_API_URL, using default");
                NOTEBOOK_API_URL.to_string()
            }
            None => NOTEBOOK_API_URL.to_string(),
        };

        let port = match lookup("ENHANCEMENTS_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "invalid ENHANCEMENTS_PORT, using default");
                ENHANCEMENTS_PORT
            }),
            None => ENHANCEMENTS_PORT,
        };

        let assets_dir = lookup("ENHANCEMENTS_DIR")
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| ENHANCEMENTS_DIR.to_string());

        Self {
            notebook_api_url,
            port,
            assets_dir: PathBuf::from(assets_dir),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

// ============================================================================
// Application State
// ============================================================================

pub struct AppState {
    pub config: Config,
    pub api: HttpNotebookClient,
    pub fragment: FileFragmentSource,
    session: Mutex<BrowserSession>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, ClientError> {
        let api = HttpNotebookClient::new(&config.notebook_api_url)?;
        let fragment = FileFragmentSource::in_dir(&config.assets_dir);

        Ok(Self {
            config,
            api,
            fragment,
            session: Mutex::new(BrowserSession::new()),
        })
    }

    /// The single browser panel session. Never hold the guard across an `.await`.
    pub fn session(&self) -> MutexGuard<'_, BrowserSession> {
        self.session.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn app(state: Arc<AppState>) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/browser", get(handlers::browser_page))
        .route("/browser/directory", post(handlers::select_directory))
        .route("/browser/file", post(handlers::select_file))
        .route("/browser/import", post(handlers::import))
        .route("/enhanced/{*page}", get(handlers::enhanced_page))
        .fallback_service(assets)
        .with_state(state)
}

/// Resolve `target` and check it is an existing path inside `base`.
pub fn resolve_within(base: &Path, target: &Path) -> Result<PathBuf, String> {
    let canonical_base =
        fs::canonicalize(base).map_err(|e| format!("Cannot resolve base directory: {}", e))?;
    let canonical =
        fs::canonicalize(target).map_err(|e| format!("Cannot resolve path: {}", e))?;

    if canonical.starts_with(&canonical_base) {
        Ok(canonical)
    } else {
        Err("Path escapes base directory".to_string())
    }
}

pub use browser::{dispatch, HtmlSurface, Ui, ViewState};
pub use client::NotebookApi;
pub use injector::{inject_enhancements, HtmlDocument, InjectOutcome, Page};
pub use models::{DirectoryCatalog, FileCatalog, FileRow, ImportStatus, SelectOption, UiEvent};
