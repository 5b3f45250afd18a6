//! HTTP route handlers for the enhancement server.
//!
//! The `/browser` routes drive the Notebook Browser session. Each handler
//! prepares the request under the session lock, releases it while the
//! notebook service answers, then applies the outcome under the lock again.

use crate::browser::{self, BrowserSession};
use crate::client::NotebookApi;
use crate::injector::{inject_enhancements, HtmlDocument, InjectOutcome};
use crate::templates::render_browser;
use crate::{resolve_within, AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;

/// Where the `/browser/*` actions land: the panel, without reloading the directory list.
const PANEL_PATH: &str = "/browser?resume=true";

// ============================================================================
// Browser Panel
// ============================================================================

#[derive(Deserialize, Default)]
pub struct PanelQuery {
    #[serde(default)]
    pub resume: bool,
}

/// Render the panel. A page load lists directories; re-rendering after an action does not.
pub async fn browser_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PanelQuery>,
) -> Html<String> {
    if !query.resume {
        let ticket = browser::begin_list_directories(&mut state.session().state);
        let outcome = state.api.list_directories().await;
        let mut session = state.session();
        let BrowserSession { state: view, surface } = &mut *session;
        browser::apply_directories(view, surface, ticket, outcome);
    }

    let mut session = state.session();
    let alerts = session.surface.take_alerts();
    Html(render_browser(&session.state, &session.surface, &alerts))
}

#[derive(Deserialize)]
pub struct DirectoryForm {
    #[serde(default)]
    pub directory: String,
}

pub async fn select_directory(
    State(state): State<Arc<AppState>>,
    Form(form): Form<DirectoryForm>,
) -> Redirect {
    let ticket = {
        let mut session = state.session();
        let BrowserSession { state: view, surface } = &mut *session;
        browser::begin_select_directory(view, surface, &form.directory)
    };

    if let Some(ticket) = ticket {
        let outcome = state.api.list_files(&form.directory).await;
        let mut session = state.session();
        let BrowserSession { state: view, surface } = &mut *session;
        browser::apply_files(view, surface, ticket, &form.directory, outcome);
    }

    Redirect::to(PANEL_PATH)
}

#[derive(Deserialize)]
pub struct FileForm {
    pub directory: String,
    pub file: String,
}

pub async fn select_file(
    State(state): State<Arc<AppState>>,
    Form(form): Form<FileForm>,
) -> Redirect {
    let ticket = {
        let mut session = state.session();
        browser::begin_select_file(&mut session.state, &form.directory, &form.file)
    };

    if let Some(ticket) = ticket {
        let outcome = state.api.read_file(&form.directory, &form.file).await;
        let mut session = state.session();
        let BrowserSession { state: view, surface } = &mut *session;
        browser::apply_file(view, surface, ticket, &form.file, outcome);
    }

    Redirect::to(PANEL_PATH)
}

pub async fn import(State(state): State<Arc<AppState>>) -> Redirect {
    let request = {
        let mut session = state.session();
        let BrowserSession { state: view, surface } = &mut *session;
        browser::begin_import(view, surface)
    };

    if let Some(request) = request {
        let outcome = state
            .api
            .import_to_wiki(&request.directory, &request.file)
            .await;
        let mut session = state.session();
        let BrowserSession { state: view, surface } = &mut *session;
        browser::apply_import(view, surface, &state.api, &request, outcome);
    }

    Redirect::to(PANEL_PATH)
}

// ============================================================================
// Enhanced Host Pages
// ============================================================================

/// Serve a host page from the assets directory with the fragment spliced in.
pub async fn enhanced_page(
    State(state): State<Arc<AppState>>,
    Path(page): Path<String>,
) -> Response {
    let assets_dir = &state.config.assets_dir;
    let path = match resolve_within(assets_dir, &assets_dir.join(&page)) {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!(page = %page, error = %e, "host page not served");
            return (StatusCode::NOT_FOUND, "Page not found").into_response();
        }
    };

    let source = match tokio::fs::read_to_string(&path).await {
        Ok(source) => source,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read host page");
            return (StatusCode::NOT_FOUND, "Page not found").into_response();
        }
    };

    let mut document = HtmlDocument::new(source);
    let outcome = inject_enhancements(&mut document, &state.fragment).await;
    if outcome != InjectOutcome::Injected {
        tracing::debug!(page = %page, ?outcome, "host page served without enhancements");
    }

    Html(document.into_string()).into_response()
}
