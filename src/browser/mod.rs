//! Notebook Browser: browse notebook directories, preview files, import to the wiki.
//!
//! Every operation comes in three steps:
//!
//! - `begin_*` updates the [`ViewState`] and issues a ticket (no I/O)
//! - the caller performs the request through a [`NotebookApi`]
//! - `apply_*` renders the outcome, unless a newer request made the ticket stale
//!
//! The async functions (`list_directories`, `select_directory`, ...) chain the
//! three steps for callers that own the state for the whole operation. The
//! server uses the split form so no lock is held while a request is in flight.

pub mod render;
pub mod state;
pub mod ui;


use crate::client::NotebookApi;
use crate::error::ClientError;
use crate::models::{DirectoryCatalog, FileCatalog, FileRow, ImportStatus, UiEvent, WikiLink};

pub use state::{Slot, Ticket, ViewState};
pub use ui::{HtmlSurface, Ui};

/// A browser panel: its view state plus the surface it renders into.
#[derive(Debug, Default)]
pub struct BrowserSession {
    pub state: ViewState,
    pub surface: HtmlSurface,
}

impl BrowserSession {
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// List Directories
// ============================================================================

pub fn begin_list_directories(state: &mut ViewState) -> Ticket {
    state.issue(Slot::Directories)
}

pub fn apply_directories(
    state: &ViewState,
    ui: &mut impl Ui,
    ticket: Ticket,
    outcome: Result<DirectoryCatalog, ClientError>,
) {
    if !state.is_current(&ticket) {
        tracing::debug!("discarding stale directory listing");
        return;
    }
    if let Err(e) = &outcome {
        tracing::error!(error = %e, "Error loading directories");
    }
    ui.set_directory_options(render::directory_options(&outcome));
}

pub async fn list_directories(state: &mut ViewState, api: &impl NotebookApi, ui: &mut impl Ui) {
    let ticket = begin_list_directories(state);
    let outcome = api.list_directories().await;
    apply_directories(state, ui, ticket, outcome);
}

// ============================================================================
// Select Directory
// ============================================================================

/// Switch to `directory`. Returns `None` when there is nothing to fetch.
pub fn begin_select_directory(
    state: &mut ViewState,
    ui: &mut impl Ui,
    directory: &str,
) -> Option<Ticket> {
    state.enter_directory(directory);
    ui.set_import_enabled(false);
    ui.set_preview("");

    if directory.is_empty() {
        ui.set_file_rows(vec![FileRow::Info(render::SELECT_DIRECTORY_FIRST.to_string())]);
        return None;
    }
    Some(state.issue(Slot::Files))
}

pub fn apply_files(
    state: &ViewState,
    ui: &mut impl Ui,
    ticket: Ticket,
    directory: &str,
    outcome: Result<FileCatalog, ClientError>,
) {
    if !state.is_current(&ticket) {
        tracing::debug!(directory, "discarding stale file listing");
        return;
    }
    if let Err(e) = &outcome {
        tracing::error!(error = %e, directory, "Error loading files");
    }
    ui.set_file_rows(render::file_rows(directory, &outcome));
}

pub async fn select_directory(
    state: &mut ViewState,
    api: &impl NotebookApi,
    ui: &mut impl Ui,
    directory: &str,
) {
    let Some(ticket) = begin_select_directory(state, ui, directory) else {
        return;
    };
    let outcome = api.list_files(directory).await;
    apply_files(state, ui, ticket, directory, outcome);
}

// ============================================================================
// Select File
// ============================================================================

/// Files can only be opened from the directory currently selected.
pub fn begin_select_file(state: &mut ViewState, directory: &str, file: &str) -> Option<Ticket> {
    if state.current_directory() != Some(directory) {
        tracing::warn!(directory, file, "file selected outside the current directory");
        return None;
    }
    Some(state.issue(Slot::Preview))
}

pub fn apply_file(
    state: &mut ViewState,
    ui: &mut impl Ui,
    ticket: Ticket,
    file: &str,
    outcome: Result<String, ClientError>,
) {
    if !state.is_current(&ticket) {
        tracing::debug!(file, "discarding stale file content");
        return;
    }

    ui.set_preview(render::preview_text(&outcome));
    match outcome {
        Ok(content) => {
            state.load_file(file, content);
            ui.set_import_enabled(true);
        }
        Err(e) => {
            tracing::error!(error = %e, file, "Error loading file");
            state.clear_file();
            ui.set_import_enabled(false);
        }
    }
}

pub async fn select_file(
    state: &mut ViewState,
    api: &impl NotebookApi,
    ui: &mut impl Ui,
    directory: &str,
    file: &str,
) {
    let Some(ticket) = begin_select_file(state, directory, file) else {
        return;
    };
    let outcome = api.read_file(directory, file).await;
    apply_file(state, ui, ticket, file, outcome);
}

// ============================================================================
// Import
// ============================================================================

/// The pair an import was issued for.
#[derive(Debug, Clone)]
pub struct ImportRequest {
    pub ticket: Ticket,
    pub directory: String,
    pub file: String,
}

pub fn begin_import(state: &mut ViewState, ui: &mut impl Ui) -> Option<ImportRequest> {
    let Some((directory, file)) = state
        .selected_pair()
        .filter(|_| state.import_enabled())
        .map(|(d, f)| (d.to_string(), f.to_string()))
    else {
        ui.alert(render::SELECT_FILE_FIRST);
        return None;
    };

    Some(ImportRequest {
        ticket: state.issue(Slot::Import),
        directory,
        file,
    })
}

/// Report the import result. The wiki link is only added while the
/// imported file is still the one on screen.
pub fn apply_import(
    state: &ViewState,
    ui: &mut impl Ui,
    api: &impl NotebookApi,
    request: &ImportRequest,
    outcome: Result<ImportStatus, ClientError>,
) {
    match &outcome {
        Ok(ImportStatus::Rejected(status)) => {
            tracing::warn!(status, file = %request.file, "wiki import rejected");
        }
        Err(e) => tracing::error!(error = %e, file = %request.file, "Error importing file"),
        Ok(ImportStatus::Imported) => {
            tracing::info!(directory = %request.directory, file = %request.file, "imported to wiki");
        }
    }
    ui.alert(render::import_notice(&outcome));

    let still_shown = state.is_current(&request.ticket)
        && state.selected_pair() == Some((request.directory.as_str(), request.file.as_str()));
    if matches!(outcome, Ok(ImportStatus::Imported)) && still_shown {
        ui.append_link(WikiLink {
            href: api.page_url(render::wiki_page_name(&request.file)),
            text: render::WIKI_LINK_TEXT.to_string(),
        });
    }
}

pub async fn import(state: &mut ViewState, api: &impl NotebookApi, ui: &mut impl Ui) {
    let Some(request) = begin_import(state, ui) else {
        return;
    };
    let outcome = api.import_to_wiki(&request.directory, &request.file).await;
    apply_import(state, ui, api, &request, outcome);
}

// ============================================================================
// Event Dispatch
// ============================================================================

pub async fn dispatch(
    state: &mut ViewState,
    api: &impl NotebookApi,
    ui: &mut impl Ui,
    event: UiEvent,
) {
    match event {
        UiEvent::Ready => list_directories(state, api, ui).await,
        UiEvent::DirectoryChanged(directory) => select_directory(state, api, ui, &directory).await,
        UiEvent::FileClicked { directory, file } => {
            select_file(state, api, ui, &directory, &file).await
        }
        UiEvent::ImportClicked => import(state, api, ui).await,
    }
}
