//! Data models for the interface enhancements.
//!
//! Catalog payloads returned by the notebook service, plus the small
//! view-level values the Notebook Browser renders into its UI.

use serde::{Deserialize, Serialize};

// ============================================================================
// Notebook Service Payloads
// ============================================================================

/// Response body of `GET /notebooks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryCatalog {
    #[serde(default)]
    pub directories: Vec<String>,
}

/// Response body of `GET /notebooks/{directory}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileCatalog {
    #[serde(default)]
    pub files: Vec<String>,
}

/// How the notebook service answered an import request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStatus {
    Imported,
    Rejected(u16),
}

// ============================================================================
// View Values
// ============================================================================

/// One `<option>` of the directory selector. Placeholders carry an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }

    pub fn directory(name: &str) -> Self {
        Self {
            value: name.to_string(),
            label: name.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

/// A row of the file list. Clickable rows remember the pair they were listed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRow {
    File { directory: String, file: String },
    Info(String),
}

/// Link appended to the preview after a successful import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiLink {
    pub href: String,
    pub text: String,
}

/// Abstract UI events the Notebook Browser reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Ready,
    DirectoryChanged(String),
    FileClicked { directory: String, file: String },
    ImportClicked,
}
