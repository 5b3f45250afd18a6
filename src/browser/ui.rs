//! The UI contract of the Notebook Browser and an in-memory implementation.

use crate::models::{FileRow, SelectOption, WikiLink};

/// Element ids the browser panel is built from.
pub const DIRECTORY_SELECT_ID: &str = "directory-select";
pub const FILE_LIST_ID: &str = "file-list";
pub const CONTENT_ID: &str = "notebook-content";
pub const IMPORT_BUTTON_ID: &str = "import-button";
pub const FILE_ITEM_CLASS: &str = "file-item";

/// The regions a handler may write to. Each call replaces the region's content,
/// except [`Ui::append_link`] and [`Ui::alert`].
pub trait Ui {
    fn set_directory_options(&mut self, options: Vec<SelectOption>);
    fn set_file_rows(&mut self, rows: Vec<FileRow>);
    fn set_preview(&mut self, text: &str);
    fn append_link(&mut self, link: WikiLink);
    fn set_import_enabled(&mut self, enabled: bool);
    fn alert(&mut self, message: &str);
}

/// Keeps the current content of every region; rendered to HTML by `templates`.
#[derive(Debug, Default, Clone)]
pub struct HtmlSurface {
    pub directory_options: Vec<SelectOption>,
    pub file_rows: Vec<FileRow>,
    pub preview: String,
    pub links: Vec<WikiLink>,
    pub import_enabled: bool,
    alerts: Vec<String>,
}

impl HtmlSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Alerts are shown once; rendering the panel drains them.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }
}

impl Ui for HtmlSurface {
    fn set_directory_options(&mut self, options: Vec<SelectOption>) {
        self.directory_options = options;
    }

    fn set_file_rows(&mut self, rows: Vec<FileRow>) {
        self.file_rows = rows;
    }

    fn set_preview(&mut self, text: &str) {
        self.preview = text.to_string();
        self.links.clear();
    }

    fn append_link(&mut self, link: WikiLink) {
        self.links.push(link);
    }

    fn set_import_enabled(&mut self, enabled: bool) {
        self.import_enabled = enabled;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
