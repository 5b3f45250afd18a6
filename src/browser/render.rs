//! Turns fetch outcomes into UI content.
//!
//! Nothing in here performs I/O; each function maps a `Result` from the
//! notebook client to what the corresponding UI region should show.

use crate::error::ClientError;
use crate::models::{DirectoryCatalog, FileCatalog, FileRow, ImportStatus, SelectOption};

pub const SELECT_DIRECTORY: &str = "Select a directory...";
pub const NO_DIRECTORIES: &str = "No directories found";
pub const DIRECTORIES_ERROR: &str = "Error loading directories";

pub const SELECT_DIRECTORY_FIRST: &str = "Select a directory first";
pub const NO_FILES: &str = "No files in this directory";
pub const FILES_ERROR: &str = "Error loading files";

pub const FILE_ERROR: &str = "Error loading file";

pub const SELECT_FILE_FIRST: &str = "Please select a file first";
pub const IMPORT_SUCCEEDED: &str = "File imported to wiki successfully";
pub const IMPORT_REJECTED: &str = "Failed to import to wiki";
pub const IMPORT_ERROR: &str = "Error importing file";

pub const WIKI_LINK_TEXT: &str = "View in Wiki";

/// Suffix stripped from notebook file names to get the wiki page name.
pub const NOTEBOOK_SUFFIX: &str = ".txt";

pub fn directory_options(outcome: &Result<DirectoryCatalog, ClientError>) -> Vec<SelectOption> {
    match outcome {
        Ok(catalog) if !catalog.directories.is_empty() => {
            let mut options = Vec::with_capacity(catalog.directories.len() + 1);
            options.push(SelectOption::placeholder(SELECT_DIRECTORY));
            options.extend(catalog.directories.iter().map(|d| SelectOption::directory(d)));
            options
        }
        Ok(_) => vec![SelectOption::placeholder(NO_DIRECTORIES)],
        Err(_) => vec![SelectOption::placeholder(DIRECTORIES_ERROR)],
    }
}

pub fn file_rows(directory: &str, outcome: &Result<FileCatalog, ClientError>) -> Vec<FileRow> {
    match outcome {
        Ok(catalog) if !catalog.files.is_empty() => catalog
            .files
            .iter()
            .map(|file| FileRow::File {
                directory: directory.to_string(),
                file: file.clone(),
            })
            .collect(),
        Ok(_) => vec![FileRow::Info(NO_FILES.to_string())],
        Err(_) => vec![FileRow::Info(FILES_ERROR.to_string())],
    }
}

pub fn preview_text(outcome: &Result<String, ClientError>) -> &str {
    match outcome {
        Ok(content) => content,
        Err(_) => FILE_ERROR,
    }
}

pub fn import_notice(outcome: &Result<ImportStatus, ClientError>) -> &'static str {
    match outcome {
        Ok(ImportStatus::Imported) => IMPORT_SUCCEEDED,
        Ok(ImportStatus::Rejected(_)) => IMPORT_REJECTED,
        Err(_) => IMPORT_ERROR,
    }
}

/// Wiki page name for a notebook file: the file name without its `.txt` suffix.
pub fn wiki_page_name(file: &str) -> &str {
    file.strip_suffix(NOTEBOOK_SUFFIX).unwrap_or(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport_error() -> ClientError {
        ClientError::Status {
            url: "http://localhost:3003/notebooks".to_string(),
            status: 500,
        }
    }

    fn catalog(names: &[&str]) -> DirectoryCatalog {
        DirectoryCatalog {
            directories: names.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_directory_options_sizes() {
        for names in [vec![], vec!["math"], vec!["math", "bio", "chem"]] {
            let options = directory_options(&Ok(catalog(&names)));
            let placeholders = options.iter().filter(|o| o.is_placeholder()).count();
            assert_eq!(placeholders, 1);
            assert_eq!(options.len() - 1, names.len());
        }
    }

    #[test]
    fn test_directory_options_keep_order() {
        let options = directory_options(&Ok(catalog(&["zoo", "alpha", "mid"])));
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec![SELECT_DIRECTORY, "zoo", "alpha", "mid"]);
    }

    #[test]
    fn test_directory_options_empty_and_error() {
        assert_eq!(
            directory_options(&Ok(catalog(&[]))),
            vec![SelectOption::placeholder(NO_DIRECTORIES)]
        );
        assert_eq!(
            directory_options(&Err(transport_error())),
            vec![SelectOption::placeholder(DIRECTORIES_ERROR)]
        );
    }

    #[test]
    fn test_file_rows_carry_their_pair() {
        let outcome = Ok(FileCatalog {
            files: vec!["a.txt".to_string(), "b.txt".to_string()],
        });
        let rows = file_rows("math", &outcome);
        assert_eq!(
            rows[1],
            FileRow::File {
                directory: "math".to_string(),
                file: "b.txt".to_string()
            }
        );
    }

    #[test]
    fn test_file_rows_placeholders() {
        assert_eq!(
            file_rows("math", &Ok(FileCatalog::default())),
            vec![FileRow::Info(NO_FILES.to_string())]
        );
        assert_eq!(
            file_rows("math", &Err(transport_error())),
            vec![FileRow::Info(FILES_ERROR.to_string())]
        );
    }

    #[test]
    fn test_import_notices() {
        assert_eq!(import_notice(&Ok(ImportStatus::Imported)), IMPORT_SUCCEEDED);
        assert_eq!(import_notice(&Ok(ImportStatus::Rejected(409))), IMPORT_REJECTED);
        assert_eq!(import_notice(&Err(transport_error())), IMPORT_ERROR);
    }

    #[test]
    fn test_wiki_page_name() {
        assert_eq!(wiki_page_name("notes.txt"), "notes");
        assert_eq!(wiki_page_name("notes.md"), "notes.md");
        assert_eq!(wiki_page_name("a.txt.txt"), "a.txt");
    }
}
