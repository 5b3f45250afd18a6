//! Client for the notebook service exposed by the unified interface.
//!
//! The Notebook Browser only talks to the service through [`NotebookApi`],
//! so handlers can be driven against a scripted fake in tests.

use crate::error::ClientError;
use crate::models::{DirectoryCatalog, FileCatalog, ImportStatus};
use std::future::Future;
use url::Url;

// ============================================================================
// API Trait
// ============================================================================

pub trait NotebookApi: Send + Sync {
    /// `GET /notebooks`
    fn list_directories(&self) -> impl Future<Output = Result<DirectoryCatalog, ClientError>> + Send;

    /// `GET /notebooks/{directory}`
    fn list_files(
        &self,
        directory: &str,
    ) -> impl Future<Output = Result<FileCatalog, ClientError>> + Send;

    /// `GET /notebooks/{directory}/{file}`, returning the raw text body.
    fn read_file(
        &self,
        directory: &str,
        file: &str,
    ) -> impl Future<Output = Result<String, ClientError>> + Send;

    /// `POST /notebooks/wiki/{directory}/{file}`
    fn import_to_wiki(
        &self,
        directory: &str,
        file: &str,
    ) -> impl Future<Output = Result<ImportStatus, ClientError>> + Send;

    /// Browser-navigable address of an imported wiki page.
    fn page_url(&self, page: &str) -> String;
}

// ============================================================================
// Endpoint Paths
// ============================================================================

/// Join percent-encoded segments onto a base URL.
pub fn endpoint_url(base: &Url, segments: &[&str]) -> Result<Url, ClientError> {
    let mut path = base.as_str().trim_end_matches('/').to_string();
    for segment in segments {
        path.push('/');
        path.push_str(&urlencoding::encode(segment));
    }
    Ok(Url::parse(&path)?)
}

// ============================================================================
// HTTP Implementation
// ============================================================================

#[derive(Debug, Clone)]
pub struct HttpNotebookClient {
    http: reqwest::Client,
    base: Url,
}

impl HttpNotebookClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base = Url::parse(base_url)?;
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, base })
    }

    async fn get_text(&self, segments: &[&str]) -> Result<String, ClientError> {
        let url = endpoint_url(&self.base, segments)?;
        tracing::debug!(%url, "notebook request");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

impl NotebookApi for HttpNotebookClient {
    async fn list_directories(&self) -> Result<DirectoryCatalog, ClientError> {
        let body = self.get_text(&["notebooks"]).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn list_files(&self, directory: &str) -> Result<FileCatalog, ClientError> {
        let body = self.get_text(&["notebooks", directory]).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn read_file(&self, directory: &str, file: &str) -> Result<String, ClientError> {
        self.get_text(&["notebooks", directory, file]).await
    }

    async fn import_to_wiki(&self, directory: &str, file: &str) -> Result<ImportStatus, ClientError> {
        let url = endpoint_url(&self.base, &["notebooks", "wiki", directory, file])?;
        tracing::debug!(%url, "wiki import request");

        let response = self.http.post(url).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(ImportStatus::Imported)
        } else {
            Ok(ImportStatus::Rejected(status.as_u16()))
        }
    }

    fn page_url(&self, page: &str) -> String {
        endpoint_url(&self.base, &["pages", page])
            .map(|u| u.to_string())
            .unwrap_or_else(|_| format!("/pages/{}", urlencoding::encode(page)))
    }
}
