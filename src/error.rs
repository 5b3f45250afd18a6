//! Error types for remote calls.
//!
//! Nothing here reaches the user directly: browser handlers log these and
//! swap them for placeholder text or an alert.

/// Failure talking to the notebook service.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{url} answered {status}")]
    Status { url: String, status: u16 },
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

/// Failure loading the enhancements fragment.
#[derive(Debug, thiserror::Error)]
pub enum FragmentError {
    #[error("fragment request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("fragment request answered {0}")]
    Status(u16),
    #[error("fragment unreadable: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}
