use serde::Deserialize;

/// Errors raised while talking to the workspace API.
#[derive(Debug, thiserror::Error)]
pub enum NotionError {
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status} ({code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid client configuration: {0}")]
    Config(String),
}

/// Error body returned by the workspace API on non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}
