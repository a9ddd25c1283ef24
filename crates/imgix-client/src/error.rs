//! Client error types for the imgix SDK

use std::fmt::{Display, Formatter};

use serde::Deserialize;

/// One entry of the API error envelope
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ApiErrorEntry {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub detail: String,
}

/// Structured rejection body returned by the API on any non-2xx write,
/// `{"errors": [{"status", "title", "detail"}, ...]}`
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    pub errors: Vec<ApiErrorEntry>,
}

impl ApiErrorBody {
    /// Whether any entry carries the given title. The engine uses this to
    /// recognize transient conditions without matching prose.
    pub fn has_title(&self, title: &str) -> bool {
        self.errors.iter().any(|e| e.title == title)
    }
}

impl Display for ApiErrorBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let lines: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("status: {}, details: {}", e.status, e.detail))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

/// Error type for imgix client operations
#[derive(Debug, thiserror::Error)]
pub enum ImgixError {
    #[error("missing access key")]
    MissingAccessKey,

    #[error("api error: {0}")]
    Api(ApiErrorBody),

    #[error("request failed with status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ImgixError>;

/// Whether `err` is a structured API rejection carrying an entry with
/// the given title.
pub fn is_api_error_with_title(err: &ImgixError, title: &str) -> bool {
    match err {
        ImgixError::Api(body) => body.has_title(title),
        _ => false,
    }
}
